//! Feature extraction for a learned gesture model
//!
//! The model input is exactly 63 values: x, y, z of the 21 landmarks in
//! landmark order. Joint angles are exposed separately as diagnostics and are
//! never appended to the model input.

use crate::geometry::planar_joint_angle;
use crate::hand::{HandLandmarkSet, FLAT_LEN};

/// Width of the learned-model input vector
pub const FEATURE_COUNT: usize = FLAT_LEN;

/// Number of diagnostic joint angles (3 per finger)
pub const JOINT_ANGLE_COUNT: usize = 15;

/// (parent, joint, child) triplets, three per finger from the wrist outwards
pub const JOINT_ANGLE_TRIPLETS: [[usize; 3]; JOINT_ANGLE_COUNT] = [
    [0, 1, 2], [1, 2, 3], [2, 3, 4],       // Thumb
    [0, 5, 6], [5, 6, 7], [6, 7, 8],       // Index
    [0, 9, 10], [9, 10, 11], [10, 11, 12], // Middle
    [0, 13, 14], [13, 14, 15], [14, 15, 16], // Ring
    [0, 17, 18], [17, 18, 19], [18, 19, 20], // Pinky
];

/// Extract the 63 raw coordinates
///
/// Features (landmark i occupies 3i..3i+3):
/// - 3i + 0: x (0-1 normalized)
/// - 3i + 1: y (0-1 normalized)
/// - 3i + 2: z (relative depth)
pub fn extract_features(hand: &HandLandmarkSet) -> [f32; FEATURE_COUNT] {
    let mut features = [0.0; FEATURE_COUNT];
    for (i, lm) in hand.landmarks().iter().enumerate() {
        features[i * 3] = lm.x;
        features[i * 3 + 1] = lm.y;
        features[i * 3 + 2] = lm.z;
    }
    features
}

/// Image-plane joint angles in degrees, [0, 180], in triplet order
pub fn joint_angles(hand: &HandLandmarkSet) -> [f32; JOINT_ANGLE_COUNT] {
    JOINT_ANGLE_TRIPLETS.map(|[a, b, c]| {
        planar_joint_angle(&hand.planar(a), &hand.planar(b), &hand.planar(c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::fixtures;

    #[test]
    fn test_features_follow_landmark_order() {
        let hand = fixtures::open_palm().build();
        let features = extract_features(&hand);
        assert_eq!(features.len(), 63);
        assert_eq!(features.to_vec(), hand.to_flat());
    }

    #[test]
    fn test_joint_angles_straight_fingers() {
        // Palm facing the camera: straight fingers project as straight lines
        let angles = joint_angles(&fixtures::open_palm().build());
        for finger in 1..5 {
            let pip = angles[finger * 3 + 1];
            assert!(pip > 170.0, "finger {} pip angle {}", finger, pip);
        }
    }

    #[test]
    fn test_joint_angles_in_range() {
        for pose in [fixtures::fist(), fixtures::scissors(), fixtures::open_palm()] {
            for angle in joint_angles(&pose.build()) {
                assert!((0.0..=180.0).contains(&angle));
            }
        }
    }
}
