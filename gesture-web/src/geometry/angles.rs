//! Joint angle calculation using dot product
//!
//! Angles are measured at the middle point of a landmark triplet, so a
//! straight finger reads close to 180° and a fully curled one well below 90°.

use nalgebra::{Vector2, Vector3};

/// Angle between two 3D vectors in degrees
///
/// Uses cos(θ) = (v1 · v2) / (|v1| × |v2|), clamped to [-1, 1] before acos.
/// A zero-length vector reads as 0° (flexed) instead of NaN.
pub fn angle_between(v1: &Vector3<f32>, v2: &Vector3<f32>) -> f32 {
    cosine_to_degrees(v1.dot(v2), v1.norm(), v2.norm())
}

/// Angle between two vectors in the image plane, in degrees
pub fn angle_between_2d(v1: &Vector2<f32>, v2: &Vector2<f32>) -> f32 {
    cosine_to_degrees(v1.dot(v2), v1.norm(), v2.norm())
}

/// Angle at `p2` formed by the triplet (p1, p2, p3), in degrees
///
/// Returns:
/// - ~180° = straight joint
/// - ~90° = bent at a right angle
/// - 0° when two of the points coincide
pub fn joint_angle(p1: &Vector3<f32>, p2: &Vector3<f32>, p3: &Vector3<f32>) -> f32 {
    angle_between(&(p1 - p2), &(p3 - p2))
}

/// Image-plane joint angle from the difference of the two segment headings
///
/// Folded into [0, 180]. Used for diagnostic features only, never for the
/// finger-state decision.
pub fn planar_joint_angle(p1: &Vector2<f32>, p2: &Vector2<f32>, p3: &Vector2<f32>) -> f32 {
    let heading_out = (p3.y - p2.y).atan2(p3.x - p2.x);
    let heading_in = (p1.y - p2.y).atan2(p1.x - p2.x);

    let angle = (heading_out - heading_in).to_degrees().abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

fn cosine_to_degrees(dot: f32, mag1: f32, mag2: f32) -> f32 {
    // Coincident landmarks
    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    let cos_angle = dot / (mag1 * mag2);
    if !cos_angle.is_finite() {
        return 0.0;
    }

    cos_angle.clamp(-1.0, 1.0).acos().to_degrees()
}
