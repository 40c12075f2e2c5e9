//! Synthetic hands for tests, posed by joint angle instead of raw coordinates
//!
//! The palm lies in a plane spanned by `up` (wrist → knuckles) and `side`
//! (index → pinky). Each finger starts at its knuckle, points along `up`
//! rotated by its spread, and bends at its second joint towards the palm
//! normal, so the measured joint angle is exactly the requested one.

use nalgebra::Vector3;

use super::landmarks::{Finger, HandLandmark, HandLandmarkSet, LANDMARK_COUNT, WRIST};

/// Which way the palm plane faces
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Facing {
    /// Palm in the image plane, normal along z
    Camera,
    /// Palm horizontal, normal along y
    Down,
}

impl Facing {
    /// (up, side, bend) basis vectors
    fn basis(self) -> (Vector3<f32>, Vector3<f32>, Vector3<f32>) {
        match self {
            Facing::Camera => (
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, -1.0),
            ),
            Facing::Down => (
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, -1.0, 0.0),
            ),
        }
    }
}

/// Pose description: joint angle and in-plane spread per finger (degrees)
#[derive(Clone, Copy, Debug)]
pub struct HandPose {
    pub angles: [f32; 5],
    pub spreads: [f32; 5],
    pub facing: Facing,
    /// Uniform size about the wrist
    pub scale: f32,
}

impl HandPose {
    pub fn new(angles: [f32; 5], facing: Facing) -> Self {
        Self {
            angles,
            spreads: [-45.0, 0.0, 0.0, 0.0, 0.0],
            facing,
            scale: 1.0,
        }
    }

    pub fn with_angle(mut self, finger: Finger, angle_deg: f32) -> Self {
        self.angles[finger_slot(finger)] = angle_deg;
        self
    }

    pub fn with_spread(mut self, finger: Finger, spread_deg: f32) -> Self {
        self.spreads[finger_slot(finger)] = spread_deg;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn landmarks(&self) -> Vec<HandLandmark> {
        let (up, side, bend) = self.facing.basis();
        let mut landmarks = vec![HandLandmark::default(); LANDMARK_COUNT];
        landmarks[WRIST] = HandLandmark::from(Vector3::zeros());

        for finger in Finger::ALL {
            let slot = finger_slot(finger);
            let (side_off, up_off, segment) = knuckle_layout(finger);
            let base = (side * side_off + up * up_off) * self.scale;

            let spread = self.spreads[slot].to_radians();
            let dir = up * spread.cos() + side * spread.sin();

            let theta = self.angles[slot].to_radians();
            let distal = -dir * theta.cos() + bend * theta.sin();

            let segment = segment * self.scale;
            let joint = base + dir * segment;
            let [j0, j1, j2, j3] = finger.joints();
            landmarks[j0] = HandLandmark::from(base);
            landmarks[j1] = HandLandmark::from(joint);
            landmarks[j2] = HandLandmark::from(joint + distal * segment * 0.5);
            landmarks[j3] = HandLandmark::from(joint + distal * segment);
        }

        landmarks
    }

    pub fn build(&self) -> HandLandmarkSet {
        HandLandmarkSet::new(&self.landmarks()).expect("fixture hand is well formed")
    }
}

fn finger_slot(finger: Finger) -> usize {
    Finger::ALL
        .iter()
        .position(|f| *f == finger)
        .expect("finger listed in Finger::ALL")
}

/// Base position (side, up) and segment length per finger
fn knuckle_layout(finger: Finger) -> (f32, f32, f32) {
    match finger {
        Finger::Thumb => (-0.3, 0.2, 0.35),
        Finger::Index => (-0.4, 1.0, 0.5),
        Finger::Middle => (0.0, 1.0, 0.5),
        Finger::Ring => (0.4, 0.95, 0.5),
        Finger::Pinky => (0.8, 0.85, 0.5),
    }
}

/// Closed fist, palm facing down
pub fn fist() -> HandPose {
    HandPose::new([80.0; 5], Facing::Down)
}

/// All four fingers straight at 175°, palm towards the camera
pub fn open_palm() -> HandPose {
    HandPose::new([170.0, 175.0, 175.0, 175.0, 175.0], Facing::Camera)
}

/// Index and middle at 170° opened into a 25° V, ring and pinky curled at 90°
///
/// Quarter size, so the index and middle tips end about 0.21 apart.
pub fn scissors() -> HandPose {
    HandPose::new([90.0, 170.0, 170.0, 90.0, 90.0], Facing::Camera)
        .with_spread(Finger::Index, -12.5)
        .with_spread(Finger::Middle, 12.5)
        .with_scale(0.25)
}

/// Every landmark at the same point
pub fn collapsed() -> HandLandmarkSet {
    HandLandmarkSet::new(&[HandLandmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT])
        .expect("fixture hand is well formed")
}
