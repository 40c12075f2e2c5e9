//! Palm orientation - un-normalized palm-plane normal

use nalgebra::Vector3;
use serde::Serialize;

use crate::hand::{HandLandmarkSet, MIDDLE_MCP, PINKY_MCP, WRIST};

/// Palm normal from cross(middle_mcp - wrist, pinky_mcp - wrist)
///
/// Not normalized: magnitude scales with hand size in the frame. Consumers
/// only threshold individual components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HandOrientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl HandOrientation {
    pub fn from_vector(v: Vector3<f32>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    pub fn to_vector(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Palm faces up/down (normal along the image y axis)
    pub fn faces_vertically(&self, threshold: f32) -> bool {
        self.y.abs() > threshold
    }

    /// Palm faces towards/away from the camera (normal along z)
    pub fn faces_camera(&self, threshold: f32) -> bool {
        self.z.abs() > threshold
    }
}

pub fn estimate_orientation(hand: &HandLandmarkSet) -> HandOrientation {
    let wrist = hand.point(WRIST);
    let a = hand.point(MIDDLE_MCP) - wrist;
    let b = hand.point(PINKY_MCP) - wrist;
    HandOrientation::from_vector(a.cross(&b))
}
