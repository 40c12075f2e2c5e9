//! Finger-state extraction - extended/flexed flag per digit from joint angles

use serde::Serialize;

use crate::config::ClassifierConfig;
use crate::geometry::joint_angle;
use crate::hand::{Finger, HandLandmarkSet};

/// Extended flags in thumb, index, middle, ring, pinky order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FingerStates([bool; 5]);

impl FingerStates {
    pub fn new(states: [bool; 5]) -> Self {
        Self(states)
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.0[0],
            Finger::Index => self.0[1],
            Finger::Middle => self.0[2],
            Finger::Ring => self.0[3],
            Finger::Pinky => self.0[4],
        }
    }

    pub fn extended_count(&self) -> usize {
        self.0.iter().filter(|e| **e).count()
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }

    /// Extended digits joined by '+', e.g. "index+middle", or "none"
    pub fn describe(&self) -> String {
        let names: Vec<&str> = Finger::ALL
            .iter()
            .filter(|f| self.is_extended(**f))
            .map(|f| f.as_str())
            .collect();
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join("+")
        }
    }

    /// 0/1 bytes for the JS side
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().map(|e| u8::from(*e)).collect()
    }
}

/// Angle at the second joint of `finger`, in degrees
///
/// Thumb: (CMC, MCP, TIP) measured at MCP.
/// Others: (MCP, PIP, TIP) measured at PIP.
pub fn finger_angle(hand: &HandLandmarkSet, finger: Finger) -> f32 {
    let [base, joint, _, tip] = finger.joints();
    joint_angle(&hand.point(base), &hand.point(joint), &hand.point(tip))
}

/// Classify every digit as extended (angle above its threshold) or flexed
pub fn extract_finger_states(hand: &HandLandmarkSet, config: &ClassifierConfig) -> FingerStates {
    let mut states = [false; 5];
    for (slot, finger) in Finger::ALL.iter().enumerate() {
        let threshold = match finger {
            Finger::Thumb => config.thumb_extension_deg,
            _ => config.finger_extension_deg,
        };
        states[slot] = finger_angle(hand, *finger) > threshold;
    }
    FingerStates(states)
}
