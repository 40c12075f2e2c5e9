//! Hand landmark set - the 21-point skeleton produced by the hand detector
//!
//! Landmarks arrive from JavaScript as a flat Float32Array (21 × x, y, z).
//! Shape and finiteness are checked once here, so everything downstream can
//! index the array without further validation.

use log::warn;
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{GestureError, InvalidInputKind, Result};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one hand skeleton
pub const LANDMARK_COUNT: usize = 21;

/// Floats in a flat landmark buffer (x, y, z per landmark)
pub const FLAT_LEN: usize = LANDMARK_COUNT * 3;

/// Hand skeleton connections for overlay rendering
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    // Palm knuckle line
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP),
];

// ============================================================================
// FINGERS
// ============================================================================

/// The five digits, in finger-state order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Landmark indices from base to tip.
    /// Thumb: CMC, MCP, IP, TIP. Others: MCP, PIP, DIP, TIP.
    pub fn joints(&self) -> [usize; 4] {
        match self {
            Finger::Thumb => [THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP],
            Finger::Index => [INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
            Finger::Middle => [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
            Finger::Ring => [RING_MCP, RING_PIP, RING_DIP, RING_TIP],
            Finger::Pinky => [PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
        }
    }

    pub fn tip(&self) -> usize {
        self.joints()[3]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 3D landmark point (normalized image coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HandLandmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized
    pub z: f32, // Relative depth
}

impl HandLandmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Image-plane projection (x, y)
    pub fn to_planar(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }

    fn first_non_finite_axis(&self) -> Option<(char, f32)> {
        [('x', self.x), ('y', self.y), ('z', self.z)]
            .into_iter()
            .find(|(_, value)| !value.is_finite())
    }
}

impl From<Vector3<f32>> for HandLandmark {
    fn from(v: Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Validated 21-point skeleton for one hand in one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HandLandmarkSet {
    landmarks: [HandLandmark; LANDMARK_COUNT],
}

impl HandLandmarkSet {
    /// Build from a landmark slice, rejecting wrong counts and NaN/inf
    pub fn new(landmarks: &[HandLandmark]) -> Result<Self> {
        if landmarks.len() != LANDMARK_COUNT {
            warn!(
                "Rejected hand with {} landmarks (expected {})",
                landmarks.len(),
                LANDMARK_COUNT
            );
            return Err(InvalidInputKind::LandmarkCount {
                expected: LANDMARK_COUNT,
                actual: landmarks.len(),
            }
            .into());
        }

        for (index, landmark) in landmarks.iter().enumerate() {
            if let Some((axis, value)) = landmark.first_non_finite_axis() {
                warn!("Rejected hand: landmark {} has non-finite {}", index, axis);
                return Err(InvalidInputKind::NonFinite { index, axis, value }.into());
            }
        }

        let mut set = [HandLandmark::default(); LANDMARK_COUNT];
        set.copy_from_slice(landmarks);
        Ok(Self { landmarks: set })
    }

    /// Parse a flat buffer of 63 floats: [x0, y0, z0, x1, y1, z1, ...]
    pub fn from_flat(flat_data: &[f32]) -> Result<Self> {
        if flat_data.len() != FLAT_LEN {
            warn!(
                "Invalid hand landmark data length: {} (expected {})",
                flat_data.len(),
                FLAT_LEN
            );
            return Err(InvalidInputKind::FlatLength {
                expected: FLAT_LEN,
                actual: flat_data.len(),
            }
            .into());
        }

        let landmarks: Vec<HandLandmark> = flat_data
            .chunks_exact(3)
            .map(|xyz| HandLandmark::new(xyz[0], xyz[1], xyz[2]))
            .collect();
        Self::new(&landmarks)
    }

    pub fn landmarks(&self) -> &[HandLandmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Landmark `index` as a 3D vector. Panics if `index >= 21`.
    pub fn point(&self, index: usize) -> Vector3<f32> {
        self.landmarks[index].to_vector()
    }

    /// Landmark `index` projected onto the image plane
    pub fn planar(&self, index: usize) -> Vector2<f32> {
        self.landmarks[index].to_planar()
    }

    /// Flatten back to the 63-float wire layout
    pub fn to_flat(&self) -> Vec<f32> {
        self.landmarks
            .iter()
            .flat_map(|lm| [lm.x, lm.y, lm.z])
            .collect()
    }
}

impl<'de> Deserialize<'de> for HandLandmarkSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let landmarks = Vec::<HandLandmark>::deserialize(deserializer)?;
        HandLandmarkSet::new(&landmarks).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&[f32]> for HandLandmarkSet {
    type Error = GestureError;

    fn try_from(flat_data: &[f32]) -> Result<Self> {
        Self::from_flat(flat_data)
    }
}
