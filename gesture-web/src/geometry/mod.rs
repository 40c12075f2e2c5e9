//! Geometry module - joint angles and palm vectors
//!
//! Re-exports only. All logic in submodules.

mod angles;

pub use angles::{angle_between, angle_between_2d, joint_angle, planar_joint_angle};
