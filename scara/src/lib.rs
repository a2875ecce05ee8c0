//! Inverse kinematics of two-link SCARA arms.
//!
//! Each rotary joint of the arm is exposed as a position function: given a
//! trajectory segment and a time inside it, return the joint angle. A stepper
//! solver can hold any of them behind [`StepperKinematics`] without knowing the
//! arm geometry.
//!
//! ```
//! use scara::*;
//!
//! let [shoulder, elbow] = ManipulatorGeometry::new(50., 50.)?.adapters();
//! let m = Move::linear([100., 0.], [0., 100.], 10.);
//! let theta1 = shoulder.calc_position(&m, 0.)?;
//! let theta2 = elbow.calc_position(&m, 0.)?;
//! assert!(theta1.abs() < 1e-9 && theta2.abs() < 1e-9);
//! # Ok::<(), scara::Error>(())
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::{adapter::*, error::*, flags::*, geometry::*, trajectory::*};

mod adapter;
#[cfg(feature = "csv")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "csv")))]
pub mod csv;
mod error;
mod flags;
mod geometry;
mod trajectory;
