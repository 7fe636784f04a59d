//! Rotary input of the level dial.
//!
//! Turns a stream of pointer positions recorded during a drag over the knob
//! into knob actions for the reducer of `dial-control`. The mapping is
//! jump-resistant, amplified, smoothed and rate limited.

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod angle;
mod log;
pub mod mapper;
pub mod polar;
pub mod tuning;

pub use mapper::{Drag, Mapper, Path};
pub use polar::{Geometry, Point, Polar};
pub use tuning::{InvalidTuning, Tuning};
