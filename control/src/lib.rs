//! Value-control core of a level dial: a rotary knob and a linked slider
//! driving a single bounded value, plus mute and flat actions.
//!
//! This crate is free of any presentation. The embedding layer passes user
//! intents in and renders whatever state comes back:
//!
//! ```text
//!     [ Knob ]            [ Slider ]      [ Flat ] [ Mute ]
//!        |                     |              |        |
//!   (pointer samples)     (raw value)         |        |
//!        V                     |              |        |
//!  [ Gesture mapper ]          |              |        |
//!        |                     |              |        |
//!        +------(ControlAction)+--------------+--------+
//!                              |
//!                              V
//!                   [ Reducer {ControlSpec} ] <----> {ControlState}
//!                              |
//!                   (ControlState, Indicator)
//!                              V
//!                       [ Presentation ]
//! ```
//!
//! The gesture mapper lives in the `dial-gesture` crate.

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod action;
pub mod display;
mod log;
pub mod range;
pub mod reducer;
pub mod spec;
pub mod state;
pub mod store;
pub mod sweep;

pub use action::{ControlAction, Source};
pub use range::Range;
pub use reducer::reduce;
pub use spec::{ControlSpec, InvalidSpec};
pub use state::ControlState;
pub use store::Store;
pub use sweep::Sweep;
