//! Derived values used to draw the knob.
//!
//! Nothing here is needed for the control to work. It only translates the
//! value into angles, tick marks and a glow arc, so the presentation layer
//! can draw them without knowing about the range.

use core::fmt::{self, Write};

use heapless::String;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::range::Range;
use crate::sweep::Sweep;

pub const TICKS: usize = 9;

// Fits `f32::MIN` printed in full, a decimal and the unit.
pub const LABEL_CAPACITY: usize = 48;

// The glow is hidden when the pointer is this close to the center.
const GLOW_THRESHOLD_DEGREES: f32 = 0.5;
const GLOW_WEIGHT: f32 = 0.65;
const GLOW_INTERACTION_BOOST: f32 = 0.45;
const GLOW_STRENGTH_RANGE: (f32, f32) = (0.30, 1.0);

/// Snapshot of everything needed to draw the knob.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicator {
    pub normalized: f32,
    pub angle: f32,
    pub center_angle: f32,
    pub ticks: [Tick; TICKS],
    pub glow: Option<Glow>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    pub angle: f32,
    pub major: bool,
    pub lit: bool,
}

/// Arc highlighting the distance between the center and the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glow {
    pub start_angle: f32,
    pub end_angle: f32,
    /// Opacity between 0.3 and 1.0.
    pub strength: f32,
}

impl Indicator {
    /// Calculate the indicator for the given value.
    ///
    /// The `center_value` marks where the glow arc starts, typically the flat
    /// value. Strength of the glow is boosted while the knob is
    /// `interacting`.
    #[must_use]
    pub fn new(
        range: &Range,
        sweep: &Sweep,
        value: f32,
        center_value: f32,
        interacting: bool,
    ) -> Self {
        let normalized = range.normalize(value);
        let center_normalized = range.normalize(center_value);
        let angle = sweep.angle_for_value(range, value);
        let center_angle = sweep.angle_for_value(range, center_value);

        let mut ticks = [Tick {
            angle: 0.0,
            major: false,
            lit: false,
        }; TICKS];
        for (i, tick) in ticks.iter_mut().enumerate() {
            let position = i as f32 / (TICKS - 1) as f32;
            tick.angle = sweep.min_angle + position * sweep.span();
            tick.major = i == 0 || i == TICKS / 2 || i == TICKS - 1;
            tick.lit = position <= normalized;
        }

        let glow = if (angle - center_angle).abs() > GLOW_THRESHOLD_DEGREES {
            Some(Glow {
                start_angle: angle.min(center_angle),
                end_angle: angle.max(center_angle),
                strength: glow_strength(normalized, center_normalized, interacting),
            })
        } else {
            None
        };

        Self {
            normalized,
            angle,
            center_angle,
            ticks,
            glow,
        }
    }
}

fn glow_strength(normalized: f32, center_normalized: f32, interacting: bool) -> f32 {
    let centered = (normalized - center_normalized).abs() * 2.0;
    let boost = if interacting {
        GLOW_INTERACTION_BOOST
    } else {
        0.0
    };
    let strength = centered * GLOW_WEIGHT + boost;
    if strength < GLOW_STRENGTH_RANGE.0 {
        GLOW_STRENGTH_RANGE.0
    } else if strength > GLOW_STRENGTH_RANGE.1 {
        GLOW_STRENGTH_RANGE.1
    } else {
        strength
    }
}

/// Format the value as signed decibels with a single decimal, e.g. `+12.8 dB`.
///
/// The value is clamped into the range first, same as the pointer.
///
/// # Errors
///
/// Returns `fmt::Error` if the formatted label does not fit
/// `LABEL_CAPACITY`. That cannot happen for a range with finite bounds.
pub fn label(range: &Range, value: f32) -> Result<String<LABEL_CAPACITY>, fmt::Error> {
    let mut label = String::new();
    write!(label, "{:+.1} dB", range.clamp(value))?;
    Ok(label)
}
