//! User intents the reducer reacts to.

/// Peripheral the new value originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Source {
    /// Rotary knob. Its values come already smoothed by the gesture mapper.
    Knob,
    /// Linear slider, smoothed by the reducer.
    Slider,
}

/// A single user intent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlAction {
    SetValue(f32, Source),
    ApplyFlat,
    ToggleMute,
}
