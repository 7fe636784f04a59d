//! Holder of the control state, to be owned by the presentation layer.
//!
//! The reducer itself is stateless. This store keeps the configuration
//! together with the latest state, and routes every user intent through
//! the reducer. The presentation layer reads the state back after each
//! call to re-render.

use crate::action::{ControlAction, Source};
use crate::range::Range;
use crate::reducer::reduce;
use crate::spec::ControlSpec;
use crate::state::ControlState;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    spec: ControlSpec,
    state: ControlState,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(ControlSpec::default())
    }
}

impl Store {
    #[must_use]
    pub fn new(spec: ControlSpec) -> Self {
        Self {
            spec,
            state: ControlState::initial(spec.flat_value),
        }
    }

    pub fn apply(&mut self, action: ControlAction) -> ControlState {
        self.state = reduce(self.state, action, &self.spec);
        self.state
    }

    pub fn set_from_knob(&mut self, value: f32) -> ControlState {
        self.apply(ControlAction::SetValue(value, Source::Knob))
    }

    pub fn set_from_slider(&mut self, value: f32) -> ControlState {
        self.apply(ControlAction::SetValue(value, Source::Slider))
    }

    pub fn apply_flat(&mut self) -> ControlState {
        self.apply(ControlAction::ApplyFlat)
    }

    pub fn toggle_mute(&mut self) -> ControlState {
        self.apply(ControlAction::ToggleMute)
    }

    #[must_use]
    pub fn state(&self) -> ControlState {
        self.state
    }

    #[must_use]
    pub fn spec(&self) -> &ControlSpec {
        &self.spec
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.spec.range
    }

    #[must_use]
    pub fn flat_value(&self) -> f32 {
        self.spec.flat_value
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.state.value
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.state.is_muted
    }

    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.state.is_flat(self.spec.flat_value)
    }
}
