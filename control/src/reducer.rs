//! Pure state transitions of the control.
//!
//! Given the current state and an action, calculate the next state. There
//! is no I/O, no time and no state kept between calls here. All numeric
//! input is clamped into the range, never refused.

use crate::action::{ControlAction, Source};
use crate::log;
use crate::spec::ControlSpec;
use crate::state::ControlState;

#[must_use]
pub fn reduce(state: ControlState, action: ControlAction, spec: &ControlSpec) -> ControlState {
    match action {
        ControlAction::SetValue(value, source) => set_value(state, value, source, spec),
        ControlAction::ApplyFlat => {
            log::info!("Resetting to flat value={}", spec.flat_value);
            ControlState::initial(spec.flat_value)
        }
        ControlAction::ToggleMute => toggle_mute(state, spec),
    }
}

fn set_value(state: ControlState, value: f32, source: Source, spec: &ControlSpec) -> ControlState {
    // NOTE: NaN cannot be clamped into the range. Ignore it so the state
    // stays valid.
    if value.is_nan() {
        log::debug!("Ignoring NaN value from source={}", source);
        return state;
    }

    let range = spec.range;
    let clamped = range.clamp(value);

    let resolved = match source {
        Source::Slider => state.value + (clamped - state.value) * spec.slider_smoothing_factor,
        // Knob values are smoothed by the gesture mapper already.
        Source::Knob => clamped,
    };

    let bounded = range.clamp(resolved);

    ControlState {
        value: bounded,
        // Floor is not remembered, otherwise unmute could restore silence.
        last_active_value: if bounded > range.min {
            bounded
        } else {
            state.last_active_value
        },
        is_muted: false,
    }
}

fn toggle_mute(state: ControlState, spec: &ControlSpec) -> ControlState {
    if state.is_muted {
        log::info!("Unmuting to value={}", state.last_active_value);
        return ControlState {
            value: state.last_active_value,
            last_active_value: state.last_active_value,
            is_muted: false,
        };
    }

    let floor = spec.range.min;
    let last_active_value = if state.value > floor {
        state.value
    } else {
        state.last_active_value
    };

    log::info!("Muting, remembering value={}", last_active_value);
    ControlState {
        value: floor,
        last_active_value,
        is_muted: true,
    }
}
