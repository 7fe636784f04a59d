//! Translation of drag gestures over the knob into value changes.
//!
//! The pointer angle is tracked between samples of a single drag. Each
//! angular difference is amplified, mapped back onto the value range,
//! smoothed and limited, before being emitted as a knob action for the
//! reducer. Samples too close to the center and implausible jumps are
//! skipped.
//!
//! The only state kept between samples is the angle of the previous one.
//! It is held in [`Drag`], which the caller threads through the calls, so
//! the mapper itself stays immutable.

use heapless::Vec;
#[allow(unused_imports)]
use micromath::F32Ext;

use dial_control::{ControlAction, Range, Source};

use crate::angle::wrap_degrees;
use crate::log;
use crate::polar::{Geometry, Point};
use crate::tuning::{InvalidTuning, Tuning};

/// Reference angle of an ongoing drag.
///
/// Start each gesture with `Drag::default()` and replace it with the one
/// returned from every [`Mapper::map`] call. Call [`Drag::end`] once the
/// pointer is released.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Drag {
    previous_angle: Option<f32>,
}

impl Drag {
    /// Drag that already observed a sample at the given angle.
    #[must_use]
    pub fn anchored(angle: f32) -> Self {
        Self {
            previous_angle: Some(angle),
        }
    }

    #[must_use]
    pub fn previous_angle(&self) -> Option<f32> {
        self.previous_angle
    }

    /// Forget the reference, so the next sample starts a new drag.
    #[must_use]
    pub fn end(self) -> Self {
        Self::default()
    }
}

/// Result of mapping a sequence of samples.
#[derive(Debug)]
pub struct Path<const N: usize> {
    pub actions: Vec<ControlAction, N>,
    /// The value after applying all the actions.
    pub value: f32,
    pub drag: Drag,
    /// Number of samples processed before the action list got full.
    pub consumed: usize,
}

/// Maps pointer samples of a drag into knob actions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mapper {
    range: Range,
    tuning: Tuning,
    geometry: Geometry,
}

impl Mapper {
    /// # Errors
    ///
    /// Returns `InvalidTuning::Range` when the range is not a finite
    /// interval with `min < max`, or any error of [`Tuning::validate`].
    pub fn new(range: Range, tuning: Tuning, geometry: Geometry) -> Result<Self, InvalidTuning> {
        if !range.min.is_finite() || !range.max.is_finite() || !(range.min < range.max) {
            return Err(InvalidTuning::Range);
        }
        let tuning = tuning.validate()?;
        Ok(Self {
            range,
            tuning,
            geometry,
        })
    }

    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Process a single pointer sample.
    ///
    /// The `value` is the current value of the control. Returns the action
    /// to be passed to the reducer, if any, and the drag to be used with the
    /// next sample.
    #[must_use]
    pub fn map(&self, value: f32, point: Point, drag: Drag) -> (Option<ControlAction>, Drag) {
        let Some(polar) = self.geometry.polar(point) else {
            return (None, drag);
        };
        if polar.radius < self.min_radius() || value.is_nan() {
            return (None, drag);
        }

        let angle = polar.angle;
        let Some(previous_angle) = drag.previous_angle else {
            return (None, Drag::anchored(angle));
        };

        let raw_delta = wrap_degrees(angle - previous_angle);
        if !raw_delta.is_finite() || raw_delta.abs() > self.tuning.reject_jump_delta_degrees {
            log::debug!("Rejecting jump of delta={}", raw_delta);
            return (None, Drag::anchored(angle));
        }

        let new_value = self.step(value, raw_delta);
        (
            Some(ControlAction::SetValue(new_value, Source::Knob)),
            Drag::anchored(angle),
        )
    }

    /// Process a sequence of samples, feeding each emitted value to the next
    /// sample.
    ///
    /// Mapping stops once `N` actions were collected.
    #[must_use]
    pub fn map_path<const N: usize>(&self, value: f32, points: &[Point], drag: Drag) -> Path<N> {
        let mut path = Path {
            actions: Vec::new(),
            value,
            drag,
            consumed: 0,
        };

        for point in points {
            if path.actions.is_full() {
                break;
            }
            let (action, drag) = self.map(path.value, *point, path.drag);
            path.drag = drag;
            path.consumed += 1;
            if let Some(action) = action {
                if let ControlAction::SetValue(new_value, _) = action {
                    path.value = new_value;
                }
                // NOTE: Capacity was checked at the beginning of the iteration.
                let _ = path.actions.push(action);
            }
        }

        path
    }

    fn min_radius(&self) -> f32 {
        self.tuning.min_interactive_radius * self.geometry.scale()
    }

    fn step(&self, value: f32, raw_delta: f32) -> f32 {
        let sweep = &self.tuning.sweep;
        let current = self.range.clamp(value);

        let delta = raw_delta * self.tuning.delta_gain;
        let target_angle = wrap_degrees(sweep.angle_for_value(&self.range, current) + delta);
        let mapped = sweep.value_for_angle(&self.range, target_angle);
        let smoothed = current + (mapped - current) * self.tuning.value_smoothing;

        let max_step = self.range.span() * self.tuning.max_step_ratio_per_event;
        let step = Range::new(-max_step, max_step).clamp(smoothed - current);

        self.range.clamp(current + step)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const RANGE: Range = Range::new(-40.0, 40.0);
    const RADIUS: f32 = 20.0;

    fn mapper() -> Mapper {
        Mapper::new(RANGE, Tuning::default(), Geometry::default()).unwrap()
    }

    // Straight above the center, where the polar angle is exactly zero.
    fn top() -> Point {
        at(0.0)
    }

    fn at(degrees: f32) -> Point {
        Geometry::default().point_at(degrees, RADIUS)
    }

    fn emitted_value(action: Option<ControlAction>) -> f32 {
        match action {
            Some(ControlAction::SetValue(value, Source::Knob)) => value,
            other => panic!("Expected a knob action, got {other:?}"),
        }
    }

    #[test]
    fn when_drag_starts_first_sample_only_sets_reference() {
        let (action, drag) = mapper().map(0.0, at(30.0), Drag::default());
        assert!(action.is_none());
        assert_relative_eq!(drag.previous_angle().unwrap(), 30.0, epsilon = 0.001);
    }

    #[test]
    fn when_sample_is_too_close_to_center_it_is_ignored() {
        let mapper = mapper();
        let center = mapper.geometry().center();
        let drag = Drag::anchored(10.0);
        let (action, next) = mapper.map(0.0, Point::new(center.x + 3.0, center.y), drag);
        assert!(action.is_none());
        assert_eq!(next, drag);
    }

    #[test]
    fn when_sample_is_not_finite_it_is_ignored() {
        let drag = Drag::anchored(10.0);
        let (action, next) = mapper().map(0.0, Point::new(f32::NAN, 1.0), drag);
        assert!(action.is_none());
        assert_eq!(next, drag);
    }

    #[test]
    fn when_rotated_clockwise_value_increases_with_gain_and_smoothing() {
        let (action, drag) = mapper().map(0.0, at(10.0), Drag::anchored(0.0));
        // 10° * 1.35 = 13.5° maps to 4.0, smoothed by 0.55.
        assert_relative_eq!(emitted_value(action), 2.2, epsilon = 0.001);
        assert_relative_eq!(drag.previous_angle().unwrap(), 10.0, epsilon = 0.001);
    }

    #[test]
    fn when_rotated_counterclockwise_value_decreases() {
        let (action, _) = mapper().map(0.0, at(-10.0), Drag::anchored(0.0));
        assert_relative_eq!(emitted_value(action), -2.2, epsilon = 0.001);
    }

    #[test]
    fn when_rotated_fast_step_is_limited_to_fraction_of_range() {
        let (action, _) = mapper().map(0.0, at(70.0), Drag::anchored(0.0));
        assert_relative_eq!(emitted_value(action), 80.0 * 0.12, epsilon = 0.001);
    }

    #[test]
    fn when_pointer_crosses_bottom_delta_is_wrapped() {
        let (action, _) = mapper().map(0.0, at(-170.0), Drag::anchored(170.0));
        // Crossing from 170° to -170° is a 20° clockwise move.
        assert_relative_eq!(emitted_value(action), 4.4, epsilon = 0.001);
    }

    #[test]
    fn when_delta_exceeds_threshold_it_is_rejected_and_reference_moves() {
        let (action, drag) = mapper().map(0.0, at(170.0), Drag::anchored(10.0));
        assert!(action.is_none());
        assert_relative_eq!(drag.previous_angle().unwrap(), 170.0, epsilon = 0.001);
    }

    #[test]
    fn given_value_at_top_when_target_passes_half_turn_it_wraps_to_bottom_of_sweep() {
        // 135° + 60° * 1.35 wraps to -144°, which limits to the floor. The
        // step limiter keeps the drop within 12 % of the range.
        let (action, _) = mapper().map(40.0, at(60.0), Drag::anchored(0.0));
        assert_relative_eq!(emitted_value(action), 40.0 - 9.6, epsilon = 0.001);
    }

    #[test]
    fn when_value_is_at_the_end_it_stays_within_range() {
        let (action, _) = mapper().map(-40.0, at(-20.0), Drag::anchored(0.0));
        assert_relative_eq!(emitted_value(action), -40.0);
    }

    #[test]
    fn when_drag_ends_reference_is_cleared() {
        let drag = Drag::anchored(45.0).end();
        assert_eq!(drag, Drag::default());
        assert_eq!(drag.end(), Drag::default());

        let (action, _) = mapper().map(0.0, at(50.0), drag);
        assert!(action.is_none());
    }

    #[test]
    fn given_range_with_zero_span_value_does_not_move() {
        let mapper = Mapper {
            range: Range::new(5.0, 5.0),
            tuning: Tuning::default(),
            geometry: Geometry::default(),
        };
        let (action, _) = mapper.map(5.0, at(10.0), Drag::anchored(0.0));
        assert_relative_eq!(emitted_value(action), 5.0);
    }

    #[test]
    fn when_range_is_inverted_or_empty_mapper_is_refused() {
        let geometry = Geometry::default();
        assert_eq!(
            Mapper::new(Range::new(40.0, -40.0), Tuning::default(), geometry),
            Err(InvalidTuning::Range)
        );
        assert_eq!(
            Mapper::new(Range::new(5.0, 5.0), Tuning::default(), geometry),
            Err(InvalidTuning::Range)
        );
        assert_eq!(
            Mapper::new(Range::new(f32::NAN, 40.0), Tuning::default(), geometry),
            Err(InvalidTuning::Range)
        );
    }

    #[test]
    fn when_tuning_is_invalid_mapper_is_refused() {
        let tuning = Tuning {
            max_step_ratio_per_event: f32::NAN,
            ..Tuning::default()
        };
        assert_eq!(
            Mapper::new(RANGE, tuning, Geometry::default()),
            Err(InvalidTuning::MaxStepRatio)
        );
    }

    #[test]
    fn when_delta_is_exactly_at_threshold_it_is_applied() {
        let (action, drag) = mapper().map(0.0, top(), Drag::anchored(-80.0));
        // 80° * 1.35 = 108°, limited by the step.
        assert_relative_eq!(emitted_value(action), 9.6, epsilon = 0.001);
        assert_relative_eq!(drag.previous_angle().unwrap(), 0.0);
    }

    #[test]
    fn when_delta_is_just_above_threshold_it_is_rejected() {
        let (action, drag) = mapper().map(0.0, top(), Drag::anchored(-80.01));
        assert!(action.is_none());
        assert_relative_eq!(drag.previous_angle().unwrap(), 0.0);

        let (action, _) = mapper().map(0.0, top(), Drag::anchored(80.01));
        assert!(action.is_none());
    }

    #[test]
    fn threshold_is_compared_before_gain() {
        // 60° becomes 81° after gain, still above the threshold, but is applied.
        let (action, _) = mapper().map(0.0, top(), Drag::anchored(-60.0));
        assert_relative_eq!(emitted_value(action), 9.6, epsilon = 0.001);

        let (action, _) = mapper().map(0.0, top(), Drag::anchored(-20.0));
        // 20° * 1.35 = 27° maps to 8.0, smoothed by 0.55.
        assert_relative_eq!(emitted_value(action), 4.4, epsilon = 0.001);
    }

    #[test]
    fn when_reference_is_not_finite_sample_is_treated_as_jump() {
        let (action, drag) = mapper().map(0.0, top(), Drag::anchored(f32::NAN));
        assert!(action.is_none());
        assert_relative_eq!(drag.previous_angle().unwrap(), 0.0);

        let (action, _) = mapper().map(0.0, top(), Drag::anchored(f32::INFINITY));
        assert!(action.is_none());
    }

    #[test]
    fn given_larger_knob_minimal_radius_scales() {
        let geometry = Geometry::new(108.0);
        let mapper = Mapper::new(RANGE, Tuning::default(), geometry).unwrap();
        let drag = Drag::anchored(0.0);

        let (action, _) = mapper.map(0.0, geometry.point_at(10.0, 11.0), drag);
        assert!(action.is_none());

        let (action, _) = mapper.map(0.0, geometry.point_at(10.0, 13.0), drag);
        assert!(action.is_some());
    }

    #[test]
    fn when_quarter_turn_is_dragged_value_rises_steadily() {
        let points: [Point; 10] = core::array::from_fn(|i| at(i as f32 * 10.0));
        let path: Path<16> = mapper().map_path(0.0, &points, Drag::default());

        assert_eq!(path.consumed, 10);
        assert_eq!(path.actions.len(), 9);
        let mut previous = 0.0;
        for action in &path.actions {
            let value = emitted_value(Some(*action));
            assert!(value > previous);
            previous = value;
        }
        assert_relative_eq!(path.value, previous);
        assert_relative_eq!(path.drag.previous_angle().unwrap(), 90.0, epsilon = 0.001);
    }

    #[test]
    fn when_path_overflows_capacity_mapping_stops() {
        let points: [Point; 10] = core::array::from_fn(|i| at(i as f32 * 5.0));
        let path: Path<3> = mapper().map_path(0.0, &points, Drag::default());
        assert_eq!(path.actions.len(), 3);
        assert_eq!(path.consumed, 4);
        assert_relative_eq!(path.drag.previous_angle().unwrap(), 15.0, epsilon = 0.001);
    }

    proptest! {
        #[test]
        fn any_drag_moves_value_by_limited_steps_within_range(
            start in -40.0f32..=40.0,
            points in prop::collection::vec((-20.0f32..84.0, -20.0f32..84.0), 0..64),
        ) {
            let mapper = mapper();
            let max_step = RANGE.span() * mapper.tuning().max_step_ratio_per_event;
            let mut value = start;
            let mut drag = Drag::default();
            for (x, y) in points {
                let (action, next) = mapper.map(value, Point::new(x, y), drag);
                drag = next;
                if let Some(ControlAction::SetValue(new_value, source)) = action {
                    prop_assert_eq!(source, Source::Knob);
                    prop_assert!(RANGE.contains(new_value));
                    prop_assert!((new_value - value).abs() <= max_step + 0.0001);
                    value = new_value;
                }
            }
        }
    }
}
