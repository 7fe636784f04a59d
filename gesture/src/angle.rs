use libm::fmodf;

/// Wrap the angle into the (-180, 180] interval.
#[must_use]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let mut remainder = fmodf(180.0 - degrees, 360.0);
    if remainder < 0.0 {
        remainder += 360.0;
    }
    let wrapped = 180.0 - remainder;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
