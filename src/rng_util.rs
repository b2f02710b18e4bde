/// Generate a random `f64` in the range `[low, high)`.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Return `true` with the given probability.
///
/// A probability of `0.0` never fires and `1.0` always fires.
#[inline]
pub(crate) fn chance(rng: &mut fastrand::Rng, probability: f64) -> bool {
    rng.f64() < probability
}

/// Draw a fresh coefficient for an appended term, uniform in `[-0.5, 0.5)`.
#[inline]
pub(crate) fn fresh_coefficient(rng: &mut fastrand::Rng) -> f64 {
    f64_range(rng, -0.5, 0.5)
}
