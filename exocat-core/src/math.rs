//! Thin wrappers over `libm` used by the rounding and propagation code.

#[inline]
pub fn cbrt(x: f64) -> f64 {
    libm::cbrt(x)
}

#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

#[inline]
pub fn pow(x: f64, y: f64) -> f64 {
    libm::pow(x, y)
}

/// Decimal order of magnitude, `floor(log10(|x|))`.
///
/// Returns `None` for zero and non-finite input.
#[inline]
pub fn order_of_magnitude(x: f64) -> Option<i32> {
    if x == 0.0 || !x.is_finite() {
        return None;
    }
    let mut order = libm::floor(libm::log10(x.abs())) as i32;
    // log10 can land a hair off an exact power of ten
    if x.abs() < pow10(order) {
        order -= 1;
    } else if x.abs() >= pow10(order + 1) {
        order += 1;
    }
    Some(order)
}

/// `10^order` for integer orders.
#[inline]
pub fn pow10(order: i32) -> f64 {
    libm::pow(10.0, order as f64)
}

/// Rounds `x` to a multiple of `10^order`.
///
/// Negative orders scale up by an exact power of ten before rounding, which
/// keeps results like `0.1 + 0.2` from surfacing as `0.30000000000000004`.
#[inline]
pub fn round_to_order(x: f64, order: i32) -> f64 {
    if order < 0 {
        let scale = pow10(-order);
        libm::round(x * scale) / scale
    } else {
        let scale = pow10(order);
        libm::round(x / scale) * scale
    }
}
