//! Cheap approximations of `exp` and `sqrt`.
//!
//! [`exp`] and [`sqrt`] pick the approximation when the `fast-math` feature
//! is enabled and the exact `std` routine otherwise.

/// Third-order Taylor expansion of `e^x` around zero.
///
/// Only meant for small exponents (`|x| < 0.1` keeps the relative error
/// below `1e-5`). [`exp`] only hands it exponents above `-0.25`, i.e. time
/// constants longer than eight samples.
#[inline]
pub fn fast_exp3(x: f32) -> f32 {
    (6.0 + x * (6.0 + x * (3.0 + x))) * (1.0 / 6.0)
}

/// Square root from an exponent-halving bit trick and one Newton step.
///
/// Relative error stays under `1e-3` for positive normal inputs. Zero and
/// negative inputs return `0.0`.
#[inline]
pub fn fast_sqrt(x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    let guess = f32::from_bits(0x1fbd_1df5 + (x.to_bits() >> 1));
    0.5 * (guess + x / guess)
}

/// Lower end of the range handed to [`fast_exp3`]. Past it the cubic loses
/// accuracy and eventually turns negative.
#[cfg(feature = "fast-math")]
const FAST_EXP_MIN: f32 = -0.25;

/// `fast_exp3(FAST_EXP_MIN) / exp(FAST_EXP_MIN)`. Scaling the exact branch by
/// this keeps [`exp`] continuous, and so monotonic, across the switch.
#[cfg(feature = "fast-math")]
const FAST_EXP_JOIN: f32 = 0.999_801;

#[inline]
pub fn exp(x: f32) -> f32 {
    #[cfg(feature = "fast-math")]
    {
        if x > FAST_EXP_MIN {
            fast_exp3(x)
        } else {
            x.exp() * FAST_EXP_JOIN
        }
    }
    #[cfg(not(feature = "fast-math"))]
    {
        x.exp()
    }
}

#[inline]
pub fn sqrt(x: f32) -> f32 {
    #[cfg(feature = "fast-math")]
    {
        fast_sqrt(x)
    }
    #[cfg(not(feature = "fast-math"))]
    {
        x.sqrt()
    }
}
