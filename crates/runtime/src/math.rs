//! Numeric primitives
//!
//! Pass-through wrappers over the host's floating-point functions, plus a
//! few generic helpers, exposed under the names generated code calls.

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;
pub const TAU: f64 = std::f64::consts::TAU;

pub fn abs<T>(n: T) -> T
where
    T: PartialOrd + Default + std::ops::Neg<Output = T>,
{
    if n < T::default() { -n } else { n }
}

pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

pub fn clamp<T: PartialOrd>(n: T, low: T, high: T) -> T {
    if n < low {
        low
    } else if n > high {
        high
    } else {
        n
    }
}

/// -1, 0 or 1
pub fn sign<T>(n: T) -> T
where
    T: PartialOrd + Default + From<i8>,
{
    let zero = T::default();
    if n < zero {
        T::from(-1)
    } else if n > zero {
        T::from(1)
    } else {
        zero
    }
}

/// Fractional part, keeping the sign of `n`
pub fn frac(n: f64) -> f64 {
    n - n.trunc()
}

macro_rules! forward_unary {
    ($($name:ident),+ $(,)?) => {
        $(
            pub fn $name(n: f64) -> f64 {
                n.$name()
            }
        )+
    };
}

forward_unary!(
    sqrt, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh, ln, log10, log2,
    exp, exp2, floor, ceil, round, trunc,
);

/// Natural logarithm, under the name generated code uses
pub fn log(n: f64) -> f64 {
    n.ln()
}

pub fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}
