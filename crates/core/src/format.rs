//! Formatting Capability
//!
//! Every value that can appear in a `print_line` substitution implements
//! [`Format`]. Primitives render the way the host's `Display` does; the
//! runtime's containers and unions build their output from the
//! capabilities of what they hold.
//!
//! Generated code for user types either writes `impl Format` directly or,
//! when the type already implements `Display`, uses
//! [`impl_format_via_display!`](crate::impl_format_via_display).

/// Convert a value to its human-readable string form
pub trait Format {
    fn format(&self) -> String;
}

/// Format any value through its [`Format`] capability
pub fn formatted<T: Format + ?Sized>(value: &T) -> String {
    value.format()
}

/// Implement [`Format`] for types that already implement `Display`
///
/// ```
/// use velocity_core::{Format, impl_format_via_display};
///
/// struct Meters(f64);
///
/// impl std::fmt::Display for Meters {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}m", self.0)
///     }
/// }
///
/// impl_format_via_display!(Meters);
/// assert_eq!(Meters(2.5).format(), "2.5m");
/// ```
#[macro_export]
macro_rules! impl_format_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Format for $ty {
                fn format(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}

crate::impl_format_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String
);

impl<T: Format + ?Sized> Format for &T {
    fn format(&self) -> String {
        (**self).format()
    }
}

impl<T: Format + ?Sized> Format for &mut T {
    fn format(&self) -> String {
        (**self).format()
    }
}

impl<T: Format + ?Sized> Format for Box<T> {
    fn format(&self) -> String {
        (**self).format()
    }
}
