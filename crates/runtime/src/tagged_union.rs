//! Discriminated unions
//!
//! A tagged union holds exactly one of a closed set of alternatives. The
//! discriminant is chosen by the constructor used (`From<Payload>` or the
//! enum variant itself) and can never disagree with the payload.
//!
//! Unions are declared with [`tagged_union!`](crate::tagged_union):
//!
//! ```
//! use velocity_runtime::{Format, TaggedUnion, tagged_union};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct A { pub a: i32, pub b: i32 }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct B { pub name: String }
//!
//! impl Format for A {
//!     fn format(&self) -> String { format!("A{{{}, {}}}", self.a, self.b) }
//! }
//! impl Format for B {
//!     fn format(&self) -> String { format!("B{{{}}}", self.name) }
//! }
//!
//! tagged_union! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub enum Shape {
//!         A(A),
//!         B(B),
//!     }
//! }
//!
//! let x = Shape::from(A { a: 1, b: 2 });
//! assert_eq!(x.tag(), ShapeTag::A);
//! assert!(x.is::<A>());
//! assert_eq!(x.get_as::<A>().unwrap().b, 2);
//! assert!(x.get_as::<B>().is_err());
//!
//! let sum = x.visit(|a| a.a + a.b, |_b| 0);
//! assert_eq!(sum, 3);
//! assert_eq!(x.format(), "TaggedUnion{arg = A{1, 2}}");
//! ```
//!
//! Each alternative carries exactly one payload type, and payload types
//! must be distinct within a union (they select the alternative for
//! `get_as`). Every payload must implement [`Format`].
//!
//! `visit` takes one handler per alternative, in declaration order, so a
//! missing handler is a compile error. A plain `match` on the enum gives
//! the same guarantee.

use std::fmt::Debug;
use velocity_core::{Format, Result, RuntimeError};

/// Label every union uses when formatted
pub const UNION_LABEL: &str = "TaggedUnion";

/// Render `payload` inside the union wrapper: `TaggedUnion{arg = ...}`
pub fn format_wrapped(payload: &dyn Format) -> String {
    format!("{}{{arg = {}}}", UNION_LABEL, payload.format())
}

/// Metadata and checked access shared by every discriminated union
pub trait TaggedUnion {
    /// Fieldless mirror of the alternatives, usable as a discriminant
    type Tag: Copy + Eq + Debug;

    /// Alternative names in declaration order
    const VARIANTS: &'static [&'static str];

    fn tag(&self) -> Self::Tag;

    /// Position of the active alternative in `VARIANTS`
    fn variant_index(&self) -> usize;

    fn variant_name(&self) -> &'static str {
        Self::VARIANTS[self.variant_index()]
    }

    /// Is the active alternative the one carrying `P`?
    fn is<P>(&self) -> bool
    where
        Self: Alternative<P>,
    {
        <Self as Alternative<P>>::try_ref(self).is_some()
    }

    /// Borrow the payload if `P`'s alternative is active
    fn get_as<P>(&self) -> Result<&P>
    where
        Self: Alternative<P>,
    {
        let actual = self.variant_name();
        <Self as Alternative<P>>::try_ref(self).ok_or(RuntimeError::WrongVariant {
            expected: <Self as Alternative<P>>::NAME,
            actual,
        })
    }

    fn get_as_mut<P>(&mut self) -> Result<&mut P>
    where
        Self: Alternative<P>,
    {
        let actual = self.variant_name();
        <Self as Alternative<P>>::try_mut(self).ok_or(RuntimeError::WrongVariant {
            expected: <Self as Alternative<P>>::NAME,
            actual,
        })
    }

    /// Take the payload out if `P`'s alternative is active
    fn into_alternative<P>(self) -> Result<P>
    where
        Self: Alternative<P> + Sized,
    {
        let actual = self.variant_name();
        <Self as Alternative<P>>::try_into_payload(self).map_err(|_| RuntimeError::WrongVariant {
            expected: <Self as Alternative<P>>::NAME,
            actual,
        })
    }
}

/// One alternative of a union, identified by its payload type
///
/// Implemented by [`tagged_union!`](crate::tagged_union); generated code
/// goes through the checked methods on [`TaggedUnion`] instead.
pub trait Alternative<P>: TaggedUnion {
    /// Name of the alternative carrying `P`
    const NAME: &'static str;

    fn try_ref(&self) -> Option<&P>;

    fn try_mut(&mut self) -> Option<&mut P>;

    /// Payload on a match, the union unchanged otherwise
    fn try_into_payload(self) -> std::result::Result<P, Self>
    where
        Self: Sized;
}

/// Declare a discriminated union
///
/// Generates the enum, a `<Name>Tag` discriminant enum, `From<Payload>`
/// constructors, [`TaggedUnion`] and [`Alternative`] impls, `Format`, and
/// `visit` / `visit_mut` / `into_visit` taking one handler per alternative.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )+
        }

        $crate::paste::paste! {
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum [<$name Tag>] {
                $( $variant, )+
            }

            impl $crate::tagged_union::TaggedUnion for $name {
                type Tag = [<$name Tag>];

                const VARIANTS: &'static [&'static str] = &[$(stringify!($variant)),+];

                fn tag(&self) -> Self::Tag {
                    match self {
                        $( $name::$variant(_) => [<$name Tag>]::$variant, )+
                    }
                }

                fn variant_index(&self) -> usize {
                    <Self as $crate::tagged_union::TaggedUnion>::tag(self) as usize
                }
            }

            impl $name {
                /// Dispatch to the handler for the active alternative
                #[allow(clippy::too_many_arguments)]
                pub fn visit<R>(
                    &self,
                    $( [<on_ $variant:snake>]: impl FnOnce(&$payload) -> R, )+
                ) -> R {
                    match self {
                        $( $name::$variant(payload) => [<on_ $variant:snake>](payload), )+
                    }
                }

                #[allow(clippy::too_many_arguments)]
                pub fn visit_mut<R>(
                    &mut self,
                    $( [<on_ $variant:snake>]: impl FnOnce(&mut $payload) -> R, )+
                ) -> R {
                    match self {
                        $( $name::$variant(payload) => [<on_ $variant:snake>](payload), )+
                    }
                }

                #[allow(clippy::too_many_arguments)]
                pub fn into_visit<R>(
                    self,
                    $( [<on_ $variant:snake>]: impl FnOnce($payload) -> R, )+
                ) -> R {
                    match self {
                        $( $name::$variant(payload) => [<on_ $variant:snake>](payload), )+
                    }
                }
            }
        }

        $(
            impl ::std::convert::From<$payload> for $name {
                fn from(payload: $payload) -> Self {
                    $name::$variant(payload)
                }
            }

            impl $crate::tagged_union::Alternative<$payload> for $name {
                const NAME: &'static str = stringify!($variant);

                #[allow(unreachable_patterns)]
                fn try_ref(&self) -> ::std::option::Option<&$payload> {
                    match self {
                        $name::$variant(payload) => ::std::option::Option::Some(payload),
                        _ => ::std::option::Option::None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn try_mut(&mut self) -> ::std::option::Option<&mut $payload> {
                    match self {
                        $name::$variant(payload) => ::std::option::Option::Some(payload),
                        _ => ::std::option::Option::None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn try_into_payload(self) -> ::std::result::Result<$payload, Self> {
                    match self {
                        $name::$variant(payload) => ::std::result::Result::Ok(payload),
                        other => ::std::result::Result::Err(other),
                    }
                }
            }
        )+

        impl $crate::Format for $name {
            fn format(&self) -> ::std::string::String {
                match self {
                    $( $name::$variant(payload) => $crate::tagged_union::format_wrapped(payload), )+
                }
            }
        }
    };
}
