//! Maybe: the generic optional sum type
//!
//! `Maybe<T>` is the two-alternative union generated code uses for "a `T`
//! is present" (`Just`) versus "no value" (`Nothing`). It follows the same
//! rules as [`tagged_union!`](crate::tagged_union) unions: checked access,
//! exhaustive `visit`, and the `TaggedUnion{...}` format wrapper.

use crate::tagged_union::{Alternative, TaggedUnion, UNION_LABEL, format_wrapped};
use serde::{Deserialize, Serialize};
use velocity_core::Format;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maybe<T> {
    Just(T),
    #[default]
    Nothing,
}

/// Discriminant of [`Maybe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeTag {
    Just,
    Nothing,
}

pub use Maybe::{Just, Nothing};

impl<T> Maybe<T> {
    pub fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    /// Borrow the `Just` payload, or fail with `WrongVariant`
    pub fn get_just(&self) -> velocity_core::Result<&T> {
        self.get_as::<T>()
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Just(value) => Just(value),
            Nothing => Nothing,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Just(value) => Just(f(value)),
            Nothing => Nothing,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Just(value) => value,
            Nothing => default,
        }
    }

    /// Dispatch to the handler for the active alternative
    pub fn visit<R>(&self, on_just: impl FnOnce(&T) -> R, on_nothing: impl FnOnce() -> R) -> R {
        match self {
            Just(value) => on_just(value),
            Nothing => on_nothing(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> TaggedUnion for Maybe<T> {
    type Tag = MaybeTag;

    const VARIANTS: &'static [&'static str] = &["Just", "Nothing"];

    fn tag(&self) -> MaybeTag {
        match self {
            Just(_) => MaybeTag::Just,
            Nothing => MaybeTag::Nothing,
        }
    }

    fn variant_index(&self) -> usize {
        self.tag() as usize
    }
}

impl<T> Alternative<T> for Maybe<T> {
    const NAME: &'static str = "Just";

    fn try_ref(&self) -> Option<&T> {
        match self {
            Just(value) => Some(value),
            Nothing => None,
        }
    }

    fn try_mut(&mut self) -> Option<&mut T> {
        match self {
            Just(value) => Some(value),
            Nothing => None,
        }
    }

    fn try_into_payload(self) -> Result<T, Self> {
        match self {
            Just(value) => Ok(value),
            Nothing => Err(Nothing),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Just(value),
            None => Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Just(value) => Some(value),
            Nothing => None,
        }
    }
}

/// `TaggedUnion{arg = x}` for `Just(x)`, `TaggedUnion{}` for `Nothing`
impl<T: Format> Format for Maybe<T> {
    fn format(&self) -> String {
        match self {
            Just(value) => format_wrapped(value),
            Nothing => format!("{}{{}}", UNION_LABEL),
        }
    }
}
