//! Velocity Core: the language-agnostic half of the runtime
//!
//! This crate provides the primitives generated code builds everything
//! else from:
//!
//! - `error`: [`RuntimeError`], the single error type of the runtime
//! - `format`: the [`Format`] capability used by templated output
//! - `array`: [`Array`], the owning growable sequence
//!
//! Sum types, the template scanner, and stdout output live in
//! `velocity-runtime`, which re-exports everything here.

pub mod array;
pub mod error;
pub mod format;

pub use array::Array;
pub use error::{Result, RuntimeError};
pub use format::{Format, formatted};
