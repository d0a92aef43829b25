//! Velocity Runtime: support library for compiled Velocity programs
//!
//! Generated code links against this crate for everything beyond plain
//! arithmetic:
//!
//! - [`Array`]: the owning growable sequence (from `velocity-core`)
//! - [`tagged_union!`]: closed discriminated unions with checked access
//! - [`Maybe`]: the generic `Just` / `Nothing` sum type
//! - [`Format`]: the per-type formatting capability
//! - [`print_line!`]: templated output to stdout
//!
//! # Modules
//!
//! - `tagged_union`: union traits and the declaration macro
//! - `maybe`: the optional sum type
//! - `template`: the `{}` template scanner
//! - `io`: rendering and writing output lines
//! - `config`: output configuration (`VELOCITY_ARGUMENT_POLICY`)
//! - `logging`: stderr `tracing` subscriber setup (`VELOCITY_LOG`)
//! - `math`: numeric pass-through primitives
//!
//! All operations are synchronous and run on the caller's thread. Checked
//! operations return [`RuntimeError`]; see `velocity_core::error`.

pub mod config;
pub mod io;
pub mod logging;
pub mod math;
pub mod maybe;
pub mod tagged_union;
pub mod template;

// Re-export the core so generated code depends on one crate
pub use velocity_core::{Array, Format, Result, RuntimeError, array, formatted};
pub use velocity_core::{error, format, impl_format_via_display};

pub use config::{ArgumentPolicy, PrintConfig};
pub use io::{print_line, render, render_with, write_line};
pub use maybe::{Just, Maybe, MaybeTag, Nothing};
pub use tagged_union::{Alternative, TaggedUnion};
pub use template::{Segment, Template};

// Used by tagged_union!
#[doc(hidden)]
pub use paste;
