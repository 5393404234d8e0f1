//! Enum kinds, canonical instances, factory, and formatter for smart enums.
//!
//! This crate provides:
//! - [`EnumKind`] - Static declaration of a closed set of values
//! - [`Enum`] / [`EnumValue`] - Canonical, identity-comparable instances
//! - [`EnumFactory`] - Runtime-bound construction for one kind
//! - [`EnumFormatter`] - Value/description lookup tables
//! - [`Error`] - The two failure kinds (invalid value, invalid enum kind)
//! - [`smart_enum!`] - Declaration macro with named constructors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod error;
pub mod factory;
pub mod formatter;
pub mod instance;
pub mod kind;
mod macros;
pub mod registry;

pub use error::{Error, ErrorKind, KindDefect, Result};
pub use factory::EnumFactory;
pub use formatter::EnumFormatter;
pub use instance::{Enum, EnumValue};
pub use kind::{EnumKind, KindDescriptor, KindHandle, KindId, Position};
