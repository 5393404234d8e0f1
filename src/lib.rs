//! Smart enums - closed-set, validated string enums with canonical identity
//!
//! This crate re-exports all layers of the smart enum system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: smart_enums_bridge — Persistence column and form adapters
//! Layer 0: smart_enums_core   — Kinds, instance cache, factory, formatter, errors
//! ```

pub use smart_enums_bridge as bridge;
pub use smart_enums_core as enums;

pub use smart_enums_core::{
    Enum, EnumFactory, EnumFormatter, EnumKind, EnumValue, Error, ErrorKind, smart_enum,
};
