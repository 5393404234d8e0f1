//! Persistence column and form adapters for smart enums.
//!
//! This crate provides:
//! - [`EnumColumnType`] - A scalar column holding one raw value
//! - [`EnumListColumnType`] - A column holding an encoded list of raw values
//! - [`EnumTransformer`] - Form model/view conversion
//! - [`EnumChoiceField`] - A choice field populated from a kind
//!
//! Adapters resolve kinds by name through the core registry and report
//! failures with their own error types ([`ConversionError`],
//! [`TransformationFailed`], [`FormError`]).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod column;
pub mod config;
pub mod error;
pub mod form;
pub mod list;
pub mod scalar;

pub use column::{AnsiPlatform, ColumnSpec, ColumnValue, Platform};
pub use config::{ColumnConfig, ListColumnConfig, ListEncoding};
pub use error::{ConversionError, FormError, TransformationFailed};
pub use form::{EnumChoiceField, EnumTransformer, FormModel};
pub use list::EnumListColumnType;
pub use scalar::EnumColumnType;
