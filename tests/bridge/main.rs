//! Integration tests for Layer 1: Bridge
//!
//! Tests the column types and form adapters against kinds registered by name.

mod forms;
