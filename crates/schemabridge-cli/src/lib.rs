//! schemabridge-cli - Java binding generator for schema declarations
//!
//! The [`codegen`] module holds the translation engine; [`generate`] and
//! [`manifest`] implement the `schemabridge` commands on top of it.

pub mod codegen;
pub mod generate;
pub mod manifest;
