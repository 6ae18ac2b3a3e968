#![deny(unsafe_code)]
//! Schema Authority for architecture contracts.
//!
//! This crate provides:
//! - **The contract schema** ([`contract_schema`]) with its required invariant
//!   domains and assumption categories baked in.
//! - **Self-derived versioning** ([`SchemaAuthority::version_hash`]): the
//!   SHA-256 of the canonical schema definition. Any edit to the definition
//!   changes the `schema_version` every contract must declare.
//! - **Structural validation** ([`StructuralValidator`], [`JsonSchemaValidator`]):
//!   "validate document against schema, yield ordered violations".

pub mod authority;
pub mod definition;
pub mod error;
pub mod validator;

pub use authority::SchemaAuthority;
pub use definition::{contract_schema, REQUIRED_ASSUMPTION_CATEGORIES, REQUIRED_INVARIANT_DOMAINS, REQUIRED_TOP_LEVEL};
pub use error::SchemaError;
pub use validator::{JsonSchemaValidator, StructuralValidator, Violation};
