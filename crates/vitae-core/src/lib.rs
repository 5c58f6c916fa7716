//! Core domain model for vitae.
//!
//! This crate defines the resume document model (Document, Entry, Bullet,
//! Manifest), the JSON load/store boundary, structural validation, and
//! schema version handling.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod store;
pub mod validate;
pub mod version;

pub use error::{Error, Result};
