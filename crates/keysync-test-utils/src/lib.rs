//! Shared test utilities for the keysync workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`locale`]: [`LocaleTree`] builder for directories of JSON documents

pub mod locale;

pub use locale::LocaleTree;
