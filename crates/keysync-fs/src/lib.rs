//! Filesystem layer for keysync
//!
//! Finds JSON documents, groups them by directory around a primary file,
//! loads configuration and writes results back atomically.

pub mod config;
pub mod discover;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use discover::{DocumentGroup, collect_json_files, group_files};
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::{canonical, display_name};
