//! Orchestration layer for keysync
//!
//! Sits between the tree synchronizer and the command line:
//!
//! ```text
//!            keysync-cli
//!                 |
//!           keysync-core
//!             /       \
//!   keysync-tree   keysync-fs
//! ```
//!
//! - **Mode policy**: [`SyncPolicy`] decides whether a sync problem aborts the
//!   run (write mode) or becomes a report finding (report mode)
//! - **SyncEngine**: discovers documents, groups them around the primary file
//!   and synchronizes every target of every group
//! - **Configuration**: [`SyncConfig`] loaded from `keysync.toml`

pub mod config;
pub mod engine;
pub mod error;
pub mod mode;
pub mod observer;

pub use config::SyncConfig;
pub use engine::{RunReport, SyncEngine, SyncOptions, TargetOutcome};
pub use error::{Error, Result};
pub use mode::{Mode, SyncPolicy};
pub use observer::TracingSink;
