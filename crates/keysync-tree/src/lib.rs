//! Key structure synchronization for JSON documents
//!
//! Aligns the key structure of a target JSON object with a primary (template)
//! object: missing keys are pushed, orphaned keys are removed, and existing
//! target leaves are never overwritten. Changes are reported as data through
//! [`SyncObserver`], never as errors.

pub mod document;
pub mod error;
pub mod kind;
pub mod mode;
pub mod orphan;
pub mod path;
pub mod report;
pub mod sync;

pub use document::Document;
pub use error::{Error, Result};
pub use kind::Kind;
pub use mode::Mode;
pub use path::KeyPath;
pub use report::{ChangeSummary, KeyList, SummaryLine};
pub use sync::{MAX_SYNC_DEPTH, SyncObserver, SyncResult, TypeMismatch, synchronize, synchronize_with};
