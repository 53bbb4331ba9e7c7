//! Mode policy
//!
//! [`Mode`] is defined in `keysync-tree`, where the reporter needs it for its
//! wording. This module adds the policy half: what a mode does with a sync
//! problem.

use crate::{Error, Result};

/// Policy mode (type alias for [`keysync_tree::Mode`]).
pub type Mode = keysync_tree::Mode;

/// Strategy for reacting to sync problems.
pub trait SyncPolicy {
    /// Either fail with `message` or record it in `findings` and continue.
    fn on_sync_error(&self, message: String, findings: &mut Vec<String>) -> Result<()>;

    /// Whether aligned documents are written back to disk.
    fn writes_targets(&self) -> bool;
}

impl SyncPolicy for Mode {
    fn on_sync_error(&self, message: String, findings: &mut Vec<String>) -> Result<()> {
        match self {
            Mode::Write => Err(Error::Sync { message }),
            Mode::Report => {
                tracing::warn!("{message}");
                findings.push(message);
                Ok(())
            }
        }
    }

    fn writes_targets(&self) -> bool {
        matches!(self, Mode::Write)
    }
}
