//! Sync event logging

use keysync_tree::{KeyPath, SyncObserver, TypeMismatch};

/// Forwards sync events to another observer, logging each one with its full
/// key path.
pub struct TracingSink<'a, O: SyncObserver + ?Sized> {
    document: &'a str,
    inner: &'a mut O,
}

impl<'a, O: SyncObserver + ?Sized> TracingSink<'a, O> {
    pub fn new(document: &'a str, inner: &'a mut O) -> Self {
        Self { document, inner }
    }
}

impl<O: SyncObserver + ?Sized> SyncObserver for TracingSink<'_, O> {
    fn key_pushed(&mut self, path: &KeyPath) {
        tracing::debug!(document = self.document, key = %path, "key pushed");
        self.inner.key_pushed(path);
    }

    fn key_removed(&mut self, path: &KeyPath) {
        tracing::debug!(document = self.document, key = %path, "key removed");
        self.inner.key_removed(path);
    }

    fn type_mismatch(&mut self, mismatch: TypeMismatch) {
        tracing::debug!(
            document = self.document,
            key = %mismatch.path,
            primary = %mismatch.primary,
            target = %mismatch.target,
            "type mismatch"
        );
        self.inner.type_mismatch(mismatch);
    }

    fn depth_exceeded(&mut self, path: &KeyPath) {
        tracing::debug!(document = self.document, key = %path, "nesting too deep");
        self.inner.depth_exceeded(path);
    }
}
