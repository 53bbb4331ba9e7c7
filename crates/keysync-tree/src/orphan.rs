//! Removal of target keys that the primary does not have

use serde_json::{Map, Value};

use crate::KeyPath;
use crate::sync::SyncObserver;

/// Remove every key of `target` absent from `source` and report it.
///
/// Orphaned objects are reported as the leaves beneath them, since the whole
/// subtree goes at once. The remaining keys keep their order.
pub fn collect_orphans<O>(
    source: &Map<String, Value>,
    target: &mut Map<String, Value>,
    parent: &KeyPath,
    observer: &mut O,
) where
    O: SyncObserver + ?Sized,
{
    let mut found = false;
    for (key, value) in target.iter() {
        if source.contains_key(key) {
            continue;
        }
        found = true;
        for leaf in orphan_leaves(parent.child(key), value) {
            observer.key_removed(&leaf);
        }
    }

    if found {
        target.retain(|key, _| source.contains_key(key));
    }
}

/// Paths of the leaves under `value`, depth first in key order.
///
/// A non-object value is its own leaf; an empty object has none. Walks with an
/// explicit stack so arbitrarily deep orphans cannot overflow.
pub fn orphan_leaves(path: KeyPath, value: &Value) -> Vec<KeyPath> {
    let mut leaves = Vec::new();
    let mut stack = vec![(path, value)];

    while let Some((path, value)) = stack.pop() {
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter().rev() {
                    stack.push((path.child(key), child));
                }
            }
            _ => leaves.push(path),
        }
    }

    leaves
}
