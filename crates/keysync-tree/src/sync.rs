//! Recursive key structure synchronization
//!
//! [`synchronize`] walks a primary object and a target object together and
//! mutates the target until its key structure matches the primary:
//!
//! - keys missing from the target are copied from the primary
//! - keys only present in the target are removed (see [`crate::orphan`])
//! - keys present in both keep the target's value, as long as the kinds agree
//!
//! Nothing in the walk fails. Every change and every anomaly is handed to a
//! [`SyncObserver`]; [`SyncResult`] is the observer that simply records them.

use serde_json::{Map, Value};

use crate::{KeyPath, Kind, orphan};

/// Maximum object nesting the walk descends into.
///
/// Below serde_json's parser limit of 128, so parsed documents can reach it.
pub const MAX_SYNC_DEPTH: usize = 100;

/// Receives change events while a target is synchronized.
pub trait SyncObserver {
    /// A key was added to the target. Objects are reported leaf by leaf.
    fn key_pushed(&mut self, path: &KeyPath);

    /// A key was removed from the target. Objects are reported leaf by leaf.
    fn key_removed(&mut self, path: &KeyPath);

    /// Primary and target disagree on the kind of a key; the target kept its value.
    fn type_mismatch(&mut self, mismatch: TypeMismatch);

    /// The walk stopped at `path` because the trees nest too deeply.
    fn depth_exceeded(&mut self, path: &KeyPath);
}

/// A key whose value kind differs between primary and target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    pub path: KeyPath,
    pub primary: Kind,
    pub target: Kind,
}

impl TypeMismatch {
    /// The bare name of the mismatched key.
    pub fn key(&self) -> &str {
        self.path.leaf()
    }
}

impl std::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "type mismatch on key {}. Source type {}, target type {}",
            self.key(),
            self.primary,
            self.target
        )
    }
}

/// Everything one synchronization pass did to a target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResult {
    /// Names of the keys added, in walk order
    pub pushed: Vec<String>,
    /// Names of the keys removed, in walk order
    pub removed: Vec<String>,
    /// Keys left untouched because their kinds disagree
    pub mismatches: Vec<TypeMismatch>,
    /// Paths the walk did not descend into
    pub depth_exceeded: Vec<KeyPath>,
}

impl SyncResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the pass neither added nor removed anything.
    pub fn is_aligned(&self) -> bool {
        self.pushed.is_empty() && self.removed.is_empty()
    }

    /// True when the pass changed nothing and found no anomalies.
    pub fn is_clean(&self) -> bool {
        self.is_aligned() && self.mismatches.is_empty() && self.depth_exceeded.is_empty()
    }
}

impl SyncObserver for SyncResult {
    fn key_pushed(&mut self, path: &KeyPath) {
        self.pushed.push(path.leaf().to_string());
    }

    fn key_removed(&mut self, path: &KeyPath) {
        self.removed.push(path.leaf().to_string());
    }

    fn type_mismatch(&mut self, mismatch: TypeMismatch) {
        self.mismatches.push(mismatch);
    }

    fn depth_exceeded(&mut self, path: &KeyPath) {
        self.depth_exceeded.push(path.clone());
    }
}

/// Align `target`'s key structure with `primary` and record what changed.
pub fn synchronize(primary: &Map<String, Value>, target: &mut Map<String, Value>) -> SyncResult {
    let mut result = SyncResult::new();
    synchronize_with(primary, target, &mut result);
    result
}

/// Align `target`'s key structure with `primary`, sending events to `observer`.
pub fn synchronize_with<O>(
    primary: &Map<String, Value>,
    target: &mut Map<String, Value>,
    observer: &mut O,
) where
    O: SyncObserver + ?Sized,
{
    sync_objects(primary, target, &KeyPath::root(), observer);
}

/// Synchronize one object level: merge every primary key, then drop orphans.
///
/// Orphan collection only looks at keys absent from `source`, so the
/// additions made by the merge step never affect it.
fn sync_objects<O>(
    source: &Map<String, Value>,
    target: &mut Map<String, Value>,
    path: &KeyPath,
    observer: &mut O,
) where
    O: SyncObserver + ?Sized,
{
    for (key, source_value) in source {
        merge_key(source_value, target, key, path, observer);
    }
    orphan::collect_orphans(source, target, path, observer);
}

/// Decide the fate of one primary key against the target object at `parent`.
pub fn merge_key<O>(
    source_value: &Value,
    target: &mut Map<String, Value>,
    key: &str,
    parent: &KeyPath,
    observer: &mut O,
) where
    O: SyncObserver + ?Sized,
{
    let path = parent.child(key);

    let target_value = match target.get_mut(key) {
        None => {
            push_value(source_value, target, key, path, observer);
            return;
        }
        Some(target_value) => target_value,
    };

    let source_kind = Kind::of(source_value);
    let target_kind = Kind::of(target_value);
    if source_kind != target_kind {
        observer.type_mismatch(TypeMismatch {
            path,
            primary: source_kind,
            target: target_kind,
        });
        return;
    }

    // Matching leaves are left alone: the target's value wins.
    if let (Value::Object(source_map), Value::Object(target_map)) = (source_value, target_value) {
        if path.depth() > MAX_SYNC_DEPTH {
            observer.depth_exceeded(&path);
            return;
        }
        sync_objects(source_map, target_map, &path, observer);
    }
}

/// Copy a primary value into a target that lacks `key`.
fn push_value<O>(
    source_value: &Value,
    target: &mut Map<String, Value>,
    key: &str,
    path: KeyPath,
    observer: &mut O,
) where
    O: SyncObserver + ?Sized,
{
    match source_value {
        // Objects are rebuilt key by key; an empty one reports nothing.
        Value::Object(source_map) => {
            if path.depth() > MAX_SYNC_DEPTH {
                observer.depth_exceeded(&path);
                return;
            }
            let mut created = Map::new();
            sync_objects(source_map, &mut created, &path, observer);
            target.insert(key.to_string(), Value::Object(created));
        }
        leaf => {
            target.insert(key.to_string(), leaf.clone());
            observer.key_pushed(&path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[derive(Default)]
    struct PathRecorder {
        pushed: Vec<String>,
        removed: Vec<String>,
    }

    impl SyncObserver for PathRecorder {
        fn key_pushed(&mut self, path: &KeyPath) {
            self.pushed.push(path.to_string());
        }

        fn key_removed(&mut self, path: &KeyPath) {
            self.removed.push(path.to_string());
        }

        fn type_mismatch(&mut self, _mismatch: TypeMismatch) {}

        fn depth_exceeded(&mut self, _path: &KeyPath) {}
    }

    #[test]
    fn test_merge_key_pushes_missing_leaf() {
        let mut target = Map::new();
        let mut result = SyncResult::new();
        merge_key(&json!("hello"), &mut target, "greeting", &KeyPath::root(), &mut result);

        assert_eq!(target.get("greeting"), Some(&json!("hello")));
        assert_eq!(result.pushed, vec!["greeting"]);
    }

    #[test]
    fn test_merge_key_keeps_matching_leaf() {
        let mut target = object(json!({"greeting": "hola"}));
        let mut result = SyncResult::new();
        merge_key(&json!("hello"), &mut target, "greeting", &KeyPath::root(), &mut result);

        assert_eq!(target.get("greeting"), Some(&json!("hola")));
        assert!(result.is_clean());
    }

    #[test]
    fn test_merge_key_reports_mismatch_without_touching_target() {
        let mut target = object(json!({"count": [1, 2]}));
        let mut result = SyncResult::new();
        merge_key(&json!(3), &mut target, "count", &KeyPath::root(), &mut result);

        assert_eq!(target.get("count"), Some(&json!([1, 2])));
        assert_eq!(result.mismatches.len(), 1);
        assert_eq!(result.mismatches[0].primary, Kind::Number);
        assert_eq!(result.mismatches[0].target, Kind::Array);
    }

    #[test]
    fn test_null_and_object_mismatch() {
        let primary = object(json!({"section": {"a": 1}}));
        let mut target = object(json!({"section": null}));
        let result = synchronize(&primary, &mut target);

        assert_eq!(target, object(json!({"section": null})));
        assert_eq!(
            result.mismatches[0].to_string(),
            "type mismatch on key section. Source type Object, target type Null"
        );
    }

    #[test]
    fn test_observer_receives_full_paths() {
        let primary = object(json!({"menu": {"file": {"open": "Open"}}}));
        let mut target = object(json!({"menu": {"edit": {"copy": "Copy"}}}));
        let mut recorder = PathRecorder::default();
        synchronize_with(&primary, &mut target, &mut recorder);

        assert_eq!(recorder.pushed, vec!["menu.file.open"]);
        assert_eq!(recorder.removed, vec!["menu.edit.copy"]);
    }

    #[test]
    fn test_new_keys_follow_primary_order() {
        let primary = object(json!({"a": 1, "b": 2, "c": 3}));
        let mut target = object(json!({"b": 20}));
        synchronize(&primary, &mut target);

        let keys: Vec<&String> = target.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_object_is_copied_without_events() {
        let primary = object(json!({"empty": {}, "nested": {"inner": {}}}));
        let mut target = Map::new();
        let result = synchronize(&primary, &mut target);

        assert_eq!(target, primary);
        assert!(result.pushed.is_empty());
        assert!(result.is_aligned());
    }

    #[test]
    fn test_empty_orphan_objects_are_removed_without_events() {
        let mut target = object(json!({"gone": {}, "deep": {"inner": {}}}));
        let result = synchronize(&Map::new(), &mut target);

        assert!(target.is_empty());
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_depth_guard_stops_descent() {
        fn nested(depth: usize) -> Value {
            let mut current = json!({"leaf": "value"});
            for _ in 0..depth {
                current = json!({"nested": current});
            }
            current
        }

        let primary = object(nested(MAX_SYNC_DEPTH + 10));
        let mut target = object(nested(MAX_SYNC_DEPTH + 10));
        let result = synchronize(&primary, &mut target);

        assert!(result.is_aligned());
        assert_eq!(result.depth_exceeded.len(), 1);
        assert_eq!(result.depth_exceeded[0].depth(), MAX_SYNC_DEPTH + 1);
    }
}
