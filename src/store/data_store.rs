// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A value held in the [`DataStore`].
///
/// Per-event scalars (vertex coordinates, energy deposition) and per-hit arrays
/// (PMT id, photo-electron count, hit time) share one keyspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreValue {
    Scalar(f64),
    IntArray(Vec<i64>),
    FloatArray(Vec<f64>),
}

impl StoreValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            StoreValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            StoreValue::IntArray(v) => Some(v),
            _ => None,
        }
    }

    /// Float view of an array value. Integer arrays are widened.
    pub fn to_floats(&self) -> Option<Vec<f64>> {
        match self {
            StoreValue::FloatArray(v) => Some(v.clone()),
            StoreValue::IntArray(v) => Some(v.iter().map(|&i| i as f64).collect()),
            StoreValue::Scalar(_) => None,
        }
    }

    /// Number of elements; scalars count as one.
    pub fn len(&self) -> usize {
        match self {
            StoreValue::Scalar(_) => 1,
            StoreValue::IntArray(v) => v.len(),
            StoreValue::FloatArray(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<f64> for StoreValue {
    fn from(v: f64) -> Self {
        StoreValue::Scalar(v)
    }
}

impl From<f32> for StoreValue {
    fn from(v: f32) -> Self {
        StoreValue::Scalar(f64::from(v))
    }
}

impl From<Vec<i64>> for StoreValue {
    fn from(v: Vec<i64>) -> Self {
        StoreValue::IntArray(v)
    }
}

impl From<Vec<i32>> for StoreValue {
    fn from(v: Vec<i32>) -> Self {
        StoreValue::IntArray(v.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<f64>> for StoreValue {
    fn from(v: Vec<f64>) -> Self {
        StoreValue::FloatArray(v)
    }
}

/// Handle to the shared, string-keyed per-event data store.
///
/// Cloning the handle shares the underlying map, so an algorithm can keep the
/// handle it was given at initialization and see every later event's fields.
/// Lookups return `None` for absent keys rather than failing.
///
/// # Example
/// ```
/// use hit_summary::store::DataStore;
///
/// let store = DataStore::new();
/// store.set("npe", vec![2_i64, 3, 4]);
///
/// let reader = store.clone();
/// assert_eq!(reader.get("npe").map(|v| v.len()), Some(3));
/// assert!(reader.get("pmtid").is_none());
/// ```
#[derive(Clone, Default)]
pub struct DataStore {
    inner: Arc<RwLock<HashMap<String, StoreValue>>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field.
    pub fn set(&self, key: impl Into<String>, value: impl Into<StoreValue>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    /// Look up a field, returning a copy of its value.
    pub fn get(&self, key: &str) -> Option<StoreValue> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    pub fn remove(&self, key: &str) -> Option<StoreValue> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// Drop every field. The run loop calls this at the start of each event.
    pub fn clear(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Field names currently present, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore")
            .field("field_count", &self.len())
            .field("fields", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_contents() {
        let store = DataStore::new();
        let handle = store.clone();

        store.set("x", 1.5_f64);
        assert_eq!(handle.get("x"), Some(StoreValue::Scalar(1.5)));

        handle.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = DataStore::new();
        assert!(store.get("pmtid").is_none());
        assert!(!store.contains("pmtid"));
    }

    #[test]
    fn test_set_overwrites() {
        let store = DataStore::new();
        store.set("edep", 1.0_f64);
        store.set("edep", 2.0_f64);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("edep").and_then(|v| v.as_scalar()), Some(2.0));
    }

    #[test]
    fn test_value_views() {
        let ints = StoreValue::from(vec![1_i32, 2, 3]);
        assert_eq!(ints.as_ints(), Some(&[1_i64, 2, 3][..]));
        assert_eq!(ints.to_floats(), Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(ints.as_scalar(), None);

        let floats = StoreValue::from(vec![10.0, 20.0]);
        assert_eq!(floats.as_ints(), None);
        assert_eq!(floats.len(), 2);

        let scalar = StoreValue::from(3.0_f32);
        assert_eq!(scalar.to_floats(), None);
        assert_eq!(scalar.len(), 1);
    }

    #[test]
    fn test_keys_sorted() {
        let store = DataStore::new();
        store.set("z", 0.0_f64);
        store.set("npe", vec![1_i64]);
        store.set("hittime", vec![1.0]);
        assert_eq!(store.keys(), vec!["hittime", "npe", "z"]);

        assert!(store.remove("npe").is_some());
        assert_eq!(store.keys(), vec!["hittime", "z"]);
    }
}
