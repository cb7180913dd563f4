//! Key-based access to maps as a `LensO`.
//!
//! [`At`] focuses on the entry stored under a key. The focus is an
//! `Option<V>`, so the lens can observe absence, insert a missing key and
//! remove an existing one:
//!
//! - `get` returns a clone of the stored value, or `None`
//! - `set(map, Some(value))` inserts or replaces the entry
//! - `set(map, None)` removes the entry
//!
//! Because an `At` lens is a `LensO`, it composes with
//! [`compose_option`](super::OptionLens::compose_option) to reach into the
//! stored value, creating the entry from a default when needed.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use optica::optics::{Lens, at::At};
//!
//! let map: HashMap<String, i32> = std::iter::once(("key".to_string(), 42)).collect();
//! let entry = <HashMap<String, i32> as At<String>>::at("key".to_string());
//!
//! assert_eq!(entry.get(&map), Some(42));
//!
//! let map = entry.set(map, Some(100));
//! assert_eq!(map.get("key"), Some(&100));
//!
//! let map = entry.set(map, None);
//! assert!(map.is_empty());
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash, RandomState};
use std::marker::PhantomData;

use crate::optics::Lens;

/// A trait for map-like types whose entries can be focused by key.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use optica::optics::{Lens, at::At};
///
/// let entry = <BTreeMap<u32, String> as At<u32>>::at(7);
/// let map = entry.set(BTreeMap::new(), Some("seven".to_string()));
/// assert_eq!(map.get(&7).map(String::as_str), Some("seven"));
/// ```
pub trait At<K>: Sized {
    /// The value type stored in this container.
    type Value;

    /// The lens type for accessing the entry at a key.
    type AtLens: Lens<Self, Option<Self::Value>>;

    /// Returns a lens that focuses on the entry stored under `key`.
    fn at(key: K) -> Self::AtLens;
}

/// A `LensO` onto the entry of a `HashMap` stored under a fixed key.
///
/// The hasher is part of the type, so each lens has exactly one source type
/// and composes without annotations.
pub struct HashMapAt<K, V, H = RandomState> {
    key: K,
    _marker: PhantomData<fn() -> (V, H)>,
}

impl<K, V, H> HashMapAt<K, V, H> {
    /// Creates a new `HashMapAt` for the given key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// Returns the key this lens focuses on.
    pub const fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Clone, V, H> Clone for HashMapAt<K, V, H> {
    fn clone(&self) -> Self {
        Self::new(self.key.clone())
    }
}

impl<K: fmt::Debug, V, H> fmt::Debug for HashMapAt<K, V, H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HashMapAt")
            .field("key", &self.key)
            .finish()
    }
}

impl<K, V, H> Lens<HashMap<K, V, H>, Option<V>> for HashMapAt<K, V, H>
where
    K: Clone + Eq + Hash,
    V: Clone,
    H: BuildHasher,
{
    fn get(&self, source: &HashMap<K, V, H>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: HashMap<K, V, H>, value: Option<V>) -> HashMap<K, V, H> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                if source.remove(&self.key).is_some() {
                    optics_trace!("removed map entry");
                }
            }
        }
        source
    }
}

impl<K, V, H> At<K> for HashMap<K, V, H>
where
    K: Clone + Eq + Hash,
    V: Clone,
    H: BuildHasher,
{
    type Value = V;
    type AtLens = HashMapAt<K, V, H>;

    fn at(key: K) -> Self::AtLens {
        HashMapAt::new(key)
    }
}

/// A `LensO` onto the entry of a `BTreeMap` stored under a fixed key.
#[derive(Debug, Clone)]
pub struct BTreeMapAt<K, V> {
    key: K,
    _marker: PhantomData<V>,
}

impl<K, V> BTreeMapAt<K, V> {
    /// Creates a new `BTreeMapAt` for the given key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// Returns the key this lens focuses on.
    pub const fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Clone + Ord, V: Clone> Lens<BTreeMap<K, V>, Option<V>> for BTreeMapAt<K, V> {
    fn get(&self, source: &BTreeMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn set(&self, mut source: BTreeMap<K, V>, value: Option<V>) -> BTreeMap<K, V> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                if source.remove(&self.key).is_some() {
                    optics_trace!("removed map entry");
                }
            }
        }
        source
    }
}

impl<K: Clone + Ord, V: Clone> At<K> for BTreeMap<K, V> {
    type Value = V;
    type AtLens = BTreeMapAt<K, V>;

    fn at(key: K) -> Self::AtLens {
        BTreeMapAt::new(key)
    }
}

/// Convenience function to get the `At` lens of a type.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use optica::optics::{Lens, at::at};
///
/// let map: HashMap<String, i32> = std::iter::once(("a".to_string(), 1)).collect();
/// let entry = at::<HashMap<String, i32>, _>("a".to_string());
///
/// assert_eq!(entry.get(&map), Some(1));
/// ```
pub fn at<T: At<K>, K>(key: K) -> T::AtLens {
    T::at(key)
}

#[cfg(test)]
mod tests {
    use super::{At, BTreeMap, BTreeMapAt, HashMap, HashMapAt, at};
    use crate::optics::{Lens, OptionLens};
    use crate::lens;
    use rstest::rstest;

    fn single(key: &str, value: i32) -> HashMap<String, i32> {
        std::iter::once((key.to_string(), value)).collect()
    }

    // =========================================================================
    // HashMapAt Tests
    // =========================================================================

    #[rstest]
    #[case("key", Some(42))]
    #[case("other", None)]
    fn test_hashmap_at_get(#[case] key: &str, #[case] expected: Option<i32>) {
        let entry = <HashMap<String, i32> as At<String>>::at(key.to_string());
        assert_eq!(entry.get(&single("key", 42)), expected);
    }

    #[rstest]
    fn test_hashmap_at_set_existing() {
        let entry = <HashMap<String, i32> as At<String>>::at("key".to_string());
        let updated = entry.set(single("key", 42), Some(100));
        assert_eq!(updated.get("key"), Some(&100));
        assert_eq!(updated.len(), 1);
    }

    #[rstest]
    fn test_hashmap_at_set_new_key() {
        let entry = <HashMap<String, i32> as At<String>>::at("new_key".to_string());
        let updated = entry.set(single("key", 42), Some(7));
        assert_eq!(updated.get("new_key"), Some(&7));
        assert_eq!(updated.get("key"), Some(&42));
    }

    #[rstest]
    fn test_hashmap_at_set_none_removes() {
        let entry = <HashMap<String, i32> as At<String>>::at("key".to_string());
        let updated = entry.set(single("key", 42), None);
        assert!(updated.is_empty());
    }

    #[rstest]
    fn test_hashmap_at_set_none_on_missing_key_is_identity() {
        let entry = <HashMap<String, i32> as At<String>>::at("missing".to_string());
        let updated = entry.set(single("key", 42), None);
        assert_eq!(updated, single("key", 42));
    }

    #[rstest]
    fn test_hashmap_at_modify() {
        let entry = HashMapAt::<String, i32>::new("key".to_string());
        let modified = entry.modify(single("key", 42), |value| value.map(|x| x * 2));
        assert_eq!(modified.get("key"), Some(&84));
    }

    #[rstest]
    fn test_hashmap_at_debug() {
        let entry = HashMapAt::<String, i32>::new("key".to_string());
        assert!(format!("{entry:?}").contains("HashMapAt"));
        assert_eq!(entry.key(), "key");
    }

    // =========================================================================
    // BTreeMapAt Tests
    // =========================================================================

    #[rstest]
    fn test_btreemap_at_insert_and_remove() {
        let entry = BTreeMapAt::<u32, &str>::new(3);
        let map = entry.set(BTreeMap::new(), Some("three"));
        assert_eq!(entry.get(&map), Some("three"));

        let map = entry.set(map, None);
        assert_eq!(entry.get(&map), None);
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_at_convenience_function() {
        let entry = at::<BTreeMap<String, i32>, _>("a".to_string());
        let map: BTreeMap<String, i32> = std::iter::once(("a".to_string(), 1)).collect();
        assert_eq!(entry.get(&map), Some(1));
    }

    // =========================================================================
    // Composition Tests
    // =========================================================================

    #[derive(Clone, PartialEq, Debug)]
    struct Endpoint {
        url: String,
        timeout_ms: u64,
    }

    #[rstest]
    fn test_compose_option_through_map_creates_entry() {
        let timeout = <HashMap<String, Endpoint> as At<String>>::at("api".to_string())
            .compose_option(
                Endpoint {
                    url: "http://localhost".to_string(),
                    timeout_ms: 1000,
                },
                lens!(Endpoint, timeout_ms),
            );

        let registry = timeout.set(HashMap::new(), Some(250));
        assert_eq!(
            registry.get("api"),
            Some(&Endpoint {
                url: "http://localhost".to_string(),
                timeout_ms: 250,
            })
        );

        let registry = timeout.set(registry, None);
        assert!(registry.is_empty());
    }

    // =========================================================================
    // Law Tests
    // =========================================================================

    #[rstest]
    #[case(None)]
    #[case(Some(9))]
    fn test_hashmap_at_set_get_law(#[case] value: Option<i32>) {
        let entry = <HashMap<String, i32> as At<String>>::at("key".to_string());
        let updated = entry.set(single("key", 42), value);
        assert_eq!(entry.get(&updated), value);
    }

    #[rstest]
    fn test_hashmap_at_get_set_law() {
        let entry = <HashMap<String, i32> as At<String>>::at("key".to_string());
        let map = single("key", 42);
        let current = entry.get(&map);
        assert_eq!(entry.set(map.clone(), current), map);
    }

    #[rstest]
    fn test_hashmap_at_set_set_law() {
        let entry = <HashMap<String, i32> as At<String>>::at("key".to_string());
        let map = single("other", 1);
        let set_twice = entry.set(entry.set(map.clone(), Some(42)), None);
        let set_once = entry.set(map, None);
        assert_eq!(set_twice, set_once);
    }
}
