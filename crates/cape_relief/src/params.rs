//! Flat parameter sets produced by a successful match.

use std::fmt;

use cape_carton::{FxHashMap, String};

/// Reserved key holding the (namespace-prefixed) collection path.
pub const COLLECTION_KEY: &str = "collection";
/// Reserved key holding the action name.
pub const ACTION_KEY: &str = "action";
/// Reserved key holding the identity prefix of namespaced routes.
pub const MODULE_KEY: &str = "module";

/// Key-value mapping handed to components, hooks, and subscribers.
///
/// After a match it always contains [`COLLECTION_KEY`] and [`ACTION_KEY`],
/// plus one entry per capture key of the matched route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(FxHashMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str())
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or overwrite `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    #[inline]
    pub fn collection(&self) -> Option<&str> {
        self.get(COLLECTION_KEY)
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.get(ACTION_KEY)
    }

    #[inline]
    pub fn module(&self) -> Option<&str> {
        self.get(MODULE_KEY)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries sorted by key, for stable output.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(entries: [(K, V); N]) -> Self {
        let mut params = Params::new();
        for (key, value) in entries {
            params.insert(key, value);
        }
        params
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys() {
        let params = Params::from([
            (COLLECTION_KEY, "admin/members"),
            (ACTION_KEY, "show"),
            (MODULE_KEY, "admin"),
            ("id", "123"),
        ]);
        assert_eq!(params.collection(), Some("admin/members"));
        assert_eq!(params.action(), Some("show"));
        assert_eq!(params.module(), Some("admin"));
        assert_eq!(params.get("id"), Some("123"));
        assert_eq!(params.get("name"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut params = Params::new();
        assert_eq!(params.insert("id", "1"), None);
        assert_eq!(params.insert("id", "2").as_deref(), Some("1"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_display_is_sorted() {
        let params = Params::from([("id", "7"), ("action", "show"), ("collection", "members")]);
        assert_eq!(params.to_string(), "{action=show, collection=members, id=7}");
    }
}
