//! Route aliases and reverse routing.

use regex::Regex;
use routeway_core::RouteError;
use std::collections::HashMap;

/// Maps alias names to full stored patterns.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name a pattern. Re-using an alias points it at the new pattern.
    pub fn insert(&mut self, alias: impl Into<String>, pattern: impl Into<String>) -> Option<String> {
        self.aliases.insert(alias.into(), pattern.into())
    }

    /// The pattern behind an alias.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Build a concrete URL from an alias.
    ///
    /// Parameters replace the matches of `group` in the stored pattern, left
    /// to right, in a single pass. Placeholders left over stay in the URL;
    /// surplus parameters are ignored. Parameter text is inserted verbatim
    /// and never matched again.
    pub fn url<S: AsRef<str>>(
        &self,
        alias: &str,
        params: &[S],
        group: &Regex,
    ) -> Result<String, RouteError> {
        let pattern = self
            .get(alias)
            .filter(|pattern| !pattern.is_empty())
            .ok_or_else(|| RouteError::AliasNotFound(alias.to_string()))?;

        let mut url = String::with_capacity(pattern.len());
        let mut cursor = 0;
        for (found, param) in group.find_iter(pattern).zip(params) {
            url.push_str(&pattern[cursor..found.start()]);
            url.push_str(param.as_ref());
            cursor = found.end();
        }
        url.push_str(&pattern[cursor..]);
        Ok(url)
    }

    /// Iterate `(alias, pattern)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, pattern)| (alias.as_str(), pattern.as_str()))
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Check if no aliases are recorded.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Forget every alias.
    pub fn clear(&mut self) {
        self.aliases.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternRegistry;

    fn url(table: &AliasTable, alias: &str, params: &[&str]) -> Result<String, RouteError> {
        table.url(alias, params, PatternRegistry::new().group())
    }

    #[test]
    fn test_url_replaces_placeholders_in_order() {
        let mut table = AliasTable::new();
        table.insert("user.post", "/user/(n)/post/(s)");

        assert_eq!(url(&table, "user.post", &["4", "hello"]).unwrap(), "/user/4/post/hello");
        assert_eq!(url(&table, "user.post", &["4"]).unwrap(), "/user/4/post/(s)");
        assert_eq!(url(&table, "user.post", &["4", "a", "b"]).unwrap(), "/user/4/post/a");
    }

    #[test]
    fn test_params_are_inserted_literally() {
        let mut table = AliasTable::new();
        table.insert("file", "/file/(*)");
        assert_eq!(url(&table, "file", &["$1"]).unwrap(), "/file/$1");
    }

    #[test]
    fn test_inserted_params_are_not_rescanned() {
        let mut table = AliasTable::new();
        table.insert("user.post", "/user/(n)/post/(s)");
        assert_eq!(
            url(&table, "user.post", &["(s)", "7"]).unwrap(),
            "/user/(s)/post/7"
        );
    }

    #[test]
    fn test_alias_not_found() {
        let mut table = AliasTable::new();
        table.insert("blank", "");

        for alias in ["missing", "blank"] {
            let err = url(&table, alias, &[]).unwrap_err();
            assert_eq!(err.to_string(), format!("The route alias {alias} not found."));
        }
    }

    #[test]
    fn test_reinsert_repoints_alias() {
        let mut table = AliasTable::new();
        table.insert("home", "/");
        assert_eq!(table.insert("home", "/start"), Some("/".to_string()));
        assert_eq!(table.get("home"), Some("/start"));
        assert_eq!(table.len(), 1);
    }
}
