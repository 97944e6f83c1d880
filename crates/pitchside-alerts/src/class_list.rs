//! Presentation class lists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered, duplicate-free set of style class tokens.
///
/// Follows DOM `classList` semantics: adding a token that is already
/// present and removing one that is absent are both no-ops, and
/// rendering joins tokens with single spaces in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a class list from tokens, deduplicating while keeping
    /// first-seen order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for token in tokens {
            list.add(&token.into());
        }
        list
    }

    /// Add a token. Returns whether the list changed.
    ///
    /// Empty and whitespace-containing tokens are ignored.
    pub fn add(&mut self, token: &str) -> bool {
        if !is_valid_token(token) || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token. Returns whether the list changed.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() < before
    }

    /// Check membership.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add the token if absent, remove it if present. Returns whether the
    /// token is present afterwards.
    pub fn toggle(&mut self, token: &str) -> bool {
        if self.contains(token) {
            self.remove(token);
            false
        } else {
            self.add(token)
        }
    }

    /// Iterate tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(|c| c.is_whitespace())
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

impl FromStr for ClassList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tokens(s.split_whitespace()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_contains() {
        let mut c = ClassList::new();
        assert!(c.add("alert"));
        assert!(c.add("show"));
        assert!(c.contains("alert"));
        assert!(c.contains("show"));
        assert!(!c.contains("fade"));
    }

    #[test]
    fn test_add_present_is_noop() {
        let mut c = ClassList::from_tokens(["alert", "fade"]);
        assert!(!c.add("fade"));
        assert_eq!(c.to_string(), "alert fade");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut c = ClassList::from_tokens(["alert"]);
        assert!(!c.remove("show"));
        assert!(c.remove("alert"));
        assert!(c.is_empty());
    }

    #[test]
    fn test_invalid_tokens_ignored() {
        let mut c = ClassList::new();
        assert!(!c.add(""));
        assert!(!c.add("two words"));
        assert!(c.is_empty());
    }

    #[test]
    fn test_display_and_parse() {
        let c: ClassList = "alert alert-success show".parse().unwrap();
        assert_eq!(c.to_string(), "alert alert-success show");
        assert_eq!(c.len(), 3);

        let deduped: ClassList = "alert alert show".parse().unwrap();
        assert_eq!(deduped.to_string(), "alert show");
    }

    #[test]
    fn test_toggle() {
        let mut c = ClassList::from_tokens(["alert"]);
        assert!(c.toggle("show"));
        assert!(c.contains("show"));
        assert!(!c.toggle("show"));
        assert!(!c.contains("show"));
    }
}
