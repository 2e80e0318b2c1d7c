//! Class-name values and their canonical form
//!
//! Configuration literals spell class names either as a single string
//! (`"px-4 py-2"`) or as a list (`["px-4", "py-2"]`). [`ClassValue`] models
//! that input shape, [`normalize`] flattens it to one string, and
//! [`StyleFragment`] is the token sequence the engines work with after
//! ingestion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A class-name value as written in configuration or passed by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
    /// A whitespace-separated class string.
    Single(String),
    /// A list of class strings, joined with single spaces.
    List(Vec<String>),
}

impl ClassValue {
    /// Flatten this value to one class string.
    ///
    /// Lists are joined with a single space; strings are returned unchanged.
    pub fn normalize(&self) -> String {
        match self {
            ClassValue::Single(s) => s.clone(),
            ClassValue::List(items) => items.join(" "),
        }
    }
}

/// Flatten an optional class value to one string.
///
/// `None` becomes `""`. No trimming or deduplication happens here; that is
/// the class-merge resolver's job.
///
/// # Example
///
/// ```
/// use variants_class::{ClassValue, normalize};
///
/// let list = ClassValue::from(["p-1", "p-2"]);
/// assert_eq!(normalize(Some(&list)), "p-1 p-2");
/// assert_eq!(normalize(None), "");
/// ```
pub fn normalize(value: Option<&ClassValue>) -> String {
    value.map(ClassValue::normalize).unwrap_or_default()
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Single(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Single(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Single(value.clone())
    }
}

impl From<Vec<String>> for ClassValue {
    fn from(value: Vec<String>) -> Self {
        ClassValue::List(value)
    }
}

impl From<Vec<&str>> for ClassValue {
    fn from(value: Vec<&str>) -> Self {
        ClassValue::List(value.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ClassValue {
    fn from(value: [&str; N]) -> Self {
        ClassValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Canonical, tokenized style fragment.
///
/// Built once when a configuration is ingested so resolution only ever sees
/// one representation. Every element of the source value is split on
/// whitespace; empty tokens are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ClassValue", into = "ClassValue")]
pub struct StyleFragment {
    tokens: Vec<String>,
}

impl StyleFragment {
    /// An empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The class tokens in declaration order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined with single spaces.
    pub fn as_class_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl From<ClassValue> for StyleFragment {
    fn from(value: ClassValue) -> Self {
        let tokens = match value {
            ClassValue::Single(s) => split_tokens(&s),
            ClassValue::List(items) => items.iter().flat_map(|s| split_tokens(s)).collect(),
        };
        Self { tokens }
    }
}

impl From<StyleFragment> for ClassValue {
    fn from(value: StyleFragment) -> Self {
        ClassValue::Single(value.as_class_string())
    }
}

impl From<&ClassValue> for StyleFragment {
    fn from(value: &ClassValue) -> Self {
        Self::from(value.clone())
    }
}

impl From<&str> for StyleFragment {
    fn from(value: &str) -> Self {
        Self {
            tokens: split_tokens(value),
        }
    }
}

impl From<String> for StyleFragment {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<&str>> for StyleFragment {
    fn from(value: Vec<&str>) -> Self {
        Self::from(ClassValue::from(value))
    }
}

impl<const N: usize> From<[&str; N]> for StyleFragment {
    fn from(value: [&str; N]) -> Self {
        Self::from(ClassValue::from(value))
    }
}

impl fmt::Display for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_class_string())
    }
}

fn split_tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}
