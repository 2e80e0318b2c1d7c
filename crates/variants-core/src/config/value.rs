//! Selected values and compound-rule requirements

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A value selected for an axis, either by a caller or as a default.
///
/// Boolean axes are selected with `true`/`false`; the strings `"true"` and
/// `"false"` (any case) are accepted for them as well. Numbers select the
/// value named by their decimal form, so `2` selects `"2"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    Bool(bool),
    Number(serde_json::Number),
    Name(String),
}

impl VariantValue {
    /// The value name this selection refers to (`true` becomes `"true"`).
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            VariantValue::Bool(true) => Cow::Borrowed("true"),
            VariantValue::Bool(false) => Cow::Borrowed("false"),
            VariantValue::Number(number) => Cow::Owned(number.to_string()),
            VariantValue::Name(name) => Cow::Borrowed(name.as_str()),
        }
    }

    /// Interpret the selection as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            VariantValue::Bool(b) => Some(*b),
            VariantValue::Name(name) if name.eq_ignore_ascii_case("true") => Some(true),
            VariantValue::Name(name) if name.eq_ignore_ascii_case("false") => Some(false),
            VariantValue::Name(_) | VariantValue::Number(_) => None,
        }
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_name())
    }
}

impl From<&str> for VariantValue {
    fn from(value: &str) -> Self {
        VariantValue::Name(value.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(value: String) -> Self {
        VariantValue::Name(value)
    }
}

impl From<bool> for VariantValue {
    fn from(value: bool) -> Self {
        VariantValue::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($int:ty),*) => {$(
        impl From<$int> for VariantValue {
            fn from(value: $int) -> Self {
                VariantValue::Number(value.into())
            }
        }

        impl From<$int> for Requirement {
            fn from(value: $int) -> Self {
                Requirement::One(value.into())
            }
        }
    )*};
}

impl_from_integer!(i32, i64, u32, u64, usize);

/// What a compound rule requires of one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Requirement {
    /// The resolved value must equal this one.
    One(VariantValue),
    /// The resolved value must be one of these.
    AnyOf(Vec<VariantValue>),
}

impl Requirement {
    /// Check a resolved value name against this requirement.
    pub fn accepts(&self, resolved: &str) -> bool {
        match self {
            Requirement::One(value) => value.as_name() == resolved,
            Requirement::AnyOf(values) => values.iter().any(|value| value.as_name() == resolved),
        }
    }
}

impl From<VariantValue> for Requirement {
    fn from(value: VariantValue) -> Self {
        Requirement::One(value)
    }
}

impl From<&str> for Requirement {
    fn from(value: &str) -> Self {
        Requirement::One(value.into())
    }
}

impl From<String> for Requirement {
    fn from(value: String) -> Self {
        Requirement::One(value.into())
    }
}

impl From<bool> for Requirement {
    fn from(value: bool) -> Self {
        Requirement::One(value.into())
    }
}

impl From<Vec<VariantValue>> for Requirement {
    fn from(values: Vec<VariantValue>) -> Self {
        Requirement::AnyOf(values)
    }
}

impl<const N: usize> From<[&str; N]> for Requirement {
    fn from(values: [&str; N]) -> Self {
        Requirement::AnyOf(values.iter().map(|v| VariantValue::from(*v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_name() {
        assert_eq!(VariantValue::from(true).as_name(), "true");
        assert_eq!(VariantValue::from(false).as_name(), "false");
        assert_eq!(VariantValue::from("lg").as_name(), "lg");
    }

    #[test]
    fn test_number_names_its_decimal_form() {
        assert_eq!(VariantValue::from(2).as_name(), "2");
        assert_eq!(VariantValue::from(-1i64).as_name(), "-1");
        assert_eq!(VariantValue::from(0u32).as_bool(), None);
        assert!(Requirement::from(3).accepts("3"));
    }

    #[test]
    fn test_as_bool_accepts_boolean_strings() {
        assert_eq!(VariantValue::from("TRUE").as_bool(), Some(true));
        assert_eq!(VariantValue::from("False").as_bool(), Some(false));
        assert_eq!(VariantValue::from(true).as_bool(), Some(true));
        assert_eq!(VariantValue::from("yes").as_bool(), None);
    }

    #[test]
    fn test_requirement_one() {
        let requirement = Requirement::from("primary");
        assert!(requirement.accepts("primary"));
        assert!(!requirement.accepts("secondary"));
    }

    #[test]
    fn test_requirement_boolean_matches_value_name() {
        assert!(Requirement::from(true).accepts("true"));
        assert!(!Requirement::from(true).accepts("false"));
    }

    #[test]
    fn test_requirement_any_of() {
        let requirement = Requirement::AnyOf(vec!["sm".into(), "md".into()]);
        assert!(requirement.accepts("md"));
        assert!(!requirement.accepts("lg"));
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<Requirement> = serde_json::from_str(r#"["a", true, ["b", false], 2, [1, "3"]]"#).unwrap();
        assert_eq!(values[0], Requirement::from("a"));
        assert_eq!(values[1], Requirement::from(true));
        assert_eq!(
            values[2],
            Requirement::AnyOf(vec![VariantValue::from("b"), VariantValue::from(false)])
        );
        assert_eq!(values[3], Requirement::from(2));
        assert_eq!(
            values[4],
            Requirement::AnyOf(vec![VariantValue::from(1), VariantValue::from("3")])
        );
    }
}
