use crate::StrError;
use serde::{Deserialize, Serialize};

/// Default label of a single-sample batch
pub const DEFAULT_LABEL: &str = "mat";

/// Holds the labels (material names) of a batch
///
/// In JSON, a single label is a string and many labels are an array of strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Labels {
    /// One label; renders a batch with a single sample
    Single(String),

    /// One label per sample
    Many(Vec<String>),
}

impl Labels {
    /// Returns the labels as a list, one per sample
    ///
    /// The list must not be empty and every label must be a non-empty string.
    pub fn to_list(&self) -> Result<Vec<String>, StrError> {
        let list = match self {
            Labels::Single(label) => vec![label.clone()],
            Labels::Many(labels) => labels.clone(),
        };
        if list.is_empty() {
            return Err("at least one label is required");
        }
        if list.iter().any(|label| label.is_empty()) {
            return Err("labels must be non-empty strings");
        }
        Ok(list)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels::Single(DEFAULT_LABEL.to_string())
    }
}

impl From<&str> for Labels {
    fn from(label: &str) -> Self {
        Labels::Single(label.to_string())
    }
}

impl From<String> for Labels {
    fn from(label: String) -> Self {
        Labels::Single(label)
    }
}

impl From<Vec<String>> for Labels {
    fn from(labels: Vec<String>) -> Self {
        Labels::Many(labels)
    }
}

impl From<Vec<&str>> for Labels {
    fn from(labels: Vec<&str>) -> Self {
        Labels::Many(labels.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[&str]> for Labels {
    fn from(labels: &[&str]) -> Self {
        Labels::Many(labels.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Labels {
    fn from(labels: [&str; N]) -> Self {
        Labels::Many(labels.iter().map(|s| s.to_string()).collect())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Labels, DEFAULT_LABEL};

    #[test]
    fn default_is_a_single_label() {
        assert_eq!(Labels::default().to_list().unwrap(), &[DEFAULT_LABEL]);
    }

    #[test]
    fn single_label_is_broadcast_to_a_list() {
        assert_eq!(Labels::from("steel").to_list().unwrap(), &["steel"]);
        assert_eq!(Labels::from("steel".to_string()).to_list().unwrap(), &["steel"]);
    }

    #[test]
    fn many_labels_keep_their_order() {
        let labels = Labels::from(["b", "a", "c"]);
        assert_eq!(labels.to_list().unwrap(), &["b", "a", "c"]);
        let labels = Labels::from(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(labels.to_list().unwrap(), &["x", "y"]);
    }

    #[test]
    fn to_list_captures_errors() {
        assert_eq!(
            Labels::from(Vec::<String>::new()).to_list().err(),
            Some("at least one label is required")
        );
        assert_eq!(Labels::from("").to_list().err(), Some("labels must be non-empty strings"));
        assert_eq!(
            Labels::from(["m1", ""]).to_list().err(),
            Some("labels must be non-empty strings")
        );
    }

    #[test]
    fn deserialize_works() {
        let one: Labels = serde_json::from_str("\"steel\"").unwrap();
        let many: Labels = serde_json::from_str("[\"m1\", \"m2\"]").unwrap();
        assert_eq!(one, Labels::from("steel"));
        assert_eq!(many, Labels::from(["m1", "m2"]));
    }
}
