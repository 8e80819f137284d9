/// The user's profile record: free-text farm details.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display name, location and primary crops. All fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub location: String,
    pub crops: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        crops: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            crops: crops.into(),
        }
    }

    /// Parse a stored profile leniently.
    ///
    /// Each field falls back to `""` on its own when missing or not a string.
    /// A value that is not a JSON object at all yields the empty profile.
    pub fn from_json_lenient(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(_) => return Self::default(),
        };
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        Self {
            name: field("name"),
            location: field("location"),
            crops: field("crops"),
        }
    }

    /// Set all three fields to the empty string.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.location.is_empty() && self.crops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_full_record() {
        let p = Profile::from_json_lenient(r#"{"name":"Maria","location":"Lima","crops":"Corn"}"#);
        assert_eq!(p, Profile::new("Maria", "Lima", "Corn"));
    }

    #[test]
    fn test_lenient_missing_and_wrong_typed_fields() {
        let p = Profile::from_json_lenient(r#"{"name":"Maria","crops":42}"#);
        assert_eq!(p, Profile::new("Maria", "", ""));
    }

    #[test]
    fn test_lenient_garbage() {
        assert_eq!(Profile::from_json_lenient("not json"), Profile::default());
        assert_eq!(Profile::from_json_lenient("[1,2]"), Profile::default());
        assert_eq!(Profile::from_json_lenient("null"), Profile::default());
    }

    #[test]
    fn test_reset() {
        let mut p = Profile::new("a", "b", "c");
        p.reset();
        assert!(p.is_empty());
    }
}
