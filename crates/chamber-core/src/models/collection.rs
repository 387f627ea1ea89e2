use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::member::{MemberRecord, RawMember};

/// Object keys that may hold the member array, in priority order.
pub const WRAPPER_KEYS: [&str; 2] = ["members", "companies"];

/// Top-level layout the member array was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentShape {
    /// The document itself is the member array.
    BareArray,
    /// An object holding the array under `key`.
    Wrapped { key: String },
    /// Valid JSON with no member array in a known place.
    Unrecognized,
}

impl fmt::Display for DocumentShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentShape::BareArray => write!(f, "array"),
            DocumentShape::Wrapped { key } => write!(f, "object.{}", key),
            DocumentShape::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Ordered member records from one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCollection {
    members: Vec<MemberRecord>,
    shape: DocumentShape,
}

impl MemberCollection {
    pub fn new(members: Vec<MemberRecord>, shape: DocumentShape) -> Self {
        Self { members, shape }
    }

    /// Empty collection for a document with no recognizable member array
    pub fn unrecognized() -> Self {
        Self::new(Vec::new(), DocumentShape::Unrecognized)
    }

    /// Parse a JSON body. Only a syntax error is an error; see `from_document`.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_slice(body)?;
        Ok(Self::from_document(&document))
    }

    pub fn from_json_str(body: &str) -> Result<Self, serde_json::Error> {
        Self::from_json_slice(body.as_bytes())
    }

    /// Normalize a parsed document.
    ///
    /// Tries a bare array first, then each of `WRAPPER_KEYS` in order. A
    /// wrapper key whose value is not an array does not match. Anything
    /// else yields an empty, `Unrecognized` collection.
    pub fn from_document(document: &Value) -> Self {
        let Some((shape, items)) = locate_members(document) else {
            warn!(
                kind = json_kind(document),
                "Member data has no array at the top level or under a known key"
            );
            return Self::unrecognized();
        };

        let members = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                if !item.is_object() {
                    warn!(index, kind = json_kind(item), "Skipping non-object member entry");
                    return None;
                }
                match RawMember::deserialize(item) {
                    Ok(raw) => Some(MemberRecord::from_raw(raw)),
                    Err(e) => {
                        warn!(index, error = %e, "Skipping unreadable member entry");
                        None
                    }
                }
            })
            .collect();

        Self { members, shape }
    }

    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberRecord> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn shape(&self) -> &DocumentShape {
        &self.shape
    }

    pub fn is_unrecognized(&self) -> bool {
        self.shape == DocumentShape::Unrecognized
    }
}

impl<'a> IntoIterator for &'a MemberCollection {
    type Item = &'a MemberRecord;
    type IntoIter = std::slice::Iter<'a, MemberRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

fn locate_members(document: &Value) -> Option<(DocumentShape, &Vec<Value>)> {
    if let Value::Array(items) = document {
        return Some((DocumentShape::BareArray, items));
    }

    let object = document.as_object()?;
    WRAPPER_KEYS.iter().find_map(|key| {
        object.get(*key).and_then(Value::as_array).map(|items| {
            (
                DocumentShape::Wrapped {
                    key: (*key).to_string(),
                },
                items,
            )
        })
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = r#"[
        {"name": "A", "membershipLevel": "Gold"},
        {"name": "B", "level": "Bronze"},
        {"name": "C", "membershipLevel": "Silver Plus"}
    ]"#;

    fn names(collection: &MemberCollection) -> Vec<&str> {
        collection.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_bare_array_preserves_order() {
        let c = MemberCollection::from_json_str(BARE).unwrap();
        assert_eq!(c.shape(), &DocumentShape::BareArray);
        assert_eq!(names(&c), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_wrapped_members_matches_bare() {
        let bare = MemberCollection::from_json_str(BARE).unwrap();
        let wrapped =
            MemberCollection::from_json_str(&format!(r#"{{"members": {}}}"#, BARE)).unwrap();
        assert_eq!(wrapped.members(), bare.members());
        assert_eq!(wrapped.shape().to_string(), "object.members");
    }

    #[test]
    fn test_wrapped_companies_matches_bare() {
        let bare = MemberCollection::from_json_str(BARE).unwrap();
        let wrapped =
            MemberCollection::from_json_str(&format!(r#"{{"companies": {}}}"#, BARE)).unwrap();
        assert_eq!(wrapped.members(), bare.members());
    }

    #[test]
    fn test_members_key_has_priority() {
        let json = r#"{"companies": [{"name": "X"}], "members": [{"name": "Y"}]}"#;
        let c = MemberCollection::from_json_str(json).unwrap();
        assert_eq!(names(&c), vec!["Y"]);
    }

    #[test]
    fn test_non_array_wrapper_falls_through() {
        let json = r#"{"members": "none", "companies": [{"name": "Z"}]}"#;
        let c = MemberCollection::from_json_str(json).unwrap();
        assert_eq!(c.shape(), &DocumentShape::Wrapped { key: "companies".to_string() });
        assert_eq!(names(&c), vec!["Z"]);
    }

    #[test]
    fn test_unrecognized_shapes_are_empty() {
        for json in [r#"{"businesses": []}"#, r#"{}"#, "42", r#""members""#, "null"] {
            let c = MemberCollection::from_json_str(json).unwrap();
            assert!(c.is_empty(), "{json}");
            assert!(c.is_unrecognized(), "{json}");
        }
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(MemberCollection::from_json_str("[{\"name\": ").is_err());
        assert!(MemberCollection::from_json_str("").is_err());
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let c = MemberCollection::from_json_str(r#"[{"name": "A"}, 7, null, {"name": "B"}]"#)
            .unwrap();
        assert_eq!(names(&c), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_array_is_recognized() {
        let c = MemberCollection::from_json_str("[]").unwrap();
        assert!(c.is_empty());
        assert!(!c.is_unrecognized());
    }
}
