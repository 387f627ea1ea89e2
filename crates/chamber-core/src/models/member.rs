use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::contains_ignore_case;

/// Placeholder shown for a member without a name
pub const DEFAULT_NAME: &str = "Member";

/// Label shown for a member without a membership level
pub const DEFAULT_LEVEL_LABEL: &str = "Member";

/// Shown for a missing phone number or address
pub const NOT_AVAILABLE: &str = "N/A";

/// Link target for a member without a website
pub const NO_WEBSITE: &str = "#";

/// A member object as it appears in the data file.
///
/// Every field is optional and loosely typed; `MemberRecord::from_raw`
/// resolves aliases and fallbacks into the canonical shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMember {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(rename = "membershipLevel", default)]
    pub membership_level: Option<Value>,
    #[serde(default)]
    pub level: Option<Value>,
    #[serde(default)]
    pub logo: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub phone: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub website: Option<Value>,
}

/// Read a field as display text.
/// Strings are trimmed and empty strings count as missing; numbers keep
/// their decimal form; anything else is missing.
fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolve an aliased field: the first candidate with usable text wins.
///
/// Alias order is fixed by the caller:
/// - membership level: `membershipLevel`, then `level`
/// - logo: `logo`, then `image`
pub fn resolve_alias<const N: usize>(candidates: [Option<Value>; N]) -> Option<String> {
    candidates.into_iter().find_map(field_text)
}

/// Spotlight tier derived from the free-form membership level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub enum MembershipTier {
    Gold,
    Silver,
    Other,
}

impl MembershipTier {
    /// Classify a level string by case-insensitive substring.
    /// "gold" is checked before "silver".
    pub fn from_level(level: Option<&str>) -> Self {
        match level {
            Some(l) if contains_ignore_case(l, "gold") => MembershipTier::Gold,
            Some(l) if contains_ignore_case(l, "silver") => MembershipTier::Silver,
            _ => MembershipTier::Other,
        }
    }

    pub fn is_spotlight_eligible(self) -> bool {
        !matches!(self, MembershipTier::Other)
    }

    pub fn as_class(self) -> &'static str {
        match self {
            MembershipTier::Gold => "gold",
            MembershipTier::Silver => "silver",
            MembershipTier::Other => "other",
        }
    }
}

/// One member business in canonical shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct MemberRecord {
    pub name: String,
    pub membership_level: Option<String>,
    pub logo: Option<String>,
    pub phone: String,
    pub address: String,
    pub website: String,
}

impl MemberRecord {
    pub fn from_raw(raw: RawMember) -> Self {
        Self {
            name: field_text(raw.name).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            membership_level: resolve_alias([raw.membership_level, raw.level]),
            logo: resolve_alias([raw.logo, raw.image]),
            phone: field_text(raw.phone).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            address: field_text(raw.address).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            website: field_text(raw.website).unwrap_or_else(|| NO_WEBSITE.to_string()),
        }
    }

    pub fn tier(&self) -> MembershipTier {
        MembershipTier::from_level(self.membership_level.as_deref())
    }

    pub fn is_spotlight_eligible(&self) -> bool {
        self.tier().is_spotlight_eligible()
    }

    pub fn level_label(&self) -> &str {
        self.membership_level.as_deref().unwrap_or(DEFAULT_LEVEL_LABEL)
    }

    pub fn has_website(&self) -> bool {
        self.website != NO_WEBSITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> MemberRecord {
        let raw: RawMember = serde_json::from_value(value).expect("raw member");
        MemberRecord::from_raw(raw)
    }

    #[test]
    fn test_from_raw_full() {
        let m = record(json!({
            "name": "Harbor Coffee",
            "membershipLevel": "Gold",
            "logo": "harbor.png",
            "phone": "555-0100",
            "address": "1 Dock St",
            "website": "https://harbor.example"
        }));
        assert_eq!(m.name, "Harbor Coffee");
        assert_eq!(m.membership_level.as_deref(), Some("Gold"));
        assert_eq!(m.logo.as_deref(), Some("harbor.png"));
        assert_eq!(m.phone, "555-0100");
        assert!(m.has_website());
    }

    #[test]
    fn test_from_raw_defaults() {
        let m = record(json!({}));
        assert_eq!(m.name, "Member");
        assert_eq!(m.membership_level, None);
        assert_eq!(m.logo, None);
        assert_eq!(m.phone, "N/A");
        assert_eq!(m.address, "N/A");
        assert_eq!(m.website, "#");
        assert!(!m.has_website());
        assert_eq!(m.level_label(), "Member");
    }

    #[test]
    fn test_alias_order() {
        let m = record(json!({"membershipLevel": "Silver", "level": "Bronze"}));
        assert_eq!(m.membership_level.as_deref(), Some("Silver"));

        let m = record(json!({"level": "Bronze"}));
        assert_eq!(m.membership_level.as_deref(), Some("Bronze"));

        let m = record(json!({"logo": "a.png", "image": "b.png"}));
        assert_eq!(m.logo.as_deref(), Some("a.png"));

        let m = record(json!({"image": "b.png"}));
        assert_eq!(m.logo.as_deref(), Some("b.png"));
    }

    #[test]
    fn test_empty_strings_fall_through_aliases() {
        let m = record(json!({
            "membershipLevel": "",
            "level": "Gold",
            "logo": "  ",
            "image": "x.png",
            "name": ""
        }));
        assert_eq!(m.membership_level.as_deref(), Some("Gold"));
        assert_eq!(m.logo.as_deref(), Some("x.png"));
        assert_eq!(m.name, "Member");
    }

    #[test]
    fn test_loose_types() {
        let m = record(json!({
            "name": "Acme",
            "membershipLevel": 3,
            "phone": null,
            "website": ["x"]
        }));
        assert_eq!(m.membership_level.as_deref(), Some("3"));
        assert_eq!(m.phone, "N/A");
        assert_eq!(m.website, "#");
    }

    #[test]
    fn test_tier_from_level() {
        assert_eq!(MembershipTier::from_level(Some("Gold")), MembershipTier::Gold);
        assert_eq!(MembershipTier::from_level(Some("silver plus")), MembershipTier::Silver);
        assert_eq!(MembershipTier::from_level(Some("ROSE GOLD")), MembershipTier::Gold);
        assert_eq!(MembershipTier::from_level(Some("Bronze")), MembershipTier::Other);
        assert_eq!(MembershipTier::from_level(Some("3")), MembershipTier::Other);
        assert_eq!(MembershipTier::from_level(None), MembershipTier::Other);
    }

    #[test]
    fn test_spotlight_eligibility() {
        assert!(record(json!({"membershipLevel": "Gold"})).is_spotlight_eligible());
        assert!(record(json!({"level": "Silver Plus"})).is_spotlight_eligible());
        assert!(!record(json!({"level": "Bronze"})).is_spotlight_eligible());
        assert!(!record(json!({"name": "No Level"})).is_spotlight_eligible());
    }
}
