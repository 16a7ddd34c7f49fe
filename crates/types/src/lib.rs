//! Small validated value types shared across the Scamwatch crates.
//!
//! Two identifiers cross every crate boundary:
//! - [`EntityId`]: the opaque identifier the CMS assigns to a catalog item.
//! - [`CollectionName`]: the CMS collection a catalog is read from.
//!
//! Both are checked once at construction so downstream code can treat them as plain strings.

/// Errors that can occur when creating validated identifier types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,

    /// A collection name contained a character outside `[a-z0-9_-]`
    #[error("invalid collection name {0:?}: only lowercase letters, digits, '_' and '-' are allowed")]
    InvalidCollectionName(String),
}

/// Opaque identifier of a catalog item, as assigned by the content repository.
///
/// The value is never interpreted or normalised: it is kept exactly as the repository sent
/// it, so lookups compare raw values. Blank identifiers are rejected, since a blank `_id`
/// cannot be routed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    /// Creates a new `EntityId` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] if the input is empty or only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let raw = input.as_ref();
        if raw.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl serde::Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EntityId::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Name of a CMS collection (for example `scamtypes`).
///
/// Collection names end up in request paths and fixture file names, so they are restricted
/// to lowercase ASCII letters, digits, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionName(String);

impl CollectionName {
    /// Creates a new `CollectionName`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] for blank input, or
    /// [`TextError::InvalidCollectionName`] if any character is outside the allowed set.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-';
        if !trimmed.chars().all(allowed) {
            return Err(TextError::InvalidCollectionName(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CollectionName {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_keeps_raw_value_and_rejects_blank() {
        let id = EntityId::new(" abc-123 ").unwrap();
        assert_eq!(id.as_str(), " abc-123 ");
        assert_ne!(id, EntityId::new("abc-123").unwrap());
        assert_eq!(EntityId::new("   "), Err(TextError::Empty));
    }

    #[test]
    fn entity_id_deserialize_rejects_blank() {
        let ok: EntityId = serde_json::from_str("\"7f3e\"").unwrap();
        assert_eq!(ok.as_str(), "7f3e");
        assert!(serde_json::from_str::<EntityId>("\"\"").is_err());
    }

    #[test]
    fn collection_name_accepts_cms_style_names() {
        assert_eq!(
            CollectionName::new("deceptivetactics").unwrap().as_str(),
            "deceptivetactics"
        );
        assert!("scam-types_v2".parse::<CollectionName>().is_ok());
    }

    #[test]
    fn collection_name_rejects_path_characters() {
        let err = CollectionName::new("../etc").unwrap_err();
        assert!(matches!(err, TextError::InvalidCollectionName(_)));
        assert!(CollectionName::new("ScamTypes").is_err());
        assert_eq!(CollectionName::new(""), Err(TextError::Empty));
    }
}
