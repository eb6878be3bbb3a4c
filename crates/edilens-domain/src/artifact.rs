//! Artifact handles for stored transaction payloads

use std::fmt;

/// Unique identifier for a stored transaction artifact, based on UUIDv7.
///
/// UUIDv7 provides:
/// - Chronological sortability, so handles order by upload time
/// - 128-bit uniqueness with no coordination between callers
/// - RFC 9562-standard format with broad ecosystem support
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactId(u128);

impl ArtifactId {
    /// Generate a new UUIDv7-based ArtifactId.
    ///
    /// # Examples
    ///
    /// ```
    /// use edilens_domain::ArtifactId;
    ///
    /// let id = ArtifactId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an ArtifactId from a raw u128 value.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an ArtifactId from its UUID string form.
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid artifact id: {}", e))
    }

    /// Get the raw u128 value.
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ArtifactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ArtifactId::new();
        let b = ArtifactId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_string_round_trip() {
        let id = ArtifactId::new();
        let parsed = ArtifactId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_invalid_string_rejected() {
        assert!(ArtifactId::from_string("not-a-uuid").is_err());
    }
}
