use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the user an item belongs to
///
/// UserId is a thin wrapper around `i64` so that user identifiers are not
/// mixed up with row ids or other integers. It serializes as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a UserId from a raw integer
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_conversions() {
        let id = UserId::from(42);
        assert_eq!(id.get(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(-7)).unwrap();
        assert_eq!(json, "-7");
    }
}
