//! Domain identifiers.
//!
//! The document store owns the identifier format (ObjectId hex strings in the
//! deployed system), so `InstructorId` only wraps the stored string.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstructorId(String);

impl InstructorId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InstructorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for InstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let id = InstructorId::new("65f1c0ffee0000000000abcd");
        let s = serde_json::to_string(&id).unwrap();
        assert_eq!(s, r#""65f1c0ffee0000000000abcd""#);

        let back: InstructorId = serde_json::from_str(&s).unwrap();
        assert_eq!(back, id);
    }
}
