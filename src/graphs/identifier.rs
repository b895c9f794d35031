use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque id of a vertex or an edge, either a JSON integer or a JSON string.
///
/// `1` and `"1"` are different ids. Only integers above `i64::MAX` land in
/// `Unsigned`, so the derived order puts integers in numeric order before
/// every string. The search uses it to break ties between equally distant
/// vertices.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Integer(i64),
    Unsigned(u64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Integer(id) => write!(f, "{}", id),
            Identifier::Unsigned(id) => write!(f, "{}", id),
            Identifier::Text(id) => write!(f, "{:?}", id),
        }
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Integer(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Identifier::Text(id.to_string())
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Identifier::Text(id)
    }
}
