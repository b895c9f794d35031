use serde::Deserialize;
use serde_json::{Number, Value};

use super::identifier::Identifier;

/// Wire description of a graph as it arrives in a request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphDescription {
    #[serde(default, alias = "vertices")]
    pub vertexes: Vec<VertexDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

/// The name is required but may be any JSON value.
#[derive(Clone, Debug, Deserialize)]
pub struct VertexDescription {
    pub id: Identifier,
    pub name: Value,
}

impl VertexDescription {
    /// Strings are taken as they are, anything else in its JSON form.
    pub fn display_name(&self) -> String {
        match &self.name {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct EdgeDescription {
    pub id: Identifier,
    pub source: Identifier,
    pub destination: Identifier,
    pub weight: Number,
}
