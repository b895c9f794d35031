use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{identifier::Identifier, VertexIndex, Weight};

/// A directed, weighted edge between two vertices of the same graph.
///
/// Endpoints are stored as indices into the owning graph. Two edges are equal
/// iff their ids are, parallel edges with distinct ids stay distinct.
#[derive(Clone, Debug)]
pub struct Edge {
    id: Identifier,
    tail: VertexIndex,
    head: VertexIndex,
    weight: Weight,
    weight_number: Number,
}

impl Edge {
    /// Keeps `weight` as given for output next to the float the search uses.
    pub fn new(id: Identifier, tail: VertexIndex, head: VertexIndex, weight: Number) -> Edge {
        Edge {
            id,
            tail,
            head,
            weight: weight.as_f64().unwrap_or(Weight::NAN),
            weight_number: weight,
        }
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn tail(&self) -> VertexIndex {
        self.tail
    }

    pub fn head(&self) -> VertexIndex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn weight_number(&self) -> &Number {
        &self.weight_number
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

/// Serialized form of an edge, endpoints given by vertex id and the weight
/// exactly as it was described.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: Identifier,
    pub source: Identifier,
    pub destination: Identifier,
    pub weight: Number,
}
