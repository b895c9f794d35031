use ahash::AHashMap;
use thiserror::Error;
use tracing::warn;

use self::{
    description::GraphDescription,
    edge::{Edge, EdgeRecord},
    identifier::Identifier,
    vertex::Vertex,
};

pub mod description;
pub mod edge;
pub mod identifier;
pub mod vertex;

pub type VertexIndex = usize;
pub type EdgeIndex = usize;
pub type Weight = f64;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("malformed graph description: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("edge {edge} references unknown source vertex {vertex}")]
    DanglingSource { edge: Identifier, vertex: Identifier },

    #[error("edge {edge} references unknown destination vertex {vertex}")]
    DanglingDestination { edge: Identifier, vertex: Identifier },
}

/// A directed, weighted graph built from a single request.
///
/// Vertices are stored densely and addressed by a [`VertexIndex`]; the
/// identifier of a vertex is only used for lookups and the search tie-break.
/// Edges keep the order in which they were described, which decides ties
/// between equally cheap predecessor edges during a search.
///
/// Weights are not validated. The search assumes they are non-negative and
/// yields undefined results otherwise.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    vertex_indices: AHashMap<Identifier, VertexIndex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph from a JSON value of the form
    /// `{"vertexes": [{id, name}], "edges": [{id, source, destination, weight}]}`.
    pub fn from_json(value: serde_json::Value) -> Result<Graph, GraphError> {
        let description: GraphDescription = serde_json::from_value(value)?;
        Graph::from_description(&description)
    }

    pub fn from_description(description: &GraphDescription) -> Result<Graph, GraphError> {
        let mut vertices = Vec::with_capacity(description.vertexes.len());
        let mut vertex_indices = AHashMap::with_capacity(description.vertexes.len());

        for vertex in description.vertexes.iter() {
            let vertex = Vertex::new(vertex.id.clone(), vertex.display_name());
            // duplicate ids collapse onto the first slot, last write wins
            match vertex_indices.get(vertex.id()).copied() {
                Some(index) => vertices[index] = vertex,
                None => {
                    vertex_indices.insert(vertex.id().clone(), vertices.len());
                    vertices.push(vertex);
                }
            }
        }

        let edges = description
            .edges
            .iter()
            .map(|edge| -> Result<Edge, GraphError> {
                let tail = *vertex_indices.get(&edge.source).ok_or_else(|| {
                    GraphError::DanglingSource {
                        edge: edge.id.clone(),
                        vertex: edge.source.clone(),
                    }
                })?;
                let head = *vertex_indices.get(&edge.destination).ok_or_else(|| {
                    GraphError::DanglingDestination {
                        edge: edge.id.clone(),
                        vertex: edge.destination.clone(),
                    }
                })?;
                Ok(Edge::new(edge.id.clone(), tail, head, edge.weight.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if edges.iter().any(|edge| edge.weight() < 0.0) {
            warn!("graph contains negative edge weights, shortest paths may be wrong");
        }

        Ok(Graph {
            vertices,
            vertex_indices,
            edges,
        })
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        &self.vertices[index]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn index_of(&self, id: &Identifier) -> Option<VertexIndex> {
        self.vertex_indices.get(id).copied()
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.vertex_indices.contains_key(id)
    }

    /// Renders an edge with the ids of its endpoints instead of their indices.
    pub fn edge_record(&self, edge: &Edge) -> EdgeRecord {
        EdgeRecord {
            id: edge.id().clone(),
            source: self.vertex(edge.tail()).id().clone(),
            destination: self.vertex(edge.head()).id().clone(),
            weight: edge.weight_number().clone(),
        }
    }
}
