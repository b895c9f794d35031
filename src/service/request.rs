use serde_json::{Map, Value};
use tracing::debug;

use super::{Field, RequestError};
use crate::graphs::{identifier::Identifier, Graph};

/// A validated request: the graph is built and both endpoints are vertices
/// of it.
#[derive(Debug)]
pub struct PathRequest {
    pub graph: Graph,
    pub source: Identifier,
    pub destination: Identifier,
}

impl PathRequest {
    pub fn from_body(body: &[u8]) -> Result<PathRequest, RequestError> {
        let content: Value = serde_json::from_slice(body).map_err(|err| {
            debug!("unparsable body: {}", err);
            RequestError::PoorlyFormatted
        })?;
        let Value::Object(mut content) = content else {
            return Err(RequestError::PoorlyFormatted);
        };

        let graph = take_field(&mut content, Field::Graph)?;
        let source = take_field(&mut content, Field::Source)?;
        let destination = take_field(&mut content, Field::Destination)?;

        let graph = Graph::from_json(graph).map_err(|err| {
            debug!("rejected graph: {}", err);
            RequestError::Graph(err)
        })?;

        let source = resolve(&graph, source, Field::Source)?;
        let destination = resolve(&graph, destination, Field::Destination)?;

        Ok(PathRequest {
            graph,
            source,
            destination,
        })
    }
}

fn take_field(content: &mut Map<String, Value>, field: Field) -> Result<Value, RequestError> {
    content
        .remove(field.name())
        .ok_or(RequestError::MissingField(field))
}

/// Values that are not ids at all are reported like unknown ids.
fn resolve(graph: &Graph, value: Value, field: Field) -> Result<Identifier, RequestError> {
    serde_json::from_value::<Identifier>(value)
        .ok()
        .filter(|id| graph.contains(id))
        .ok_or(RequestError::NotInGraph(field))
}
