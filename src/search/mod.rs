use thiserror::Error;

use crate::graphs::identifier::Identifier;

pub mod collections;
pub mod dijkstra;
pub mod path;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(Identifier),

    #[error("predecessor chain of {destination} does not lead back to {origin}")]
    BrokenPredecessorChain {
        origin: Identifier,
        destination: Identifier,
    },
}
