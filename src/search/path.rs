use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::graphs::{edge::EdgeRecord, identifier::Identifier, Weight};

/// Result of a single shortest path query.
///
/// `path` is empty and `cost` is `None` if the destination is unreachable.
/// A query from a vertex to itself has an empty path and a cost of zero.
/// The cost is an integer whenever every weight on the path is one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub source: Identifier,
    pub destination: Identifier,
    pub has_path: bool,
    pub path: Vec<EdgeRecord>,
    pub cost: Option<Number>,
}

impl ShortestPath {
    /// `cost` is the tentative cost the search ended with, it is only used
    /// when the weights on `path` are not all integers.
    pub fn found(
        source: Identifier,
        destination: Identifier,
        path: Vec<EdgeRecord>,
        cost: Weight,
    ) -> ShortestPath {
        let cost = path
            .iter()
            .try_fold(0i64, |sum, edge| {
                edge.weight.as_i64().and_then(|weight| sum.checked_add(weight))
            })
            .map(Number::from)
            .or_else(|| Number::from_f64(cost));

        ShortestPath {
            source,
            destination,
            has_path: true,
            path,
            cost,
        }
    }

    pub fn not_found(source: Identifier, destination: Identifier) -> ShortestPath {
        ShortestPath {
            source,
            destination,
            has_path: false,
            path: Vec::new(),
            cost: None,
        }
    }

    /// Checks that the edges form a chain from `source` to `destination`.
    pub fn is_contiguous(&self) -> bool {
        let (Some(first), Some(last)) = (self.path.first(), self.path.last()) else {
            return !self.has_path || self.source == self.destination;
        };

        first.source == self.source
            && last.destination == self.destination
            && self
                .path
                .iter()
                .tuple_windows()
                .all(|(previous, next)| previous.destination == next.source)
    }

    pub fn cost_value(&self) -> Option<Weight> {
        self.cost.as_ref().and_then(Number::as_f64)
    }

    /// Sum of the weights along `path`.
    pub fn path_cost(&self) -> Weight {
        self.path.iter().filter_map(|edge| edge.weight.as_f64()).sum()
    }
}
