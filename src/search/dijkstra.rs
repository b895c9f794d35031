use tracing::debug;

use super::{
    collections::{dijkstra_data::DijkstraData, open_set::OpenSet},
    path::ShortestPath,
    SearchError,
};
use crate::graphs::{identifier::Identifier, Graph, VertexIndex};

/// Computes the cheapest path from `source` to `destination` in `graph`.
///
/// Both ids are expected to be vertices of `graph`; unknown ids are reported
/// as [`SearchError::UnknownVertex`].
pub fn find_path(
    graph: &Graph,
    source: &Identifier,
    destination: &Identifier,
) -> Result<ShortestPath, SearchError> {
    Dijkstra::new(graph).shortest_path(source, destination)
}

/// Label-setting search over an explicit open set.
///
/// Every step closes the frontier vertex with the smallest tentative cost,
/// ties going to the vertex with the lowest [`Identifier`], and relaxes all
/// edges leaving it in the order the graph stores them. The frontier is
/// rebuilt from the open set after each step, so a query costs
/// `O(V * (V + E))`. Edge weights must be non-negative for the result to be
/// optimal.
#[derive(Clone)]
pub struct Dijkstra<'a> {
    graph: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }

    pub fn shortest_path(
        &self,
        source: &Identifier,
        destination: &Identifier,
    ) -> Result<ShortestPath, SearchError> {
        let source_index = self
            .graph
            .index_of(source)
            .ok_or_else(|| SearchError::UnknownVertex(source.clone()))?;
        let destination_index = self
            .graph
            .index_of(destination)
            .ok_or_else(|| SearchError::UnknownVertex(destination.clone()))?;

        let Some(data) = self.get_data(source_index, destination_index) else {
            debug!(%source, %destination, "no path");
            return Ok(ShortestPath::not_found(source.clone(), destination.clone()));
        };

        let edges = self.graph.edges();
        let path = data
            .get_path(edges, source_index, destination_index)
            .ok_or_else(|| SearchError::BrokenPredecessorChain {
                origin: source.clone(),
                destination: destination.clone(),
            })?;

        Ok(ShortestPath::found(
            source.clone(),
            destination.clone(),
            path.into_iter()
                .map(|edge| self.graph.edge_record(&edges[edge]))
                .collect(),
            data.get_cost(destination_index),
        ))
    }

    /// Runs the search until `destination` is closed.
    ///
    /// Returns `None` if the frontier runs dry before that.
    pub fn get_data(
        &self,
        source: VertexIndex,
        destination: VertexIndex,
    ) -> Option<DijkstraData> {
        let number_of_vertices = self.graph.number_of_vertices();
        let mut data = DijkstraData::new(number_of_vertices, source);
        let mut open = OpenSet::new(number_of_vertices);

        let mut frontier = vec![source];
        while let Some(vertex) = self.cheapest(&frontier, &data) {
            open.close(vertex);
            debug!(vertex = %self.graph.vertex(vertex).id(), cost = data.get_cost(vertex), "closed");

            if vertex == destination {
                return Some(data);
            }

            let cost = data.get_cost(vertex);
            self.graph
                .edges()
                .iter()
                .enumerate()
                .filter(|(_, edge)| edge.tail() == vertex)
                .for_each(|(index, edge)| {
                    if open.is_open(edge.head()) {
                        data.update(edge.head(), cost + edge.weight(), index);
                    }
                });

            frontier = open
                .iter_open()
                .filter(|&vertex| data.get_predecessor(vertex).is_some())
                .collect();
        }

        None
    }

    fn cheapest(&self, frontier: &[VertexIndex], data: &DijkstraData) -> Option<VertexIndex> {
        frontier.iter().copied().min_by(|&a, &b| {
            data.get_cost(a)
                .total_cmp(&data.get_cost(b))
                .then_with(|| self.graph.vertex(a).id().cmp(self.graph.vertex(b).id()))
        })
    }
}
