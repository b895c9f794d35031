use crate::graphs::{edge::Edge, EdgeIndex, VertexIndex, Weight};

/// Tentative costs and predecessor edges of a single search.
///
/// Allocated per search and indexed by [`VertexIndex`]; nothing is shared
/// between searches.
pub struct DijkstraData {
    costs: Vec<Weight>,
    predecessors: Vec<Option<EdgeIndex>>,
}

impl DijkstraData {
    /// Every vertex starts unreached except `source`, which costs nothing.
    pub fn new(number_of_vertices: usize, source: VertexIndex) -> Self {
        let mut data = DijkstraData {
            costs: vec![Weight::INFINITY; number_of_vertices],
            predecessors: vec![None; number_of_vertices],
        };
        data.costs[source] = 0.0;
        data
    }

    pub fn get_cost(&self, vertex: VertexIndex) -> Weight {
        self.costs[vertex]
    }

    pub fn get_predecessor(&self, vertex: VertexIndex) -> Option<EdgeIndex> {
        self.predecessors[vertex]
    }

    /// Relaxes `vertex` if `cost` is strictly cheaper than what is known.
    /// Ties keep the predecessor that was found first.
    pub fn update(&mut self, vertex: VertexIndex, cost: Weight, predecessor: EdgeIndex) {
        if cost < self.costs[vertex] {
            self.costs[vertex] = cost;
            self.predecessors[vertex] = Some(predecessor);
        }
    }

    /// Traces predecessor edges back from `target` and returns them in
    /// source-to-target order.
    ///
    /// Returns `None` if the chain does not end in `source` within as many
    /// steps as there are vertices.
    pub fn get_path(
        &self,
        edges: &[Edge],
        source: VertexIndex,
        target: VertexIndex,
    ) -> Option<Vec<EdgeIndex>> {
        let mut path = Vec::new();

        let mut vertex = target;
        while let Some(edge) = self.get_predecessor(vertex) {
            if path.len() >= self.predecessors.len() {
                return None;
            }
            path.push(edge);
            vertex = edges[edge].tail();
        }

        if vertex != source {
            return None;
        }

        path.reverse();
        Some(path)
    }
}
