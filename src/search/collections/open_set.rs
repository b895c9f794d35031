use crate::graphs::VertexIndex;

/// Marks which vertices are not finalized yet. All vertices start open.
pub struct OpenSet {
    open: Vec<bool>,
}

impl OpenSet {
    pub fn new(number_of_vertices: usize) -> Self {
        OpenSet {
            open: vec![true; number_of_vertices],
        }
    }

    pub fn close(&mut self, vertex: VertexIndex) {
        self.open[vertex] = false;
    }

    pub fn is_open(&self, vertex: VertexIndex) -> bool {
        self.open[vertex]
    }

    pub fn iter_open(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.open
            .iter()
            .enumerate()
            .filter_map(|(vertex, &open)| open.then_some(vertex))
    }
}
