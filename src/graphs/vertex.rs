use super::identifier::Identifier;

/// A named point of a graph. Two vertices are equal iff their ids are.
#[derive(Clone, Debug)]
pub struct Vertex {
    id: Identifier,
    name: String,
}

impl Vertex {
    pub fn new(id: Identifier, name: String) -> Vertex {
        Vertex { id, name }
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}
