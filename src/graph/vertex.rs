use std::fmt;

/// A named point in the graph, identified by a dense integer ID.
///
/// Identity is the ID alone; two vertices with the same ID compare equal
/// regardless of their names.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: usize,
    pub name: String,
}

impl Vertex {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Vertex {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_id() {
        assert_eq!(Vertex::new(1, "Hanoi"), Vertex::new(1, "Hue"));
        assert_ne!(Vertex::new(1, "Hanoi"), Vertex::new(2, "Hanoi"));
    }

    #[test]
    fn display_format() {
        assert_eq!(Vertex::new(3, "Da Nang").to_string(), "Da Nang (ID: 3)");
    }
}
