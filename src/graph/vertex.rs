use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Edge weight type. Weights are non-negative by construction.
pub type Weight = u64;

/// A discovered document
///
/// Equality and hashing look at `id` only. The label is display
/// text taken from the first link that pointed at the document.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Canonical identifier (an absolute URL without fragment)
    pub id: String,

    /// Display text
    pub label: String,
}

impl Vertex {
    /// Creates a new vertex
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Creates a vertex whose label is its id
    pub fn unlabeled(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

// Must hash exactly like `str` so `Borrow<str>` lookups stay consistent.
impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.as_str().hash(state);
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

/// A directed, weighted link between two vertices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Source vertex
    pub from: Vertex,

    /// Destination vertex
    pub to: Vertex,

    /// Traversal cost
    pub weight: Weight,
}
