//! Discovery graph data model
//!
//! This module contains the types the crawler builds while it expands the
//! frontier:
//! - `Vertex`: a discovered document, identified solely by its canonical id
//! - `Edge`: a weighted link between two vertices
//! - `Graph`: the adjacency store read by the shortest path engine

mod store;
mod vertex;

pub use store::Graph;
pub use vertex::{Edge, Vertex, Weight};
