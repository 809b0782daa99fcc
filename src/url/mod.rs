//! Document identity for crawled URLs
//!
//! Every identifier that enters the discovery graph (seed, destination and
//! each extracted link) goes through this module so that equal documents get
//! equal ids.

mod identifier;

pub use identifier::{canonical_id, parse_identifier};
