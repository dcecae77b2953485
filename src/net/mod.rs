//! Network layer: wire types and REST calls against the ticket backend.

pub mod api;
pub mod types;
