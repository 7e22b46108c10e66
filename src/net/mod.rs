//! Network layer: wire types for the `/search` contract and the HTTP
//! client that speaks it.

pub mod api;
pub mod types;
