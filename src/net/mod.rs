//! Network boundary: auth DTOs and REST helpers.

pub mod api;
pub mod types;
