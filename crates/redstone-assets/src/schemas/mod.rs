//! Serde schemas for the JSON files inside an asset pack.

pub mod blockstates;
pub mod models;

pub use blockstates::BlockStates;
pub use models::Model;
