//! Cost Explorer billing queries

pub mod client;

// Re-export main types for convenience
pub use client::CostExplorerClient;
