// src/extractors/mod.rs
pub mod body;
pub mod created;
pub mod markers;

// Re-export key extraction types for convenience
pub use body::extract_body;
pub use created::extract_created;
pub use markers::FieldMarkers;
