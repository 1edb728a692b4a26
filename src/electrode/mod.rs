// electrode/mod.rs
// Static cell chemistry tables: plate materials and electrolytes
//
// Both tables are immutable. Lookups by display name go through a
// lazily built index and fail with a typed error for unknown keys.

pub mod catalog;
pub mod electrolyte;
pub mod material;

pub use electrolyte::*;
pub use material::*;
