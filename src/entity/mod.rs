//! SeaORM entity definitions
//!
//! One table per record type, keyed by entity id. Replaces the original
//! key-prefix scans over browser storage with indexed lookups.

pub mod subscription;
pub mod transaction;
pub mod user;
pub mod video;
