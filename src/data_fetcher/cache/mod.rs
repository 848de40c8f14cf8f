pub mod team_cache;

// Re-export team cache types
pub use team_cache::*;
