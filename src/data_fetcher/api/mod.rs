pub mod http_client;
pub mod pagination;
pub mod urls;
mod core;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::*;
// Re-export the fetch engine
pub use pagination::{Page, Pages, decode_page};
// Re-export core API functions
pub use core::*;
