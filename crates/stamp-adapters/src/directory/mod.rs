//! Organization directory adapters.

mod github;
mod memory;
mod offline;

pub use github::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT, GitHubDirectory};
pub use memory::StaticDirectory;
pub use offline::OfflineDirectory;
