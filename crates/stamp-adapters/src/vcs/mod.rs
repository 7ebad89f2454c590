//! Version-control adapters.

mod git_cli;
mod memory;

pub use git_cli::GitCliReader;
pub use memory::MemoryVcs;
