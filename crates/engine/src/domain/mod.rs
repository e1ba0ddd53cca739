pub mod error;
pub mod registry;
pub mod types;
pub mod verdict;
