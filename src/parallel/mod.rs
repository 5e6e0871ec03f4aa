pub mod concurrent_map;
pub mod execution;
pub mod process_queries;
