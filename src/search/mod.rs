pub mod results;
pub mod predicate;
pub mod request_queue;
pub mod paginator;
pub mod duplicates;
