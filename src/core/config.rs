use crate::core::error::{Error, Result};

/// Number of documents returned by a top-documents query.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this are considered equal when ranking.
pub const EPSILON: f64 = 1e-6;

/// Shards in the score accumulator used by parallel queries.
pub const DEFAULT_SHARD_COUNT: usize = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub max_result_document_count: usize,
    pub relevance_epsilon: f64,

    pub shard_count: usize,          // ConcurrentMap buckets for parallel scoring
    pub worker_threads: usize,       // size of the engine-owned rayon pool
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_result_document_count: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: EPSILON,
            shard_count: DEFAULT_SHARD_COUNT,
            worker_threads: num_cpus::get(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.max_result_document_count == 0 {
            return Err(Error::invalid_argument("max_result_document_count must be positive"));
        }
        if self.shard_count == 0 {
            return Err(Error::invalid_argument("shard_count must be positive"));
        }
        if self.worker_threads == 0 {
            return Err(Error::invalid_argument("worker_threads must be positive"));
        }
        if !self.relevance_epsilon.is_finite() || self.relevance_epsilon < 0.0 {
            return Err(Error::invalid_argument("relevance_epsilon must be a non-negative number"));
        }
        Ok(())
    }
}
