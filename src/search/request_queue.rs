use std::collections::VecDeque;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use crate::core::error::Result;
use crate::core::search_server::SearchServer;
use crate::core::types::Document;
use crate::search::predicate::DocumentPredicate;

/// One request per minute for a day.
pub const MINUTES_IN_DAY: usize = 1440;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueryResult {
    pub is_empty: bool,
    pub recorded_at: DateTime<Utc>,
}

/// Wraps `find_top_documents*` and remembers whether each of the most recent
/// requests came back empty. Failed requests are not recorded.
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryResult>,
    capacity: usize,
    empty_count: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        RequestQueue::with_capacity(server, MINUTES_IN_DAY)
    }

    pub fn with_capacity(server: &'a SearchServer, capacity: usize) -> Self {
        RequestQueue {
            server,
            requests: VecDeque::with_capacity(capacity),
            capacity,
            empty_count: 0,
        }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let result = self.server.find_top_documents(raw_query)?;
        self.push_request(&result);
        Ok(result)
    }

    pub fn add_find_request_by<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let result = self.server.find_top_documents_by(raw_query, predicate)?;
        self.push_request(&result);
        Ok(result)
    }

    /// Empty results among the retained requests.
    pub fn no_result_requests(&self) -> usize {
        self.empty_count
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last_request_at(&self) -> Option<DateTime<Utc>> {
        self.requests.back().map(|request| request.recorded_at)
    }

    fn push_request(&mut self, response: &[Document]) {
        let record = QueryResult {
            is_empty: response.is_empty(),
            recorded_at: Utc::now(),
        };
        if record.is_empty {
            self.empty_count += 1;
        }
        self.requests.push_back(record);

        while self.requests.len() > self.capacity {
            if let Some(evicted) = self.requests.pop_front() {
                if evicted.is_empty {
                    self.empty_count -= 1;
                }
            }
        }
    }
}
