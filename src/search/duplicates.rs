use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tracing::info;
use crate::core::search_server::SearchServer;
use crate::core::types::DocId;

/// Removes documents whose set of indexed words equals that of a document with
/// a lower id. Word frequencies and stop words play no part. Returns the removed
/// ids in ascending order.
pub fn remove_duplicates(server: &mut SearchServer) -> Vec<DocId> {
    let duplicates = find_duplicates(server);
    for &id in &duplicates {
        info!(document_id = id.value(), "Found duplicate document id {}", id);
        server.remove_document(id);
    }
    duplicates
}

/// Ids that `remove_duplicates` would remove, without touching the server.
pub fn find_duplicates(server: &SearchServer) -> Vec<DocId> {
    let mut seen: HashSet<BTreeSet<Arc<str>>> = HashSet::new();
    let mut duplicates = Vec::new();

    for id in server {
        let words: BTreeSet<Arc<str>> = server.word_frequencies(id).keys().cloned().collect();
        if !seen.insert(words) {
            duplicates.push(id);
        }
    }
    duplicates
}
