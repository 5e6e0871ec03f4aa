use rayon::prelude::*;
use crate::core::error::Result;
use crate::core::search_server::SearchServer;
use crate::core::types::Document;

/// Runs `find_top_documents` for every query in parallel on the global rayon
/// pool. Output order follows input order; the first failing query fails the batch.
pub fn process_queries<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Vec<Document>>>
where
    S: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| server.find_top_documents(query.as_ref()))
        .collect()
}

/// Same as `process_queries`, flattened into one list in query order.
pub fn process_queries_joined<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(server, queries)?
        .into_iter()
        .flatten()
        .collect())
}
