use std::sync::Arc;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace};
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{all_valid, split_into_words};
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::types::{compute_average_rating, DocId, Document, DocumentStatus};
use crate::index::inverted::{DocIds, InvertedIndex, WordFrequencies};
use crate::parallel::execution::ExecutionMode;
use crate::query::parser::{ParsedQuery, QueryParser};
use crate::scoring::scorer::{ParallelTfIdfScorer, Scorer, TfIdfScorer};
use crate::search::predicate::DocumentPredicate;
use crate::search::results::TopKCollector;

/// Words of the query found in a document (sorted), and the document's status.
pub type MatchResult<'a> = (Vec<&'a str>, DocumentStatus);

/// In-memory TF-IDF search engine over a mutable document collection.
///
/// Reads (`find_top_documents*`, `match_document*`) take `&self` and may run
/// from many threads at once. Mutations take `&mut self`, so the borrow
/// checker keeps them from overlapping with in-flight queries.
#[derive(Clone, Debug)]
pub struct SearchServer {
    config: Config,
    stop_words: StopWordFilter,
    index: InvertedIndex,
    pool: Arc<ThreadPool>,
}

impl SearchServer {
    /// Creates a server whose stop words are the space-separated words of `stop_words`.
    pub fn new(stop_words: &str) -> Result<Self> {
        SearchServer::with_config(StopWordFilter::from_text(stop_words)?, Config::default())
    }

    /// Creates a server from an explicit stop word collection.
    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SearchServer::with_config(StopWordFilter::new(stop_words)?, Config::default())
    }

    pub fn with_config(stop_words: StopWordFilter, config: Config) -> Result<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.worker_threads)
            .thread_name(|i| format!("rankdex-worker-{}", i))
            .build()?;

        Ok(SearchServer {
            config,
            stop_words,
            index: InvertedIndex::new(),
            pool: Arc::new(pool),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWordFilter {
        &self.stop_words
    }

    /// Read-only view of the underlying index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Adds a document. Fails with `InvalidArgument` for a negative or already
    /// used id, or for words with control characters; on failure nothing changes.
    pub fn add_document(
        &mut self,
        id: impl Into<DocId>,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        let id = id.into();
        if id.value() < 0 {
            return Err(Error::invalid_argument(format!("document id {} is negative", id)));
        }
        if self.index.contains(id) {
            return Err(Error::invalid_argument(format!("document {} already exists", id)));
        }

        let words = self.stop_words.filter(split_into_words(text));
        if !all_valid(words.iter().copied()) {
            return Err(Error::invalid_argument(format!(
                "document {} contains special characters",
                id
            )));
        }

        let rating = compute_average_rating(ratings);
        self.index.insert(id, status, rating, &words)?;
        debug!(document_id = id.value(), words = words.len(), rating, %status, "document added");
        Ok(())
    }

    /// Top documents with status `Actual`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by(raw_query, DocumentStatus::Actual)
    }

    /// Top documents accepted by `predicate`: a `DocumentStatus` or a closure
    /// over (id, status, rating).
    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        self.find_top_documents_with_mode(ExecutionMode::Sequential, raw_query, predicate)
    }

    pub fn find_top_documents_with_mode<P>(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let query = self.parse_query(raw_query)?;

        let scores = match mode {
            ExecutionMode::Sequential => TfIdfScorer.score(&self.index, &query),
            ExecutionMode::Parallel => {
                let scorer = ParallelTfIdfScorer::new(self.config.shard_count);
                self.pool.install(|| scorer.score(&self.index, &query))
            }
        };

        let mut collector = TopKCollector::new(
            self.config.max_result_document_count,
            self.config.relevance_epsilon,
        );
        for (id, relevance) in scores {
            let Some(data) = self.index.document(id) else {
                continue;
            };
            if predicate.matches(id, data.status, data.rating) {
                collector.collect(Document::new(id, relevance, data.rating));
            }
        }

        trace!(query = raw_query, ?mode, candidates = collector.total_collected(), "query evaluated");
        Ok(collector.get_results())
    }

    /// Plus words of the query present in document `id`, or nothing at all if
    /// any minus word is present. Fails with `NotFound` for an unknown id.
    pub fn match_document(&self, raw_query: &str, id: impl Into<DocId>) -> Result<MatchResult<'_>> {
        self.match_document_with_mode(ExecutionMode::Sequential, raw_query, id)
    }

    pub fn match_document_with_mode(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        id: impl Into<DocId>,
    ) -> Result<MatchResult<'_>> {
        let id = id.into();
        let data = self
            .index
            .document(id)
            .ok_or_else(|| Error::not_found(format!("document {} not found", id)))?;
        let status = data.status;
        let query = self.parse_query(raw_query)?;
        let words = &data.word_frequencies;

        let matched = match mode {
            ExecutionMode::Sequential => {
                if query.minus_words.iter().any(|&word| words.contains_key(word)) {
                    return Ok((Vec::new(), status));
                }
                query
                    .plus_words
                    .iter()
                    .filter_map(|&word| self.index.stored_word(id, word))
                    .collect()
            }
            ExecutionMode::Parallel => self.pool.install(|| {
                if query.minus_words.par_iter().any(|&word| words.contains_key(word)) {
                    return Vec::new();
                }
                let mut matched: Vec<&str> = query
                    .plus_words
                    .par_iter()
                    .filter_map(|&word| self.index.stored_word(id, word))
                    .collect();
                matched.par_sort_unstable();
                matched.dedup();
                matched
            }),
        };

        Ok((matched, status))
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Live document ids in ascending order.
    pub fn ids(&self) -> DocIds<'_> {
        self.index.ids()
    }

    /// Term frequencies of a document; empty for an unknown id.
    pub fn word_frequencies(&self, id: impl Into<DocId>) -> &WordFrequencies {
        self.index.word_frequencies(id.into())
    }

    /// Removes a document. Unknown ids are ignored.
    pub fn remove_document(&mut self, id: impl Into<DocId>) {
        self.remove_document_with_mode(ExecutionMode::Sequential, id)
    }

    pub fn remove_document_with_mode(&mut self, mode: ExecutionMode, id: impl Into<DocId>) {
        let id = id.into();
        let removed = match mode {
            ExecutionMode::Sequential => self.index.remove(id),
            ExecutionMode::Parallel => {
                let index = &mut self.index;
                self.pool.install(|| index.remove_parallel(id))
            }
        };
        if removed {
            debug!(document_id = id.value(), ?mode, "document removed");
        }
    }

    fn parse_query<'q>(&self, raw_query: &'q str) -> Result<ParsedQuery<'q>> {
        QueryParser::new(&self.stop_words).parse(raw_query)
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocId;
    type IntoIter = DocIds<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids()
    }
}
