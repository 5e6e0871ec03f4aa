use std::collections::BTreeMap;
use rayon::prelude::*;
use crate::core::config::DEFAULT_SHARD_COUNT;
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;
use crate::parallel::concurrent_map::ConcurrentMap;
use crate::query::parser::ParsedQuery;

/// Scorer trait
pub trait Scorer: Send + Sync {
    /// Relevance per candidate document. Documents holding any minus word are
    /// absent from the result.
    fn score(&self, index: &InvertedIndex, query: &ParsedQuery<'_>) -> BTreeMap<DocId, f64>;

    fn name(&self) -> &str;
}

/// TF-IDF Scorer
///
/// relevance(doc) = sum over plus words w in doc of idf(w) * tf(w, doc),
/// idf(w) = ln(N / df(w)).
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl Scorer for TfIdfScorer {
    fn score(&self, index: &InvertedIndex, query: &ParsedQuery<'_>) -> BTreeMap<DocId, f64> {
        let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();

        for &word in &query.plus_words {
            let (Some(idf), Some(docs)) = (index.idf(word), index.postings(word)) else {
                continue;
            };
            for (id, tf) in docs {
                *scores.entry(*id).or_insert(0.0) += idf * tf;
            }
        }

        for &word in &query.minus_words {
            if let Some(docs) = index.postings(word) {
                for id in docs.keys() {
                    scores.remove(id);
                }
            }
        }

        scores
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}

/// TF-IDF scorer that processes query words concurrently on the current rayon
/// pool, accumulating into a sharded map. Minus words are applied only after
/// every plus word has been accumulated.
#[derive(Debug, Clone, Copy)]
pub struct ParallelTfIdfScorer {
    pub shard_count: usize,
}

impl ParallelTfIdfScorer {
    /// Zero shards behaves as a single shard.
    pub fn new(shard_count: usize) -> Self {
        ParallelTfIdfScorer { shard_count }
    }
}

impl Default for ParallelTfIdfScorer {
    fn default() -> Self {
        ParallelTfIdfScorer::new(DEFAULT_SHARD_COUNT)
    }
}

impl Scorer for ParallelTfIdfScorer {
    fn score(&self, index: &InvertedIndex, query: &ParsedQuery<'_>) -> BTreeMap<DocId, f64> {
        let scores: ConcurrentMap<DocId, f64> = ConcurrentMap::new(self.shard_count);

        query.plus_words.par_iter().for_each(|&word| {
            let (Some(idf), Some(docs)) = (index.idf(word), index.postings(word)) else {
                return;
            };
            for (id, tf) in docs {
                *scores.access(*id) += idf * tf;
            }
        });

        query.minus_words.par_iter().for_each(|&word| {
            if let Some(docs) = index.postings(word) {
                for id in docs.keys() {
                    scores.erase(id);
                }
            }
        });

        scores.to_plain_map()
    }

    fn name(&self) -> &str {
        "tfidf_parallel"
    }
}
