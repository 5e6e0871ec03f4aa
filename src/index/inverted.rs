use std::collections::{btree_map, BTreeMap, HashMap};
use std::iter::Copied;
use std::sync::Arc;
use parking_lot::Mutex;
use rayon::prelude::*;
use tracing::trace;
use crate::core::error::{Error, Result};
use crate::core::types::{DocId, DocumentStatus};

/// Term frequency per word of one document.
pub type WordFrequencies = BTreeMap<Arc<str>, f64>;

/// Posting list: document -> term frequency.
pub type PostingList = BTreeMap<DocId, f64>;

/// Ascending iterator over live document ids.
pub type DocIds<'a> = Copied<btree_map::Keys<'a, DocId, DocumentData>>;

static EMPTY_FREQUENCIES: WordFrequencies = BTreeMap::new();

/// Per-document record: metadata plus the forward word table.
#[derive(Debug, Clone)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
    pub word_frequencies: WordFrequencies,
}

/// Inverted index (word -> document -> tf) kept in sync with a forward index
/// (document -> word -> tf). Only `insert` and `remove*` mutate, and each of
/// them updates both directions.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<Arc<str>, PostingList>,
    documents: BTreeMap<DocId, DocumentData>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct words with a non-empty posting list.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Live document ids in ascending order.
    pub fn ids(&self) -> DocIds<'_> {
        self.documents.keys().copied()
    }

    pub fn document(&self, id: DocId) -> Option<&DocumentData> {
        self.documents.get(&id)
    }

    pub fn postings(&self, word: &str) -> Option<&PostingList> {
        self.postings.get(word)
    }

    pub fn word_frequencies(&self, id: DocId) -> &WordFrequencies {
        self.documents
            .get(&id)
            .map(|data| &data.word_frequencies)
            .unwrap_or(&EMPTY_FREQUENCIES)
    }

    pub fn has_word(&self, word: &str, id: DocId) -> bool {
        self.postings
            .get(word)
            .is_some_and(|docs| docs.contains_key(&id))
    }

    /// The stored copy of `word` if document `id` contains it. The result
    /// borrows from the index rather than from the caller's query text.
    pub fn stored_word(&self, id: DocId, word: &str) -> Option<&str> {
        self.documents
            .get(&id)?
            .word_frequencies
            .get_key_value(word)
            .map(|(stored, _)| &**stored)
    }

    /// ln(total documents / documents containing the word); None for unknown words.
    pub fn idf(&self, word: &str) -> Option<f64> {
        let docs = self.postings.get(word)?;
        Some((self.documents.len() as f64 / docs.len() as f64).ln())
    }

    /// Adds a document whose words are already validated and stripped of stop words.
    /// Each occurrence contributes 1/len(words) to the word's term frequency.
    pub fn insert(
        &mut self,
        id: DocId,
        status: DocumentStatus,
        rating: i32,
        words: &[&str],
    ) -> Result<()> {
        if self.documents.contains_key(&id) {
            return Err(Error::invalid_argument(format!("document {} already exists", id)));
        }

        let mut word_frequencies = WordFrequencies::new();
        if !words.is_empty() {
            let tf = 1.0 / words.len() as f64;
            for &word in words {
                if let Some(slot) = word_frequencies.get_mut(word) {
                    *slot += tf;
                    continue;
                }
                let key = self.intern(word);
                word_frequencies.insert(key, tf);
            }
        }

        for (word, tf) in &word_frequencies {
            self.postings
                .entry(Arc::clone(word))
                .or_default()
                .insert(id, *tf);
        }

        self.documents.insert(id, DocumentData { rating, status, word_frequencies });
        Ok(())
    }

    /// Removes a document from both directions. Returns false if it was absent.
    pub fn remove(&mut self, id: DocId) -> bool {
        let Some(data) = self.documents.remove(&id) else {
            return false;
        };

        for word in data.word_frequencies.keys() {
            let word: &str = word;
            if let Some(docs) = self.postings.get_mut(word) {
                docs.remove(&id);
                if docs.is_empty() {
                    self.postings.remove(word);
                }
            }
        }
        true
    }

    /// Same result as `remove`. The document's posting lists are taken out of
    /// the map, updated in parallel on the current rayon pool, and the ones
    /// still holding documents are put back. Words left without documents are
    /// gathered under a mutex and stay out. Work is proportional to the
    /// document's word count, not to the vocabulary.
    pub fn remove_parallel(&mut self, id: DocId) -> bool {
        let Some(data) = self.documents.remove(&id) else {
            return false;
        };

        let taken: Vec<(Arc<str>, PostingList)> = data
            .word_frequencies
            .keys()
            .filter_map(|word| self.postings.remove_entry::<str>(word))
            .collect();
        let emptied: Mutex<Vec<Arc<str>>> = Mutex::new(Vec::new());

        let kept: Vec<(Arc<str>, PostingList)> = taken
            .into_par_iter()
            .filter_map(|(word, mut docs)| {
                docs.remove(&id);
                if docs.is_empty() {
                    emptied.lock().push(word);
                    None
                } else {
                    Some((word, docs))
                }
            })
            .collect();

        self.postings.extend(kept);
        let emptied = emptied.into_inner();
        if !emptied.is_empty() {
            trace!(document_id = id.value(), dropped = emptied.len(), "words left without documents");
        }
        true
    }

    /// True when every (word, doc, tf) triple appears in both directions and
    /// no posting list is empty.
    pub fn is_consistent(&self) -> bool {
        let forward_ok = self.documents.iter().all(|(id, data)| {
            data.word_frequencies.iter().all(|(word, tf)| {
                let word: &str = word;
                self.postings
                    .get(word)
                    .and_then(|docs| docs.get(id))
                    .is_some_and(|stored| stored == tf)
            })
        });
        let inverted_ok = self.postings.iter().all(|(word, docs)| {
            let word: &str = word;
            !docs.is_empty()
                && docs.iter().all(|(id, tf)| {
                    self.documents
                        .get(id)
                        .and_then(|data| data.word_frequencies.get(word))
                        .is_some_and(|stored| stored == tf)
                })
        });
        forward_ok && inverted_ok
    }

    fn intern(&self, word: &str) -> Arc<str> {
        match self.postings.get_key_value(word) {
            Some((stored, _)) => Arc::clone(stored),
            None => Arc::from(word),
        }
    }
}
