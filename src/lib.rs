pub mod core;
pub mod analysis;
pub mod query;
pub mod index;
pub mod scoring;
pub mod search;
pub mod parallel;

/*
┌──────────────────────────────────── RANKDEX LAYOUT ────────────────────────────────────┐
│                                                                                          │
│  raw query ──► QueryParser ──► Scorer ──────────────► TopKCollector ──► Vec<Document>    │
│               (query)          (scoring)               (search::results)                 │
│                 │                │  TfIdfScorer          top 5, relevance desc,          │
│                 │                │  ParallelTfIdfScorer  rating desc on ties             │
│                 │                │        │                                              │
│                 │                │        └─► ConcurrentMap<DocId, f64> (parallel)       │
│                 ▼                ▼                                                       │
│          StopWordFilter     InvertedIndex (index)                                        │
│          tokenizer          postings:  word  ─► { doc ─► tf }                            │
│          (analysis)         documents: doc   ─► { rating, status, word ─► tf }           │
│                                  ▲                                                       │
│                                  │ insert / remove / remove_parallel                     │
│                                  │                                                       │
│                            SearchServer (core) ◄── RequestQueue, remove_duplicates,      │
│                                                    process_queries, Paginator            │
└──────────────────────────────────────────────────────────────────────────────────────────┘
*/
