use proptest::prelude::*;
use rankdex::analysis::filters::stopword::StopWordFilter;
use rankdex::core::config::Config;
use rankdex::core::error::ErrorKind;
use rankdex::core::search_server::SearchServer;
use rankdex::core::types::{DocId, Document, DocumentStatus};
use rankdex::parallel::execution::ExecutionMode;

fn small_pool_server(stop_words: &str) -> SearchServer {
    let config = Config { worker_threads: 2, shard_count: 7, ..Config::default() };
    SearchServer::with_config(StopWordFilter::from_text(stop_words).unwrap(), config).unwrap()
}

fn pet_server() -> SearchServer {
    let mut server = small_pool_server("and with");
    let texts = [
        "white cat and yellow hat",
        "curly cat curly tail",
        "nasty dog with big eyes",
        "nasty pigeon john",
    ];
    for (id, text) in texts.iter().enumerate() {
        server.add_document(id as i32 + 1, text, DocumentStatus::Actual, &[1, 2]).unwrap();
    }
    server
}

fn assert_same_ranking(sequential: &[Document], parallel: &[Document]) {
    assert_eq!(sequential.len(), parallel.len());
    for (left, right) in sequential.iter().zip(parallel) {
        assert_eq!(left.rating, right.rating);
        assert!((left.relevance - right.relevance).abs() < 1e-9);
    }
}

#[test]
fn parallel_find_matches_sequential() {
    let server = pet_server();
    for query in ["curly nasty cat", "nasty -cat", "big john -dog", "cat hat tail eyes", "-nasty"] {
        let sequential = server
            .find_top_documents_with_mode(ExecutionMode::Sequential, query, DocumentStatus::Actual)
            .unwrap();
        let parallel = server
            .find_top_documents_with_mode(ExecutionMode::Parallel, query, DocumentStatus::Actual)
            .unwrap();
        assert_same_ranking(&sequential, &parallel);
    }
}

#[test]
fn parallel_find_reports_the_same_errors() {
    let server = pet_server();
    let err = server
        .find_top_documents_with_mode(ExecutionMode::Parallel, "cat --dog", DocumentStatus::Actual)
        .unwrap_err();
    assert!(err.is(ErrorKind::InvalidQuery));
}

#[test]
fn parallel_find_applies_predicate() {
    let server = pet_server();
    let found = server
        .find_top_documents_with_mode(
            ExecutionMode::Parallel,
            "nasty cat",
            |id: DocId, _: DocumentStatus, _: i32| id.value() > 2,
        )
        .unwrap();
    let ids: Vec<i32> = found.iter().map(|document| document.id.value()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&3) && ids.contains(&4));
}

#[test]
fn parallel_match_matches_sequential() {
    let server = pet_server();
    for id in 1..=4 {
        for query in ["curly and cat cat", "nasty -eyes", "-white cat", "and with"] {
            let sequential = server
                .match_document_with_mode(ExecutionMode::Sequential, query, id)
                .unwrap();
            let parallel = server
                .match_document_with_mode(ExecutionMode::Parallel, query, id)
                .unwrap();
            assert_eq!(sequential, parallel, "query {:?} on document {}", query, id);
        }
    }
    let err = server
        .match_document_with_mode(ExecutionMode::Parallel, "cat", 10)
        .unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[test]
fn parallel_remove_leaves_consistent_index() {
    let mut server = pet_server();
    server.remove_document_with_mode(ExecutionMode::Parallel, 2);
    server.remove_document_with_mode(ExecutionMode::Parallel, 99);

    assert_eq!(server.document_count(), 3);
    assert!(server.index().postings("curly").is_none());
    assert!(server.index().postings("tail").is_none());
    assert_eq!(server.index().postings("cat").map(|list| list.len()), Some(1));
    assert!(server.index().is_consistent());
}

fn status_strategy() -> impl Strategy<Value = DocumentStatus> {
    prop_oneof![
        Just(DocumentStatus::Actual),
        Just(DocumentStatus::Irrelevant),
        Just(DocumentStatus::Banned),
    ]
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-f]{1,2}", any::<bool>()), 0..6).prop_map(|words| {
        words
            .into_iter()
            .map(|(word, minus)| if minus { format!("-{}", word) } else { word })
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn build(documents: &[(Vec<String>, DocumentStatus, Vec<i32>)]) -> SearchServer {
    let mut server = small_pool_server("a b");
    for (id, (words, status, ratings)) in documents.iter().enumerate() {
        server.add_document(id as i32, &words.join(" "), *status, ratings).unwrap();
    }
    server
}

fn documents_strategy() -> impl Strategy<Value = Vec<(Vec<String>, DocumentStatus, Vec<i32>)>> {
    prop::collection::vec(
        (
            prop::collection::vec("[a-f]{1,2}", 0..8),
            status_strategy(),
            prop::collection::vec(-10i32..10, 0..4),
        ),
        0..25,
    )
}

proptest! {
    #[test]
    fn modes_agree_on_find_and_match(
        documents in documents_strategy(),
        query in query_strategy(),
    ) {
        let server = build(&documents);

        let sequential = server
            .find_top_documents_with_mode(ExecutionMode::Sequential, &query, DocumentStatus::Actual)
            .unwrap();
        let parallel = server
            .find_top_documents_with_mode(ExecutionMode::Parallel, &query, DocumentStatus::Actual)
            .unwrap();
        prop_assert_eq!(sequential.len(), parallel.len());
        for (left, right) in sequential.iter().zip(&parallel) {
            prop_assert_eq!(left.rating, right.rating);
            prop_assert!((left.relevance - right.relevance).abs() < 1e-9);
        }

        for id in server.ids() {
            let sequential = server.match_document_with_mode(ExecutionMode::Sequential, &query, id).unwrap();
            let parallel = server.match_document_with_mode(ExecutionMode::Parallel, &query, id).unwrap();
            prop_assert_eq!(sequential, parallel);
        }
    }

    #[test]
    fn modes_agree_on_remove(
        documents in documents_strategy(),
        removals in prop::collection::vec(0i32..30, 0..10),
    ) {
        let mut sequential = build(&documents);
        let mut parallel = sequential.clone();

        for &id in &removals {
            sequential.remove_document_with_mode(ExecutionMode::Sequential, id);
            parallel.remove_document_with_mode(ExecutionMode::Parallel, id);
        }

        prop_assert!(sequential.index().is_consistent());
        prop_assert!(parallel.index().is_consistent());
        prop_assert_eq!(sequential.ids().collect::<Vec<_>>(), parallel.ids().collect::<Vec<_>>());
        prop_assert_eq!(sequential.index().term_count(), parallel.index().term_count());
        for id in sequential.ids() {
            prop_assert_eq!(sequential.word_frequencies(id), parallel.word_frequencies(id));
        }
    }
}
