/// Rankdex API Demo
///
/// Walks through the main engine operations:
/// - Indexing and ranked search
/// - Pagination of results
/// - Request statistics over a sliding window
/// - Duplicate removal
/// - Sequential vs parallel execution
///
/// Run with `RUST_LOG=info` to see timings and duplicate notices.

use rankdex::core::search_server::SearchServer;
use rankdex::core::types::{DocId, DocumentStatus};
use rankdex::log_duration;
use rankdex::parallel::execution::ExecutionMode;
use rankdex::parallel::process_queries::process_queries;
use rankdex::search::duplicates::remove_duplicates;
use rankdex::search::paginator::paginate;
use rankdex::search::request_queue::RequestQueue;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║        Rankdex Search Engine - API Demo       ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: index a handful of documents
    println!("Step 1: INDEX - Adding documents...");
    let mut server = SearchServer::new("and with")?;
    let documents: [(i32, &str, &[i32]); 5] = [
        (1, "funny pet and nasty rat", &[7, 2, 7]),
        (2, "funny pet with curly hair", &[1, 2, 3]),
        (3, "big cat nasty hair", &[1, 2, 8]),
        (4, "big dog cat Vladislav", &[1, 3, 2]),
        (5, "big dog hamster Borya", &[1, 1, 1]),
    ];
    for (id, text, ratings) in documents {
        server.add_document(id, text, DocumentStatus::Actual, ratings)?;
    }
    println!("  Indexed {} documents\n", server.document_count());

    // Step 2: ranked search, paginated two per page
    println!("Step 2: SEARCH - 'curly dog', two results per page...");
    let found = server.find_top_documents("curly dog")?;
    for page in &paginate(&found, 2) {
        println!("  {}", page);
        println!("  Page break");
    }
    println!("  As JSON: {}\n", serde_json::to_string(&found)?);

    // Step 3: match a query against every document
    println!("Step 3: MATCH - 'funny -rat' against each document...");
    for id in &server {
        let (words, status) = server.match_document("funny -rat", id)?;
        println!("  {{ document_id = {}, status = {}, words = {:?} }}", id, status, words);
    }
    println!();

    // Step 4: request statistics over the last day of requests
    println!("Step 4: REQUESTS - empty results in the last 1440 requests...");
    {
        let mut queue = RequestQueue::new(&server);
        for _ in 0..1439 {
            queue.add_find_request("empty request")?;
        }
        queue.add_find_request("curly dog")?;
        queue.add_find_request("big collar")?;
        queue.add_find_request("sparrow")?;
        queue.add_find_request_by("cat", |_: DocId, _: DocumentStatus, rating: i32| rating > 3)?;
        println!("  Empty results: {}\n", queue.no_result_requests());
    }

    // Step 5: duplicates differ only in word order, frequency or stop words
    println!("Step 5: DEDUP - Removing duplicates...");
    server.add_document(6, "funny pet with nasty nasty rat", DocumentStatus::Actual, &[1, 2])?;
    server.add_document(7, "rat nasty pet funny", DocumentStatus::Irrelevant, &[3])?;
    println!("  Before: {} documents", server.document_count());
    let removed = remove_duplicates(&mut server);
    println!("  Removed {:?}, {} documents left\n", removed, server.document_count());

    // Step 6: execution modes on the same workload
    println!("Step 6: PARALLEL - Timing both execution modes (see RUST_LOG=info)...");
    let queries = ["nasty rat -not", "not very funny nasty pet", "curly hair"];
    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        log_duration!(format!("{:?} queries", mode));
        for query in queries {
            let found = server.find_top_documents_with_mode(mode, query, DocumentStatus::Actual)?;
            println!("  {:?} '{}': {} results", mode, query, found.len());
        }
    }
    let batched = process_queries(&server, &queries)?;
    println!("  process_queries: {} result lists", batched.len());

    server.remove_document_with_mode(ExecutionMode::Parallel, 5);
    println!("  After parallel removal of 5: {} documents", server.document_count());

    println!("\nDone!");
    Ok(())
}
