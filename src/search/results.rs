use crate::core::types::Document;

/// Collects scored documents and produces the final ranking.
///
/// Order: relevance descending; relevances within `epsilon` of each other count
/// as a tie and the higher rating goes first. Ties beyond that keep ascending id
/// order when candidates are collected in id order.
pub struct TopKCollector {
    pub documents: Vec<Document>,
    pub k: usize,
    pub epsilon: f64,
}

impl TopKCollector {
    pub fn new(k: usize, epsilon: f64) -> Self {
        TopKCollector {
            documents: Vec::new(),
            k,
            epsilon,
        }
    }

    pub fn collect(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Total documents collected so far, before truncation.
    pub fn total_collected(&self) -> usize {
        self.documents.len()
    }

    pub fn get_results(self) -> Vec<Document> {
        let TopKCollector { mut documents, k, epsilon } = self;
        rank(&mut documents, epsilon);
        documents.truncate(k);
        documents
    }
}

/// Sorts in place by relevance, then reorders by descending rating every run
/// whose members are all closer than `epsilon` to the run's first (most
/// relevant) document. Both passes are stable and use total
/// orders, so no comparator ever sees a non-transitive "equal".
pub fn rank(documents: &mut [Document], epsilon: f64) {
    documents.sort_by(|lhs, rhs| rhs.relevance.total_cmp(&lhs.relevance));

    let mut start = 0;
    while start < documents.len() {
        let mut end = start + 1;
        while end < documents.len()
            && documents[start].relevance - documents[end].relevance < epsilon
        {
            end += 1;
        }
        if end - start > 1 {
            documents[start..end].sort_by(|lhs, rhs| rhs.rating.cmp(&lhs.rating));
        }
        start = end;
    }
}
