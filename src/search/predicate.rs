use crate::core::types::{DocId, DocumentStatus};

/// Filter applied to every scored candidate before ranking.
///
/// Implemented for closures `Fn(DocId, DocumentStatus, i32) -> bool` and for
/// `DocumentStatus`, which keeps documents with exactly that status.
pub trait DocumentPredicate: Sync {
    fn matches(&self, id: DocId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
{
    fn matches(&self, id: DocId, status: DocumentStatus, rating: i32) -> bool {
        self(id, status, rating)
    }
}

impl DocumentPredicate for DocumentStatus {
    fn matches(&self, _id: DocId, status: DocumentStatus, _rating: i32) -> bool {
        *self == status
    }
}
