//! Generation stamps for the two externally reloaded corpora.
//!
//! Each stamp is a monotonically increasing counter bumped by whatever reseeds
//! the ontology or reprocesses the document corpus. Cached results carry the
//! stamps they were computed under and are discarded once either advances.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Point-in-time copy of both stamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub graph: u64,
    pub documents: u64,
}

impl GenerationSnapshot {
    /// Whether either stamp lags behind `current`.
    pub fn is_older_than(&self, current: &GenerationSnapshot) -> bool {
        self.graph < current.graph || self.documents < current.documents
    }
}

/// Shared, lock-free holder of the current stamps.
#[derive(Debug, Default)]
pub struct GenerationStamps {
    graph: AtomicU64,
    documents: AtomicU64,
}

impl GenerationStamps {
    pub fn new(graph: u64, documents: u64) -> Self {
        Self {
            graph: AtomicU64::new(graph),
            documents: AtomicU64::new(documents),
        }
    }

    pub fn snapshot(&self) -> GenerationSnapshot {
        GenerationSnapshot {
            graph: self.graph.load(Ordering::Acquire),
            documents: self.documents.load(Ordering::Acquire),
        }
    }

    pub fn graph(&self) -> u64 {
        self.graph.load(Ordering::Acquire)
    }

    pub fn documents(&self) -> u64 {
        self.documents.load(Ordering::Acquire)
    }

    /// The ontology was reseeded. Returns the new stamp.
    pub fn bump_graph(&self) -> u64 {
        self.graph.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// The document corpus was reprocessed. Returns the new stamp.
    pub fn bump_documents(&self) -> u64 {
        self.documents.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Adopt an externally reported graph stamp. Never moves backwards.
    pub fn observe_graph(&self, stamp: u64) -> u64 {
        self.graph.fetch_max(stamp, Ordering::AcqRel).max(stamp)
    }

    /// Adopt an externally reported document stamp. Never moves backwards.
    pub fn observe_documents(&self, stamp: u64) -> u64 {
        self.documents.fetch_max(stamp, Ordering::AcqRel).max(stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_advances_one_stamp_only() {
        let stamps = GenerationStamps::new(3, 7);
        assert_eq!(stamps.bump_documents(), 8);
        assert_eq!(
            stamps.snapshot(),
            GenerationSnapshot {
                graph: 3,
                documents: 8
            }
        );
    }

    #[test]
    fn observe_never_moves_backwards() {
        let stamps = GenerationStamps::new(5, 5);
        assert_eq!(stamps.observe_graph(2), 5);
        assert_eq!(stamps.observe_graph(9), 9);
        assert_eq!(stamps.graph(), 9);
    }

    #[test]
    fn older_snapshot_detected() {
        let old = GenerationSnapshot {
            graph: 1,
            documents: 1,
        };
        let current = GenerationSnapshot {
            graph: 1,
            documents: 2,
        };
        assert!(old.is_older_than(&current));
        assert!(!current.is_older_than(&old));
        assert!(!current.is_older_than(&current));
    }
}
