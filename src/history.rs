// ABOUTME: Bounded in-process history of past recipe generations
// ABOUTME: Append-only ring of 10 entries with FIFO eviction behind an RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef

//! In-memory generation history.
//!
//! The store is process-lifetime state: initialized empty at startup and
//! discarded on exit. It holds at most [`HISTORY_CAPACITY`] entries; appending
//! beyond that evicts the oldest first. Readers get cloned snapshots, so the
//! history context used for a given prompt reflects store state at
//! prompt-build time, not at response time. Staleness only affects stylistic
//! novelty, not correctness.
//!
//! The store is shared across request tasks on a multi-threaded runtime, so
//! append/read go through an `RwLock` to preserve the FIFO-eviction and
//! snapshot-read invariants.

use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::models::HistoryEntry;

/// Maximum number of generations retained before FIFO eviction
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded, append-only store of past generations
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: RwLock<VecDeque<HistoryEntry>>,
}

impl HistoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(HISTORY_CAPACITY)),
        }
    }

    /// Append an entry, evicting from the front once capacity is exceeded
    pub async fn append(&self, entry: HistoryEntry) {
        let mut entries = self.entries.write().await;
        entries.push_back(entry);
        while entries.len() > HISTORY_CAPACITY {
            entries.pop_front();
        }
    }

    /// The last `n` entries in chronological order (oldest of the window
    /// first), or fewer if fewer exist
    pub async fn recent(&self, n: usize) -> Vec<HistoryEntry> {
        let entries = self.entries.read().await;
        let start = entries.len().saturating_sub(n);
        entries.iter().skip(start).cloned().collect()
    }

    /// The full current sequence, most-recent-last
    pub async fn all(&self) -> Vec<HistoryEntry> {
        self.entries.read().await.iter().cloned().collect()
    }

    /// Number of entries currently held
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(tag: &str) -> HistoryEntry {
        HistoryEntry {
            timestamp: Utc::now(),
            ingredients: vec![tag.to_owned()],
            recipes: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let store = HistoryStore::new();
        assert!(store.is_empty().await);
        assert!(store.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest() {
        let store = HistoryStore::new();
        for i in 0..11 {
            store.append(entry(&format!("e{i}"))).await;
        }
        let all = store.all().await;
        assert_eq!(all.len(), HISTORY_CAPACITY);
        // e0 evicted, e1 is now the oldest
        assert_eq!(all[0].ingredients, vec!["e1"]);
        assert_eq!(all[9].ingredients, vec!["e10"]);
    }

    #[tokio::test]
    async fn test_recent_window_is_chronological() {
        let store = HistoryStore::new();
        for i in 1..=5 {
            store.append(entry(&format!("e{i}"))).await;
        }
        let window = store.recent(3).await;
        let tags: Vec<_> = window.iter().map(|e| e.ingredients[0].clone()).collect();
        assert_eq!(tags, vec!["e3", "e4", "e5"]);
    }

    #[tokio::test]
    async fn test_recent_returns_fewer_when_short() {
        let store = HistoryStore::new();
        store.append(entry("only")).await;
        assert_eq!(store.recent(3).await.len(), 1);
    }
}
