use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};
use serde::{Serialize, Deserialize};

/// One row of a ranked snapshot: a choice and the votes it has received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing<T> {
    #[serde(rename = "shortcode")]
    pub choice: T,
    pub votes: u64,
}

/// In-memory vote counter shared by every request handler.
///
/// Writers take the lock exclusively, readers share it, so an increment is
/// never observed half-applied and concurrent votes are never lost.
#[derive(Debug)]
pub struct Tally<T: Clone + Eq + Hash + Ord> {
    votes: RwLock<HashMap<T, u64>>,
}

impl<T: Clone + Eq + Hash + Ord> Default for Tally<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash + Ord> Tally<T> {
    pub fn new() -> Self {
        Self { votes: RwLock::new(HashMap::new()) }
    }

    /// Records one vote for `choice` and returns its new total.
    ///
    /// Any choice is accepted; checking it against a catalog is the caller's job.
    pub fn vote(&self, choice: T) -> u64 {
        // A poisoned guard still holds a whole map: each mutation is one increment.
        let mut votes = self.votes.write().unwrap_or_else(PoisonError::into_inner);
        let count = votes.entry(choice).or_insert(0);
        *count += 1;
        *count
    }

    pub fn votes_for(&self, choice: &T) -> u64 {
        self.votes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(choice)
            .copied()
            .unwrap_or(0)
    }

    /// Ranked snapshot of every choice with at least one vote.
    ///
    /// Highest count first; equal counts are ordered by choice ascending.
    pub fn results(&self) -> Vec<Standing<T>> {
        let counts = self.votes.read().unwrap_or_else(PoisonError::into_inner);
        let mut standings: Vec<_> = counts.iter()
            .filter(|(_, count)| **count > 0)
            .map(|(choice, &votes)| Standing { choice: choice.clone(), votes })
            .collect();
        drop(counts);

        standings.sort_unstable_by(|a, b| {
            b.votes.cmp(&a.votes)
                .then_with(|| a.choice.cmp(&b.choice))
        });
        standings
    }
}
