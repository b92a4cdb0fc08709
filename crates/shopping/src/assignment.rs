use std::cmp::Reverse;
use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::statistics::{AisleStatistics, UNKNOWN_AISLE};

/// Where an ingredient goes on the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AisleAssignment {
    pub primary: String,
    /// Other aisles the ingredient was seen in, most frequent first
    pub secondary: Vec<String>,
}

impl AisleAssignment {
    pub fn unknown() -> Self {
        Self {
            primary: UNKNOWN_AISLE.to_owned(),
            secondary: Vec::new(),
        }
    }
}

/// Aisle Assignment Service
///
/// Picks the primary aisle of every searched term: the candidate with the
/// highest global count wins, equal counts go to the lexicographically
/// smallest label so the result never depends on search order.
pub struct AisleAssignmentService;

impl AisleAssignmentService {
    pub fn assign(stats: &AisleStatistics) -> IndexMap<String, AisleAssignment> {
        stats
            .terms()
            .map(|(term, candidates)| (term.to_owned(), Self::assign_term(candidates, stats)))
            .collect()
    }

    pub fn assign_term(candidates: &BTreeSet<String>, stats: &AisleStatistics) -> AisleAssignment {
        // BTreeSet iterates in label order and the sort is stable
        let mut ranked: Vec<&String> = candidates.iter().collect();
        ranked.sort_by_key(|aisle| Reverse(stats.count(aisle)));

        let mut ranked = ranked.into_iter().cloned();
        match ranked.next() {
            Some(primary) => AisleAssignment {
                primary,
                secondary: ranked.collect(),
            },
            None => AisleAssignment::unknown(),
        }
    }
}
