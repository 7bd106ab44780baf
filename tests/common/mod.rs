#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use visited_links::application::services::VisitService;
use visited_links::domain::repositories::VisitRepository;
use visited_links::error::AppError;
use visited_links::state::AppState;

/// In-memory visit store with the same contract as the Redis sorted set:
/// overwrite-always upsert, inclusive range read ordered by score with ties
/// in lexical member order.
#[derive(Default)]
pub struct InMemoryVisitRepository {
    entries: Mutex<HashMap<String, f64>>,
}

impl InMemoryVisitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_of(&self, domain: &str) -> Option<f64> {
        self.entries.lock().unwrap().get(domain).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl VisitRepository for InMemoryVisitRepository {
    async fn upsert(&self, new_entries: HashMap<String, f64>) -> Result<(), AppError> {
        self.entries.lock().unwrap().extend(new_entries);
        Ok(())
    }

    async fn range(&self, from: f64, to: f64) -> Result<Vec<String>, AppError> {
        let entries = self.entries.lock().unwrap();

        let mut hits: Vec<(f64, String)> = entries
            .iter()
            .filter(|(_, score)| **score >= from && **score <= to)
            .map(|(domain, score)| (*score, domain.clone()))
            .collect();

        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        Ok(hits.into_iter().map(|(_, domain)| domain).collect())
    }

    async fn ping(&self) -> bool {
        true
    }
}

/// Store double whose every operation fails, for error-envelope tests.
pub struct FailingVisitRepository;

#[async_trait]
impl VisitRepository for FailingVisitRepository {
    async fn upsert(&self, _entries: HashMap<String, f64>) -> Result<(), AppError> {
        Err(AppError::store("store error: connection refused"))
    }

    async fn range(&self, _from: f64, _to: f64) -> Result<Vec<String>, AppError> {
        Err(AppError::store("store error: connection refused"))
    }

    async fn ping(&self) -> bool {
        false
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryVisitRepository>) {
    let repository = Arc::new(InMemoryVisitRepository::new());
    let visit_service = Arc::new(VisitService::new(repository.clone()));

    (AppState::new(visit_service), repository)
}

pub fn create_failing_state() -> AppState {
    let visit_service = Arc::new(VisitService::new(Arc::new(FailingVisitRepository)));

    AppState::new(visit_service)
}
