//! Visit recording and time-window query service.

use crate::domain::repositories::VisitRepository;
use crate::error::AppError;
use crate::utils::extract_domain::extract;
use crate::utils::validate_domain::validate;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

/// Result of ingesting one batch of raw links.
#[derive(Debug, PartialEq)]
pub enum IngestOutcome {
    /// Every link in the batch resolved to a valid domain.
    Recorded,
    /// At least one link failed extraction or validation. The resolved subset
    /// of the batch was still written to the store.
    Rejected {
        /// Original raw text of each failed link, in input order, deduplicated.
        failed: Vec<String>,
    },
}

/// Service orchestrating the extract/validate pipeline over link batches and
/// delegating range reads to the store.
pub struct VisitService {
    repository: Arc<dyn VisitRepository>,
}

impl VisitService {
    pub fn new(repository: Arc<dyn VisitRepository>) -> Self {
        Self { repository }
    }

    /// Records the domains of a batch of raw links at the current time.
    ///
    /// One timestamp is taken per batch: every domain resolved from the batch
    /// shares it, so a link appearing twice upserts the same score twice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store write fails. Per-link parsing
    /// failures are not errors; they are reported in the outcome while the
    /// resolved subset is still written.
    pub async fn ingest(&self, links: &[String]) -> Result<IngestOutcome, AppError> {
        let score = Utc::now().timestamp() as f64;
        self.ingest_at(links, score).await
    }

    /// Records the domains of a batch of raw links with an explicit score.
    pub async fn ingest_at(&self, links: &[String], score: f64) -> Result<IngestOutcome, AppError> {
        let mut resolved: HashMap<String, f64> = HashMap::new();
        let mut failed: Vec<String> = Vec::new();

        for link in links {
            match extract(link).and_then(|candidate| validate(&candidate)) {
                Some(domain) => {
                    resolved.insert(domain, score);
                }
                None => {
                    tracing::debug!("no domain extracted from link: {link}");
                    if !failed.contains(link) {
                        failed.push(link.clone());
                    }
                }
            }
        }

        if !resolved.is_empty() {
            self.repository.upsert(resolved).await?;
        }

        if failed.is_empty() {
            Ok(IngestOutcome::Recorded)
        } else {
            Ok(IngestOutcome::Rejected { failed })
        }
    }

    /// Lists domains recorded inside the `[from, to]` window, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store read fails.
    pub async fn query(&self, from: f64, to: f64) -> Result<Vec<String>, AppError> {
        self.repository.range(from, to).await
    }

    /// Probes store connectivity for health reporting.
    pub async fn store_alive(&self) -> bool {
        self.repository.ping().await
    }
}
