//! One run of the pipeline: fetch each search term, admit unseen recent
//! postings, email the digest, persist the seen set.
//!
//! Terms run strictly in sequence; a failing term contributes nothing and
//! never aborts the run. The seen set is mutated in memory as postings are
//! admitted but only reaches disk after the digest is handed to the relay.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use jobwatch_notify::DigestSender;
use jobwatch_search::{Posting, SearchClient, is_recent_on};
use jobwatch_store::{SeenStore, StoreError};

/// Search terms queried on every run, in order.
const SEARCH_TERMS: [&str; 8] = [
    "software dev engineer",
    "software developer 2025",
    "system development engineer",
    "entry level software 2025",
    "software development engineer",
    "graduate software engineer 2025",
    "university graduate software 2025",
    "sde 2025",
];

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Seen store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Tunables for a run.
pub struct TrackerConfig {
    /// Maximum posting age in days.
    pub window_days: i64,
}

/// Outcome of a single run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Postings admitted this run.
    pub new_postings: usize,
    /// Search terms whose fetch failed.
    pub failed_terms: usize,
    /// Whether the digest reached the relay.
    pub delivered: bool,
}

/// Admit postings from one term's result batch.
///
/// A posting is admitted iff its id is not in the seen set, was not already
/// admitted this run, and its posted date falls within the window. Admitted
/// ids go into the seen set immediately so later terms cannot re-admit them.
fn admit_batch(
    accepted: &mut Vec<Posting>,
    accepted_ids: &mut HashSet<String>,
    seen: &mut HashSet<String>,
    batch: Vec<Posting>,
    window_days: i64,
    today: NaiveDate,
) {
    for posting in batch {
        if seen.contains(&posting.id) || accepted_ids.contains(&posting.id) {
            continue;
        }
        if !is_recent_on(&posting.posted_date, window_days, today) {
            debug!(id = %posting.id, date = %posting.posted_date, "posting outside window");
            continue;
        }
        seen.insert(posting.id.clone());
        accepted_ids.insert(posting.id.clone());
        accepted.push(posting);
    }
}

/// Order-preserving dedup by id, guarding against a duplicate id appearing
/// twice inside a single batch.
fn dedup_by_id(postings: Vec<Posting>) -> Vec<Posting> {
    let mut seen = HashSet::new();
    postings
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}

/// Run the pipeline once.
///
/// On a run with nothing new the state file is left untouched. On a run with
/// new postings the seen set is persisted only after a successful hand-off
/// to the relay; a failed delivery leaves the file as it was, so the next
/// run rediscovers the same postings and tries again.
#[tracing::instrument(skip_all)]
pub async fn run_once<S: DigestSender>(
    config: &TrackerConfig,
    client: &SearchClient,
    store: &SeenStore,
    sender: &S,
) -> Result<RunSummary, TrackerError> {
    let mut seen = store.load()?;
    let today = Local::now().date_naive();

    let mut accepted = Vec::new();
    let mut accepted_ids = HashSet::new();
    let mut failed_terms = 0;

    for term in SEARCH_TERMS {
        match client.search(term).await {
            Ok(batch) => {
                debug!(term, count = batch.len(), "fetched postings");
                admit_batch(
                    &mut accepted,
                    &mut accepted_ids,
                    &mut seen,
                    batch,
                    config.window_days,
                    today,
                );
            }
            Err(err) => {
                warn!(term, error = %err, "search failed, skipping term");
                failed_terms += 1;
            }
        }
    }

    let new_postings = dedup_by_id(accepted);

    if new_postings.is_empty() {
        info!(failed_terms, "no new postings");
        return Ok(RunSummary {
            new_postings: 0,
            failed_terms,
            delivered: false,
        });
    }

    info!(count = new_postings.len(), "found new postings");

    match sender.send(&new_postings).await {
        Ok(()) => {
            store.save(&seen)?;
            Ok(RunSummary {
                new_postings: new_postings.len(),
                failed_terms,
                delivered: true,
            })
        }
        Err(err) => {
            error!(error = %err, "digest delivery failed, seen set not persisted");
            Ok(RunSummary {
                new_postings: new_postings.len(),
                failed_terms,
                delivered: false,
            })
        }
    }
}
