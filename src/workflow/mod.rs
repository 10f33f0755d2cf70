use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::store::VoteStore;
use crate::utils::render;

pub mod tally;

use tally::Tally;

/// Drives the submit cycle: persist the selection, then re-read the whole
/// collection and render a fresh tally. One instance lives for the process
/// lifetime and owns the click counter.
pub struct VotingWorkflow {
    store: Arc<dyn VoteStore>,
    clicks: AtomicU64,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// No option was selected: no store call, no counter change.
    Ignored,
    Completed {
        accepted: bool,
        message: String,
        clicks: u64,
        results: ResultsView,
    },
}

#[derive(Debug)]
pub enum ResultsView {
    Table { tally: Tally, html: String },
    Unavailable { message: String, html: String },
}

impl VotingWorkflow {
    pub fn new(store: Arc<dyn VoteStore>) -> Self {
        Self {
            store,
            clicks: AtomicU64::new(0),
        }
    }

    pub fn clicks(&self) -> u64 {
        self.clicks.load(Ordering::SeqCst)
    }

    /// One pass through the submit cycle. A failed append still bumps the
    /// counter and still refreshes the results: the counter tracks
    /// submissions, not accepted votes.
    pub async fn submit(&self, selection: Option<&str>) -> SubmitOutcome {
        let option_id = match selection.map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => return SubmitOutcome::Ignored,
        };

        let persisted = self.store.append_vote(option_id).await;
        let clicks = self.clicks.fetch_add(1, Ordering::SeqCst) + 1;

        let (accepted, message) = match persisted {
            Ok(confirmation) => (true, confirmation.message),
            Err(e) => (false, e.message),
        };

        let results = self.refresh().await;

        SubmitOutcome::Completed {
            accepted,
            message,
            clicks,
            results,
        }
    }

    /// Re-read the whole collection and recompute the tally. Read failures
    /// become an error placeholder, never a crash.
    pub async fn refresh(&self) -> ResultsView {
        match self.store.read_all_votes().await {
            Ok(votes) => {
                let tally = Tally::compute(votes.values());
                let html = render::render_results_table(&tally);
                ResultsView::Table { tally, html }
            }
            Err(e) => {
                let html = render::render_results_error(&e.message);
                ResultsView::Unavailable {
                    message: e.message,
                    html,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryVoteStore;

    fn workflow() -> (VotingWorkflow, Arc<MemoryVoteStore>) {
        let store = Arc::new(MemoryVoteStore::new());
        (VotingWorkflow::new(store.clone()), store)
    }

    fn expect_table(results: &ResultsView) -> &Tally {
        match results {
            ResultsView::Table { tally, .. } => tally,
            ResultsView::Unavailable { message, .. } => {
                panic!("expected a results table, got error: {}", message)
            }
        }
    }

    #[tokio::test]
    async fn submit_persists_and_refreshes() {
        let (workflow, store) = workflow();

        let outcome = workflow.submit(Some("product2")).await;

        match outcome {
            SubmitOutcome::Completed {
                accepted,
                clicks,
                results,
                ..
            } => {
                assert!(accepted);
                assert_eq!(clicks, 1);
                let tally = expect_table(&results);
                assert_eq!(tally.count("product2"), 1);
                assert_eq!(tally.total(), 1);
            }
            SubmitOutcome::Ignored => panic!("submission was ignored"),
        }

        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn no_selection_is_ignored_entirely() {
        let (workflow, store) = workflow();

        assert!(matches!(workflow.submit(None).await, SubmitOutcome::Ignored));
        assert!(matches!(
            workflow.submit(Some("  ")).await,
            SubmitOutcome::Ignored
        ));

        assert_eq!(workflow.clicks(), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn failed_append_still_counts_and_still_refreshes() {
        let (workflow, store) = workflow();
        workflow.submit(Some("product1")).await;

        store.set_fail_appends(true);
        let outcome = workflow.submit(Some("product2")).await;

        match outcome {
            SubmitOutcome::Completed {
                accepted,
                message,
                clicks,
                results,
            } => {
                assert!(!accepted);
                assert!(message.contains("Error recording the vote"));
                assert_eq!(clicks, 2);
                // The refresh still ran against the untouched collection.
                let tally = expect_table(&results);
                assert_eq!(tally.count("product1"), 1);
                assert_eq!(tally.count("product2"), 0);
            }
            SubmitOutcome::Ignored => panic!("submission was ignored"),
        }
    }

    #[tokio::test]
    async fn failed_read_renders_an_error_placeholder() {
        let (workflow, store) = workflow();
        store.set_fail_reads(true);

        match workflow.refresh().await {
            ResultsView::Unavailable { message, html } => {
                assert!(message.contains("Error fetching the votes"));
                assert!(html.contains("Error fetching the votes"));
            }
            ResultsView::Table { .. } => panic!("expected the read to fail"),
        }
    }

    #[tokio::test]
    async fn read_is_idempotent_without_intervening_appends() {
        let (workflow, _store) = workflow();
        workflow.submit(Some("product3")).await;

        let first = workflow.refresh().await;
        let second = workflow.refresh().await;

        assert_eq!(expect_table(&first), expect_table(&second));
    }

    #[tokio::test]
    async fn unrecognized_options_are_stored_but_not_tallied() {
        let (workflow, store) = workflow();

        // No write-time validation: the append goes through.
        let outcome = workflow.submit(Some("product42")).await;
        match outcome {
            SubmitOutcome::Completed { accepted, results, .. } => {
                assert!(accepted);
                assert_eq!(expect_table(&results).total(), 0);
            }
            SubmitOutcome::Ignored => panic!("submission was ignored"),
        }
        assert_eq!(store.len(), 1);
    }
}
