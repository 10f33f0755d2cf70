use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use crate::models::vote_models::{Confirmation, VoteRecord};

use super::{StoreError, VoteStore, VOTE_RECORDED_MSG};

/// In-memory vote store. Serves as the fallback backend when no database URL
/// is configured and as the test double for the workflow. Keys are zero-padded
/// so they stay order-preserving like the remote store's generated keys.
pub struct MemoryVoteStore {
    votes: Mutex<BTreeMap<String, VoteRecord>>,
    next_key: AtomicU64,
    fail_appends: AtomicBool,
    fail_reads: AtomicBool,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self {
            votes: Mutex::new(BTreeMap::new()),
            next_key: AtomicU64::new(0),
            fail_appends: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
        }
    }

    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.votes.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryVoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoteStore for MemoryVoteStore {
    async fn append_vote(&self, option_id: &str) -> Result<Confirmation, StoreError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(StoreError::new(
                "Error recording the vote: store unavailable",
            ));
        }

        let key = format!("vote{:010}", self.next_key.fetch_add(1, Ordering::SeqCst));
        self.votes
            .lock()
            .unwrap()
            .insert(key, VoteRecord::new(option_id));

        Ok(Confirmation {
            message: VOTE_RECORDED_MSG.to_string(),
        })
    }

    async fn read_all_votes(&self) -> Result<BTreeMap<String, VoteRecord>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::new(
                "Error fetching the votes: store unavailable",
            ));
        }

        Ok(self.votes.lock().unwrap().clone())
    }
}
