use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::models::vote_models::{Confirmation, VoteRecord};

pub mod firebase;
pub mod memory;

/// Fixed path of the vote collection in the remote tree.
pub const VOTES_PATH: &str = "votes";

pub const VOTE_RECORDED_MSG: &str = "Vote recorded successfully!";

#[derive(Debug, Clone)]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// The vote store capability the workflow is built against. Appends assign a
/// fresh key per call; an empty collection reads back as an empty map, not an
/// error. No caching on either path.
#[async_trait]
pub trait VoteStore: Send + Sync {
    async fn append_vote(&self, option_id: &str) -> Result<Confirmation, StoreError>;

    async fn read_all_votes(&self) -> Result<BTreeMap<String, VoteRecord>, StoreError>;
}

pub fn init_store() -> Arc<dyn VoteStore> {
    match std::env::var("FIREBASE_DB_URL") {
        Ok(url) => {
            println!("Using Firebase vote store at {}", url);
            Arc::new(firebase::FirebaseVoteStore::new(url))
        }
        Err(_) => {
            eprintln!("FIREBASE_DB_URL not set, using in-memory vote store");
            Arc::new(memory::MemoryVoteStore::new())
        }
    }
}
