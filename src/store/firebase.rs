use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::models::vote_models::{Confirmation, VoteRecord};

use super::{StoreError, VoteStore, VOTES_PATH, VOTE_RECORDED_MSG};

/// Vote store backed by the Firebase Realtime Database REST API. A POST to
/// `<base>/votes.json` is an append-with-generated-key write, a GET reads the
/// whole subtree in one shot.
pub struct FirebaseVoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl FirebaseVoteStore {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}.json", self.base_url, VOTES_PATH)
    }
}

#[async_trait]
impl VoteStore for FirebaseVoteStore {
    async fn append_vote(&self, option_id: &str) -> Result<Confirmation, StoreError> {
        let record = VoteRecord::new(option_id);

        let response = self
            .client
            .post(self.collection_url())
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::new(format!("Error recording the vote: {}", e)))?;

        if !response.status().is_success() {
            return Err(StoreError::new(format!(
                "Error recording the vote: HTTP error {}",
                response.status()
            )));
        }

        Ok(Confirmation {
            message: VOTE_RECORDED_MSG.to_string(),
        })
    }

    async fn read_all_votes(&self) -> Result<BTreeMap<String, VoteRecord>, StoreError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| StoreError::new(format!("Error fetching the votes: {}", e)))?;

        if !response.status().is_success() {
            return Err(StoreError::new(format!(
                "Error fetching the votes: HTTP error {}",
                response.status()
            )));
        }

        // An empty subtree comes back as the JSON literal `null`.
        let children = response
            .json::<Option<BTreeMap<String, serde_json::Value>>>()
            .await
            .map_err(|e| StoreError::new(format!("Error fetching the votes: {}", e)))?;

        // No schema validation here: children that do not parse as a vote
        // record are kept with no product id and skipped by the tally.
        let votes = children
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| {
                let record = serde_json::from_value(value).unwrap_or_default();
                (key, record)
            })
            .collect();

        Ok(votes)
    }
}
