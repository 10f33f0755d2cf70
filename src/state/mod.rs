use std::sync::Arc;

use crate::store::VoteStore;
use crate::utils::fetcher::TextFetcher;
use crate::workflow::VotingWorkflow;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VoteStore>,
    pub workflow: Arc<VotingWorkflow>,
    pub fetcher: Arc<TextFetcher>,
}

impl AppState {
    pub fn new(store: Arc<dyn VoteStore>, fetcher: Arc<TextFetcher>) -> Self {
        let workflow = Arc::new(VotingWorkflow::new(store.clone()));
        Self {
            store,
            workflow,
            fetcher,
        }
    }
}
