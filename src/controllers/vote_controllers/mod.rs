pub mod cast_vote;
pub mod get_results;
pub mod list_votes;
pub mod models;
