pub mod vote_models;
