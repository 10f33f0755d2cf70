pub mod content_controllers;
pub mod vote_controllers;
