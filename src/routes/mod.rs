pub mod content_routes;
pub mod vote_routes;
