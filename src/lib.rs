pub mod controllers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
pub mod workflow;
