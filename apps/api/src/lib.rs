pub mod config;
pub mod document;
pub mod errors;
pub mod extraction;
pub mod nlp;
pub mod routes;
pub mod state;
