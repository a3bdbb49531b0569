#![doc = "The `todoforge` library crate."]
#![doc = ""]
#![doc = "This crate contains the core business logic, domain models, authentication"]
#![doc = "mechanisms, persistence queries, routing configuration, and error handling"]
#![doc = "for the TodoForge application. It is used by the main binary (`main.rs`)"]
#![doc = "to construct and run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
