pub mod app;
pub mod config;
pub mod constants;
pub mod demo;
pub mod domain;
pub mod engine;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod observability;
pub mod server;
pub mod storage;
