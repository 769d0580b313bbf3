//! User Records API Library
//!
//! Core functionality for the user-records service: configuration, the
//! Postgres-backed user store, the external credit-score client, the
//! orchestrating service layer, and the HTTP handlers.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `db`: Database connection and pool management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Core data models.
//! - `score_client`: External credit-score API client.
//! - `service`: User service orchestration.
//! - `store`: User record persistence.

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod score_client;
pub mod service;
pub mod store;
