//! Configuration modules, each loaded from environment variables.
//!
//! - [`database`]: PostgreSQL pool sizing and connection string
//! - [`jwt`]: signing secret and token lifetime
//! - [`server`]: listen port

pub mod database;
pub mod jwt;
pub mod server;
