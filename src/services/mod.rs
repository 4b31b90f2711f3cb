//! Use cases behind the pages and the CLI, plus the HTTP server.

pub mod calculator;
pub mod directory;
pub mod injuries;
pub mod news;
pub mod opponents;
pub mod projections;
pub mod schedule;
pub mod server;
