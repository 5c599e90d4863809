//! passbook - Plain-text local password book
//!
//! Keeps named credential entries (service, username, password) in a JSON
//! file, keyed case-insensitively by service name, with search, text export
//! and merge-on-import. Nothing is encrypted.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{EntryStore, LoadStatus};
pub use domain::Entry;
pub use error::PassbookError;
