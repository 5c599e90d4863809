//! Infrastructure layer - External I/O and persistence

pub mod backend;
pub mod config;

pub use backend::{Backend, FileBackend, MemoryBackend};
pub use config::{Config, ConfigLocation};
