//! Domain layer - Entries, keying rules and data formats

pub mod codec;
pub mod entries;
pub mod entry;
pub mod report;

pub use codec::{decode, encode, Decoded};
pub use entries::Entries;
pub use entry::{entry_key, Entry};
pub use report::render_report;
