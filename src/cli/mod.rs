//! CLI layer - Command-line interface

pub mod commands;
pub mod menu;
pub mod output;

pub use commands::{Cli, Commands};
pub use menu::Menu;
pub use output::{format_entry, format_entry_list, format_name_list, format_search_results};
