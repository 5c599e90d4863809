//! Output formatting utilities

use crate::application::LoadStatus;
use crate::domain::Entry;
use std::path::Path;

/// Format every entry with username and password
pub fn format_entry_list(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "No passwords stored.\n".to_string();
    }

    let mut output = format!(
        "=== All Stored Passwords ({} entries) ===\n",
        entries.len()
    );
    output.push_str(&"=".repeat(60));
    output.push('\n');

    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!("{}. Name: {}\n", i + 1, entry.display_name()));
        output.push_str(&format!("   Username: {}\n", entry.username()));
        output.push_str(&format!("   Password: {}\n", entry.secret()));
        output.push_str(&"-".repeat(60));
        output.push('\n');
    }
    output
}

/// Format names and usernames only
pub fn format_name_list(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "No passwords stored.\n".to_string();
    }

    let mut output = format!("=== Stored Services ({} entries) ===\n", entries.len());
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({})\n",
            i + 1,
            entry.display_name(),
            entry.username()
        ));
    }
    output
}

/// Format the matches for a search term
pub fn format_search_results(term: &str, results: &[&Entry]) -> String {
    if results.is_empty() {
        return format!("No entries found for '{}'\n", term);
    }

    let mut output = format!("=== Search Results for '{}' ===\n", term);
    for (i, entry) in results.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} - {} - {}\n",
            i + 1,
            entry.display_name(),
            entry.username(),
            entry.secret()
        ));
    }
    output
}

/// Format a single looked-up entry
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "Found entry for '{}':\nUsername: {}\nPassword: {}\n",
        entry.display_name(),
        entry.username(),
        entry.secret()
    )
}

/// Startup line describing how the store was loaded
pub fn format_load_status(status: &LoadStatus, data_file: &Path) -> String {
    match status {
        LoadStatus::Missing => "No existing data file found. Starting fresh.\n".to_string(),
        LoadStatus::Loaded(count) => {
            format!("Loaded {} entries from {}\n", count, data_file.display())
        }
        LoadStatus::Corrupt(reason) => format!("Error loading data: {}\n", reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("GitHub", "alice", "p1"),
            Entry::new("Bank", "bob", "p2"),
        ]
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No passwords stored.\n");
        assert_eq!(format_name_list(&[]), "No passwords stored.\n");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = sample();
        let refs: Vec<&Entry> = entries.iter().collect();
        let output = format_entry_list(&refs);

        assert!(output.starts_with("=== All Stored Passwords (2 entries) ===\n"));
        assert!(output.contains("1. Name: GitHub\n   Username: alice\n   Password: p1\n"));
        assert!(output.contains("2. Name: Bank\n"));
        assert_eq!(output.matches(&"-".repeat(60)).count(), 2);
    }

    #[test]
    fn test_format_name_list() {
        let entries = sample();
        let refs: Vec<&Entry> = entries.iter().collect();
        let output = format_name_list(&refs);

        assert_eq!(
            output,
            "=== Stored Services (2 entries) ===\n1. GitHub (alice)\n2. Bank (bob)\n"
        );
    }

    #[test]
    fn test_format_search_results() {
        let entries = sample();
        let output = format_search_results("git", &[&entries[0]]);
        assert_eq!(
            output,
            "=== Search Results for 'git' ===\n1. GitHub - alice - p1\n"
        );

        assert_eq!(
            format_search_results("zzz", &[]),
            "No entries found for 'zzz'\n"
        );
    }

    #[test]
    fn test_format_entry() {
        let entry = Entry::new("GitHub", "alice", "p1");
        assert_eq!(
            format_entry(&entry),
            "Found entry for 'GitHub':\nUsername: alice\nPassword: p1\n"
        );
    }

    #[test]
    fn test_format_load_status() {
        let path = Path::new("passwords.json");
        assert!(format_load_status(&LoadStatus::Missing, path).contains("Starting fresh"));
        assert_eq!(
            format_load_status(&LoadStatus::Loaded(3), path),
            "Loaded 3 entries from passwords.json\n"
        );
        assert!(format_load_status(&LoadStatus::Corrupt("bad".into()), path)
            .starts_with("Error loading data: bad"));
    }
}
