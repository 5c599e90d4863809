//! Plain-text export report

use crate::domain::entry::Entry;

pub const REPORT_TITLE: &str = "Password Manager Export";

/// Render entries as a human-readable report.
/// The output is one-way; it cannot be imported again.
pub fn render_report<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut output = String::new();
    output.push_str(REPORT_TITLE);
    output.push('\n');
    output.push_str(&"=".repeat(50));
    output.push_str("\n\n");

    for (i, entry) in entries.into_iter().enumerate() {
        output.push_str(&format!("{}. Service: {}\n", i + 1, entry.display_name()));
        output.push_str(&format!("   Username: {}\n", entry.username()));
        output.push_str(&format!("   Password: {}\n", entry.secret()));
        output.push_str(&"-".repeat(30));
        output.push('\n');
    }

    output
}
