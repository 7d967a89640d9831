//! Output formatting utilities

use crate::application::EditorSession;
use crate::domain::{JournalEntry, SortMode};
use chrono::Local;

/// Body lines shown under each list row
const PREVIEW_LINES: usize = 3;

pub const BANNER: &str = "Journali\nYour thoughts, your story\n";

pub const EMPTY_STATE: &str =
    "Begin Your Journal\nCraft your personal diary, type 'new' to begin.\n";

pub const HELP: &str = "\
Commands:
  list                  Show journals (numbered)
  new                   Start a new journal
  open <n>              Edit journal <n>
  title <text>          Set the title of the open journal
  body <text>           Replace the body of the open journal
  body+ <text>          Append a line to the body
  save                  Save the open journal
  cancel                Close the open journal without saving
  bookmark <n>          Toggle the bookmark on journal <n>
  delete <n>            Delete journal <n> (asks for confirmation)
  search [text]         Filter by text; no text clears the search
  sort <date|bookmark>  Order by entry date or bookmarks first
  status                Show search, sort and counts
  help                  Show this help
  quit                  Leave
";

/// Format the entry list for display, numbered from 1
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let mut output = String::new();
    for (index, entry) in entries.iter().enumerate() {
        output.push_str(&format_entry_row(index + 1, entry));
    }
    output
}

/// Format one list row with its body preview
pub fn format_entry_row(number: usize, entry: &JournalEntry) -> String {
    let marker = if entry.is_bookmarked { "[*]" } else { "[ ]" };
    let mut output = format!(
        "{:>2}. {} {}  {}\n",
        number,
        marker,
        entry.display_title(),
        format_date(entry)
    );

    if entry.body.is_empty() {
        output.push_str("    (no text)\n");
    } else {
        for line in entry.body.lines().take(PREVIEW_LINES) {
            output.push_str(&format!("    {}\n", line));
        }
    }
    output
}

/// Date in local time, dd/mm/yyyy
pub fn format_date(entry: &JournalEntry) -> String {
    entry
        .date
        .with_timezone(&Local)
        .format("%d/%m/%Y")
        .to_string()
}

/// Format the draft currently open in the editor
pub fn format_draft(editor: &EditorSession) -> String {
    let title = if editor.title().is_empty() {
        "(untitled)"
    } else {
        editor.title()
    };
    let mut output = format!("Title: {}\n", title);
    if editor.body().is_empty() {
        output.push_str("Body:  (empty)\n");
    } else {
        output.push_str("Body:\n");
        for line in editor.body().lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }
    output
}

/// Format search/sort state and counts
pub fn format_status(total: usize, shown: usize, search_text: &str, sort_mode: SortMode) -> String {
    let search = if search_text.trim().is_empty() {
        "(none)".to_string()
    } else {
        format!("'{}'", search_text.trim())
    };
    format!(
        "Entries: {} (showing {})\nSort: {}\nSearch: {}\n",
        total,
        shown,
        sort_mode.label(),
        search
    )
}
