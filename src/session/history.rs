// Text for the history and clear-last commands
//
// Shared by the command line (/history, /clearresult) and the interactive
// session so both print the same thing.

use crate::store::{LogContents, ResultLog, ResultRecord};

/// Render every record, or a notice when there is nothing to show
pub fn render(contents: &LogContents) -> String {
    let records = match contents {
        LogContents::Missing => return "No history yet. Run a search first!".to_string(),
        LogContents::Unreadable(reason) => {
            return format!("Warning: history could not be read ({}).", reason)
        }
        LogContents::Records(records) if records.is_empty() => {
            return "No history yet. Run a search first!".to_string()
        }
        LogContents::Records(records) => records,
    };

    let mut out = String::new();
    out.push_str("\nSearch history:\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format_record(i + 1, record));
        out.push('\n');
    }
    out.push_str(&"=".repeat(60));

    out
}

/// One history line: index, question, method, result, steps, complexities
pub fn format_record(index: usize, record: &ResultRecord) -> String {
    let mut line = format!(
        "{:3}. {} | {} | {} | steps: {} | time: {} | space: {}",
        index,
        record.question,
        record.method,
        record.found,
        record.steps,
        record.time_complexity,
        record.space_complexity
    );

    if let Some(at) = record.recorded_at {
        line.push_str(&format!(" | {}", at.format("%Y-%m-%d %H:%M:%S")));
    }

    line
}

/// Remove the newest record and describe what happened
pub fn clear_last(log: &ResultLog) -> String {
    match log.remove_last() {
        Ok(Some(record)) => format!("Cleared last result: {}", record.summary()),
        Ok(None) => "Nothing to clear.".to_string(),
        Err(e) => {
            tracing::warn!(path = %log.path().display(), error = %e, "clearing last result failed");
            format!("Warning: {}", e.user_message())
        }
    }
}
