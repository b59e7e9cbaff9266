/// A single line of the chat transcript
///
/// The transcript is append-only for the lifetime of the page; entries are
/// never edited or removed once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    User(String),
    Assistant(String),
    Error(String),
}

impl TranscriptEntry {
    /// Prefix shown before the line text
    pub fn label(&self) -> &'static str {
        match self {
            TranscriptEntry::User(_) => "You",
            TranscriptEntry::Assistant(_) => "GPT",
            TranscriptEntry::Error(_) => "Error",
        }
    }

    /// CSS class for the rendered line
    pub fn class_name(&self) -> &'static str {
        match self {
            TranscriptEntry::User(_) => "user",
            TranscriptEntry::Assistant(_) => "assistant",
            TranscriptEntry::Error(_) => "error",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TranscriptEntry::User(text)
            | TranscriptEntry::Assistant(text)
            | TranscriptEntry::Error(text) => text,
        }
    }
}

/// Binding to the elements the controller reads and writes
///
/// Stands in for direct element lookups so the controller can be exercised
/// without a live document. The DOM implementation lives in `askpane-wasm`;
/// tests use a recording implementation.
pub trait View {
    /// Current value of the search input field
    fn query_input(&self) -> String;

    fn set_query_input(&self, value: &str);

    /// Replace the result region content. Text, never markup.
    fn set_result_text(&self, text: &str);

    /// Current value of the chat input field
    fn message_input(&self) -> String;

    fn clear_message_input(&self);

    fn append_transcript(&self, entry: TranscriptEntry);

    fn scroll_transcript_to_end(&self);

    /// True iff the panel's inline display state is exactly "none".
    /// An unset inline state counts as visible.
    fn panel_hidden(&self) -> bool;

    fn set_panel_hidden(&self, hidden: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_labels_and_classes() {
        let user = TranscriptEntry::User("hi".to_string());
        assert_eq!(user.label(), "You");
        assert_eq!(user.class_name(), "user");

        let assistant = TranscriptEntry::Assistant("hello".to_string());
        assert_eq!(assistant.label(), "GPT");
        assert_eq!(assistant.class_name(), "assistant");

        let error = TranscriptEntry::Error("request failed".to_string());
        assert_eq!(error.label(), "Error");
        assert_eq!(error.text(), "request failed");
    }
}
