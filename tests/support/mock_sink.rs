use gesture_keys::{EditorAction, TextSink};
use ropey::Rope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Preview(String),
    Commit(String),
    Delete(usize),
    Action(EditorAction),
}

/// Text field stand-in that records every call it receives.
#[derive(Debug, Default)]
pub struct MockSink {
    rope: Rope,
    preview: String,
    pub events: Vec<SinkEvent>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::default()
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn commits(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Commit(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn previews(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Preview(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn delete_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Delete(_)))
            .count()
    }
}

impl TextSink for MockSink {
    fn set_preview(&mut self, text: &str) {
        self.preview = text.to_string();
        self.events.push(SinkEvent::Preview(text.to_string()));
    }

    fn commit(&mut self, text: &str) {
        self.preview.clear();
        let end = self.rope.len_chars();
        self.rope.insert(end, text);
        self.events.push(SinkEvent::Commit(text.to_string()));
    }

    fn delete_backward(&mut self, count: usize) {
        let end = self.rope.len_chars();
        self.rope.remove(end.saturating_sub(count)..end);
        self.events.push(SinkEvent::Delete(count));
    }

    fn send_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::Newline => {
                let end = self.rope.len_chars();
                self.rope.insert(end, "\n");
            }
        }
        self.events.push(SinkEvent::Action(action));
    }

    fn text_before_cursor(&self, max_chars: usize) -> Option<String> {
        let end = self.rope.len_chars();
        Some(self.rope.slice(end.saturating_sub(max_chars)..end).to_string())
    }
}
