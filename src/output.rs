use unicode_segmentation::UnicodeSegmentation;

use crate::traits::TextSink;
use crate::types::{EditorAction, OutputMode};

/// A destination for composed text.
pub trait OutputTarget {
    /// Shows an uncommitted composition.
    fn preview(&mut self, sink: &mut dyn TextSink, text: &str);
    fn commit(&mut self, sink: &mut dyn TextSink, text: &str);
    fn delete_backward(&mut self, sink: &mut dyn TextSink);
    /// Handles Enter. `translated` is the translation currently displayed,
    /// if any. Returns `true` when pending input was submitted to the sink.
    fn enter(&mut self, sink: &mut dyn TextSink, translated: Option<&str>) -> bool;
    /// The text a translator should see right now.
    fn source_text(&self, sink: &dyn TextSink, max_chars: usize) -> Option<String>;
}

/// Writes straight to the host text field.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectText;

impl OutputTarget for DirectText {
    fn preview(&mut self, sink: &mut dyn TextSink, text: &str) {
        sink.set_preview(text);
    }

    fn commit(&mut self, sink: &mut dyn TextSink, text: &str) {
        sink.commit(text);
    }

    fn delete_backward(&mut self, sink: &mut dyn TextSink) {
        sink.delete_backward(1);
    }

    fn enter(&mut self, sink: &mut dyn TextSink, _translated: Option<&str>) -> bool {
        sink.send_editor_action(EditorAction::Newline);
        false
    }

    fn source_text(&self, sink: &dyn TextSink, max_chars: usize) -> Option<String> {
        sink.text_before_cursor(max_chars)
    }
}

/// Collects text for translation instead of writing it to the field.
///
/// No preview is shown while composing into the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScratchBuffer {
    text: String,
}

impl ScratchBuffer {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Removes the last grapheme cluster, so a composed letter built from a
    /// base and combining marks goes away in one step.
    pub fn pop_grapheme(&mut self) -> Option<String> {
        let (start, last) = self.text.grapheme_indices(true).next_back()?;
        let last = last.to_string();
        self.text.truncate(start);
        Some(last)
    }
}

impl OutputTarget for ScratchBuffer {
    fn preview(&mut self, _sink: &mut dyn TextSink, _text: &str) {}

    fn commit(&mut self, _sink: &mut dyn TextSink, text: &str) {
        self.text.push_str(text);
    }

    fn delete_backward(&mut self, _sink: &mut dyn TextSink) {
        self.pop_grapheme();
    }

    fn enter(&mut self, sink: &mut dyn TextSink, translated: Option<&str>) -> bool {
        let submitted = translated.unwrap_or(self.text.as_str());
        sink.commit(submitted);
        self.text.clear();
        true
    }

    fn source_text(&self, _sink: &dyn TextSink, _max_chars: usize) -> Option<String> {
        Some(self.text.clone())
    }
}

/// Picks the active output target from the mode.
#[derive(Debug, Clone, Default)]
pub struct OutputRouter {
    mode: OutputMode,
    direct: DirectText,
    scratch: ScratchBuffer,
}

impl OutputRouter {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Switches targets. The scratch buffer starts empty on every switch.
    pub fn set_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
        self.scratch.clear();
    }

    pub fn scratch(&self) -> &ScratchBuffer {
        &self.scratch
    }

    pub fn target(&mut self) -> &mut dyn OutputTarget {
        match self.mode {
            OutputMode::Direct => &mut self.direct,
            OutputMode::Translation => &mut self.scratch,
        }
    }

    pub fn source_text(&self, sink: &dyn TextSink, max_chars: usize) -> Option<String> {
        match self.mode {
            OutputMode::Direct => self.direct.source_text(sink, max_chars),
            OutputMode::Translation => self.scratch.source_text(sink, max_chars),
        }
    }
}
