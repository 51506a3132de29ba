use crate::translate::RequestId;
use crate::types::EditorAction;

/// The host's text field.
pub trait TextSink {
    /// Replaces the uncommitted composition span.
    fn set_preview(&mut self, text: &str);
    /// Appends text permanently, clearing any preview.
    fn commit(&mut self, text: &str);
    fn delete_backward(&mut self, count: usize);
    fn send_editor_action(&mut self, action: EditorAction);

    /// Up to `max_chars` characters before the cursor, when the host can
    /// read them back. Used as translation source in direct mode.
    fn text_before_cursor(&self, _max_chars: usize) -> Option<String> {
        None
    }
}

/// A translation backend.
///
/// Requests are fire-and-forget; the host resolves them on its own
/// schedule and reports back through `Controller::translation_finished`
/// with the same id.
pub trait Translator {
    fn request(&mut self, id: RequestId, text: &str);
}
