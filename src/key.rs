use unicode_segmentation::UnicodeSegmentation;

use crate::layout::{LETTER_PAGE, NUMBER_PAGE, SYMBOL_PAGE};
use crate::rules;

/// What a key does when it is tapped rather than gestured.
///
/// Labels are platform-agnostic strings from the layout provider; hosts
/// map their button identifiers to these labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert the label text.
    Literal(String),
    /// Toggle one-shot shift.
    ToggleShift,
    /// Delete backward; repeats while held.
    DeleteBackward,
    /// Insert a single space.
    Space,
    /// Newline, or submit the scratch buffer in translation mode.
    Enter,
    /// Switch to the given layout page.
    SwitchPage(u8),
}

impl KeyAction {
    pub fn from_label(label: &str) -> Self {
        match label {
            "⇧" => KeyAction::ToggleShift,
            "⌫" => KeyAction::DeleteBackward,
            "SPACE" => KeyAction::Space,
            "↵" => KeyAction::Enter,
            "1/3" => KeyAction::SwitchPage(NUMBER_PAGE),
            "2/3" => KeyAction::SwitchPage(SYMBOL_PAGE),
            "3/3" | "abc" => KeyAction::SwitchPage(LETTER_PAGE),
            other => KeyAction::Literal(other.to_string()),
        }
    }
}

/// A key as seen by the controller: its label plus its tap action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDefinition {
    label: String,
    action: KeyAction,
}

impl KeyDefinition {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let action = KeyAction::from_label(&label);
        Self { label, action }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &KeyAction {
        &self.action
    }

    pub fn is_delete(&self) -> bool {
        matches!(self.action, KeyAction::DeleteBackward)
    }

    /// The base letter this key composes from, when its label is a single
    /// character from the supported set (case-insensitive).
    pub fn base_letter(&self) -> Option<char> {
        let mut chars = self.label.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let lower = first.to_lowercase().next().unwrap_or(first);
        rules::is_supported_base(lower).then_some(first)
    }

    /// Whether holding this key opens gesture composition on `page`.
    pub fn is_gesture_eligible(&self, page: u8) -> bool {
        page == LETTER_PAGE && self.base_letter().is_some()
    }
}

/// Whether `text` is exactly one user-perceived character.
pub fn is_single_grapheme(text: &str) -> bool {
    let mut graphemes = text.graphemes(true);
    graphemes.next().is_some() && graphemes.next().is_none()
}
