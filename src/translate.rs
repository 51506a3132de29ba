use std::fmt;

/// Identifies one translation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Why a translation did not produce text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("translation model is not available")]
    ModelUnavailable,
    #[error("translation timed out")]
    TimedOut,
    #[error("{0}")]
    Failed(String),
}

/// What the translation panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelStatus {
    /// Direct mode with nothing to translate.
    Idle,
    /// Translation mode with an empty scratch buffer.
    Prompt,
    /// A request is in flight.
    Pending(RequestId),
    Translated(String),
    Failed(String),
}

impl fmt::Display for PanelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelStatus::Idle => f.write_str(""),
            PanelStatus::Prompt => f.write_str("Type to translate..."),
            PanelStatus::Pending(_) => f.write_str("Translating..."),
            PanelStatus::Translated(text) => f.write_str(text),
            PanelStatus::Failed(reason) => write!(f, "Error: {reason}"),
        }
    }
}

/// Display state for translation results.
///
/// Results never reach the text sink on their own; only an explicit Enter in
/// translation mode moves a translation into the text field.
#[derive(Debug, Clone)]
pub struct TranslationPanel {
    status: PanelStatus,
    next_id: u64,
}

impl Default for TranslationPanel {
    fn default() -> Self {
        Self {
            status: PanelStatus::Idle,
            next_id: 1,
        }
    }
}

impl TranslationPanel {
    pub fn status(&self) -> &PanelStatus {
        &self.status
    }

    /// The text to display.
    pub fn display(&self) -> String {
        self.status.to_string()
    }

    /// The last successful translation, if one is showing.
    pub fn translated(&self) -> Option<&str> {
        match &self.status {
            PanelStatus::Translated(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    /// Allocates an id for a new request and marks it pending.
    pub fn begin(&mut self) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.status = PanelStatus::Pending(id);
        id
    }

    /// Shows a result. Results overwrite whatever is displayed, in arrival
    /// order, even when a newer request is still pending.
    pub fn finish(&mut self, result: Result<String, TranslateError>) {
        self.status = match result {
            Ok(text) => PanelStatus::Translated(text),
            Err(err) => PanelStatus::Failed(err.to_string()),
        };
    }

    pub fn set_idle(&mut self, prompt: bool) {
        self.status = if prompt {
            PanelStatus::Prompt
        } else {
            PanelStatus::Idle
        };
    }
}
