pub mod classify;
pub mod compose;
pub mod config;
pub mod controller;
pub mod key;
pub mod layout;
pub mod output;
pub mod rules;
pub mod session;
pub mod symbol;
pub mod timer;
pub mod traits;
pub mod translate;
pub mod types;

pub use crate::classify::{classify_delta, classify_stroke};
pub use crate::compose::{compose, resolve, tone_class};
pub use crate::config::{ConfigError, GestureConfig};
pub use crate::controller::{Controller, ControllerBuilder, ControllerSnapshot};
pub use crate::key::{KeyAction, KeyDefinition};
pub use crate::output::{DirectText, OutputRouter, OutputTarget, ScratchBuffer};
pub use crate::session::GestureSession;
pub use crate::symbol::{DirectionalSymbol, SymbolSet};
pub use crate::timer::{Timer, TimerKind};
pub use crate::traits::{TextSink, Translator};
pub use crate::translate::{PanelStatus, RequestId, TranslateError, TranslationPanel};
pub use crate::types::{EditorAction, HoldPhase, OutputMode, Point};
