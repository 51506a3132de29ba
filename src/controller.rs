use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, debug_span, trace};

use crate::classify::classify_stroke;
use crate::compose::compose;
use crate::config::GestureConfig;
use crate::key::{KeyAction, KeyDefinition, is_single_grapheme};
use crate::layout::LETTER_PAGE;
use crate::output::{OutputRouter, ScratchBuffer};
use crate::session::GestureSession;
use crate::symbol::DirectionalSymbol;
use crate::timer::{Timer, TimerKind};
use crate::traits::{TextSink, Translator};
use crate::translate::{RequestId, TranslateError, TranslationPanel};
use crate::types::{HoldPhase, OutputMode, Point};

/// The key currently held, with the session and timer it owns.
#[derive(Debug)]
struct Hold {
    key: KeyDefinition,
    session: GestureSession,
    timer: Option<Timer>,
}

#[derive(Debug)]
enum HoldState {
    Idle,
    Held(Hold),
    Gesturing(Hold),
}

impl HoldState {
    fn phase(&self) -> HoldPhase {
        match self {
            HoldState::Idle => HoldPhase::Idle,
            HoldState::Held(_) => HoldPhase::Held,
            HoldState::Gesturing(_) => HoldPhase::Gesturing,
        }
    }

    fn hold(&self) -> Option<&Hold> {
        match self {
            HoldState::Idle => None,
            HoldState::Held(hold) | HoldState::Gesturing(hold) => Some(hold),
        }
    }

    fn hold_mut(&mut self) -> Option<&mut Hold> {
        match self {
            HoldState::Idle => None,
            HoldState::Held(hold) | HoldState::Gesturing(hold) => Some(hold),
        }
    }
}

/// The key-hold state machine.
///
/// All entry points run on the host's event queue. Time is passed in
/// explicitly; timers due at or before `now` fire before a key event is
/// handled, and the host calls [`Controller::poll`] to fire them in between.
pub struct Controller {
    config: GestureConfig,
    state: HoldState,
    page: u8,
    shifted: bool,
    router: OutputRouter,
    panel: TranslationPanel,
    translator: Option<Box<dyn Translator>>,
    surface_origin: Option<Point>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("page", &self.page)
            .field("shifted", &self.shifted)
            .field("router", &self.router)
            .field("panel", &self.panel)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSnapshot {
    pub phase: HoldPhase,
    pub held_key: Option<String>,
    pub symbols: Vec<DirectionalSymbol>,
    pub armed_timer: Option<TimerKind>,
    pub page: u8,
    pub shifted: bool,
    pub mode: OutputMode,
    pub scratch: String,
    pub panel: String,
}

pub struct ControllerBuilder {
    config: GestureConfig,
    mode: OutputMode,
    translator: Option<Box<dyn Translator>>,
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self {
            config: GestureConfig::default(),
            mode: OutputMode::Direct,
            translator: None,
        }
    }
}

impl ControllerBuilder {
    pub fn config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    pub fn build(self) -> Controller {
        let mut panel = TranslationPanel::default();
        panel.set_idle(self.mode == OutputMode::Translation);
        Controller {
            config: self.config,
            state: HoldState::Idle,
            page: LETTER_PAGE,
            shifted: false,
            router: OutputRouter::new(self.mode),
            panel,
            translator: self.translator,
            surface_origin: None,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        ControllerBuilder::default().build()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::default()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        let hold = self.state.hold();
        ControllerSnapshot {
            phase: self.state.phase(),
            held_key: hold.map(|h| h.key.label().to_string()),
            symbols: hold.map(|h| h.session.symbols().to_vec()).unwrap_or_default(),
            armed_timer: hold.and_then(|h| h.timer.map(|t| t.kind())),
            page: self.page,
            shifted: self.shifted,
            mode: self.router.mode(),
            scratch: self.router.scratch().as_str().to_string(),
            panel: self.panel.display(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn phase(&self) -> HoldPhase {
        self.state.phase()
    }

    pub fn is_surface_visible(&self) -> bool {
        matches!(self.state, HoldState::Gesturing(_))
    }

    pub fn page(&self) -> u8 {
        self.page
    }

    pub fn is_shifted(&self) -> bool {
        self.shifted
    }

    pub fn output_mode(&self) -> OutputMode {
        self.router.mode()
    }

    pub fn scratch(&self) -> &ScratchBuffer {
        self.router.scratch()
    }

    pub fn panel(&self) -> &TranslationPanel {
        &self.panel
    }

    /// When the host should call [`Controller::poll`] next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.hold()?.timer.map(|t| t.deadline())
    }

    /// A key went down. Any key still held is finalized first, so at most
    /// one session is ever open.
    pub fn key_down(&mut self, label: &str, now: Instant, sink: &mut dyn TextSink) {
        self.poll(now, sink);
        let _span = debug_span!("key_down", label).entered();

        if !matches!(self.state, HoldState::Idle) {
            debug!("key down while another key is held, finalizing it first");
            self.finalize(sink);
        }

        let key = KeyDefinition::new(label);
        let timer = if key.is_delete() {
            Some(Timer::arm(TimerKind::RepeatDelete, now, self.config.repeat_delay()))
        } else if key.is_gesture_eligible(self.page) {
            Some(Timer::arm(TimerKind::RevealSurface, now, self.config.reveal_delay()))
        } else {
            None
        };
        if let Some(timer) = &timer {
            trace!(kind = ?timer.kind(), "timer armed");
        }

        let is_delete = key.is_delete();
        let eligible = key.is_gesture_eligible(self.page);
        self.state = HoldState::Held(Hold {
            key,
            session: GestureSession::new(),
            timer,
        });

        if is_delete {
            self.direct_action(&KeyAction::DeleteBackward, sink);
        } else if eligible {
            self.refresh_preview(sink);
        }
    }

    /// The held key was released.
    pub fn key_up(&mut self, label: &str, now: Instant, sink: &mut dyn TextSink) {
        self.poll(now, sink);
        let _span = debug_span!("key_up", label).entered();
        if self.holds(label) {
            self.finalize(sink);
        }
    }

    /// The touch on the held key was canceled by the host. Finalizes the
    /// same way as a release.
    pub fn key_cancel(&mut self, label: &str, now: Instant, sink: &mut dyn TextSink) {
        self.poll(now, sink);
        let _span = debug_span!("key_cancel", label).entered();
        if self.holds(label) {
            self.finalize(sink);
        }
    }

    /// A finger touched the gesture surface.
    pub fn surface_touch_down(&mut self, at: Point) {
        if self.is_surface_visible() {
            self.surface_origin = Some(at);
        }
    }

    /// A finger left the gesture surface. Without a matching touch down the
    /// stroke has zero length and counts as a tap.
    pub fn surface_touch_up(&mut self, at: Point, sink: &mut dyn TextSink) {
        let start = self.surface_origin.take().unwrap_or(at);
        self.surface_stroke(start, at, sink);
    }

    /// Records one completed stroke on the gesture surface and refreshes the
    /// preview. Ignored while the surface is hidden.
    pub fn surface_stroke(&mut self, start: Point, end: Point, sink: &mut dyn TextSink) {
        let _span = debug_span!("surface_stroke").entered();
        let HoldState::Gesturing(hold) = &mut self.state else {
            trace!("stroke ignored, surface hidden");
            return;
        };
        let symbol = classify_stroke(start, end, self.config.tap_threshold);
        debug!(?symbol, dx = end.x - start.x, dy = end.y - start.y, "stroke classified");
        hold.session.append(symbol);
        self.refresh_preview(sink);
    }

    /// Fires every timer due at or before `now`.
    pub fn poll(&mut self, now: Instant, sink: &mut dyn TextSink) {
        let interval = self.config.repeat_interval().max(Duration::from_millis(1));
        loop {
            let Some(hold) = self.state.hold_mut() else {
                return;
            };
            let Some(timer) = hold.timer.as_mut() else {
                return;
            };
            if !timer.is_due(now) {
                return;
            }
            match timer.kind() {
                TimerKind::RevealSurface => {
                    hold.timer = None;
                    self.reveal_surface();
                }
                TimerKind::RepeatDelete => {
                    timer.rearm(interval);
                    trace!("delete repeat fired");
                    self.direct_action(&KeyAction::DeleteBackward, sink);
                }
            }
        }
    }

    /// Switches between writing to the text field and collecting text for
    /// translation. The scratch buffer is emptied either way. A key held
    /// across the switch keeps its session; its preview moves to the new
    /// target.
    pub fn set_output_mode(&mut self, mode: OutputMode, sink: &mut dyn TextSink) {
        debug!(?mode, "output mode");
        if self.state.hold().is_some() {
            self.router.target().preview(sink, "");
        }
        self.router.set_mode(mode);
        self.panel.set_idle(mode == OutputMode::Translation);
        self.refresh_preview(sink);
    }

    /// The host cursor or selection moved. Re-translates the text now
    /// before the cursor; the hold and shift state are left alone.
    pub fn selection_changed(&mut self, sink: &mut dyn TextSink) {
        trace!("selection changed");
        self.request_translation(sink);
    }

    /// The host finished a translation request.
    pub fn translation_finished(&mut self, id: RequestId, result: Result<String, TranslateError>) {
        match &result {
            Ok(_) => debug!(?id, "translation finished"),
            Err(err) => debug!(?id, %err, "translation failed"),
        }
        self.panel.finish(result);
    }

    /// The host started editing a new field.
    pub fn start_input(&mut self, sink: &mut dyn TextSink) {
        self.finalize(sink);
        self.shifted = false;
        self.request_translation(sink);
    }

    fn holds(&self, label: &str) -> bool {
        self.state.hold().is_some_and(|h| h.key.label() == label)
    }

    fn reveal_surface(&mut self) {
        if let HoldState::Held(hold) = std::mem::replace(&mut self.state, HoldState::Idle) {
            debug!(key = hold.key.label(), "gesture surface shown");
            self.state = HoldState::Gesturing(hold);
        }
    }

    /// Ends the current hold, dropping its session and canceling its timer.
    fn finalize(&mut self, sink: &mut dyn TextSink) {
        self.surface_origin = None;
        let (hold, was_gesturing) = match std::mem::replace(&mut self.state, HoldState::Idle) {
            HoldState::Idle => return,
            HoldState::Held(hold) => (hold, false),
            HoldState::Gesturing(hold) => (hold, true),
        };
        let Hold {
            key,
            session,
            timer,
        } = hold;
        if let Some(timer) = timer {
            trace!(kind = ?timer.kind(), "timer canceled");
        }

        if key.is_delete() {
            return;
        }
        match key.base_letter() {
            Some(base) if was_gesturing && key.is_gesture_eligible(self.page) => {
                self.commit_gesture(base, &session, sink);
            }
            _ => self.direct_action(key.action(), sink),
        }
    }

    fn commit_gesture(&mut self, base: char, session: &GestureSession, sink: &mut dyn TextSink) {
        let text = compose(base, session.symbols(), self.shifted);
        debug!(%text, symbols = ?session.symbols(), "gesture committed");
        self.router.target().commit(sink, &text);
        self.shifted = false;
        self.request_translation(sink);
    }

    fn direct_action(&mut self, action: &KeyAction, sink: &mut dyn TextSink) {
        match action {
            KeyAction::SwitchPage(page) => {
                debug!(page, "page switched");
                self.page = *page;
                return;
            }
            KeyAction::ToggleShift => self.shifted = !self.shifted,
            KeyAction::DeleteBackward => self.router.target().delete_backward(sink),
            KeyAction::Space => self.router.target().commit(sink, " "),
            KeyAction::Enter => {
                let translated = self.panel.translated();
                if self.router.target().enter(sink, translated) {
                    self.panel.set_idle(true);
                }
            }
            KeyAction::Literal(label) => {
                let text = if self.shifted && is_single_grapheme(label) {
                    label.to_uppercase()
                } else {
                    label.clone()
                };
                self.router.target().commit(sink, &text);
                self.shifted = false;
            }
        }
        self.request_translation(sink);
    }

    fn refresh_preview(&mut self, sink: &mut dyn TextSink) {
        let Some(hold) = self.state.hold() else {
            return;
        };
        let Some(base) = hold.key.base_letter() else {
            return;
        };
        let text = compose(base, hold.session.symbols(), self.shifted);
        trace!(%text, "preview");
        self.router.target().preview(sink, &text);
    }

    fn request_translation(&mut self, sink: &mut dyn TextSink) {
        let Some(translator) = self.translator.as_mut() else {
            return;
        };
        let source = self
            .router
            .source_text(&*sink, self.config.translation_context_chars)
            .unwrap_or_default();
        if source.trim().is_empty() {
            self.panel.set_idle(self.router.mode() == OutputMode::Translation);
            return;
        }
        let id = self.panel.begin();
        debug!(?id, chars = source.chars().count(), "translation requested");
        translator.request(id, &source);
    }
}
