// app state for the tui

use crate::core::{Classification, Detection, Language, LlmVerification};
use crate::tui::theme::{Theme, ThemeKind, detect_theme};
use std::time::{Duration, Instant};

// auto-detect fires only for settled input of at least this many chars
pub const DETECT_MIN_CHARS: usize = 5;
pub const DETECT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Basic,
    Transformer,
}

impl Tab {
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Basic => "FastText",
            Tab::Transformer => "Transformer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Input,
    Result,
    Verify,
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Themes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Ok,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

// one request lane: idle -> busy -> resolved | failed
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lane<T> {
    #[default]
    Idle,
    Busy,
    Resolved(T),
    Failed(String),
}

impl<T> Lane<T> {
    pub fn is_busy(&self) -> bool {
        matches!(self, Lane::Busy)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Lane::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Lane::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// a detection waiting out the debounce window; scheduling a new one
// always replaces the previous pending task
#[derive(Debug, Clone)]
pub struct PendingDetection {
    pub text: String,
    pub due: Instant,
}

pub struct App {
    pub running: bool,
    pub mode: Mode,
    pub panel: Panel,
    pub popup: Popup,
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    pub tab: Tab,

    // prompt input
    pub input: String,
    pub input_cursor: usize,
    pub validation_error: Option<String>,

    // request lanes; the llm lane only exists on top of a resolved check
    pub check: Lane<Classification>,
    pub llm: Lane<LlmVerification>,
    checked_text: Option<String>,

    // language handling (transformer tab)
    pub auto_detect: bool,
    pub detected_language: Option<Language>,
    pub selected_language: Option<Language>,
    pub pending_detection: Option<PendingDetection>,
    pub detecting: bool,

    pub latency_ms: Option<u64>,
    check_start: Option<Instant>,

    // logs
    pub logs: Vec<LogEntry>,
    pub log_scroll: usize,
    pub verify_scroll: usize,
    pub theme_scroll: usize,

    // history
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl App {
    pub fn new(base_url: &str) -> Self {
        let theme_kind = detect_theme();

        let mut app = Self {
            running: true,
            mode: Mode::Normal,
            panel: Panel::Input,
            popup: Popup::None,
            theme_kind,
            theme: Theme::from_kind(theme_kind),
            tab: Tab::Basic,
            input: String::new(),
            input_cursor: 0,
            validation_error: None,
            check: Lane::Idle,
            llm: Lane::Idle,
            checked_text: None,
            auto_detect: false,
            detected_language: None,
            selected_language: None,
            pending_detection: None,
            detecting: false,
            latency_ms: None,
            check_start: None,
            logs: Vec::new(),
            log_scroll: 0,
            verify_scroll: 0,
            theme_scroll: theme_kind.index(),
            history: Vec::new(),
            history_index: None,
        };

        app.log(LogLevel::Ok, format!("endpoint {base_url}"));
        app.log(LogLevel::Info, format!("tab: {}", app.tab.name()));

        app
    }

    pub fn log(&mut self, level: LogLevel, message: String) {
        self.logs.push(LogEntry { level, message });
        // ask for the bottom; the render pass clamps to its viewport
        self.log_scroll = self.logs.len();
    }

    // called with the log panel's inner height before rendering
    pub fn clamp_log_scroll(&mut self, viewport: usize) {
        let max = self.logs.len().saturating_sub(viewport);
        if self.log_scroll > max {
            self.log_scroll = max;
        }
    }

    // --- submission -------------------------------------------------------

    // validates and arms the check lane; the caller issues the request
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            self.validation_error = Some("Please enter a word to check".to_string());
            return None;
        }
        let text = trimmed.to_string();

        self.validation_error = None;
        self.check = Lane::Busy;
        // the old verification was computed against the prior input
        self.llm = Lane::Idle;
        self.verify_scroll = 0;
        self.checked_text = Some(text.clone());
        self.latency_ms = None;
        self.check_start = Some(Instant::now());

        self.history.push(text.clone());
        self.history_index = None;

        Some(text)
    }

    pub fn set_check_result(&mut self, result: Classification) {
        if let Some(start) = self.check_start.take() {
            self.latency_ms = Some(start.elapsed().as_millis() as u64);
        }
        let verdict = if result.is_profane { "profane" } else { "clean" };
        self.log(
            LogLevel::Ok,
            format!(
                "classified {verdict} ({}ms)",
                self.latency_ms.unwrap_or(0)
            ),
        );
        self.check = Lane::Resolved(result);
    }

    // envelope failures carry the server's message and are shown verbatim;
    // transport faults only reach the log panel
    pub fn fail_check(&mut self, err: crate::Error) {
        if let Some(start) = self.check_start.take() {
            self.latency_ms = Some(start.elapsed().as_millis() as u64);
        }
        let message = match err {
            crate::Error::Api(message) => message,
            other => {
                self.log(LogLevel::Error, other.to_string());
                "Failed to check word. Please try again.".to_string()
            }
        };
        self.log(LogLevel::Error, message.clone());
        self.check = Lane::Failed(message);
    }

    // --- llm verification -------------------------------------------------

    // the llm lane is only enterable once a check has resolved
    pub fn verify_target(&self) -> Option<String> {
        if self.check.result().is_none() || self.llm.is_busy() {
            return None;
        }
        self.checked_text.clone()
    }

    pub fn begin_verify(&mut self) {
        self.llm = Lane::Busy;
        self.verify_scroll = 0;
    }

    pub fn set_llm_result(&mut self, result: LlmVerification) {
        self.log(LogLevel::Ok, "llm verification done".to_string());
        self.llm = Lane::Resolved(result);
    }

    pub fn fail_llm(&mut self, err: crate::Error) {
        let message = match err {
            crate::Error::Api(message) => message,
            other => {
                self.log(LogLevel::Error, other.to_string());
                "Failed to verify with LLM. Please try again.".to_string()
            }
        };
        self.log(LogLevel::Error, message.clone());
        self.llm = Lane::Failed(message);
    }

    // --- language detection -----------------------------------------------

    pub fn toggle_auto_detect(&mut self) {
        self.auto_detect = !self.auto_detect;
        if self.auto_detect {
            self.input_changed();
        } else {
            self.pending_detection = None;
            self.detected_language = None;
        }
    }

    pub fn cycle_language(&mut self) {
        self.selected_language = match self.selected_language {
            None => Some(Language::English),
            Some(Language::English) => Some(Language::Indic),
            Some(Language::Indic) => None,
        };
    }

    // detected language wins while auto-detect holds a value, then the
    // manual selection, then the server default
    pub fn effective_language(&self) -> Option<Language> {
        if self.auto_detect && self.detected_language.is_some() {
            return self.detected_language;
        }
        self.selected_language
    }

    // every input edit lands here; (re)schedules or clears detection
    fn input_changed(&mut self) {
        self.validation_error = None;

        if self.tab != Tab::Transformer || !self.auto_detect {
            return;
        }
        let trimmed = self.input.trim();
        if trimmed.chars().count() >= DETECT_MIN_CHARS {
            self.pending_detection = Some(PendingDetection {
                text: trimmed.to_string(),
                due: Instant::now() + DETECT_DEBOUNCE,
            });
        } else {
            // below the threshold: no request, and nothing stale on screen
            self.pending_detection = None;
            self.detected_language = None;
        }
    }

    // hands out the settled text once the debounce window has elapsed
    pub fn take_due_detection(&mut self) -> Option<String> {
        let due = self.pending_detection.as_ref()?.due;
        if due > Instant::now() {
            return None;
        }
        self.pending_detection.take().map(|p| p.text)
    }

    pub fn set_detection(&mut self, detection: Detection) {
        self.detecting = false;
        match detection.language {
            Some(language) => {
                self.log(LogLevel::Ok, format!("detected language: {language}"));
                self.detected_language = Some(language);
            }
            None => {
                // unrecognized is not an error
                self.log(
                    LogLevel::Info,
                    format!("language not recognized: {}", detection.raw),
                );
                self.detected_language = None;
            }
        }
    }

    pub fn fail_detection(&mut self, err: crate::Error) {
        self.detecting = false;
        self.detected_language = None;
        self.log(LogLevel::Warn, format!("language detection failed: {err}"));
    }

    // --- tab switching and clearing ---------------------------------------

    // no state bleeds across tabs
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        self.reset_results();
        self.auto_detect = false;
        self.selected_language = None;
        self.log(LogLevel::Info, format!("tab: {}", tab.name()));
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
        self.reset_results();
    }

    fn reset_results(&mut self) {
        self.check = Lane::Idle;
        self.llm = Lane::Idle;
        self.checked_text = None;
        self.validation_error = None;
        self.detected_language = None;
        self.pending_detection = None;
        self.detecting = false;
        self.latency_ms = None;
        self.check_start = None;
        self.verify_scroll = 0;
    }

    // --- export -----------------------------------------------------------

    pub fn export_json(&self) -> Option<String> {
        let check = self.check.result()?;
        let value = serde_json::json!({
            "tab": self.tab.name(),
            "text": self.checked_text.as_deref(),
            "result": check,
            "llmResult": self.llm.result(),
        });
        serde_json::to_string_pretty(&value).ok()
    }

    // --- themes -----------------------------------------------------------

    pub fn set_theme(&mut self, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = Theme::from_kind(kind);
        self.theme_scroll = kind.index();
    }

    pub fn open_theme_popup(&mut self) {
        self.popup = Popup::Themes;
        self.theme_scroll = self.theme_kind.index();
    }

    pub fn close_popup(&mut self) {
        self.popup = Popup::None;
    }

    pub fn theme_scroll_up(&mut self) {
        if self.theme_scroll > 0 {
            self.theme_scroll -= 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn theme_scroll_down(&mut self) {
        if self.theme_scroll < ThemeKind::ALL.len() - 1 {
            self.theme_scroll += 1;
            self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        }
    }

    pub fn select_theme(&mut self) {
        self.set_theme(ThemeKind::ALL[self.theme_scroll]);
        self.close_popup();
    }

    // --- panels and modes -------------------------------------------------

    pub fn cycle_panel(&mut self) {
        self.panel = match self.panel {
            Panel::Input => Panel::Result,
            Panel::Result => Panel::Verify,
            Panel::Verify => Panel::Logs,
            Panel::Logs => Panel::Input,
        };
    }

    pub fn enter_insert(&mut self) {
        self.mode = Mode::Insert;
    }

    pub fn exit_insert(&mut self) {
        self.mode = Mode::Normal;
    }

    // --- input editing ----------------------------------------------------

    // the cursor is a byte offset and must stay on a char boundary;
    // indic input is multi-byte, so moves step by whole chars
    fn char_before_cursor(&self) -> Option<char> {
        self.input[..self.input_cursor].chars().next_back()
    }

    fn char_at_cursor(&self) -> Option<char> {
        self.input[self.input_cursor..].chars().next()
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.input_changed();
    }

    pub fn delete_char(&mut self) {
        if let Some(c) = self.char_before_cursor() {
            self.input_cursor -= c.len_utf8();
            self.input.remove(self.input_cursor);
            self.input_changed();
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input.remove(self.input_cursor);
            self.input_changed();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(c) = self.char_before_cursor() {
            self.input_cursor -= c.len_utf8();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.char_at_cursor() {
            self.input_cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_start(&mut self) {
        self.input_cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.input_cursor = self.input.len();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
        self.input_changed();
    }

    // --- history ----------------------------------------------------------

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_index {
            None => {
                self.history_index = Some(self.history.len() - 1);
            }
            Some(i) if i > 0 => {
                self.history_index = Some(i - 1);
            }
            _ => {}
        }
        if let Some(i) = self.history_index {
            self.input = self.history[i].clone();
            self.input_cursor = self.input.len();
            self.input_changed();
        }
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i < self.history.len() - 1 => {
                self.history_index = Some(i + 1);
                self.input = self.history[i + 1].clone();
                self.input_cursor = self.input.len();
                self.input_changed();
            }
            Some(_) => {
                self.history_index = None;
                self.clear_input();
            }
            None => {}
        }
    }

    // --- scrolling --------------------------------------------------------

    pub fn scroll_up(&mut self) {
        match self.panel {
            Panel::Verify => self.verify_scroll = self.verify_scroll.saturating_sub(1),
            Panel::Logs => self.log_scroll = self.log_scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn scroll_down(&mut self) {
        match self.panel {
            Panel::Verify => self.verify_scroll += 1,
            Panel::Logs => self.log_scroll += 1,
            _ => {}
        }
    }
}
