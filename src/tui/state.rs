//! UI state and the actions that mutate it.

use crate::clipboard::Clipboard;
use crate::entropy::Sampler;
use crate::pass::{self, CharacterClass, ConfigError, GenerationConfig, Password};

/// Slider bounds for the length control.
pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 20;

pub const NO_CLASS_WARNING: &str = "Select at least one checkbox!";
pub const COPIED: &str = "Copied to clipboard!";
pub const NOTHING_TO_COPY: &str = "Nothing to copy yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LengthUp,
    LengthDown,
    Toggle(CharacterClass),
    Generate,
    Copy,
    Quit,
}

/// One-line toast shown under the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(s) | Notice::Warning(s) | Notice::Error(s) => s,
        }
    }
}

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// What the window shows: the config being edited and the last password.
#[derive(Debug)]
pub struct AppState {
    pub config: GenerationConfig,
    pub password: Option<Password>,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(mut config: GenerationConfig) -> Self {
        config.length = config.length.clamp(MIN_LENGTH, MAX_LENGTH);
        Self {
            config,
            password: None,
            notice: None,
        }
    }
}

/// State plus the collaborators it drives.
pub struct App {
    pub state: AppState,
    sampler: Box<dyn Sampler>,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(config: GenerationConfig, sampler: Box<dyn Sampler>, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            state: AppState::new(config),
            sampler,
            clipboard,
        }
    }

    pub fn handle(&mut self, action: Action) -> LoopAction {
        let state = &mut self.state;
        state.notice = None;

        match action {
            Action::LengthUp => {
                state.config.length = (state.config.length + 1).min(MAX_LENGTH);
            }
            Action::LengthDown => {
                state.config.length = state.config.length.saturating_sub(1).max(MIN_LENGTH);
            }
            Action::Toggle(class) => state.config.classes.toggle(class),
            Action::Generate => match pass::generate_with(&state.config, &mut *self.sampler) {
                Ok(password) => state.password = Some(password),
                Err(ConfigError::NoClassSelected) => {
                    state.notice = Some(Notice::Warning(NO_CLASS_WARNING.to_string()));
                }
            },
            Action::Copy => self.copy(),
            Action::Quit => return Break,
        }
        Continue
    }

    fn copy(&mut self) {
        let state = &mut self.state;
        let Some(password) = state.password.as_ref() else {
            state.notice = Some(Notice::Warning(NOTHING_TO_COPY.to_string()));
            return;
        };

        state.notice = Some(match self.clipboard.write(password.as_str()) {
            Ok(()) => Notice::Success(COPIED.to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                Notice::Error(e.to_string())
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::entropy::EntropySource;
    use crate::pass::ClassSet;

    #[derive(Clone, Default)]
    struct FakeClipboard {
        last: Rc<RefCell<Option<String>>>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Write("denied".into()));
            }
            *self.last.borrow_mut() = Some(text.to_owned());
            Ok(())
        }
    }

    fn app_with(clipboard: FakeClipboard) -> App {
        App::new(
            GenerationConfig::default(),
            EntropySource::Seeded(1).sampler(),
            Box::new(clipboard),
        )
    }

    fn app() -> App {
        app_with(FakeClipboard::default())
    }

    fn shown(app: &App) -> Option<String> {
        app.state.password.as_ref().map(|p| p.as_str().to_owned())
    }

    #[test]
    fn starts_with_original_defaults() {
        let app = app();
        assert_eq!(app.state.config.length, 12);
        assert!(app.state.config.classes.contains(CharacterClass::Upper));
        assert!(!app.state.config.classes.contains(CharacterClass::Symbol));
        assert!(app.state.password.is_none());
    }

    #[test]
    fn initial_length_is_clamped_to_slider() {
        let state = AppState::new(GenerationConfig::new(64, ClassSet::all()));
        assert_eq!(state.config.length, MAX_LENGTH);
        let state = AppState::new(GenerationConfig::new(0, ClassSet::all()));
        assert_eq!(state.config.length, MIN_LENGTH);
    }

    #[test]
    fn length_stays_within_bounds() {
        let mut app = app();
        for _ in 0..30 {
            app.handle(Action::LengthUp);
        }
        assert_eq!(app.state.config.length, MAX_LENGTH);
        for _ in 0..30 {
            app.handle(Action::LengthDown);
        }
        assert_eq!(app.state.config.length, MIN_LENGTH);
    }

    #[test]
    fn generate_shows_password_of_selected_length() {
        let mut app = app();
        app.handle(Action::LengthDown);
        app.handle(Action::Generate);

        let pass = shown(&app).unwrap();
        assert_eq!(pass.chars().count(), 11);
        assert!(pass.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(app.state.notice.is_none());
    }

    #[test]
    fn empty_selection_warns_and_keeps_previous_password() {
        let mut app = app();
        app.handle(Action::Generate);
        let before = shown(&app);

        for class in [CharacterClass::Upper, CharacterClass::Lower, CharacterClass::Digit] {
            app.handle(Action::Toggle(class));
        }
        assert!(app.state.config.classes.is_empty());
        app.handle(Action::Generate);

        assert_eq!(shown(&app), before);
        assert_eq!(
            app.state.notice,
            Some(Notice::Warning(NO_CLASS_WARNING.to_string()))
        );
    }

    #[test]
    fn copy_writes_current_password_without_regenerating() {
        let fake = FakeClipboard::default();
        let mut app = app_with(fake.clone());
        app.handle(Action::Generate);
        let before = shown(&app);

        app.handle(Action::Copy);

        assert_eq!(shown(&app), before);
        assert_eq!(*fake.last.borrow(), before);
        assert_eq!(app.state.notice, Some(Notice::Success(COPIED.to_string())));
    }

    #[test]
    fn copy_before_generate_is_a_warning() {
        let fake = FakeClipboard::default();
        let mut app = app_with(fake.clone());
        app.handle(Action::Copy);

        assert!(fake.last.borrow().is_none());
        assert_eq!(
            app.state.notice,
            Some(Notice::Warning(NOTHING_TO_COPY.to_string()))
        );
    }

    #[test]
    fn clipboard_failure_keeps_password() {
        let mut app = app_with(FakeClipboard {
            fail: true,
            ..Default::default()
        });
        app.handle(Action::Generate);
        app.handle(Action::Copy);

        assert!(app.state.password.is_some());
        assert!(matches!(app.state.notice, Some(Notice::Error(_))));
    }

    #[test]
    fn notice_clears_on_next_action() {
        let mut app = app();
        app.handle(Action::Copy);
        assert!(app.state.notice.is_some());
        app.handle(Action::LengthUp);
        assert!(app.state.notice.is_none());
    }

    #[test]
    fn quit_breaks_the_loop() {
        assert!(matches!(app().handle(Action::Quit), LoopAction::Break));
        assert!(matches!(app().handle(Action::Generate), LoopAction::Continue));
    }
}
