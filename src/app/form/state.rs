use crate::core::session::Session;
use crate::core::{Mode, Storage};
use crate::utils::error::{ErrorSeverity, ReverserError};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const DEFAULT_SAVE_NAME: &str = "reversed.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// Message shown under the form, in place of a dialog box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub title: String,
    pub message: String,
}

impl StatusLine {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

impl From<&ReverserError> for StatusLine {
    fn from(error: &ReverserError) -> Self {
        let kind = match error.severity() {
            ErrorSeverity::Warning => StatusKind::Warning,
            ErrorSeverity::Error => StatusKind::Error,
        };
        Self {
            kind,
            title: error.title().to_string(),
            message: error.user_friendly_message(),
        }
    }
}

pub struct FormState<S> {
    input: String,
    session: Session,
    storage: S,
    save_prompt: Option<String>,
    status: Option<StatusLine>,
}

impl<S: Storage> FormState<S> {
    pub fn new(session: Session, storage: S) -> Self {
        Self {
            input: String::new(),
            session,
            storage,
            save_prompt: None,
            status: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn result(&self) -> Option<&str> {
        self.session.result()
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// Path being typed while the save prompt is open.
    pub fn save_prompt(&self) -> Option<&str> {
        self.save_prompt.as_deref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        if key.kind != KeyEventKind::Press {
            return FormAction::Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return FormAction::Quit;
        }

        if self.save_prompt.is_some() {
            self.handle_prompt_key(key);
            return FormAction::Continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return FormAction::Quit,
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => self.reverse(),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => self.request_save(),
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => self.clear(),
            (KeyCode::Tab, _) => {
                self.session.set_mode(self.session.mode().toggled());
            }
            (KeyCode::Enter, _) => self.input.push('\n'),
            (KeyCode::Backspace, _) => {
                self.input.pop();
            }
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                self.input.push(c);
            }
            _ => {}
        }
        FormAction::Continue
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => self.confirm_save(),
            (KeyCode::Esc, _) => {
                self.save_prompt = None;
                self.status = Some(StatusLine::info("Save", "Save cancelled"));
            }
            (KeyCode::Backspace, _) => {
                if let Some(path) = self.save_prompt.as_mut() {
                    path.pop();
                }
            }
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                if let Some(path) = self.save_prompt.as_mut() {
                    path.push(c);
                }
            }
            _ => {}
        }
    }

    fn reverse(&mut self) {
        self.status = match self.session.reverse(&self.input) {
            Ok(_) => None,
            Err(e) => Some(StatusLine::from(&e)),
        };
    }

    fn request_save(&mut self) {
        if self.session.result().is_none() {
            self.status = Some(StatusLine::from(&ReverserError::NothingToSave));
            return;
        }
        self.save_prompt = Some(DEFAULT_SAVE_NAME.to_string());
        self.status = None;
    }

    fn confirm_save(&mut self) {
        let Some(path) = self.save_prompt.take() else {
            return;
        };
        if path.trim().is_empty() {
            self.status = Some(StatusLine::info("Save", "Save cancelled"));
            return;
        }

        self.status = Some(match self.session.save(&self.storage, &path) {
            Ok(written) => StatusLine::info(
                "Success",
                format!("Text successfully saved to {}", written.display()),
            ),
            Err(e) => StatusLine::from(&e),
        });
    }

    fn clear(&mut self) {
        self.input.clear();
        self.session.clear();
        self.status = None;
    }
}
