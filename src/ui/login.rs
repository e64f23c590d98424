use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tui::{backend::Backend, Frame};

use crate::ui::components::form::{render_wizard, FormField, FormState};

pub enum LoginAction {
    Exit,
    Register,
    Submit { email: String, password: String },
}

pub struct LoginState {
    pub form: FormState,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            form: FormState::new(vec![
                FormField::text("email", "Email").required(),
                FormField::secret("password", "Password").required(),
            ]),
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.form.error = Some(error.into());
        self
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<LoginAction> {
        if self.form.editing {
            self.form.handle_key(key);
            return None;
        }

        match key {
            KeyCode::Esc | KeyCode::Char('q') => Some(LoginAction::Exit),
            KeyCode::Char('r') => Some(LoginAction::Register),
            KeyCode::Char('l') => {
                if !self.form.missing_required().is_empty() {
                    self.form.error = Some("Please fill in email and password".to_string());
                    return None;
                }
                Some(LoginAction::Submit {
                    email: self.form.value("email").trim().to_string(),
                    password: self.form.value("password"),
                })
            }
            other => {
                self.form.handle_key(other);
                None
            }
        }
    }
}

pub fn render_login<B: Backend>(frame: &mut Frame<B>, state: &mut LoginState) {
    render_wizard(
        frame,
        &state.form,
        "Local Pros - Sign in",
        "Account",
        "Enter - Edit field | Up/Down - Navigate | L - Sign in | R - Create account | Esc - Quit",
    );
}

pub fn handle_input(state: &mut LoginState) -> Result<Option<LoginAction>> {
    if let Event::Key(key) = event::read()? {
        return Ok(state.handle_key(key.code));
    }
    Ok(None)
}
