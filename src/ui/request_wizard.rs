use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tui::{backend::Backend, Frame};

use crate::models::{Professional, Urgency};
use crate::requests::RequestForm;
use crate::ui::components::form::{render_wizard, FormField, FormState};
use crate::ui::components::picker::PickerState;
use crate::validation;

pub enum RequestWizardAction {
    Cancel,
    Submit(RequestForm),
}

pub struct RequestWizardState {
    professional: Professional,
    pub form: FormState,
}

impl RequestWizardState {
    pub fn new(professional: Professional) -> Self {
        let urgencies = PickerState::new(
            Urgency::ALL
                .iter()
                .map(|u| (u.as_str().to_string(), u.label().to_string()))
                .collect(),
            "(urgency)",
        )
        .with_selected(Urgency::default().as_str());

        Self {
            professional,
            form: FormState::new(vec![
                FormField::text("description", "What do you need").required(),
                FormField::text("value", "Offered value (R$)").required(),
                FormField::text("notes", "Additional notes"),
                FormField::picker("urgency", "Urgency", urgencies).required(),
            ]),
        }
    }

    pub fn professional(&self) -> &Professional {
        &self.professional
    }

    pub fn to_request_form(&self) -> RequestForm {
        let urgency = Urgency::from_value(&self.form.value("urgency")).unwrap_or_default();

        RequestForm {
            description: self.form.value("description"),
            value: self.form.value("value"),
            additional_notes: self.form.value("notes"),
            urgency,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<RequestWizardAction> {
        if self.form.editing {
            self.form.handle_key(key);
            return None;
        }

        match key {
            KeyCode::Esc => Some(RequestWizardAction::Cancel),
            KeyCode::Char('s') => {
                let form = self.to_request_form();
                if form.description.trim().is_empty() {
                    self.form.error = Some("Please describe the service you need".to_string());
                    return None;
                }
                if let Err(err) = validation::parse_money(&form.value) {
                    self.form.error = Some(err.to_string());
                    return None;
                }
                Some(RequestWizardAction::Submit(form))
            }
            other => {
                self.form.handle_key(other);
                None
            }
        }
    }
}

pub fn render_request_wizard<B: Backend>(frame: &mut Frame<B>, state: &mut RequestWizardState) {
    let title = format!(
        "Request a service from {} ({})",
        state.professional.name(),
        state.professional.category()
    );
    render_wizard(
        frame,
        &state.form,
        &title,
        "Service request",
        "Enter - Edit field | Left/Right - Urgency | Up/Down - Navigate | S - Send request | Esc - Cancel",
    );
}

pub fn handle_input(state: &mut RequestWizardState) -> Result<Option<RequestWizardAction>> {
    if let Event::Key(key) = event::read()? {
        return Ok(state.handle_key(key.code));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth;
    use crate::db::tests::{memory_db, new_professional};

    async fn professional() -> Professional {
        let db = memory_db().await;
        let user = auth::register(&db, &new_professional("Bruno", "bruno@example.com", "Plumber"))
            .await
            .unwrap();
        db.get_professional(user.id).await.unwrap()
    }

    #[tokio::test]
    async fn defaults_to_normal_urgency() {
        let state = RequestWizardState::new(professional().await);
        assert_eq!(state.to_request_form().urgency, Urgency::Normal);
    }

    #[tokio::test]
    async fn value_is_checked_before_submit() {
        let mut state = RequestWizardState::new(professional().await);
        state.form.set_value("description", "Install a shower");
        state.form.set_value("value", "abc");
        assert!(state.handle_key(KeyCode::Char('s')).is_none());
        assert!(state.form.error.is_some());

        state.form.set_value("value", "250,90");
        state.form.set_value("urgency", "urgent");
        match state.handle_key(KeyCode::Char('s')) {
            Some(RequestWizardAction::Submit(form)) => {
                assert_eq!(form.urgency, Urgency::Urgent);
                assert_eq!(form.value, "250,90");
            }
            _ => panic!("expected submit"),
        }
    }
}
