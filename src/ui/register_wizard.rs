use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tui::{backend::Backend, Frame};

use crate::models::{NewUser, UserType};
use crate::ui::components::form::{render_wizard, FormEvent, FormField, FormState};
use crate::ui::components::picker::PickerState;
use crate::ui::components::professional_fields::{self as pro_fields, STATE};

const ACCOUNT_TYPE: &str = "account_type";

pub enum RegisterWizardAction {
    Cancel,
    Submit(NewUser),
}

pub struct RegisterWizardState {
    pub form: FormState,
}

impl RegisterWizardState {
    pub fn new() -> Self {
        let account_types = PickerState::new(
            vec![
                ("client".to_string(), "Client - I am looking for services".to_string()),
                ("professional".to_string(), "Professional - I offer services".to_string()),
            ],
            "(choose an account type)",
        )
        .with_selected("client");

        let mut fields = vec![
            FormField::picker(ACCOUNT_TYPE, "Account type", account_types).required(),
            FormField::text("name", "Full name").required(),
            FormField::text("email", "Email").required(),
            FormField::secret("password", "Password").required(),
            FormField::secret("confirm_password", "Confirm password").required(),
            FormField::text("phone", "Phone").required(),
        ];
        fields.extend(pro_fields::fields());

        let mut form = FormState::new(fields);
        pro_fields::set_hidden(&mut form, true);

        Self { form }
    }

    pub fn user_type(&self) -> UserType {
        match self.form.value(ACCOUNT_TYPE).as_str() {
            "professional" => UserType::Professional,
            _ => UserType::Client,
        }
    }

    pub fn to_new_user(&self) -> NewUser {
        let user_type = self.user_type();
        let professional = user_type == UserType::Professional;
        let pick = |id: &str| if professional { self.form.value(id) } else { String::new() };

        NewUser {
            name: self.form.value("name").trim().to_string(),
            email: self.form.value("email").trim().to_string(),
            password: self.form.value("password"),
            confirm_password: self.form.value("confirm_password"),
            phone: self.form.value("phone").trim().to_string(),
            user_type: Some(user_type),
            category: pick(pro_fields::CATEGORY),
            description: pick(pro_fields::DESCRIPTION).trim().to_string(),
            experience: pick(pro_fields::EXPERIENCE).trim().to_string(),
            address: if professional {
                pro_fields::read_address(&self.form)
            } else {
                Default::default()
            },
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<RegisterWizardAction> {
        if self.form.editing {
            self.form.handle_key(key);
            return None;
        }

        match key {
            KeyCode::Esc => Some(RegisterWizardAction::Cancel),
            KeyCode::Char('s') => {
                let missing = self.form.missing_required();
                if !missing.is_empty() {
                    self.form.error = Some(format!("Please fill in: {}", missing.join(", ")));
                    return None;
                }
                Some(RegisterWizardAction::Submit(self.to_new_user()))
            }
            other => {
                match self.form.handle_key(other) {
                    FormEvent::Changed(ACCOUNT_TYPE) => {
                        let hide = self.user_type() != UserType::Professional;
                        pro_fields::set_hidden(&mut self.form, hide);
                    }
                    FormEvent::Changed(STATE) => pro_fields::state_changed(&mut self.form),
                    _ => {}
                }
                None
            }
        }
    }
}

pub fn render_register_wizard<B: Backend>(frame: &mut Frame<B>, state: &mut RegisterWizardState) {
    let title = match state.user_type() {
        UserType::Client => "Create account - Client",
        UserType::Professional => "Create account - Professional",
    };
    render_wizard(
        frame,
        &state.form,
        title,
        "Your details (* required)",
        "Enter - Edit field | Left/Right - Choose option | Up/Down - Navigate | S - Create account | Esc - Back",
    );
}

pub fn handle_input(state: &mut RegisterWizardState) -> Result<Option<RegisterWizardAction>> {
    if let Event::Key(key) = event::read()? {
        return Ok(state.handle_key(key.code));
    }
    Ok(None)
}
