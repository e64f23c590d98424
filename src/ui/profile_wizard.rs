use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tui::{backend::Backend, Frame};

use crate::auth::{ProfessionalDetails, ProfileUpdate};
use crate::models::User;
use crate::ui::components::form::{render_wizard, FormEvent, FormField, FormState};
use crate::ui::components::professional_fields::{self as pro_fields, STATE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileWizardMode {
    Edit,
    BecomeProfessional,
}

pub enum ProfileWizardAction {
    Cancel,
    SaveProfile(ProfileUpdate),
    BecomeProfessional(ProfessionalDetails),
}

pub struct ProfileWizardState {
    mode: ProfileWizardMode,
    professional: bool,
    pub form: FormState,
}

impl ProfileWizardState {
    pub fn edit(user: &User) -> Self {
        let professional = user.is_professional();
        let mut fields = vec![
            FormField::text("name", "Full name").required().with_value(&user.name),
            FormField::text("phone", "Phone").required().with_value(&user.phone),
        ];
        if professional {
            fields.extend(pro_fields::fields());
        }

        let mut form = FormState::new(fields);
        if professional {
            let update = ProfileUpdate::from_user(user);
            pro_fields::fill(
                &mut form,
                &update.category,
                &update.description,
                &update.experience,
                &update.address,
            );
        }

        Self {
            mode: ProfileWizardMode::Edit,
            professional,
            form,
        }
    }

    pub fn become_professional() -> Self {
        Self {
            mode: ProfileWizardMode::BecomeProfessional,
            professional: true,
            form: FormState::new(pro_fields::fields()),
        }
    }

    pub fn mode(&self) -> ProfileWizardMode {
        self.mode
    }

    pub fn to_profile_update(&self) -> ProfileUpdate {
        let mut update = ProfileUpdate {
            name: self.form.value("name").trim().to_string(),
            phone: self.form.value("phone").trim().to_string(),
            ..Default::default()
        };
        if self.professional {
            update.category = self.form.value(pro_fields::CATEGORY);
            update.description = self.form.value(pro_fields::DESCRIPTION).trim().to_string();
            update.experience = self.form.value(pro_fields::EXPERIENCE).trim().to_string();
            update.address = pro_fields::read_address(&self.form);
        }
        update
    }

    pub fn to_professional_details(&self) -> ProfessionalDetails {
        ProfessionalDetails {
            category: self.form.value(pro_fields::CATEGORY),
            description: self.form.value(pro_fields::DESCRIPTION).trim().to_string(),
            experience: self.form.value(pro_fields::EXPERIENCE).trim().to_string(),
            address: pro_fields::read_address(&self.form),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<ProfileWizardAction> {
        if self.form.editing {
            self.form.handle_key(key);
            return None;
        }

        match key {
            KeyCode::Esc => Some(ProfileWizardAction::Cancel),
            KeyCode::Char('s') => {
                let missing = self.form.missing_required();
                if !missing.is_empty() {
                    self.form.error = Some(format!("Please fill in: {}", missing.join(", ")));
                    return None;
                }
                Some(match self.mode {
                    ProfileWizardMode::Edit => ProfileWizardAction::SaveProfile(self.to_profile_update()),
                    ProfileWizardMode::BecomeProfessional => {
                        ProfileWizardAction::BecomeProfessional(self.to_professional_details())
                    }
                })
            }
            other => {
                if let FormEvent::Changed(STATE) = self.form.handle_key(other) {
                    pro_fields::state_changed(&mut self.form);
                }
                None
            }
        }
    }
}

pub fn render_profile_wizard<B: Backend>(frame: &mut Frame<B>, state: &mut ProfileWizardState) {
    let (title, form_title) = match state.mode() {
        ProfileWizardMode::Edit => ("Edit profile", "Your details (* required)"),
        ProfileWizardMode::BecomeProfessional => ("Become a professional", "Tell clients about your services"),
    };
    render_wizard(
        frame,
        &state.form,
        title,
        form_title,
        "Enter - Edit field | Left/Right - Choose option | Up/Down - Navigate | S - Save | Esc - Cancel",
    );
}

pub fn handle_input(state: &mut ProfileWizardState) -> Result<Option<ProfileWizardAction>> {
    if let Event::Key(key) = event::read()? {
        return Ok(state.handle_key(key.code));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth;
    use crate::db::tests::{memory_db, new_client, new_professional};

    #[tokio::test]
    async fn client_edits_only_contact_fields() {
        let db = memory_db().await;
        let client = auth::register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();

        let mut state = ProfileWizardState::edit(&client);
        assert_eq!(state.form.value("name"), "Ana");
        state.form.set_value("name", "Ana Maria");

        match state.handle_key(KeyCode::Char('s')) {
            Some(ProfileWizardAction::SaveProfile(update)) => {
                assert_eq!(update.name, "Ana Maria");
                assert!(update.category.is_empty());
                let saved = auth::update_profile(&db, &client, &update).await.unwrap();
                assert_eq!(saved.name, "Ana Maria");
            }
            _ => panic!("expected save"),
        }
    }

    #[tokio::test]
    async fn professional_form_is_prefilled() {
        let db = memory_db().await;
        let pro = auth::register(&db, &new_professional("Bruno", "bruno@example.com", "Plumber"))
            .await
            .unwrap();

        let state = ProfileWizardState::edit(&pro);
        let update = state.to_profile_update();
        assert_eq!(update.category, "Plumber");
        assert_eq!(update.address, pro.address().unwrap());
    }

    #[test]
    fn becoming_professional_requires_details() {
        let mut state = ProfileWizardState::become_professional();
        assert_eq!(state.mode(), ProfileWizardMode::BecomeProfessional);
        assert!(state.handle_key(KeyCode::Char('s')).is_none());
        assert!(state.form.error.is_some());
    }
}
