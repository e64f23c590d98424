use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::User;
use crate::ui::centered_rect;

// Represents the state of the signed-in user's profile screen
pub struct ProfileState {
    user: User,
    portfolio_count: usize,
    editing_image: bool,
    image_input: String,
    show_logout_confirmation: bool,
    pub message: Option<String>,
}

impl ProfileState {
    pub fn new(user: User, portfolio_count: usize) -> Self {
        let image_input = user.profile_image.clone().unwrap_or_default();
        Self {
            user,
            portfolio_count,
            editing_image: false,
            image_input,
            show_logout_confirmation: false,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<ProfileAction> {
        if self.editing_image {
            match key {
                KeyCode::Enter => {
                    self.editing_image = false;
                    return Some(ProfileAction::SetProfileImage(self.image_input.trim().to_string()));
                }
                KeyCode::Esc => {
                    self.editing_image = false;
                    self.image_input = self.user.profile_image.clone().unwrap_or_default();
                }
                KeyCode::Char(c) => self.image_input.push(c),
                KeyCode::Backspace => {
                    self.image_input.pop();
                }
                _ => {}
            }
            return None;
        }

        if self.show_logout_confirmation {
            match key {
                KeyCode::Char('y') => {
                    self.show_logout_confirmation = false;
                    return Some(ProfileAction::Logout);
                }
                KeyCode::Char('n') | KeyCode::Esc => self.show_logout_confirmation = false,
                _ => {}
            }
            return None;
        }

        self.message = None;
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return Some(ProfileAction::Back),
            KeyCode::Char('e') => return Some(ProfileAction::Edit),
            KeyCode::Char('b') if !self.user.is_professional() => return Some(ProfileAction::BecomeProfessional),
            KeyCode::Char('f') if self.user.is_professional() => return Some(ProfileAction::Portfolio),
            KeyCode::Char('i') => self.editing_image = true,
            KeyCode::Char('l') => self.show_logout_confirmation = true,
            _ => {}
        }
        None
    }

    fn lines(&self) -> Vec<Spans<'_>> {
        let user = &self.user;
        let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Spans::from(Span::styled(user.name.clone(), Style::default().add_modifier(Modifier::BOLD))),
            Spans::from(user.user_type.label()),
            Spans::from(""),
            Spans::from(Span::styled("Contact", heading)),
            Spans::from(format!("Email: {}", user.email)),
            Spans::from(format!("Phone: {}", user.phone)),
            Spans::from(format!("Member since {}", user.created_at.format("%d/%m/%Y"))),
        ];

        if user.is_professional() {
            lines.push(Spans::from(""));
            lines.push(Spans::from(Span::styled("Professional", heading)));
            lines.push(Spans::from(format!("Category: {}", user.category.as_deref().unwrap_or(""))));
            lines.push(Spans::from(format!("Services: {}", user.description.as_deref().unwrap_or(""))));
            if let Some(experience) = user.experience.as_deref() {
                lines.push(Spans::from(format!("Experience: {}", experience)));
            }
            lines.push(Spans::from(format!("Portfolio: {} image(s)", self.portfolio_count)));
        }

        if let Some(address) = user.address() {
            lines.push(Spans::from(""));
            lines.push(Spans::from(Span::styled("Address", heading)));
            lines.push(Spans::from(address.first_line()));
            lines.push(Spans::from(address.second_line()));
        }

        lines.push(Spans::from(""));
        lines.push(Spans::from(Span::styled("Profile image", heading)));
        let image_style = if self.editing_image {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let image_text = if self.editing_image {
            format!("{}|", self.image_input)
        } else {
            user.profile_image.clone().unwrap_or_else(|| "(none)".to_string())
        };
        lines.push(Spans::from(Span::styled(image_text, image_style)));

        lines
    }
}

pub enum ProfileAction {
    Back,
    Edit,
    BecomeProfessional,
    Portfolio,
    /// Empty clears the current image
    SetProfileImage(String),
    Logout,
}

pub fn render_profile<B: Backend>(frame: &mut Frame<B>, state: &mut ProfileState) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
        .split(size);

    let details = Paragraph::new(state.lines())
        .wrap(Wrap { trim: false })
        .block(Block::default().title("My profile").borders(Borders::ALL));
    frame.render_widget(details, chunks[0]);

    let buttons_text = match &state.message {
        Some(message) => message.clone(),
        None if state.editing_image => "Type an image path (empty removes it) | Enter - Save | Esc - Cancel".to_string(),
        None if state.user.is_professional() => {
            "<E> Edit | <F> Portfolio | <I> Profile image | <L> Logout | <Esc> Back".to_string()
        }
        None => "<E> Edit | <B> Become a professional | <I> Profile image | <L> Logout | <Esc> Back".to_string(),
    };
    let buttons = Paragraph::new(buttons_text)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));
    frame.render_widget(buttons, chunks[1]);

    if state.show_logout_confirmation {
        render_logout_confirmation(frame, size);
    }
}

fn render_logout_confirmation<B: Backend>(frame: &mut Frame<B>, size: Rect) {
    let popup_area = centered_rect(50, 20, size);

    let popup = Paragraph::new(vec![
        Spans::from(""),
        Spans::from("Do you want to sign out?"),
        Spans::from(""),
        Spans::from("<Y> Yes  <N> No"),
    ])
    .block(Block::default().title("Logout").borders(Borders::ALL))
    .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

pub fn handle_input(state: &mut ProfileState) -> Result<Option<ProfileAction>> {
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
    async fn actions_depend_on_account_type() {
        let db = memory_db().await;
        let client = auth::register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();
        let pro = auth::register(&db, &new_professional("Bruno", "bruno@example.com", "Plumber"))
            .await
            .unwrap();

        let mut client_state = ProfileState::new(client, 0);
        assert!(client_state.handle_key(KeyCode::Char('f')).is_none());
        assert!(matches!(
            client_state.handle_key(KeyCode::Char('b')),
            Some(ProfileAction::BecomeProfessional)
        ));

        let mut pro_state = ProfileState::new(pro, 2);
        assert!(pro_state.handle_key(KeyCode::Char('b')).is_none());
        assert!(matches!(pro_state.handle_key(KeyCode::Char('f')), Some(ProfileAction::Portfolio)));
        assert!(pro_state.lines().len() > 10);
    }

    #[tokio::test]
    async fn logout_needs_confirmation() {
        let db = memory_db().await;
        let client = auth::register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();
        let mut state = ProfileState::new(client, 0);

        assert!(state.handle_key(KeyCode::Char('l')).is_none());
        assert!(state.handle_key(KeyCode::Char('n')).is_none());
        assert!(state.handle_key(KeyCode::Char('l')).is_none());
        assert!(matches!(state.handle_key(KeyCode::Char('y')), Some(ProfileAction::Logout)));
    }

    #[tokio::test]
    async fn profile_image_is_typed_inline() {
        let db = memory_db().await;
        let client = auth::register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();
        let mut state = ProfileState::new(client, 0);

        state.handle_key(KeyCode::Char('i'));
        for c in "me.png".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        match state.handle_key(KeyCode::Enter) {
            Some(ProfileAction::SetProfileImage(uri)) => assert_eq!(uri, "me.png"),
            _ => panic!("expected profile image"),
        }
    }
}
