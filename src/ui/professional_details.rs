use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::db::Database;
use crate::directory::star_bar;
use crate::error::AppResult;
use crate::models::{Professional, Rating};

pub struct ProfessionalDetailsState {
    professional: Professional,
    ratings: Vec<Rating>,
    portfolio: Vec<String>,
    /// False when the viewer is the professional themselves
    can_request: bool,
    scroll: u16,
}

impl ProfessionalDetailsState {
    pub fn new(professional: Professional, ratings: Vec<Rating>, portfolio: Vec<String>, viewer_id: i64) -> Self {
        let can_request = professional.id() != viewer_id;
        Self {
            professional,
            ratings,
            portfolio,
            can_request,
            scroll: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<DetailsAction> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return Some(DetailsAction::Back),
            KeyCode::Char('r') if self.can_request => {
                return Some(DetailsAction::RequestService(self.professional.id()));
            }
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
        None
    }

    fn lines(&self) -> Vec<Spans<'_>> {
        let p = &self.professional;
        let user = &p.user;
        let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Spans::from(Span::styled(p.name().to_string(), Style::default().add_modifier(Modifier::BOLD))),
            Spans::from(p.category().to_string()),
            Spans::from(vec![
                Span::styled(star_bar(p.average_rating), Style::default().fg(Color::Yellow)),
                Span::raw(format!(" {:.1} ({} reviews)", p.average_rating, p.total_reviews)),
            ]),
            Spans::from(""),
            Spans::from(Span::styled("Contact", heading)),
            Spans::from(format!("Phone: {}", user.phone)),
            Spans::from(format!("Email: {}", user.email)),
        ];

        if let Some(address) = user.address() {
            lines.push(Spans::from(""));
            lines.push(Spans::from(Span::styled("Address", heading)));
            lines.push(Spans::from(address.first_line()));
            lines.push(Spans::from(address.second_line()));
        }

        lines.push(Spans::from(""));
        lines.push(Spans::from(Span::styled("About the services", heading)));
        lines.push(Spans::from(user.description.clone().unwrap_or_default()));

        if let Some(experience) = user.experience.as_deref().filter(|e| !e.is_empty()) {
            lines.push(Spans::from(""));
            lines.push(Spans::from(Span::styled("Experience", heading)));
            lines.push(Spans::from(experience.to_string()));
        }

        lines.push(Spans::from(""));
        lines.push(Spans::from(Span::styled(format!("Portfolio ({})", self.portfolio.len()), heading)));
        if self.portfolio.is_empty() {
            lines.push(Spans::from("No images yet"));
        }
        for uri in &self.portfolio {
            lines.push(Spans::from(format!("  - {}", uri)));
        }

        lines.push(Spans::from(""));
        lines.push(Spans::from(Span::styled(format!("Reviews ({})", self.ratings.len()), heading)));
        if self.ratings.is_empty() {
            lines.push(Spans::from("No reviews yet"));
        }
        for rating in &self.ratings {
            lines.push(Spans::from(vec![
                Span::styled(rating.client_name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(star_bar(rating.score as f64), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("  {}", rating.created_at.format("%d/%m/%Y")),
                    Style::default().fg(Color::Gray),
                ),
            ]));
            if let Some(comment) = rating.comment.as_deref() {
                lines.push(Spans::from(format!("  {}", comment)));
            }
        }

        lines
    }
}

pub enum DetailsAction {
    Back,
    RequestService(i64), // Contains professional id
}

pub async fn load_details(db: &Database, professional_id: i64) -> AppResult<(Professional, Vec<Rating>, Vec<String>)> {
    let professional = db.get_professional(professional_id).await?;
    let ratings = db.load_ratings(professional_id).await?;
    let portfolio = db.load_portfolio(professional_id).await?;
    Ok((professional, ratings, portfolio))
}

pub fn render_professional_details<B: Backend>(frame: &mut Frame<B>, state: &mut ProfessionalDetailsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
        .split(frame.size());

    let details = Paragraph::new(state.lines())
        .block(Block::default().title("Professional").borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    frame.render_widget(details, chunks[0]);

    let buttons_text = if state.can_request {
        "<R> Request service | Up/Down - Scroll | <Esc> Back"
    } else {
        "This is your public profile | Up/Down - Scroll | <Esc> Back"
    };
    let buttons = Paragraph::new(buttons_text)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));
    frame.render_widget(buttons, chunks[1]);
}

pub fn handle_input(state: &mut ProfessionalDetailsState) -> Result<Option<DetailsAction>> {
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
    async fn own_profile_cannot_be_requested() {
        let db = memory_db().await;
        let pro = auth::register(&db, &new_professional("Bruno", "bruno@example.com", "Plumber"))
            .await
            .unwrap();
        let client = auth::register(&db, &new_client("Ana", "ana@example.com")).await.unwrap();
        db.add_rating(pro.id, &client, 4, Some("Good"), None).await.unwrap();

        let (professional, ratings, portfolio) = load_details(&db, pro.id).await.unwrap();
        assert_eq!(ratings.len(), 1);

        let mut own = ProfessionalDetailsState::new(professional.clone(), ratings.clone(), portfolio.clone(), pro.id);
        assert!(own.handle_key(KeyCode::Char('r')).is_none());

        let mut other = ProfessionalDetailsState::new(professional, ratings, portfolio, client.id);
        assert!(matches!(
            other.handle_key(KeyCode::Char('r')),
            Some(DetailsAction::RequestService(id)) if id == pro.id
        ));
        assert!(other.lines().len() > 10);
    }
}
