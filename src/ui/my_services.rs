use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::{RequestStatus, ServiceRequest, User};
use crate::ui::centered_rect;
use crate::validation::format_money;

/// Popup shown when a client marks a service as completed.
pub struct RatingPopup {
    request_id: i64,
    professional_name: String,
    score: i64,
    comment: String,
    editing_comment: bool,
    error: Option<String>,
}

// Represents the state of the "my services" screen
pub struct MyServicesState {
    user_id: i64,
    requests: Vec<ServiceRequest>,
    list_state: ListState,
    show_cancel_confirmation: bool,
    rating: Option<RatingPopup>,
    pub message: Option<String>,
}

impl MyServicesState {
    pub fn new(user: &User, requests: Vec<ServiceRequest>) -> Self {
        let mut list_state = ListState::default();
        if !requests.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            user_id: user.id,
            requests,
            list_state,
            show_cancel_confirmation: false,
            rating: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn next(&mut self) {
        if self.requests.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.requests.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.requests.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(0) | None => self.requests.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn selected_request(&self) -> Option<&ServiceRequest> {
        self.list_state.selected().and_then(|i| self.requests.get(i))
    }

    fn can_accept(&self, request: &ServiceRequest) -> bool {
        request.professional_id == self.user_id && request.status == RequestStatus::Pending
    }

    fn can_complete(&self, request: &ServiceRequest) -> bool {
        request.client_id == self.user_id && request.status == RequestStatus::Accepted
    }

    fn can_cancel(&self, request: &ServiceRequest) -> bool {
        !request.status.is_terminal()
    }

    pub fn set_rating_error(&mut self, error: impl Into<String>) {
        if let Some(popup) = &mut self.rating {
            popup.error = Some(error.into());
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<MyServicesAction> {
        if let Some(popup) = &mut self.rating {
            if matches!(key, KeyCode::Esc) && !popup.editing_comment {
                self.rating = None;
                return None;
            }
            return handle_rating_key(popup, key);
        }

        if self.show_cancel_confirmation {
            match key {
                KeyCode::Char('y') => {
                    self.show_cancel_confirmation = false;
                    return self.selected_request().map(|r| MyServicesAction::Cancel(r.id));
                }
                KeyCode::Char('n') | KeyCode::Esc => self.show_cancel_confirmation = false,
                _ => {}
            }
            return None;
        }

        self.message = None;
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return Some(MyServicesAction::Back),
            KeyCode::Down => self.next(),
            KeyCode::Up => self.previous(),
            KeyCode::Char('r') => return Some(MyServicesAction::Refresh),
            KeyCode::Char('a') => {
                if let Some(request) = self.selected_request() {
                    if self.can_accept(request) {
                        return Some(MyServicesAction::Accept(request.id));
                    }
                    self.message = Some("Only pending requests addressed to you can be accepted".to_string());
                }
            }
            KeyCode::Char('c') => {
                if let Some(request) = self.selected_request() {
                    if self.can_cancel(request) {
                        self.show_cancel_confirmation = true;
                    } else {
                        self.message = Some("This request is already closed".to_string());
                    }
                }
            }
            KeyCode::Char('f') => {
                if let Some(request) = self.selected_request() {
                    if self.can_complete(request) {
                        self.rating = Some(RatingPopup {
                            request_id: request.id,
                            professional_name: request.professional_name.clone(),
                            score: 0,
                            comment: String::new(),
                            editing_comment: false,
                            error: None,
                        });
                    } else {
                        self.message = Some("Only accepted services you requested can be completed".to_string());
                    }
                }
            }
            _ => {}
        }
        None
    }
}

fn handle_rating_key(popup: &mut RatingPopup, key: KeyCode) -> Option<MyServicesAction> {
    if popup.editing_comment {
        match key {
            KeyCode::Tab | KeyCode::Esc => popup.editing_comment = false,
            KeyCode::Enter => return submit_rating(popup),
            KeyCode::Char(c) => popup.comment.push(c),
            KeyCode::Backspace => {
                popup.comment.pop();
            }
            _ => {}
        }
        return None;
    }

    match key {
        KeyCode::Char(c @ '1'..='5') => popup.score = c as i64 - '0' as i64,
        KeyCode::Right => popup.score = (popup.score + 1).min(5),
        KeyCode::Left => popup.score = (popup.score - 1).max(1),
        KeyCode::Tab => popup.editing_comment = true,
        KeyCode::Enter => return submit_rating(popup),
        _ => {}
    }
    None
}

fn submit_rating(popup: &mut RatingPopup) -> Option<MyServicesAction> {
    if popup.score == 0 {
        popup.error = Some("Please select a score".to_string());
        return None;
    }
    Some(MyServicesAction::Complete {
        request_id: popup.request_id,
        score: popup.score,
        comment: popup.comment.clone(),
    })
}

pub enum MyServicesAction {
    Back,
    Refresh,
    Accept(i64),
    Cancel(i64),
    Complete {
        request_id: i64,
        score: i64,
        comment: String,
    },
}

fn status_color(status: RequestStatus) -> Color {
    match status {
        RequestStatus::Pending => Color::Yellow,
        RequestStatus::Accepted => Color::Blue,
        RequestStatus::Completed => Color::Green,
        RequestStatus::Cancelled => Color::Red,
    }
}

pub fn render_my_services<B: Backend>(frame: &mut Frame<B>, state: &mut MyServicesState) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(7),
            Constraint::Length(3),
        ].as_ref())
        .split(size);

    let user_id = state.user_id;
    let items: Vec<ListItem> = state
        .requests
        .iter()
        .map(|r| {
            let counterpart = if r.client_id == user_id {
                format!("to {}", r.professional_name)
            } else {
                format!("from {}", r.client_name)
            };
            ListItem::new(Spans::from(vec![
                Span::styled(
                    format!("{:<10}", r.status.label()),
                    Style::default().fg(status_color(r.status)).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<28}", counterpart)),
                Span::raw(format!("{:<14}", format_money(r.value))),
                Span::styled(
                    r.requested_at.format("%d/%m/%Y").to_string(),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title("My services").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_stateful_widget(list, chunks[0], &mut state.list_state);

    let detail_lines = match state.selected_request() {
        Some(r) => {
            let mut lines = vec![
                Spans::from(r.description.clone()),
                Spans::from(format!("Urgency: {}", r.urgency.short_label())),
            ];
            if let Some(notes) = &r.additional_notes {
                lines.push(Spans::from(format!("Notes: {}", notes)));
            }
            if let (Some(score), Some(done)) = (r.score, r.completed_at) {
                lines.push(Spans::from(format!(
                    "Rated {} on {}{}",
                    crate::directory::star_bar(score as f64),
                    done.format("%d/%m/%Y"),
                    r.comment.as_deref().map(|c| format!(": {}", c)).unwrap_or_default()
                )));
            }
            lines
        }
        None => vec![Spans::from("No service requests yet")],
    };
    let details = Paragraph::new(detail_lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Details").borders(Borders::ALL));
    frame.render_widget(details, chunks[1]);

    let buttons_text = match &state.message {
        Some(message) => message.clone(),
        None => "<A> Accept | <F> Finish & rate | <C> Cancel request | <R> Refresh | <Esc> Back".to_string(),
    };
    let buttons = Paragraph::new(buttons_text)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));
    frame.render_widget(buttons, chunks[2]);

    if state.show_cancel_confirmation {
        render_cancel_confirmation(frame, size);
    }
    if let Some(popup) = &state.rating {
        render_rating_popup(frame, popup, size);
    }
}

fn render_cancel_confirmation<B: Backend>(frame: &mut Frame<B>, size: Rect) {
    let popup_area = centered_rect(50, 20, size);

    let popup = Paragraph::new(vec![
        Spans::from(""),
        Spans::from("Are you sure you want to cancel this request?"),
        Spans::from(""),
        Spans::from("<Y> Yes  <N> No"),
    ])
    .block(Block::default().title("Confirm Cancel").borders(Borders::ALL))
    .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

fn render_rating_popup<B: Backend>(frame: &mut Frame<B>, popup: &RatingPopup, size: Rect) {
    let area = centered_rect(60, 40, size);

    let comment_style = if popup.editing_comment {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let mut lines = vec![
        Spans::from(format!("How was the service from {}?", popup.professional_name)),
        Spans::from(""),
        Spans::from(vec![
            Span::raw("Score: "),
            Span::styled(
                crate::directory::star_bar(popup.score as f64),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Spans::from(vec![
            Span::styled("Comment: ", comment_style),
            Span::raw(format!("{}{}", popup.comment, if popup.editing_comment { "|" } else { "" })),
        ]),
        Spans::from(""),
        Spans::from("1-5 or Left/Right - Score | Tab - Comment | Enter - Submit | Esc - Close"),
    ];
    if let Some(error) = &popup.error {
        lines.push(Spans::from(Span::styled(error.clone(), Style::default().fg(Color::Red))));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Complete service").borders(Borders::ALL))
        .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

pub fn handle_input(state: &mut MyServicesState) -> Result<Option<MyServicesAction>> {
    if let Event::Key(key) = event::read()? {
        return Ok(state.handle_key(key.code));
    }
    Ok(None)
}
