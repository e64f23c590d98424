use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::portfolio::Direction as MoveDirection;
use crate::ui::centered_rect;

// Represents the state of the portfolio management screen
pub struct PortfolioState {
    images: Vec<String>,
    max_images: usize,
    list_state: ListState,
    adding: bool,
    input: String,
    show_remove_confirmation: bool,
    pub message: Option<String>,
}

impl PortfolioState {
    pub fn new(images: Vec<String>, max_images: usize) -> Self {
        let mut state = Self {
            images: Vec::new(),
            max_images,
            list_state: ListState::default(),
            adding: false,
            input: String::new(),
            show_remove_confirmation: false,
            message: None,
        };
        state.set_images(images);
        state
    }

    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
        let selected = match self.list_state.selected() {
            _ if self.images.is_empty() => None,
            Some(i) => Some(i.min(self.images.len() - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    pub fn remaining(&self) -> usize {
        self.max_images.saturating_sub(self.images.len())
    }

    pub fn next(&mut self) {
        if self.images.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.images.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.images.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(0) | None => self.images.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|i| self.images.get(i))
            .map(String::as_str)
    }

    /// Moves the selection along with the image; the stored order is
    /// updated by the caller.
    fn move_selected(&mut self, direction: MoveDirection) -> Option<PortfolioAction> {
        let index = self.list_state.selected()?;
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1)?,
            MoveDirection::Down => index + 1,
        };
        if target >= self.images.len() {
            return None;
        }
        self.list_state.select(Some(target));
        Some(PortfolioAction::Move { index, direction })
    }

    /// Several references can be added at once, separated by `;`.
    fn pending_uris(&self) -> Vec<String> {
        self.input
            .split(';')
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<PortfolioAction> {
        if self.adding {
            match key {
                KeyCode::Enter => {
                    let uris = self.pending_uris();
                    self.adding = false;
                    self.input.clear();
                    if !uris.is_empty() {
                        return Some(PortfolioAction::Add(uris));
                    }
                }
                KeyCode::Esc => {
                    self.adding = false;
                    self.input.clear();
                }
                KeyCode::Char(c) => self.input.push(c),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                _ => {}
            }
            return None;
        }

        if self.show_remove_confirmation {
            match key {
                KeyCode::Char('y') => {
                    self.show_remove_confirmation = false;
                    return self
                        .selected_image()
                        .map(|uri| PortfolioAction::Remove(uri.to_string()));
                }
                KeyCode::Char('n') | KeyCode::Esc => self.show_remove_confirmation = false,
                _ => {}
            }
            return None;
        }

        self.message = None;
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return Some(PortfolioAction::Back),
            KeyCode::Down => self.next(),
            KeyCode::Up => self.previous(),
            KeyCode::Char('a') => {
                if self.remaining() == 0 {
                    self.message = Some(format!("Your portfolio already has {} images", self.max_images));
                } else {
                    self.adding = true;
                }
            }
            KeyCode::Char('d') => {
                if self.selected_image().is_some() {
                    self.show_remove_confirmation = true;
                }
            }
            KeyCode::Char('k') => return self.move_selected(MoveDirection::Up),
            KeyCode::Char('j') => return self.move_selected(MoveDirection::Down),
            _ => {}
        }
        None
    }
}

pub enum PortfolioAction {
    Back,
    Add(Vec<String>),
    Remove(String),
    Move { index: usize, direction: MoveDirection },
}

pub fn render_portfolio<B: Backend>(frame: &mut Frame<B>, state: &mut PortfolioState) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ].as_ref())
        .split(size);

    let items: Vec<ListItem> = state
        .images
        .iter()
        .enumerate()
        .map(|(i, uri)| ListItem::new(Spans::from(format!("{:>2}. {}", i + 1, uri))))
        .collect();

    let title = format!(
        "Portfolio ({} of {}, {} remaining)",
        state.images.len(),
        state.max_images,
        state.remaining()
    );
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_stateful_widget(list, chunks[0], &mut state.list_state);

    let input_style = if state.adding {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let input = Paragraph::new(Spans::from(Span::styled(
        if state.adding { format!("{}|", state.input) } else { String::new() },
        input_style,
    )))
    .block(Block::default().title("New image (separate several with ;)").borders(Borders::ALL));
    frame.render_widget(input, chunks[1]);

    let buttons_text = match &state.message {
        Some(message) => message.clone(),
        None if state.adding => "Type image paths | Enter - Add | Esc - Cancel".to_string(),
        None => "<A> Add image | <D> Remove image | <K>/<J> Move up/down | <Esc> Back".to_string(),
    };
    let buttons = Paragraph::new(buttons_text)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));
    frame.render_widget(buttons, chunks[2]);

    if state.show_remove_confirmation {
        render_remove_confirmation(frame, size);
    }
}

fn render_remove_confirmation<B: Backend>(frame: &mut Frame<B>, size: Rect) {
    let popup_area = centered_rect(50, 20, size);

    let popup = Paragraph::new(vec![
        Spans::from(""),
        Spans::from("Remove this image from your portfolio?"),
        Spans::from(""),
        Spans::from("<Y> Yes  <N> No"),
    ])
    .block(Block::default().title("Confirm Remove").borders(Borders::ALL))
    .style(Style::default().fg(Color::White).bg(Color::Black));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

pub fn handle_input(state: &mut PortfolioState) -> Result<Option<PortfolioAction>> {
    if let Event::Key(key) = event::read()? {
        return Ok(state.handle_key(key.code));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("work{}.png", i)).collect()
    }

    #[test]
    fn adds_several_references_at_once() {
        let mut state = PortfolioState::new(images(1), 10);
        state.handle_key(KeyCode::Char('a'));
        for c in "a.png; b.jpg ;".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        match state.handle_key(KeyCode::Enter) {
            Some(PortfolioAction::Add(uris)) => assert_eq!(uris, vec!["a.png", "b.jpg"]),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn full_portfolio_refuses_new_images() {
        let mut state = PortfolioState::new(images(3), 3);
        assert_eq!(state.remaining(), 0);
        assert!(state.handle_key(KeyCode::Char('a')).is_none());
        assert!(state.message.is_some());
        assert!(!state.adding);
    }

    #[test]
    fn remove_asks_first_and_keeps_selection_in_range() {
        let mut state = PortfolioState::new(images(2), 10);
        state.handle_key(KeyCode::Up);
        assert_eq!(state.selected_image(), Some("work2.png"));

        state.handle_key(KeyCode::Char('d'));
        match state.handle_key(KeyCode::Char('y')) {
            Some(PortfolioAction::Remove(uri)) => assert_eq!(uri, "work2.png"),
            _ => panic!("expected remove"),
        }

        state.set_images(images(1));
        assert_eq!(state.selected_image(), Some("work1.png"));
        state.set_images(Vec::new());
        assert!(state.selected_image().is_none());
    }

    #[test]
    fn moving_follows_the_selection() {
        let mut state = PortfolioState::new(images(3), 10);
        assert!(state.handle_key(KeyCode::Char('k')).is_none());

        match state.handle_key(KeyCode::Char('j')) {
            Some(PortfolioAction::Move { index: 0, direction: MoveDirection::Down }) => {}
            _ => panic!("expected move"),
        }
        assert_eq!(state.list_state.selected(), Some(1));

        state.handle_key(KeyCode::Down);
        assert!(state.handle_key(KeyCode::Char('j')).is_none());
    }
}
