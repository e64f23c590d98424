use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::catalog;
use crate::db::Database;
use crate::directory::{min_rating_label, star_bar, ProfessionalFilter, MIN_RATING_OPTIONS};
use crate::models::Professional;
use crate::ui::components::picker::PickerState;

// Represents the state of the home screen listing professionals
pub struct ProfessionalsState {
    user_name: String,
    professionals: Vec<Professional>,
    filtered: Vec<Professional>,
    list_state: ListState,
    search: String,
    editing_search: bool,
    category: PickerState,
    min_rating_index: usize,
    pub message: Option<String>,
}

impl ProfessionalsState {
    pub fn new(user_name: &str, professionals: Vec<Professional>) -> Self {
        let mut state = Self {
            user_name: user_name.to_string(),
            professionals,
            filtered: Vec::new(),
            list_state: ListState::default(),
            search: String::new(),
            editing_search: false,
            category: PickerState::from_values(catalog::categories().iter().copied(), "All categories"),
            min_rating_index: 0,
            message: None,
        };
        state.apply_filter();
        state
    }

    pub fn set_user_name(&mut self, user_name: &str) {
        self.user_name = user_name.to_string();
    }

    /// Keeps the current filters when the list is reloaded.
    pub fn reload(&mut self, professionals: Vec<Professional>) {
        self.professionals = professionals;
        self.apply_filter();
    }

    pub fn filter(&self) -> ProfessionalFilter {
        ProfessionalFilter {
            search: self.search.clone(),
            category: self.category.value().map(str::to_string),
            min_rating: MIN_RATING_OPTIONS[self.min_rating_index],
        }
    }

    fn apply_filter(&mut self) {
        self.filtered = self.filter().apply(&self.professionals);
        self.list_state.select(if self.filtered.is_empty() { None } else { Some(0) });
    }

    #[cfg(test)]
    pub fn visible(&self) -> &[Professional] {
        &self.filtered
    }

    pub fn next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.filtered.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.filtered.is_empty() {
            return;
        }

        let i = match self.list_state.selected() {
            Some(0) | None => self.filtered.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn selected_professional(&self) -> Option<&Professional> {
        self.list_state.selected().and_then(|i| self.filtered.get(i))
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.category.clear();
        self.min_rating_index = 0;
        self.apply_filter();
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<ProfessionalAction> {
        if self.editing_search {
            match key {
                KeyCode::Enter | KeyCode::Esc => self.editing_search = false,
                KeyCode::Char(c) => {
                    self.search.push(c);
                    self.apply_filter();
                }
                KeyCode::Backspace => {
                    self.search.pop();
                    self.apply_filter();
                }
                _ => {}
            }
            return None;
        }

        self.message = None;
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Some(ProfessionalAction::Exit),
            KeyCode::Down => self.next(),
            KeyCode::Up => self.previous(),
            KeyCode::Enter => {
                if let Some(p) = self.selected_professional() {
                    return Some(ProfessionalAction::ViewDetails(p.id()));
                }
            }
            KeyCode::Char('/') => self.editing_search = true,
            KeyCode::Char('c') => {
                self.category.next();
                self.apply_filter();
            }
            KeyCode::Char('C') => {
                self.category.previous();
                self.apply_filter();
            }
            KeyCode::Char('m') => {
                self.min_rating_index = (self.min_rating_index + 1) % MIN_RATING_OPTIONS.len();
                self.apply_filter();
            }
            KeyCode::Char('x') => self.clear_filters(),
            KeyCode::Char('r') => return Some(ProfessionalAction::Refresh),
            KeyCode::Char('p') => return Some(ProfessionalAction::Profile),
            KeyCode::Char('s') => return Some(ProfessionalAction::MyServices),
            _ => {}
        }
        None
    }
}

pub enum ProfessionalAction {
    Exit,
    Refresh,
    Profile,
    MyServices,
    ViewDetails(i64), // Contains professional id
}

// DB operations for professionals
pub async fn load_professionals(db: &Database) -> Result<Vec<Professional>> {
    Ok(db.load_professionals().await?)
}

pub fn render_professionals<B: Backend>(frame: &mut Frame<B>, state: &mut ProfessionalsState) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ].as_ref())
        .split(size);

    // Filters bar
    let search_style = if state.editing_search {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let filters = Paragraph::new(Spans::from(vec![
        Span::raw("Search: "),
        Span::styled(
            format!("{}{}", state.search, if state.editing_search { "|" } else { "" }),
            search_style,
        ),
        Span::raw("  |  Category: "),
        Span::styled(state.category.label().to_string(), Style::default().fg(Color::Cyan)),
        Span::raw("  |  Rating: "),
        Span::styled(
            min_rating_label(MIN_RATING_OPTIONS[state.min_rating_index]),
            Style::default().fg(Color::Cyan),
        ),
    ]))
    .block(
        Block::default()
            .title(format!("Local professionals - signed in as {}", state.user_name))
            .borders(Borders::ALL),
    );
    frame.render_widget(filters, chunks[0]);

    let items: Vec<ListItem> = state
        .filtered
        .iter()
        .map(|p| {
            let location = p.user.location();
            ListItem::new(Spans::from(vec![
                Span::styled(format!("{:<28}", p.name()), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("{:<20}", p.category())),
                Span::styled(star_bar(p.average_rating), Style::default().fg(Color::Yellow)),
                Span::raw(format!(" {:.1} ({} reviews)  ", p.average_rating, p.total_reviews)),
                Span::styled(location, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let title = format!("Professionals ({} of {})", state.filtered.len(), state.professionals.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_stateful_widget(list, chunks[1], &mut state.list_state);

    let buttons_text = match &state.message {
        Some(message) => message.clone(),
        None if state.editing_search => "Type to search | Enter/Esc - Done".to_string(),
        None => "</> Search | <C> Category | <M> Min rating | <X> Clear | <Enter> Details | <S> My services | <P> Profile | <R> Refresh | <Q> Quit".to_string(),
    };
    let buttons = Paragraph::new(buttons_text)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::White));
    frame.render_widget(buttons, chunks[2]);
}

pub fn handle_input(state: &mut ProfessionalsState) -> Result<Option<ProfessionalAction>> {
    if let Event::Key(key) = event::read()? {
        return Ok(state.handle_key(key.code));
    }
    Ok(None)
}
