use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::picker::PickerState;
use crate::validation::format_zip_code;

pub enum FieldKind {
    Text,
    /// Rendered as asterisks
    Secret,
    /// CEP mask applied while typing
    ZipCode,
    Picker(PickerState),
}

pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub hidden: bool,
    value: String,
    kind: FieldKind,
}

impl FormField {
    pub fn text(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            required: false,
            hidden: false,
            value: String::new(),
            kind: FieldKind::Text,
        }
    }

    pub fn secret(id: &'static str, label: &'static str) -> Self {
        Self { kind: FieldKind::Secret, ..Self::text(id, label) }
    }

    pub fn zip_code(id: &'static str, label: &'static str) -> Self {
        Self { kind: FieldKind::ZipCode, ..Self::text(id, label) }
    }

    pub fn picker(id: &'static str, label: &'static str, picker: PickerState) -> Self {
        Self { kind: FieldKind::Picker(picker), ..Self::text(id, label) }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    fn is_picker(&self) -> bool {
        matches!(self.kind, FieldKind::Picker(_))
    }

    fn display(&self) -> String {
        match &self.kind {
            FieldKind::Secret => "*".repeat(self.value.chars().count()),
            FieldKind::Picker(picker) => format!("< {} >", picker.label()),
            FieldKind::Text | FieldKind::ZipCode => self.value.clone(),
        }
    }
}

/// What a key did to the form.
#[derive(Debug, PartialEq, Eq)]
pub enum FormEvent {
    Ignored,
    Handled,
    /// A picker changed its selection
    Changed(&'static str),
}

/// A vertical list of fields. Text fields are edited after pressing Enter;
/// pickers cycle with Left/Right.
pub struct FormState {
    fields: Vec<FormField>,
    current: usize,
    pub editing: bool,
    pub error: Option<String>,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        let mut state = Self {
            fields,
            current: 0,
            editing: false,
            error: None,
        };
        if state.fields.get(0).map(|f| f.hidden).unwrap_or(false) {
            state.next_field();
        }
        state
    }

    fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// The typed text, or the picker's selected value. Empty when unset.
    pub fn value(&self, id: &str) -> String {
        match self.field(id) {
            Some(FormField { kind: FieldKind::Picker(picker), .. }) => {
                picker.value().unwrap_or_default().to_string()
            }
            Some(field) => field.value.clone(),
            None => String::new(),
        }
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(field) = self.field_mut(id) {
            match &mut field.kind {
                FieldKind::Picker(picker) => picker.select_value(value),
                FieldKind::ZipCode => field.value = format_zip_code(value),
                _ => field.value = value.to_string(),
            }
        }
    }

    pub fn picker_mut(&mut self, id: &str) -> Option<&mut PickerState> {
        match self.field_mut(id) {
            Some(FormField { kind: FieldKind::Picker(picker), .. }) => Some(picker),
            _ => None,
        }
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) {
        if let Some(field) = self.field_mut(id) {
            field.hidden = hidden;
        }
    }

    #[cfg(test)]
    pub fn current_id(&self) -> Option<&'static str> {
        self.fields.get(self.current).map(|f| f.id)
    }

    /// Required visible fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required && !f.hidden && self.value(f.id).trim().is_empty())
            .map(|f| f.label)
            .collect()
    }

    pub fn next_field(&mut self) {
        let len = self.fields.len();
        for step in 1..=len {
            let i = (self.current + step) % len;
            if !self.fields[i].hidden {
                self.current = i;
                return;
            }
        }
    }

    pub fn previous_field(&mut self) {
        let len = self.fields.len();
        for step in 1..=len {
            let i = (self.current + len - step) % len;
            if !self.fields[i].hidden {
                self.current = i;
                return;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> FormEvent {
        if self.editing {
            let Some(field) = self.fields.get_mut(self.current) else {
                return FormEvent::Ignored;
            };
            match key {
                KeyCode::Enter | KeyCode::Esc => self.editing = false,
                KeyCode::Char(c) => {
                    field.value.push(c);
                    if matches!(field.kind, FieldKind::ZipCode) {
                        field.value = format_zip_code(&field.value);
                    }
                }
                KeyCode::Backspace => {
                    field.value.pop();
                    if matches!(field.kind, FieldKind::ZipCode) {
                        field.value = format_zip_code(&field.value);
                    }
                }
                _ => return FormEvent::Ignored,
            }
            return FormEvent::Handled;
        }

        match key {
            KeyCode::Up => self.previous_field(),
            KeyCode::Down | KeyCode::Tab => self.next_field(),
            KeyCode::Enter => {
                if let Some(field) = self.fields.get(self.current) {
                    if field.is_picker() {
                        return self.cycle(true);
                    }
                    self.error = None;
                    self.editing = true;
                }
            }
            KeyCode::Right => return self.cycle(true),
            KeyCode::Left => return self.cycle(false),
            _ => return FormEvent::Ignored,
        }
        FormEvent::Handled
    }

    fn cycle(&mut self, forward: bool) -> FormEvent {
        match self.fields.get_mut(self.current) {
            Some(FormField { id, kind: FieldKind::Picker(picker), .. }) if !picker.is_empty() => {
                if forward {
                    picker.next();
                } else {
                    picker.previous();
                }
                FormEvent::Changed(*id)
            }
            _ => FormEvent::Ignored,
        }
    }
}

pub fn render_form<B: Backend>(frame: &mut Frame<B>, state: &FormState, title: &str, area: Rect) {
    let items: Vec<ListItem> = state
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.hidden)
        .map(|(i, field)| {
            let name = if field.required {
                format!("{}*: ", field.label)
            } else {
                format!("{}: ", field.label)
            };
            let value = field.display();

            let content = if i == state.current && state.editing {
                Spans::from(vec![
                    Span::styled(name, Style::default().fg(Color::Yellow)),
                    Span::styled(format!("{}|", value), Style::default().add_modifier(Modifier::BOLD)),
                ])
            } else {
                let style = if i == state.current {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                Spans::from(vec![Span::styled(name, style), Span::raw(value)])
            };

            ListItem::new(content)
        })
        .collect();

    let form_list = List::new(items).block(Block::default().borders(Borders::ALL).title(title.to_string()));

    frame.render_widget(form_list, area);
}

/// Title, form and help bar, the layout shared by every wizard screen.
pub fn render_wizard<B: Backend>(frame: &mut Frame<B>, state: &FormState, title: &str, form_title: &str, help: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(frame.size());

    let title = Paragraph::new(title.to_string())
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_form(frame, state, form_title, chunks[1]);

    let help_text = if state.editing {
        "Enter - Save field | Esc - Stop editing"
    } else {
        help
    };

    let mut lines = vec![Spans::from(Span::styled(help_text.to_string(), Style::default().fg(Color::Gray)))];
    if let Some(error) = &state.error {
        lines.push(Spans::from(Span::styled(error.clone(), Style::default().fg(Color::Red))));
    }

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState::new(vec![
            FormField::text("name", "Name").required(),
            FormField::secret("password", "Password"),
            FormField::zip_code("zip", "Zip code"),
            FormField::picker("color", "Color", PickerState::from_values(["red", "blue"], "(pick)")),
        ])
    }

    fn type_text(form: &mut FormState, text: &str) {
        form.handle_key(KeyCode::Enter);
        for c in text.chars() {
            form.handle_key(KeyCode::Char(c));
        }
        form.handle_key(KeyCode::Enter);
    }

    #[test]
    fn typing_requires_edit_mode() {
        let mut form = form();
        assert_eq!(form.handle_key(KeyCode::Char('x')), FormEvent::Ignored);
        assert_eq!(form.value("name"), "");

        type_text(&mut form, "Ana");
        assert_eq!(form.value("name"), "Ana");
        assert!(!form.editing);
        assert!(form.missing_required().is_empty());
    }

    #[test]
    fn zip_code_is_masked_while_typing() {
        let mut form = form();
        form.next_field();
        form.next_field();
        assert_eq!(form.current_id(), Some("zip"));
        type_text(&mut form, "13010000");
        assert_eq!(form.value("zip"), "13010-000");
    }

    #[test]
    fn pickers_cycle_and_report_changes() {
        let mut form = form();
        form.previous_field();
        assert_eq!(form.current_id(), Some("color"));
        assert_eq!(form.handle_key(KeyCode::Right), FormEvent::Changed("color"));
        assert_eq!(form.value("color"), "red");
        assert_eq!(form.handle_key(KeyCode::Left), FormEvent::Changed("color"));
        assert_eq!(form.value("color"), "blue");
        assert!(!form.editing);
    }

    #[test]
    fn hidden_fields_are_skipped() {
        let mut form = form();
        form.set_hidden("password", true);
        form.next_field();
        assert_eq!(form.current_id(), Some("zip"));
        form.set_hidden("name", true);
        assert!(form.missing_required().is_empty());
    }
}
