/// A cycling choice between a fixed set of options, driven with Left/Right.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// (value, label) pairs
    options: Vec<(String, String)>,
    selected: Option<usize>,
    placeholder: &'static str,
}

impl PickerState {
    pub fn new(options: Vec<(String, String)>, placeholder: &'static str) -> Self {
        Self {
            options,
            selected: None,
            placeholder,
        }
    }

    /// Options whose value doubles as label.
    pub fn from_values<I, S>(values: I, placeholder: &'static str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = values
            .into_iter()
            .map(|v| {
                let v = v.into();
                (v.clone(), v)
            })
            .collect();
        Self::new(options, placeholder)
    }

    pub fn with_selected(mut self, value: &str) -> Self {
        self.select_value(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.options.len() => i + 1,
            _ => 0,
        });
    }

    pub fn previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(i) => i - 1,
        });
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Selects the option with this value; clears the selection otherwise.
    pub fn select_value(&mut self, value: &str) {
        self.selected = self.options.iter().position(|(v, _)| v == value);
    }

    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|(value, _)| value.as_str())
    }

    pub fn label(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|(_, label)| label.as_str())
            .unwrap_or(self.placeholder)
    }

    pub fn replace_options(&mut self, options: Vec<(String, String)>) {
        self.options = options;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_in_both_directions() {
        let mut picker = PickerState::from_values(["a", "b", "c"], "(choose)");
        assert_eq!(picker.value(), None);
        assert_eq!(picker.label(), "(choose)");

        picker.next();
        assert_eq!(picker.value(), Some("a"));
        picker.previous();
        assert_eq!(picker.value(), Some("c"));
        picker.next();
        assert_eq!(picker.value(), Some("a"));
    }

    #[test]
    fn select_by_value() {
        let picker = PickerState::new(
            vec![("SP".into(), "São Paulo".into()), ("RJ".into(), "Rio de Janeiro".into())],
            "(state)",
        )
        .with_selected("RJ");
        assert_eq!(picker.value(), Some("RJ"));
        assert_eq!(picker.label(), "Rio de Janeiro");
    }

    #[test]
    fn empty_picker_stays_unselected() {
        let mut picker = PickerState::new(Vec::new(), "(none)");
        picker.next();
        assert!(picker.is_empty());
        assert_eq!(picker.value(), None);
    }
}
