//! Application state definitions

use super::forms::{next_option, prev_option, FieldId, FormState};

/// Where keyboard focus sits: one of the fields, or the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::FullName)
    }
}

impl Focus {
    /// Number of focusable positions (every field plus the button)
    pub const COUNT: usize = FieldId::ALL.len() + 1;

    pub fn index(&self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::Submit => FieldId::ALL.len(),
        }
    }

    pub fn from_index(index: usize) -> Self {
        FieldId::ALL
            .get(index % Self::COUNT)
            .map(|f| Focus::Field(*f))
            .unwrap_or(Focus::Submit)
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    pub fn field(&self) -> Option<FieldId> {
        match self {
            Focus::Field(field) => Some(*field),
            Focus::Submit => None,
        }
    }
}

/// Option list opened over a choice field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoicePicker {
    pub field: FieldId,
    pub highlighted: usize,
}

impl ChoicePicker {
    /// Open on `field`, highlighting its current value when it has one
    pub fn open(field: FieldId, current: &str) -> Self {
        let highlighted = field
            .kind()
            .options()
            .iter()
            .position(|o| *o == current)
            .unwrap_or(0);
        Self { field, highlighted }
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.field.kind().options()
    }

    pub fn move_up(&mut self) {
        let len = self.options().len();
        if len == 0 {
            return;
        }
        self.highlighted = if self.highlighted == 0 {
            len - 1
        } else {
            self.highlighted - 1
        };
    }

    pub fn move_down(&mut self) {
        let len = self.options().len();
        if len > 0 {
            self.highlighted = (self.highlighted + 1) % len;
        }
    }

    pub fn highlighted_option(&self) -> Option<&'static str> {
        self.options().get(self.highlighted).copied()
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: FormState,
    pub focus: Focus,
    pub picker: Option<ChoicePicker>,
    /// Show range hints in field titles
    pub show_hints: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AppState {
    pub fn new(show_hints: bool) -> Self {
        Self {
            form: FormState::new(),
            focus: Focus::default(),
            picker: None,
            show_hints,
        }
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        self.focus.field()
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused free-text field.
    ///
    /// Choice fields and the button ignore typing.
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            if !field.kind().is_choice() {
                self.form.push_char(field, c);
            }
        }
    }

    /// Delete the last character, or clear a choice field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            if field.kind().is_choice() {
                self.form.clear_field(field);
            } else {
                self.form.pop_char(field);
            }
        }
    }

    pub fn clear_focused(&mut self) {
        if let Some(field) = self.focused_field() {
            self.form.clear_field(field);
        }
    }

    /// Step the focused choice field to the next or previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let options = field.kind().options();
        let current = self.form.value(field);
        let picked = if forward {
            next_option(options, current)
        } else {
            prev_option(options, current)
        };
        if let Some(value) = picked {
            self.form.update(field, value);
        }
    }

    /// Open the option list for the focused choice field
    pub fn open_picker(&mut self) -> bool {
        match self.focused_field() {
            Some(field) if field.kind().is_choice() => {
                self.picker = Some(ChoicePicker::open(field, self.form.value(field)));
                true
            }
            _ => false,
        }
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    /// Store the highlighted option and close the list
    pub fn confirm_picker(&mut self) {
        if let Some(picker) = self.picker.take() {
            if let Some(value) = picker.highlighted_option() {
                self.form.update(picker.field, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PROGRAMME_OPTIONS, SOURCE_OPTIONS};

    mod focus {
        use super::*;

        #[test]
        fn test_default_is_first_field() {
            assert_eq!(Focus::default(), Focus::Field(FieldId::FullName));
        }

        #[test]
        fn test_next_walks_display_order_then_button() {
            let mut focus = Focus::default();
            for field in FieldId::ALL.iter().skip(1) {
                focus = focus.next();
                assert_eq!(focus, Focus::Field(*field));
            }
            focus = focus.next();
            assert_eq!(focus, Focus::Submit);
            assert_eq!(focus.next(), Focus::Field(FieldId::FullName));
        }

        #[test]
        fn test_prev_wraps_to_button() {
            assert_eq!(Focus::default().prev(), Focus::Submit);
            assert_eq!(Focus::Submit.prev(), Focus::Field(FieldId::Program));
        }

        #[test]
        fn test_index_round_trip() {
            for i in 0..Focus::COUNT {
                assert_eq!(Focus::from_index(i).index(), i);
            }
        }
    }

    mod picker {
        use super::*;

        #[test]
        fn test_open_highlights_current_value() {
            let picker = ChoicePicker::open(FieldId::Program, "LINFO 2");
            assert_eq!(picker.highlighted, 4);
            assert_eq!(picker.highlighted_option(), Some("LINFO 2"));
        }

        #[test]
        fn test_open_on_empty_highlights_first() {
            let picker = ChoicePicker::open(FieldId::Source, "");
            assert_eq!(picker.highlighted_option(), Some("Passage"));
        }

        #[test]
        fn test_moves_wrap() {
            let mut picker = ChoicePicker::open(FieldId::Source, "");
            picker.move_up();
            assert_eq!(picker.highlighted_option(), Some("Recommendation"));
            picker.move_down();
            assert_eq!(picker.highlighted_option(), Some("Passage"));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_text_field() {
        let mut state = AppState::default();
        for c in "Jean".chars() {
            state.input_char(c);
        }
        state.next_focus();
        state.input_char('x');
        assert_eq!(state.form.value(FieldId::FullName), "Jean");
        assert_eq!(state.form.value(FieldId::Email), "x");
    }

    #[test]
    fn test_typing_ignored_on_choice_and_button() {
        let mut state = AppState::default();
        state.focus = Focus::Field(FieldId::Source);
        state.input_char('S');
        assert_eq!(state.form.value(FieldId::Source), "");

        state.focus = Focus::Submit;
        state.input_char('x');
        assert!(state.form.record.is_empty());
    }

    #[test]
    fn test_backspace_pops_text_and_clears_choice() {
        let mut state = AppState::default();
        state.form.update(FieldId::FullName, "Jean");
        state.form.update(FieldId::Source, "Salon");

        state.backspace();
        assert_eq!(state.form.value(FieldId::FullName), "Jea");

        state.focus = Focus::Field(FieldId::Source);
        state.backspace();
        assert_eq!(state.form.value(FieldId::Source), "");
    }

    #[test]
    fn test_clear_focused() {
        let mut state = AppState::default();
        state.form.update(FieldId::FullName, "Jean");
        state.clear_focused();
        assert_eq!(state.form.value(FieldId::FullName), "");
    }

    #[test]
    fn test_cycle_choice() {
        let mut state = AppState::default();
        state.focus = Focus::Field(FieldId::Source);
        state.cycle_choice(true);
        assert_eq!(state.form.value(FieldId::Source), SOURCE_OPTIONS[0]);
        state.cycle_choice(false);
        assert_eq!(state.form.value(FieldId::Source), SOURCE_OPTIONS[2]);
    }

    #[test]
    fn test_cycle_choice_on_text_field_is_noop() {
        let mut state = AppState::default();
        state.cycle_choice(true);
        assert!(state.form.record.is_empty());
    }

    #[test]
    fn test_picker_confirm_stores_option() {
        let mut state = AppState::default();
        state.focus = Focus::Field(FieldId::Program);
        assert!(state.open_picker());
        if let Some(picker) = state.picker.as_mut() {
            picker.move_down();
            picker.move_down();
        }
        state.confirm_picker();
        assert!(state.picker.is_none());
        assert_eq!(state.form.value(FieldId::Program), PROGRAMME_OPTIONS[2]);
    }

    #[test]
    fn test_picker_close_keeps_value() {
        let mut state = AppState::default();
        state.focus = Focus::Field(FieldId::Specialty);
        state.form.update(FieldId::Specialty, "Maths");
        state.open_picker();
        state.close_picker();
        assert_eq!(state.form.value(FieldId::Specialty), "Maths");
    }

    #[test]
    fn test_picker_does_not_open_on_text_field() {
        let mut state = AppState::default();
        assert!(!state.open_picker());
        assert!(state.picker.is_none());
    }
}
