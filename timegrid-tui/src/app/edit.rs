use timegrid::{Element, InterfaceTree};

use super::App;

/// Form inputs reachable from the keyboard, in tab order.
pub const EDITABLE_FIELDS: [Element; 5] = [
    Element::EntryDate,
    Element::StartTime,
    Element::EndTime,
    Element::ChargeCode,
    Element::ActivityText,
];

const TIME_INPUT_LEN: usize = 5;

/// Fields edited by picking one of the rendered options.
pub fn is_choice_field(element: Element) -> bool {
    matches!(element, Element::EntryDate | Element::ChargeCode)
}

impl App {
    pub fn focused_field(&self) -> Option<Element> {
        self.controller
            .tree()
            .focused()
            .filter(|element| EDITABLE_FIELDS.contains(element))
    }

    pub fn focus_field(&mut self, element: Element) {
        self.controller.tree_mut().focus(element);
    }

    pub fn focus_next_field(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_previous_field(&mut self) {
        self.step_focus(EDITABLE_FIELDS.len() - 1);
    }

    fn step_focus(&mut self, step: usize) {
        let next = match self.focused_field() {
            Some(current) => {
                let index = EDITABLE_FIELDS
                    .iter()
                    .position(|e| *e == current)
                    .unwrap_or_default();
                EDITABLE_FIELDS[(index + step) % EDITABLE_FIELDS.len()]
            }
            None => EDITABLE_FIELDS[0],
        };
        self.focus_field(next);
    }

    /// Type into the focused text field. Time fields only take `HH:MM` characters.
    pub fn field_input_char(&mut self, c: char) {
        let Some(element) = self.focused_field() else {
            return;
        };
        if is_choice_field(element) {
            return;
        }
        let tree = self.controller.tree_mut();
        let mut value = tree.value(element).unwrap_or_default();
        if matches!(element, Element::StartTime | Element::EndTime)
            && (!(c.is_ascii_digit() || c == ':') || value.chars().count() >= TIME_INPUT_LEN)
        {
            return;
        }
        value.push(c);
        tree.set_value(element, &value);
    }

    pub fn field_backspace(&mut self) {
        let Some(element) = self.focused_field() else {
            return;
        };
        if is_choice_field(element) {
            return;
        }
        let tree = self.controller.tree_mut();
        let mut value = tree.value(element).unwrap_or_default();
        value.pop();
        tree.set_value(element, &value);
    }

    /// Move the focused choice field `step` options forward (or back).
    pub fn cycle_field_option(&mut self, step: isize) {
        let Some(element) = self.focused_field().filter(|e| is_choice_field(*e)) else {
            return;
        };
        let tree = self.controller.tree_mut();
        let options = tree.options(element);
        if options.is_empty() {
            return;
        }
        let len = options.len() as isize;
        let current = tree.value(element).unwrap_or_default();
        let next = match options.iter().position(|o| *o == current) {
            Some(index) => (index as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        tree.set_value(element, &options[next as usize]);
    }
}
