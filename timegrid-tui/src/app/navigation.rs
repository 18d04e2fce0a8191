use time::Duration;

use super::App;

impl App {
    /// Move `weeks` weeks forward (negative: back). Refused while a modal is open.
    pub fn shift_week(&mut self, weeks: i64) -> bool {
        if self.controller.modal_visibility().any_open() {
            return false;
        }
        let start = self.page.week_start().unwrap_or(self.anchor);
        self.anchor = start + Duration::weeks(weeks);
        self.rebuild();
        true
    }

    pub fn jump_to_today(&mut self) -> bool {
        if self.controller.modal_visibility().any_open() {
            return false;
        }
        self.anchor = self.today;
        self.rebuild();
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::app;
    use time::macros::date;
    use timegrid::{InputEvent, NotesRequest};

    #[test]
    fn weeks_move_by_seven_days_from_week_start() {
        let mut app = app();
        assert!(app.shift_week(1));
        assert_eq!(app.page.week_start(), Some(date!(2024 - 05 - 09)));
        assert!(app.page.blocks.is_empty());

        assert!(app.shift_week(-2));
        assert_eq!(app.page.week_start(), Some(date!(2024 - 04 - 25)));

        assert!(app.jump_to_today());
        assert_eq!(app.page.week_start(), Some(date!(2024 - 05 - 02)));
    }

    #[test]
    fn navigation_waits_for_modals_to_close() {
        let mut app = app();
        app.controller
            .handle(InputEvent::ShowNotes(NotesRequest::default()));

        assert!(!app.shift_week(1));
        assert_eq!(app.page.week_start(), Some(date!(2024 - 05 - 02)));
    }
}
