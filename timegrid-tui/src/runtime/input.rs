use crate::app::{App, HitTarget};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use timegrid::{EventOutcome, InputEvent, PointerButton};

use super::action_queue::{Action, ActionTx};

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

/// Forward one controller event; a submission is queued for the store.
fn dispatch(app: &mut App, event: InputEvent, action_tx: &ActionTx) -> EventOutcome {
    let outcome = app.controller.handle(event);
    if let EventOutcome::Submitted(submission) = &outcome {
        enqueue_action(action_tx, Action::PersistEntry(submission.clone()));
    }
    outcome
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}

pub(super) fn handle_event(event: Event, app: &mut App, action_tx: &ActionTx) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app, action_tx),
        Event::Mouse(mouse) => handle_mouse(mouse, app, action_tx),
        Event::FocusLost => {
            app.drag_slot = None;
            dispatch(app, InputEvent::WindowBlur, action_tx);
        }
        _ => {}
    }
}

fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    let visibility = app.controller.modal_visibility();
    match key.code {
        KeyCode::Esc => {
            app.drag_slot = None;
            dispatch(app, InputEvent::Escape, action_tx);
        }
        // The notes modal is read-only and sits above the entry form.
        _ if visibility.notes_open => {}
        _ if visibility.entry_open => handle_form_key(key, app, action_tx),
        KeyCode::Char('q') => app.running = false,
        KeyCode::Left | KeyCode::Char('h') => {
            app.shift_week(-1);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.shift_week(1);
        }
        KeyCode::Char('t') => {
            app.jump_to_today();
        }
        _ => {}
    }
}

fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous_field(),
        KeyCode::Left => app.cycle_field_option(-1),
        KeyCode::Right => app.cycle_field_option(1),
        KeyCode::Enter => {
            dispatch(app, InputEvent::Submit, action_tx);
        }
        KeyCode::Backspace => app.field_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.field_input_char(c);
        }
        _ => {}
    }
}

fn handle_mouse(mouse: MouseEvent, app: &mut App, action_tx: &ActionTx) {
    let target = app.hit_map.hit(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(button) => handle_press(target, button, app, action_tx),
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(HitTarget::Slot { index, .. }) = target {
                if app.drag_slot != Some(index) {
                    app.drag_slot = Some(index);
                    dispatch(app, InputEvent::PointerEnter { slot: index }, action_tx);
                }
            }
        }
        MouseEventKind::Up(button) => {
            app.drag_slot = None;
            dispatch(
                app,
                InputEvent::PointerUp {
                    button: pointer_button(button),
                },
                action_tx,
            );
        }
        _ => {}
    }
}

fn handle_press(
    target: Option<HitTarget>,
    button: MouseButton,
    app: &mut App,
    action_tx: &ActionTx,
) {
    let Some(target) = target else {
        return;
    };
    match target {
        HitTarget::Slot {
            block: Some(block), ..
        } if button == MouseButton::Left => {
            if let Some(record) = app.page.edit_record(block) {
                dispatch(app, InputEvent::EditEntry(record), action_tx);
            }
        }
        HitTarget::Slot { index, .. } => {
            app.drag_slot = Some(index);
            dispatch(
                app,
                InputEvent::PointerDown {
                    slot: index,
                    button: pointer_button(button),
                },
                action_tx,
            );
        }
        HitTarget::OverviewCell { row, day } => match button {
            MouseButton::Left => {
                if let Some(request) = app.page.notes_request(row, day) {
                    dispatch(app, InputEvent::ShowNotes(request), action_tx);
                }
            }
            MouseButton::Right => {
                let payload = app.page.copy_payload(row, day);
                enqueue_action(action_tx, Action::CopyNotes { payload });
            }
            MouseButton::Middle => {}
        },
        HitTarget::Backdrop(modal) => {
            dispatch(
                app,
                InputEvent::ModalClick {
                    modal,
                    on_backdrop: true,
                },
                action_tx,
            );
        }
        HitTarget::ModalContent(modal) => {
            dispatch(
                app,
                InputEvent::ModalClick {
                    modal,
                    on_backdrop: false,
                },
                action_tx,
            );
        }
        HitTarget::Close(modal) => {
            dispatch(app, InputEvent::CloseClick(modal), action_tx);
        }
        HitTarget::Field(element) => app.focus_field(element),
        HitTarget::Submit => {
            dispatch(app, InputEvent::Submit, action_tx);
        }
    }
}
