//! Event Handling - Keyboard input processing
//!
//! Key presses either edit view state directly (typing, focus, marks,
//! opening dialogs) or produce a [`Command`] for the store.
//!
//! Modal precedence: notice > edit dialog > export prompt > main screen.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{Command, Focus, InventoryView};

/// What the run loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Dispatch(Command),
    None,
}

/// Handle keyboard events
pub fn handle_key_event(key: KeyEvent, view: &mut InventoryView) -> Action {
    // Quit works everywhere, even with a dialog open
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return Action::Quit;
    }

    if view.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            view.notice = None;
        }
        return Action::None;
    }

    if view.edit.is_some() {
        return handle_edit_key(key, view);
    }

    if view.export.is_some() {
        return handle_export_key(key, view);
    }

    handle_main_key(key, view)
}

fn handle_edit_key(key: KeyEvent, view: &mut InventoryView) -> Action {
    let Some(edit) = view.edit.as_mut() else {
        return Action::None;
    };

    match key.code {
        KeyCode::Esc => view.edit = None,
        KeyCode::Enter => return Action::Dispatch(Command::SaveEdit),
        KeyCode::Tab | KeyCode::Down => edit.next_field(),
        KeyCode::BackTab | KeyCode::Up => edit.prev_field(),
        KeyCode::Backspace => {
            edit.active_text().pop();
        }
        KeyCode::Char(c) if is_plain(key) => edit.active_text().push(c),
        _ => {}
    }

    Action::None
}

fn handle_export_key(key: KeyEvent, view: &mut InventoryView) -> Action {
    let Some(prompt) = view.export.as_mut() else {
        return Action::None;
    };

    match key.code {
        KeyCode::Esc => {
            view.export = None;
            view.status = "Export cancelled".to_string();
        }
        KeyCode::Enter => return Action::Dispatch(Command::Export),
        KeyCode::Backspace => {
            prompt.input.pop();
        }
        KeyCode::Char(c) if is_plain(key) => prompt.input.push(c),
        _ => {}
    }

    Action::None
}

fn handle_main_key(key: KeyEvent, view: &mut InventoryView) -> Action {
    // Shortcuts available from any section
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => return Action::Dispatch(Command::ShowAll),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            return Action::Dispatch(Command::DeleteSelected)
        }
        (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            view.open_export(chrono::Local::now().date_naive());
            return Action::None;
        }
        (_, KeyCode::Tab) => {
            view.focus = view.focus.next();
            return Action::None;
        }
        (_, KeyCode::BackTab) => {
            view.focus = view.focus.prev();
            return Action::None;
        }
        _ => {}
    }

    if view.focus == Focus::Table {
        return handle_table_key(key, view);
    }

    if key.code == KeyCode::Enter {
        return if view.focus == Focus::Search {
            Action::Dispatch(Command::Search)
        } else {
            Action::Dispatch(Command::Add)
        };
    }

    let text = match view.focus {
        Focus::Name => &mut view.form.name,
        Focus::Quantity => &mut view.form.quantity,
        Focus::Price => &mut view.form.price,
        Focus::Search => &mut view.query,
        Focus::Table => return Action::None,
    };

    match key.code {
        KeyCode::Backspace => {
            text.pop();
        }
        KeyCode::Char(c) if is_plain(key) => text.push(c),
        _ => {}
    }

    Action::None
}

fn handle_table_key(key: KeyEvent, view: &mut InventoryView) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => view.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => view.move_cursor(1),
        KeyCode::PageUp => view.move_cursor(-10),
        KeyCode::PageDown => view.move_cursor(10),
        KeyCode::Home => view.cursor = 0,
        KeyCode::End => view.move_cursor(isize::MAX),
        KeyCode::Char(' ') => view.toggle_mark(),
        KeyCode::Enter => {
            if let Some(id) = view.current().map(|m| m.id) {
                return Action::Dispatch(Command::OpenEdit(id));
            }
        }
        _ => {}
    }

    Action::None
}

/// Typed characters: no Ctrl or Alt (Shift is fine)
fn is_plain(key: KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Poll for keyboard events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            // Windows also reports releases
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ConfigState, EditDialog, ExportPrompt, MedicineForm, Notice};
    use pharmacy_core::Medicine;

    fn view_with_rows() -> InventoryView {
        let mut view = InventoryView::new(ConfigState::default());
        view.rows = vec![
            Medicine {
                id: 1,
                name: "A".to_string(),
                quantity: 1,
                price: 1.0,
            },
            Medicine {
                id: 2,
                name: "B".to_string(),
                quantity: 2,
                price: 2.0,
            },
        ];
        view
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(view: &mut InventoryView, text: &str) {
        for c in text.chars() {
            handle_key_event(press(KeyCode::Char(c)), view);
        }
    }

    #[test]
    fn test_ctrl_c_quit() {
        let mut view = view_with_rows();
        assert_eq!(handle_key_event(ctrl('c'), &mut view), Action::Quit);
        assert_eq!(handle_key_event(ctrl('q'), &mut view), Action::Quit);
    }

    #[test]
    fn test_plain_q_is_text() {
        let mut view = view_with_rows();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q')), &mut view),
            Action::None
        );
        assert_eq!(view.form.name, "q");
    }

    #[test]
    fn test_typing_fills_form_and_enter_adds() {
        let mut view = view_with_rows();
        type_text(&mut view, "Aspirin");
        handle_key_event(press(KeyCode::Tab), &mut view);
        type_text(&mut view, "10");
        handle_key_event(press(KeyCode::Tab), &mut view);
        type_text(&mut view, "1.25");
        handle_key_event(press(KeyCode::Backspace), &mut view);

        assert_eq!(
            view.form,
            MedicineForm {
                name: "Aspirin".to_string(),
                quantity: "10".to_string(),
                price: "1.2".to_string(),
            }
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Enter), &mut view),
            Action::Dispatch(Command::Add)
        );
    }

    #[test]
    fn test_shifted_characters_are_typed() {
        let mut view = view_with_rows();
        let key = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT);
        handle_key_event(key, &mut view);
        assert_eq!(view.form.name, "P");
    }

    #[test]
    fn test_enter_in_search_bar_searches() {
        let mut view = view_with_rows();
        view.focus = Focus::Search;
        type_text(&mut view, "para");
        assert_eq!(view.query, "para");
        assert_eq!(
            handle_key_event(press(KeyCode::Enter), &mut view),
            Action::Dispatch(Command::Search)
        );
    }

    #[test]
    fn test_table_navigation_marks_and_edit() {
        let mut view = view_with_rows();
        view.focus = Focus::Table;

        handle_key_event(press(KeyCode::Down), &mut view);
        handle_key_event(press(KeyCode::Down), &mut view);
        assert_eq!(view.cursor, 1);

        handle_key_event(press(KeyCode::Char(' ')), &mut view);
        assert!(view.is_marked(2));
        handle_key_event(press(KeyCode::Char(' ')), &mut view);
        assert!(!view.is_marked(2));

        assert_eq!(
            handle_key_event(press(KeyCode::Enter), &mut view),
            Action::Dispatch(Command::OpenEdit(2))
        );
    }

    #[test]
    fn test_shortcuts() {
        let mut view = view_with_rows();
        assert_eq!(
            handle_key_event(ctrl('r'), &mut view),
            Action::Dispatch(Command::ShowAll)
        );
        assert_eq!(
            handle_key_event(ctrl('d'), &mut view),
            Action::Dispatch(Command::DeleteSelected)
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Delete), &mut view),
            Action::Dispatch(Command::DeleteSelected)
        );

        handle_key_event(ctrl('e'), &mut view);
        let prompt = view.export.clone().unwrap();
        assert!(prompt.input.starts_with("medicines_"));
        assert!(prompt.input.ends_with(".csv"));
    }

    #[test]
    fn test_notice_takes_precedence() {
        let mut view = view_with_rows();
        view.notice = Some(Notice::warning("Select an item to delete."));
        view.export = Some(ExportPrompt {
            input: String::new(),
        });

        assert_eq!(
            handle_key_event(press(KeyCode::Char('x')), &mut view),
            Action::None
        );
        assert_eq!(view.export.clone().unwrap().input, "");

        handle_key_event(press(KeyCode::Esc), &mut view);
        assert!(view.notice.is_none());
        assert!(view.export.is_some());
    }

    #[test]
    fn test_edit_dialog_keys() {
        let mut view = view_with_rows();
        view.edit = Some(EditDialog {
            id: 1,
            form: MedicineForm::from_medicine(&view.rows[0]),
            field: 0,
        });

        handle_key_event(press(KeyCode::Tab), &mut view);
        type_text(&mut view, "5");
        assert_eq!(view.edit.clone().unwrap().form.quantity, "15");

        assert_eq!(
            handle_key_event(press(KeyCode::Enter), &mut view),
            Action::Dispatch(Command::SaveEdit)
        );

        handle_key_event(press(KeyCode::Esc), &mut view);
        assert!(view.edit.is_none());
    }

    #[test]
    fn test_export_prompt_keys() {
        let mut view = view_with_rows();
        view.export = Some(ExportPrompt {
            input: "out".to_string(),
        });

        handle_key_event(press(KeyCode::Backspace), &mut view);
        assert_eq!(view.export.clone().unwrap().input, "ou");
        assert_eq!(
            handle_key_event(press(KeyCode::Enter), &mut view),
            Action::Dispatch(Command::Export)
        );

        handle_key_event(press(KeyCode::Esc), &mut view);
        assert!(view.export.is_none());
    }
}
