//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, PopupState, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Navigation action for unified scroll/selection dispatch.
enum NavAction {
    Up,
    Down,
    Home,
    End,
}

/// Dispatches navigation to the help popup scroll or the active tab's table.
fn dispatch_navigation(state: &mut AppState, action: NavAction) {
    match &mut state.popup {
        PopupState::Help { scroll } => match action {
            NavAction::Up => *scroll = scroll.saturating_sub(1),
            NavAction::Down => *scroll = scroll.saturating_add(1),
            NavAction::Home => *scroll = 0,
            NavAction::End => {}
        },
        PopupState::None => {
            let table = state.current_table_mut();
            match action {
                NavAction::Up => table.select_up(),
                NavAction::Down => table.select_down(),
                NavAction::Home => table.home(),
                NavAction::End => table.end(),
            }
        }
    }
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }

        // Popup dismissal
        KeyCode::Esc => {
            if state.popup.is_open() {
                state.popup = PopupState::None;
            } else {
                state.status_message = None;
            }
        }
        KeyCode::Char('?') | KeyCode::Char('h') => {
            state.popup = if state.popup.is_open() {
                PopupState::None
            } else {
                PopupState::Help { scroll: 0 }
            };
        }

        // Tab navigation
        KeyCode::Tab => state.switch_tab(state.current_tab.next()),
        KeyCode::BackTab => state.switch_tab(state.current_tab.prev()),
        KeyCode::Char('1') => state.switch_tab(Tab::Goal),
        KeyCode::Char('2') => state.switch_tab(Tab::Recruitment),
        KeyCode::Char('3') => state.switch_tab(Tab::Onboarding),
        KeyCode::Char('4') => state.switch_tab(Tab::Win),

        // Selection / scroll
        KeyCode::Up | KeyCode::Char('k') => dispatch_navigation(state, NavAction::Up),
        KeyCode::Down | KeyCode::Char('j') => dispatch_navigation(state, NavAction::Down),
        KeyCode::Home => dispatch_navigation(state, NavAction::Home),
        KeyCode::End => dispatch_navigation(state, NavAction::End),

        // Goal tab controls
        KeyCode::Char('v') if state.current_tab == Tab::Goal => {
            state.goal.toggle_view_mode();
            state.status_message = Some(format!("View: {}", state.goal.view_mode.name()));
        }
        KeyCode::Char('s') if state.current_tab == Tab::Goal => {
            state.goal.cycle_sort_column();
        }
        KeyCode::Char('o') if state.current_tab == Tab::Goal => {
            state.goal.sort_ascending = !state.goal.sort_ascending;
        }

        // Per-tab workflow action
        KeyCode::Char('x') => {
            state.status_message = Some(action_message(state.current_tab).to_string());
        }

        _ => {}
    }
    KeyAction::None
}

/// Confirmation message for the tab's primary workflow action.
fn action_message(tab: Tab) -> &'static str {
    match tab {
        Tab::Goal => "Action plan exported",
        Tab::Recruitment => "Outreach email generated",
        Tab::Onboarding => "Reminder sent to seller",
        Tab::Win => "Growth playbook generated",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits() {
        let mut state = AppState::new(Tab::Goal);
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = AppState::new(Tab::Goal);
        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, quit), KeyAction::Quit);
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut state = AppState::new(Tab::Goal);
        handle_key(&mut state, key(KeyCode::Char('3')));
        assert_eq!(state.current_tab, Tab::Onboarding);
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.current_tab, Tab::Win);
        handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.current_tab, Tab::Onboarding);
    }

    #[test]
    fn test_v_toggles_goal_view_mode() {
        let mut state = AppState::new(Tab::Goal);
        let before = state.goal.view_mode;
        handle_key(&mut state, key(KeyCode::Char('v')));
        assert_ne!(state.goal.view_mode, before);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_v_ignored_outside_goal_tab() {
        let mut state = AppState::new(Tab::Win);
        let before = state.goal.view_mode;
        handle_key(&mut state, key(KeyCode::Char('v')));
        assert_eq!(state.goal.view_mode, before);
    }

    #[test]
    fn test_sort_order_toggle() {
        let mut state = AppState::new(Tab::Goal);
        assert!(!state.goal.sort_ascending);
        handle_key(&mut state, key(KeyCode::Char('o')));
        assert!(state.goal.sort_ascending);
    }

    #[test]
    fn test_action_key_sets_status() {
        let mut state = AppState::new(Tab::Recruitment);
        handle_key(&mut state, key(KeyCode::Char('x')));
        assert_eq!(
            state.status_message.as_deref(),
            Some("Outreach email generated")
        );
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_help_popup_toggle_and_scroll() {
        let mut state = AppState::new(Tab::Goal);
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });
        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn test_selection_moves_within_rows() {
        let mut state = AppState::new(Tab::Recruitment);
        state.recruitment.clamp(4);
        handle_key(&mut state, key(KeyCode::Char('j')));
        handle_key(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.recruitment.selected, 2);
        handle_key(&mut state, key(KeyCode::End));
        assert_eq!(state.recruitment.selected, 3);
        handle_key(&mut state, key(KeyCode::Home));
        assert_eq!(state.recruitment.selected, 0);
    }
}
