//! Application state management.

use crate::view::goal::GoalViewMode;

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Goal,
    Recruitment,
    Onboarding,
    Win,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Goal, Tab::Recruitment, Tab::Onboarding, Tab::Win]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Goal => "GOAL",
            Tab::Recruitment => "RECRUIT",
            Tab::Onboarding => "ONBOARD",
            Tab::Win => "WIN",
        }
    }

    /// Parses a tab from its CLI name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Tab> {
        match name.to_ascii_lowercase().as_str() {
            "goal" => Some(Tab::Goal),
            "recruitment" | "recruit" => Some(Tab::Recruitment),
            "onboarding" | "onboard" => Some(Tab::Onboarding),
            "win" => Some(Tab::Win),
            _ => None,
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Goal => Tab::Recruitment,
            Tab::Recruitment => Tab::Onboarding,
            Tab::Onboarding => Tab::Win,
            Tab::Win => Tab::Goal,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Goal => Tab::Win,
            Tab::Recruitment => Tab::Goal,
            Tab::Onboarding => Tab::Recruitment,
            Tab::Win => Tab::Onboarding,
        }
    }
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Selection state shared by the fixture-backed tabs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabState {
    /// Selected row index in the tab's primary table.
    pub selected: usize,
    /// Row count of the primary table, refreshed each frame for clamping.
    pub row_count: usize,
}

impl TabState {
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.row_count > 0 && self.selected < self.row_count - 1 {
            self.selected += 1;
        }
    }

    pub fn home(&mut self) {
        self.selected = 0;
    }

    pub fn end(&mut self) {
        if self.row_count > 0 {
            self.selected = self.row_count - 1;
        }
    }

    /// Keeps the selection valid after the table shrinks.
    pub fn clamp(&mut self, row_count: usize) {
        self.row_count = row_count;
        if row_count == 0 {
            self.selected = 0;
        } else if self.selected >= row_count {
            self.selected = row_count - 1;
        }
    }
}

/// Goal tab state: view mode plus sort controls for the performance table.
#[derive(Debug, Clone, Copy)]
pub struct GoalTabState {
    pub view_mode: GoalViewMode,
    pub sort_column: usize,
    pub sort_ascending: bool,
    pub table: TabState,
}

impl Default for GoalTabState {
    fn default() -> Self {
        let view_mode = GoalViewMode::default();
        Self {
            view_mode,
            sort_column: view_mode.default_sort_column(),
            sort_ascending: false,
            table: TabState::default(),
        }
    }
}

impl GoalTabState {
    /// Toggles between the performance and AI insight projections,
    /// resetting sort to the new mode's default.
    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggle();
        self.sort_column = self.view_mode.default_sort_column();
        self.sort_ascending = false;
        self.table.selected = 0;
    }

    /// Advances the sort column, wrapping at the end of the header row.
    pub fn cycle_sort_column(&mut self) {
        self.sort_column = (self.sort_column + 1) % self.view_mode.column_count();
    }
}

/// Main application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Goal tab state.
    pub goal: GoalTabState,
    /// Recruitment tab state.
    pub recruitment: TabState,
    /// Onboarding tab state.
    pub onboarding: TabState,
    /// Win tab state.
    pub win: TabState,
    /// Active popup state.
    pub popup: PopupState,
    /// Temporary status message shown in the header.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(initial_tab: Tab) -> Self {
        Self {
            current_tab: initial_tab,
            ..Self::default()
        }
    }

    /// Switches to a new tab and clears any stale status message.
    pub fn switch_tab(&mut self, new_tab: Tab) {
        if self.current_tab != new_tab {
            self.current_tab = new_tab;
            self.status_message = None;
        }
    }

    /// Selection state for the currently active tab.
    pub fn current_table_mut(&mut self) -> &mut TabState {
        match self.current_tab {
            Tab::Goal => &mut self.goal.table,
            Tab::Recruitment => &mut self.recruitment,
            Tab::Onboarding => &mut self.onboarding,
            Tab::Win => &mut self.win,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_round_trips() {
        for tab in Tab::all() {
            assert_eq!(tab.next().prev(), *tab);
        }
        assert_eq!(Tab::Win.next(), Tab::Goal);
    }

    #[test]
    fn test_tab_from_name() {
        assert_eq!(Tab::from_name("goal"), Some(Tab::Goal));
        assert_eq!(Tab::from_name("RECRUIT"), Some(Tab::Recruitment));
        assert_eq!(Tab::from_name("nope"), None);
    }

    #[test]
    fn test_selection_clamps_to_row_count() {
        let mut table = TabState {
            selected: 9,
            row_count: 10,
        };
        table.clamp(4);
        assert_eq!(table.selected, 3);
        table.clamp(0);
        assert_eq!(table.selected, 0);
        table.select_up();
        assert_eq!(table.selected, 0);
    }

    #[test]
    fn test_goal_view_mode_toggle_resets_sort() {
        let mut goal = GoalTabState::default();
        goal.sort_column = 5;
        goal.sort_ascending = true;
        goal.toggle_view_mode();
        assert_eq!(goal.sort_column, goal.view_mode.default_sort_column());
        assert!(!goal.sort_ascending);
    }

    #[test]
    fn test_cycle_sort_wraps() {
        let mut goal = GoalTabState::default();
        let cols = goal.view_mode.column_count();
        goal.sort_column = cols - 1;
        goal.cycle_sort_column();
        assert_eq!(goal.sort_column, 0);
    }

    #[test]
    fn test_switch_tab_clears_status() {
        let mut state = AppState::new(Tab::Goal);
        state.status_message = Some("done".to_string());
        state.switch_tab(Tab::Win);
        assert_eq!(state.current_tab, Tab::Win);
        assert!(state.status_message.is_none());
    }
}
