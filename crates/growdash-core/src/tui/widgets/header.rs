//! Header widget showing time, seed, tabs, and status messages.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, Tab};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, seed: u64) {
    let chunks = Layout::horizontal([
        Constraint::Length(21), // Time
        Constraint::Length(12), // Seed
        Constraint::Min(20),    // Tabs
        Constraint::Length(36), // Status
    ])
    .split(area);

    // Time
    let time_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    frame.render_widget(Paragraph::new(time_str).style(Styles::header()), chunks[0]);

    // Seed
    let seed_str = format!(" seed {} ", seed);
    frame.render_widget(Paragraph::new(seed_str).style(Styles::header()), chunks[1]);

    // Tabs
    let tabs: Vec<Span> = Tab::all()
        .iter()
        .enumerate()
        .flat_map(|(i, tab)| {
            let style = if *tab == state.current_tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", tab.name());
            vec![Span::styled(num, Styles::dim()), Span::styled(name, style)]
        })
        .collect();
    let tabs_widget = Paragraph::new(Line::from(tabs)).style(Styles::header());
    frame.render_widget(tabs_widget, chunks[2]);

    // Status message or key hint
    let (text, style) = match &state.status_message {
        Some(msg) => (msg.clone(), Styles::status()),
        None => ("? help  q quit".to_string(), Styles::header()),
    };
    frame.render_widget(Paragraph::new(text).style(style), chunks[3]);
}
