//! Help popup widget with per-tab key and column descriptions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::state::Tab;

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, tab: Tab, scroll: &mut usize) {
    // 60% width, 80% height, clamped
    let popup_width = (area.width * 60 / 100).clamp(40, 80);
    let popup_height = (area.height * 80 / 100).clamp(10, 30);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let (title, content) = help_content(tab);
    let content_lines = content.len();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        Span::styled(", ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" to scroll", Style::default().fg(Color::DarkGray)),
        Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_content(tab: Tab) -> (&'static str, Vec<Line<'static>>) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default().fg(Color::Cyan),
        )),
        Line::from("  1-4 / Tab / Shift-Tab   switch tab"),
        Line::from("  j/k or arrows           move selection"),
        Line::from("  Home / End              jump to first / last row"),
        Line::from("  x                       run the tab's action"),
        Line::from("  ? / h                   toggle this help"),
        Line::from("  q / Ctrl-C              quit"),
        Line::from(""),
    ];

    let (title, tab_lines): (&'static str, Vec<Line<'static>>) = match tab {
        Tab::Goal => (
            "Goal Tracking Help",
            vec![
                Line::from(Span::styled("Goal tab", Style::default().fg(Color::Cyan))),
                Line::from("  v    toggle Performance / AI Insight view"),
                Line::from("  s    cycle sort column"),
                Line::from("  o    flip sort order"),
                Line::from(""),
                Line::from("KPI gauges compare weekly actuals against targets;"),
                Line::from("the gap and week-over-week delta are shown per metric."),
                Line::from("The seller table joins generated seller metrics with"),
                Line::from("their AI analysis rows. High-potential sellers are the"),
                Line::from("top three by growth rate."),
            ],
        ),
        Tab::Recruitment => (
            "Recruitment Help",
            vec![
                Line::from(Span::styled(
                    "Recruitment tab",
                    Style::default().fg(Color::Cyan),
                )),
                Line::from("Prospects are ranked P0 (contact first) to P2."),
                Line::from("The engagement plan lists the outreach cadence with"),
                Line::from("historical response rates per touchpoint. The funnel"),
                Line::from("shows conversion from prospect to signed seller."),
            ],
        ),
        Tab::Onboarding => (
            "Onboarding Help",
            vec![
                Line::from(Span::styled(
                    "Onboarding tab",
                    Style::default().fg(Color::Cyan),
                )),
                Line::from("Milestones track account setup, KYC, listing, and"),
                Line::from("first shipment per seller, least complete first."),
                Line::from("Interventions list recommended unblocking actions."),
                Line::from("Forecasts estimate days to completion for sellers"),
                Line::from("still onboarding."),
            ],
        ),
        Tab::Win => (
            "Win Help",
            vec![
                Line::from(Span::styled("Win tab", Style::default().fg(Color::Cyan))),
                Line::from("Feature adoption shows which growth levers (FBA, Ads,"),
                Line::from("Promotions, Coupons) each seller has enabled, with the"),
                Line::from("derived adoption rate. Revenue lift compares baseline"),
                Line::from("and current revenue; growth potential forecasts the"),
                Line::from("next quarter with a confidence estimate."),
            ],
        ),
    };

    lines.extend(tab_lines);
    (title, lines)
}
