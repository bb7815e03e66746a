//! Screen rendering functions for the TUI.

use crate::app::{AppState, InputMode};
use depositwatch_core::format::{format_deposits, format_rank};
use depositwatch_core::prelude::*;
use ratatui::{
    prelude::*,
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, TableState,
    },
};

/// Bar colour of the protocol
const HIGHLIGHT: Color = Color::Rgb(0xa8, 0x55, 0xf7);

/// Bar colour of the banks
const BASE: Color = Color::Rgb(0x63, 0x66, 0xf1);

/// Draw the whole dashboard
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.size();
    let view = state.session.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Controls
            Constraint::Min(0),    // Table + chart
            Constraint::Length(4), // Stats
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], state.session.protocol_name(), &state.source_url);
    draw_controls(frame, chunks[1], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    draw_table(
        frame,
        body[0],
        &view,
        state.session.params(),
        state.session.selected(),
    );

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7)])
        .split(body[1]);

    draw_chart(frame, side[0], &view.chart, &state.session.settings().chart_title());
    draw_detail(frame, side[1], view.records.get(state.session.selected()));

    draw_stats(frame, chunks[3], &state.session.summary());
    draw_footer(frame, chunks[4], state.mode);
}

/// Draw header with title and source link
fn draw_header(frame: &mut Frame, area: Rect, protocol_name: &str, source_url: &str) {
    let text = vec![
        Line::from(Span::styled(
            format!("{} vs Banks", protocol_name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Source: Federal Reserve Data ", Style::default().fg(Color::Gray)),
            Span::styled(
                source_url.to_string(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ];

    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw filter selector, deposits input, and refresh status
fn draw_controls(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;
    let editing = state.mode == InputMode::Editing;

    let input_text = if session.input().is_empty() && !editing {
        Span::styled(
            format!("Update {} deposits (B)", session.protocol_name()),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            format!("{}{}", session.input(), if editing { "_" } else { "" }),
            Style::default().fg(Color::White),
        )
    };

    let refresh = if session.is_refreshing() {
        Span::styled("Refreshing...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("Refresh Data", Style::default().fg(Color::Gray))
    };

    let line = Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::Yellow)),
        Span::raw(
            session
                .params()
                .filter_mode
                .label(session.protocol_name(), session.settings().rank_window),
        ),
        Span::raw("  |  "),
        Span::styled("Deposits: ", Style::default().fg(Color::Yellow)),
        input_text,
        Span::raw("  |  "),
        refresh,
    ]);

    let border_style = if editing {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };

    let controls = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(controls, area);
}

/// Draw the rankings table
fn draw_table(frame: &mut Frame, area: Rect, view: &View, params: ViewParams, selected: usize) {
    let header_cells = [
        params.header(SortField::Rank),
        "Name".to_string(),
        params.header(SortField::Deposits),
    ]
    .into_iter()
    .map(|h| Cell::from(h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = view.rows.iter().map(|row| {
        let style = if row.category.is_protocol() {
            Style::default().bg(Color::Rgb(0x3b, 0x1f, 0x5c))
        } else {
            Style::default()
        };

        let mut name = vec![Span::raw(row.name.clone())];
        if let Some(badge) = row.category.badge() {
            name.push(Span::raw(" "));
            name.push(Span::styled(
                format!("[{}]", badge),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ));
        }

        Row::new(vec![
            Cell::from(row.rank_label.clone()),
            Cell::from(Line::from(name)),
            Cell::from(Line::from(row.deposits.clone()).alignment(Alignment::Right)),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(9),
        Constraint::Min(24),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Bank Rankings by Deposits - {} ", view.caption()))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    // The table scrolls so the selected row stays visible
    let mut table_state =
        TableState::default().with_selected((!view.rows.is_empty()).then_some(selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Draw the top-N comparison chart.
///
/// Bar heights are integers, so values are charted in millions while the
/// bar text keeps the billions format.
fn draw_chart(frame: &mut Frame, area: Rect, points: &[ChartPoint], title: &str) {
    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            let colour = if p.highlight { HIGHLIGHT } else { BASE };
            Bar::default()
                .label(Line::from(p.label.clone()))
                .value(to_millions(p.value))
                .text_value(format!("{:.3}", p.value))
                .style(Style::default().fg(colour))
                .value_style(Style::default().fg(Color::White).bg(colour))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} (US$ B) ", title))
                .borders(Borders::ALL),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .label_style(Style::default().fg(Color::Gray))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn to_millions(billions: f64) -> u64 {
    (billions * 1000.0).round().max(0.0) as u64
}

/// Draw selected institution details
fn draw_detail(frame: &mut Frame, area: Rect, record: Option<&Institution>) {
    let content = if let Some(r) = record {
        vec![
            Line::from(Span::styled(
                r.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Rank {}", format_rank(r.rank)),
                Style::default().fg(Color::Magenta),
            )),
            Line::from(Span::styled(
                format!("{} deposits", format_deposits(r.deposits)),
                Style::default().fg(Color::Green),
            )),
            Line::from(Span::styled(
                r.category.label(),
                Style::default().fg(Color::Gray),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            "No institution selected",
            Style::default().fg(Color::DarkGray),
        ))]
    };

    let detail =
        Paragraph::new(content).block(Block::default().title(" Details ").borders(Borders::ALL));
    frame.render_widget(detail, area);
}

/// Draw the stat cards
fn draw_stats(frame: &mut Frame, area: Rect, stats: &SummaryStats) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        (stats.deposits_label(), "Total Deposits"),
        (stats.rank_label(), "Current Rank"),
        (stats.institution_count.to_string(), "Traditional Banks"),
    ];

    for (chunk, (value, caption)) in chunks.iter().zip(cards) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(caption, Style::default().fg(Color::Magenta))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *chunk);
    }
}

/// Draw footer with keybindings
fn draw_footer(frame: &mut Frame, area: Rect, mode: InputMode) {
    let footer_text = match mode {
        InputMode::Normal => {
            " [r]Sort Rank [d]Sort Deposits [f]Filter [u]Update Deposits [R]Refresh | [Up/Down]Select | [q]Quit "
        }
        InputMode::Editing => " [Enter]Apply [Backspace]Delete [Esc]Done ",
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render(state: &AppState) -> String {
        render_sized(state, 140, 40)
    }

    fn render_sized(state: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_to_millions() {
        assert_eq!(to_millions(69.014), 69_014);
        assert_eq!(to_millions(0.0), 0);
    }

    #[test]
    fn test_dashboard_renders_seed() {
        let state = AppState::new(&DashboardConfig::default());
        let screen = render(&state);

        assert!(screen.contains("Aave vs Banks"));
        assert!(screen.contains("Showing 7 institutions"));
        assert!(screen.contains("UMB BK NA/UMB FC"));
        assert!(screen.contains("$69.014B"));
        assert!(screen.contains("Traditional Banks"));
        assert!(screen.contains("#38"));
    }

    #[test]
    fn test_detail_panel_shows_selection() {
        let mut state = AppState::new(&DashboardConfig::default());
        state.session.select_next();
        let screen = render(&state);

        assert!(screen.contains("DeFi Protocol"));
        assert!(screen.contains("$67.921B deposits"));
    }

    #[test]
    fn test_chart_title_kept_when_filtered() {
        let mut config = DashboardConfig::default();
        config.rank_window.min = 40;
        config.rank_window.max = 41;
        let mut state = AppState::new(&config);
        state.session.toggle_filter();

        let screen = render(&state);
        assert!(screen.contains("Showing 2 institutions"));
        assert!(screen.contains("Top 5 Comparison"));
    }

    #[test]
    fn test_selected_row_scrolls_into_view() {
        let mut state = AppState::new(&DashboardConfig::default());
        for _ in 0..6 {
            state.session.select_next();
        }

        // Body is 8 rows tall here, leaving room for 5 table rows
        let screen = render_sized(&state, 140, 22);
        let table_column: String = screen
            .lines()
            .map(|line| line.chars().take(84).collect::<String>() + "\n")
            .collect();

        assert!(table_column.contains("Pinnacle BK/Pinnacle FNCL PTNR"));
        assert!(table_column.contains("#43"));
        assert!(!table_column.contains("#37"));
    }
}
