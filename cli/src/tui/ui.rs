use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Cell, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};
use officeday_core::{DayClass, DayStatus};

use crate::report::describe_settings;
use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    office: Color,
    away: Color,
    excluded: Color,
    holiday: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    office: Color::Green,
    away: Color::Yellow,
    excluded: Color::Magenta,
    holiday: Color::Red,
};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.report.label),
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(describe_settings(&app.report.settings()), Style::default().fg(THEME.muted)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Calendar
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(40), // Summary
        ])
        .split(main_chunks[1]);

    draw_calendar(f, app, content_chunks[0]);
    draw_summary(f, app, content_chunks[2]);

    // Footer
    let footer = Paragraph::new(
        "←↓↑→: Day | Space: Cycle | n/p: Month | t: Today | w: Pattern | b: Holidays | +/-: Target | r: Reset | q: Quit",
    )
    .style(Style::default().fg(THEME.muted))
    .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let lead = app
        .report
        .days
        .first()
        .map(|d| d.weekday.num_days_from_monday() as usize)
        .unwrap_or(0);

    let mut rows = Vec::new();
    let mut week: Vec<Cell> = vec![Cell::from(""); lead];
    for day in &app.report.days {
        week.push(day_cell(app, day));
        if week.len() == 7 {
            rows.push(Row::new(std::mem::take(&mut week)).height(2));
        }
    }
    if !week.is_empty() {
        rows.push(Row::new(week).height(2));
    }

    let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
        .header(Row::new(WEEKDAYS).style(Style::default().fg(Color::Yellow)))
        .block(
            Block::default()
                .title(" Calendar ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(table, area);
}

fn day_cell<'a>(app: &App, day: &DayClass) -> Cell<'a> {
    let (tag, color) = match day.status {
        DayStatus::In => ("In", THEME.office),
        DayStatus::Out => ("Out", THEME.away),
        DayStatus::Excluded => ("Excl", THEME.excluded),
        DayStatus::Unset if day.holiday => ("BH", THEME.holiday),
        DayStatus::Unset if day.base_working => ("·", THEME.muted),
        DayStatus::Unset => ("", THEME.muted),
    };

    let mut number_style = if day.holiday || !day.base_working {
        Style::default().fg(THEME.muted)
    } else {
        Style::default().fg(THEME.text)
    };
    if day.date == app.today {
        number_style = number_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    let mut cell = Cell::from(vec![
        Line::from(Span::styled(format!("{:>2}", day.day), number_style)),
        Line::from(Span::styled(tag, Style::default().fg(color))),
    ]);
    if day.day == app.cursor {
        cell = cell.style(Style::default().add_modifier(Modifier::REVERSED));
    }
    cell
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Stats
            Constraint::Length(3), // Gauge
            Constraint::Min(1),    // Selected day + message
        ])
        .split(area);

    let summary = &app.report.summary;
    let metric = |label: &'static str, value: u32, color: Color| {
        Line::from(vec![
            Span::styled(label, Style::default().fg(THEME.muted)),
            Span::styled(value.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };
    let stats = vec![
        Line::from(Span::styled("Overview", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        metric("Working days: ", summary.eligible_working_days, THEME.text),
        metric("Required:     ", summary.required_days, THEME.primary),
        metric("In office:    ", summary.completed_days, THEME.office),
        metric(
            "Remaining:    ",
            summary.remaining_days,
            if summary.is_met() { THEME.office } else { THEME.away },
        ),
    ];
    let stats_block = Paragraph::new(stats).block(
        Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted)),
    );
    f.render_widget(stats_block, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Target ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(if summary.is_met() { THEME.office } else { THEME.primary }))
        .ratio(summary.ratio())
        .label(format!("{}/{}", summary.completed_days, summary.required_days));
    f.render_widget(gauge, chunks[1]);

    let mut detail = Vec::new();
    if let Some(day) = app.report.day(app.cursor) {
        detail.push(Line::from(vec![
            Span::styled(day.date.format("%a %d %b").to_string(), Style::default().fg(Color::Blue)),
            Span::raw(format!("  {}", day.status)),
        ]));
        if let Some(holiday) = app.report.holiday_on(app.cursor) {
            detail.push(Line::from(Span::styled(holiday.holiday.name(), Style::default().fg(THEME.holiday))));
        } else if !day.base_working {
            detail.push(Line::from(Span::styled("Not a working day", Style::default().fg(THEME.muted))));
        }
        detail.push(Line::from(""));
    }
    detail.push(Line::from(app.report.message.as_str()));
    if let Some(notice) = &app.notice {
        detail.push(Line::from(""));
        detail.push(Line::from(Span::styled(notice.as_str(), Style::default().fg(THEME.away))));
    }

    let detail_block = Paragraph::new(detail)
        .block(Block::default().title(" Detail ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .wrap(Wrap { trim: true });
    f.render_widget(detail_block, chunks[2]);
}
