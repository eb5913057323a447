use chrono::{Datelike, NaiveDate};
use officeday_core::{bank_holidays, DayClass, DayStatus, MonthHistory, MonthReport, Settings};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Days")]
    value: u32,
}

#[derive(Tabled)]
struct HolidayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "Holiday")]
    name: String,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Eligible")]
    eligible: u32,
    #[tabled(rename = "Required")]
    required: u32,
    #[tabled(rename = "In office")]
    completed: u32,
    #[tabled(rename = "Remaining")]
    remaining: u32,
    #[tabled(rename = "")]
    status: &'static str,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table
}

pub fn print_month(report: &MonthReport, today: NaiveDate) {
    println!("\n\x1b[1;36m{}\x1b[0m  {}", report.label, describe_settings(&report.settings()));
    println!("{}", styled(calendar_table(report, today)));
    print_summary(report);
}

pub fn print_summary(report: &MonthReport) {
    let summary = &report.summary;
    let rows = vec![
        SummaryRow { metric: "Working days", value: summary.eligible_working_days },
        SummaryRow { metric: "Required", value: summary.required_days },
        SummaryRow { metric: "In office", value: summary.completed_days },
        SummaryRow { metric: "Remaining", value: summary.remaining_days },
    ];
    println!("{}", styled(Table::new(rows)));

    for holiday in &report.holidays {
        println!("  {} {}", holiday.date.format("%a %d %b"), holiday.holiday);
    }
    println!("{}", report.message);
}

fn calendar_table(report: &MonthReport, today: NaiveDate) -> Table {
    let mut builder = Builder::default();
    builder.push_record(WEEKDAYS);

    let lead = report
        .days
        .first()
        .map(|d| d.weekday.num_days_from_monday() as usize)
        .unwrap_or(0);
    let mut week: Vec<String> = vec![String::new(); lead];
    for day in &report.days {
        week.push(cell_text(day, today));
        if week.len() == 7 {
            builder.push_record(std::mem::take(&mut week));
        }
    }
    if !week.is_empty() {
        week.resize(7, String::new());
        builder.push_record(week);
    }
    builder.build()
}

fn cell_text(day: &DayClass, today: NaiveDate) -> String {
    let marker = match (day.holiday, day.base_working, day.status) {
        (true, _, DayStatus::Unset) => "BH".to_string(),
        (true, _, status) => format!("BH {}", short_label(status)),
        (false, false, DayStatus::Unset) => "-".to_string(),
        (false, _, status) => short_label(status).to_string(),
    };
    let today_mark = if day.date == today { "*" } else { "" };
    format!("{:>2}{} {}", day.day, today_mark, marker)
}

fn short_label(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Unset => "·",
        DayStatus::In => "In",
        DayStatus::Out => "Out",
        DayStatus::Excluded => "Ex",
    }
}

pub fn describe_settings(settings: &Settings) -> String {
    format!(
        "{} · {}% target · bank holidays {}",
        settings.pattern.description(),
        settings.percent,
        if settings.include_holidays { "on" } else { "off" }
    )
}

pub fn print_settings(settings: &Settings) {
    let month = settings
        .month
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("month:    {}", month);
    println!("pattern:  {} ({})", settings.pattern, settings.pattern.description());
    println!("percent:  {}", settings.percent);
    println!("holidays: {}", if settings.include_holidays { "on" } else { "off" });
}

pub fn print_holidays(year: i32) {
    let rows: Vec<HolidayRow> = bank_holidays(year)
        .into_iter()
        .map(|h| HolidayRow {
            date: h.date.format("%Y-%m-%d").to_string(),
            weekday: h.date.weekday().to_string(),
            name: h.holiday.name().to_string(),
        })
        .collect();

    if rows.is_empty() {
        println!("No bank holidays can be derived for {}.", year);
        return;
    }
    println!("\n\x1b[1;36mBank holidays {}\x1b[0m (England & Wales)", year);
    println!("{}", styled(Table::new(rows)));
}

pub fn print_history(history: &[MonthHistory]) {
    if history.is_empty() {
        println!("No months with entries found.");
        return;
    }
    let rows: Vec<HistoryRow> = history
        .iter()
        .map(|h| HistoryRow {
            month: h.label.clone(),
            eligible: h.summary.eligible_working_days,
            required: h.summary.required_days,
            completed: h.summary.completed_days,
            remaining: h.summary.remaining_days,
            status: if h.summary.is_met() { "met" } else { "" },
        })
        .collect();
    println!("{}", styled(Table::new(rows)));
}
