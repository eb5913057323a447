use chrono::{Datelike, Month, NaiveDate};
use anyhow::{anyhow, Result};

use crate::model::month::MonthId;

/// Resolves a month relative to `today`.
///
/// Accepts `this`/`today`/`now`, `next`, `prev`/`last`, `+N`/`-N` months,
/// `YYYY-MM`, `YYYY-MM-DD` and month names (`mar`, `march`) in today's year.
pub fn parse_month(input: &str, today: NaiveDate) -> Result<MonthId> {
    let input = input.trim();
    let current = MonthId::from_date(today);

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "" => return Err(anyhow!("Empty month string")),
        "this" | "today" | "now" | "cur" | "current" => return Ok(current),
        "next" => return shift(current, 1),
        "prev" | "previous" | "last" => return shift(current, -1),
        _ => {}
    }

    // 2. Relative format (+N, -N)
    if input.starts_with('+') || input.starts_with('-') {
        let count: i32 = input.parse().map_err(|_| anyhow!("Invalid relative month: {}", input))?;
        return shift(current, count);
    }

    // 3. Absolute formats
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(MonthId::from_date(d));
    }
    if let Ok(month) = input.parse::<MonthId>() {
        return Ok(month);
    }

    // 4. Month name in the current year
    if let Ok(name) = input.parse::<Month>() {
        return MonthId::new(today.year(), name.number_from_month());
    }

    Err(anyhow!("Could not parse month: {}", input))
}

/// Resolves a day of `month`: `today`, a day number, or a `YYYY-MM-DD` date.
pub fn parse_day(input: &str, month: MonthId, today: NaiveDate) -> Result<u32> {
    let input = input.trim();

    let date = match input.to_lowercase().as_str() {
        "today" | "tod" => today,
        _ => {
            if let Ok(day) = input.parse::<u32>() {
                return month
                    .date(day)
                    .map(|d| d.day())
                    .ok_or_else(|| anyhow!("{} has no day {}", month.label(), day));
            }
            NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| anyhow!("Could not parse day: {}", input))?
        }
    };

    if !month.contains(date) {
        return Err(anyhow!("{} is not in {}", date, month.label()));
    }
    Ok(date.day())
}

fn shift(month: MonthId, count: i32) -> Result<MonthId> {
    month
        .offset(count)
        .ok_or_else(|| anyhow!("Month out of range: {} {:+}", month, count))
}
