use chrono::{Datelike, NaiveDate};

use crate::holidays::HolidaySet;
use crate::model::month::MonthId;
use crate::model::pattern::WorkPattern;
use crate::model::status::StatusMap;
use crate::model::summary::{DayClass, ElapsedSplit, ProgressSummary};

/// Classifies every day of `month`. Status entries for days the month
/// does not have are never looked up.
pub fn classify_month(
    month: MonthId,
    pattern: WorkPattern,
    holidays: &HolidaySet,
    statuses: &StatusMap,
) -> Vec<DayClass> {
    month
        .dates()
        .map(|date| {
            let day = date.day();
            DayClass {
                day,
                date,
                weekday: date.weekday(),
                base_working: pattern.is_base_working(date),
                holiday: holidays.contains(&date),
                status: statuses.get(&day).copied().unwrap_or_default(),
            }
        })
        .collect()
}

/// Rounds up: 21 eligible days at 50% require 11. Targets above 100%
/// count as 100%, so the result never exceeds `eligible`.
pub fn required_days(eligible: u32, percent: u32) -> u32 {
    let percent = u64::from(percent.min(100));
    (u64::from(eligible) * percent).div_ceil(100) as u32
}

pub fn evaluate(
    month: MonthId,
    pattern: WorkPattern,
    percent: u32,
    holidays: &HolidaySet,
    statuses: &StatusMap,
) -> ProgressSummary {
    summarize(&classify_month(month, pattern, holidays, statuses), percent, None)
}

/// Like [`evaluate`], adding the elapsed/left split when `today` is in `month`.
pub fn evaluate_as_of(
    month: MonthId,
    pattern: WorkPattern,
    percent: u32,
    holidays: &HolidaySet,
    statuses: &StatusMap,
    today: NaiveDate,
) -> ProgressSummary {
    let days = classify_month(month, pattern, holidays, statuses);
    let split = elapsed_split(&days, month, today);
    summarize(&days, percent, split)
}

pub fn summarize(days: &[DayClass], percent: u32, split: Option<ElapsedSplit>) -> ProgressSummary {
    let eligible = days.iter().filter(|d| d.is_eligible()).count() as u32;
    let completed = days.iter().filter(|d| d.is_completed()).count() as u32;
    let required = required_days(eligible, percent);

    ProgressSummary {
        eligible_working_days: eligible,
        required_days: required,
        completed_days: completed,
        remaining_days: required.saturating_sub(completed),
        split,
    }
}

pub fn elapsed_split(days: &[DayClass], month: MonthId, today: NaiveDate) -> Option<ElapsedSplit> {
    if !month.contains(today) {
        return None;
    }
    let mut split = ElapsedSplit::default();
    for day in days.iter().filter(|d| d.is_eligible()) {
        if day.date <= today {
            split.elapsed += 1;
        } else {
            split.left += 1;
        }
    }
    Some(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::holidays_for_year;
    use crate::model::status::DayStatus;

    fn month(y: i32, m: u32) -> MonthId {
        MonthId::new(y, m).unwrap()
    }

    fn statuses(entries: &[(u32, DayStatus)]) -> StatusMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_half_of_thirty_day_month_met() {
        // September 2025: 30 days, 22 weekdays, no bank holidays
        let sept = month(2025, 9);
        let in_days = [1, 2, 3, 4, 5, 8, 9, 10, 11, 12, 15];
        let map: StatusMap = in_days.iter().map(|&d| (d, DayStatus::In)).collect();

        let summary = evaluate(sept, WorkPattern::WeekdaysOnly, 50, &HolidaySet::new(), &map);
        assert_eq!(summary.eligible_working_days, 22);
        assert_eq!(summary.required_days, 11);
        assert_eq!(summary.completed_days, 11);
        assert_eq!(summary.remaining_days, 0);
        assert_eq!(summary.split, None);
    }

    #[test]
    fn test_required_days_rounds_up() {
        assert_eq!(required_days(21, 50), 11);
        assert_eq!(required_days(20, 50), 10);
        assert_eq!(required_days(22, 60), 14);
        assert_eq!(required_days(0, 50), 0);
        assert_eq!(required_days(1, 1), 1);
        assert_eq!(required_days(31, 100), 31);
        assert_eq!(required_days(21, 250), 21);
        assert_eq!(required_days(u32::MAX, u32::MAX), u32::MAX);

        // March 2025 has 21 weekdays and no bank holidays
        let summary = evaluate(
            month(2025, 3),
            WorkPattern::WeekdaysOnly,
            50,
            &holidays_for_year(2025),
            &StatusMap::new(),
        );
        assert_eq!(summary.eligible_working_days, 21);
        assert_eq!(summary.required_days, 11);
        assert_eq!(summary.remaining_days, 11);
    }

    #[test]
    fn test_in_on_holiday_not_counted() {
        // April 2025: 22 weekdays, Good Friday 18th and Easter Monday 21st
        let april = month(2025, 4);
        let map = statuses(&[(18, DayStatus::In), (22, DayStatus::In)]);

        let with = evaluate(april, WorkPattern::WeekdaysOnly, 50, &holidays_for_year(2025), &map);
        assert_eq!(with.eligible_working_days, 20);
        assert_eq!(with.completed_days, 1);

        let without = evaluate(april, WorkPattern::WeekdaysOnly, 50, &HolidaySet::new(), &map);
        assert_eq!(without.eligible_working_days, 22);
        assert_eq!(without.completed_days, 2);
    }

    #[test]
    fn test_in_on_weekend_not_counted_for_weekdays_only() {
        // 2025-03-01 is a Saturday
        let march = month(2025, 3);
        let map = statuses(&[(1, DayStatus::In)]);

        let weekdays = evaluate(march, WorkPattern::WeekdaysOnly, 50, &HolidaySet::new(), &map);
        assert_eq!(weekdays.completed_days, 0);

        let all = evaluate(march, WorkPattern::AllDays, 50, &HolidaySet::new(), &map);
        assert_eq!(all.eligible_working_days, 31);
        assert_eq!(all.completed_days, 1);
        assert_eq!(all.required_days, 16);
    }

    #[test]
    fn test_excluded_removes_exactly_one_day() {
        let march = month(2025, 3);
        let holidays = holidays_for_year(2025);
        let before = evaluate(march, WorkPattern::WeekdaysOnly, 50, &holidays, &StatusMap::new());
        let after = evaluate(
            march,
            WorkPattern::WeekdaysOnly,
            50,
            &holidays,
            &statuses(&[(3, DayStatus::Excluded)]),
        );
        assert_eq!(after.eligible_working_days, before.eligible_working_days - 1);

        // Excluding a weekend day changes nothing
        let weekend = evaluate(
            march,
            WorkPattern::WeekdaysOnly,
            50,
            &holidays,
            &statuses(&[(2, DayStatus::Excluded)]),
        );
        assert_eq!(weekend.eligible_working_days, before.eligible_working_days);
    }

    #[test]
    fn test_out_days_stay_eligible() {
        let march = month(2025, 3);
        let map = statuses(&[(3, DayStatus::Out), (4, DayStatus::Out)]);
        let summary = evaluate(march, WorkPattern::WeekdaysOnly, 50, &HolidaySet::new(), &map);
        assert_eq!(summary.eligible_working_days, 21);
        assert_eq!(summary.completed_days, 0);
    }

    #[test]
    fn test_out_of_range_days_ignored() {
        let feb = month(2023, 2);
        let map = statuses(&[(0, DayStatus::In), (29, DayStatus::In), (40, DayStatus::Excluded)]);
        let summary = evaluate(feb, WorkPattern::AllDays, 50, &HolidaySet::new(), &map);
        assert_eq!(summary.eligible_working_days, 28);
        assert_eq!(summary.completed_days, 0);
    }

    #[test]
    fn test_completed_beyond_required_clamps_remaining() {
        let feb = month(2024, 2);
        let map: StatusMap = (1..=29).map(|d| (d, DayStatus::In)).collect();
        let summary = evaluate(feb, WorkPattern::AllDays, 50, &HolidaySet::new(), &map);
        assert_eq!(summary.eligible_working_days, 29);
        assert_eq!(summary.required_days, 15);
        assert_eq!(summary.completed_days, 29);
        assert_eq!(summary.remaining_days, 0);
    }

    #[test]
    fn test_elapsed_split_only_for_current_month() {
        let march = month(2025, 3);
        let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let map = statuses(&[(10, DayStatus::Excluded)]);

        let summary = evaluate_as_of(march, WorkPattern::WeekdaysOnly, 50, &HolidaySet::new(), &map, today);
        assert_eq!(summary.split, Some(ElapsedSplit { elapsed: 9, left: 11 }));
        assert_eq!(summary.eligible_working_days, 20);

        let elsewhere = NaiveDate::from_ymd_opt(2025, 4, 14).unwrap();
        let summary = evaluate_as_of(march, WorkPattern::WeekdaysOnly, 50, &HolidaySet::new(), &map, elsewhere);
        assert_eq!(summary.split, None);
    }

    #[test]
    fn test_classify_month_reports_each_day() {
        let april = month(2025, 4);
        let days = classify_month(april, WorkPattern::WeekdaysOnly, &holidays_for_year(2025), &StatusMap::new());
        assert_eq!(days.len(), 30);
        let good_friday = &days[17];
        assert_eq!(good_friday.day, 18);
        assert!(good_friday.holiday);
        assert!(good_friday.base_working);
        assert!(!good_friday.is_eligible());
        assert_eq!(days[4].weekday, chrono::Weekday::Sat);
        assert!(!days[4].base_working);
    }
}
