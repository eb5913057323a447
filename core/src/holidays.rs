//! England & Wales recurring bank holidays.
//!
//! Only the standard recurring set is derived. One-off holidays (jubilees,
//! coronations, state funerals) are not modelled.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub type HolidaySet = BTreeSet<NaiveDate>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BankHoliday {
    NewYear,
    GoodFriday,
    EasterMonday,
    EarlyMay,
    Spring,
    Summer,
    Christmas,
    Boxing,
}

impl BankHoliday {
    pub fn name(self) -> &'static str {
        match self {
            BankHoliday::NewYear => "New Year’s Day",
            BankHoliday::GoodFriday => "Good Friday",
            BankHoliday::EasterMonday => "Easter Monday",
            BankHoliday::EarlyMay => "Early May Bank Holiday",
            BankHoliday::Spring => "Spring Bank Holiday",
            BankHoliday::Summer => "Summer Bank Holiday",
            BankHoliday::Christmas => "Christmas Day",
            BankHoliday::Boxing => "Boxing Day",
        }
    }
}

impl fmt::Display for BankHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bank holiday on the date it is observed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedHoliday {
    pub holiday: BankHoliday,
    pub date: NaiveDate,
}

/// Observed bank holidays for `year` in calendar order.
///
/// Always eight entries for years chrono can represent, empty otherwise.
pub fn bank_holidays(year: i32) -> Vec<ObservedHoliday> {
    observed(year).unwrap_or_default()
}

/// Dates of [`bank_holidays`] as a set.
pub fn holidays_for_year(year: i32) -> HolidaySet {
    bank_holidays(year).into_iter().map(|h| h.date).collect()
}

fn observed(year: i32) -> Option<Vec<ObservedHoliday>> {
    let easter = easter_sunday(year)?;
    let (christmas, boxing) = christmas_and_boxing(year)?;

    let mut list = vec![
        ObservedHoliday { holiday: BankHoliday::NewYear, date: new_year(year)? },
        ObservedHoliday { holiday: BankHoliday::GoodFriday, date: easter - Duration::days(2) },
        ObservedHoliday { holiday: BankHoliday::EasterMonday, date: easter + Duration::days(1) },
        ObservedHoliday {
            holiday: BankHoliday::EarlyMay,
            date: NaiveDate::from_weekday_of_month_opt(year, 5, Weekday::Mon, 1)?,
        },
        ObservedHoliday { holiday: BankHoliday::Spring, date: last_weekday_of_month(year, 5, Weekday::Mon)? },
        ObservedHoliday { holiday: BankHoliday::Summer, date: last_weekday_of_month(year, 8, Weekday::Mon)? },
        ObservedHoliday { holiday: BankHoliday::Christmas, date: christmas },
        ObservedHoliday { holiday: BankHoliday::Boxing, date: boxing },
    ];
    list.sort_by_key(|h| h.date);
    Some(list)
}

/// Easter Sunday by the anonymous Gregorian algorithm.
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn new_year(year: i32) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    Some(match jan1.weekday() {
        Weekday::Sat => jan1 + Duration::days(2),
        Weekday::Sun => jan1 + Duration::days(1),
        _ => jan1,
    })
}

fn christmas_and_boxing(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let day = |d| NaiveDate::from_ymd_opt(year, 12, d);
    let christmas = day(25)?;
    Some(match christmas.weekday() {
        Weekday::Sat => (day(27)?, day(28)?),
        Weekday::Sun => (day(27)?, day(26)?),
        // Boxing Day on a Saturday
        Weekday::Fri => (christmas, day(28)?),
        _ => (christmas, day(26)?),
    })
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_of_next.pred_opt()?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    Some(last - Duration::days(back as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn observed_date(year: i32, holiday: BankHoliday) -> NaiveDate {
        bank_holidays(year)
            .into_iter()
            .find(|h| h.holiday == holiday)
            .map(|h| h.date)
            .unwrap()
    }

    #[test]
    fn test_eight_distinct_dates_within_year() {
        for year in 1900..=2200 {
            let set = holidays_for_year(year);
            assert_eq!(set.len(), 8, "year {}", year);
            assert!(set.iter().all(|d| d.year() == year), "year {}", year);
            assert_eq!(set, holidays_for_year(year));
        }
    }

    #[test]
    fn test_observed_holidays_never_on_weekend() {
        for year in 1950..=2100 {
            for h in bank_holidays(year) {
                assert!(
                    !matches!(h.date.weekday(), Weekday::Sat | Weekday::Sun),
                    "{} {} falls on a weekend",
                    h.holiday,
                    h.date
                );
            }
        }
    }

    #[test]
    fn test_new_year_rolls_forward() {
        // 2022-01-01 is a Saturday
        let set = holidays_for_year(2022);
        assert!(set.contains(&date(2022, 1, 3)));
        assert!(!set.contains(&date(2022, 1, 1)));
        // 2023-01-01 is a Sunday
        assert_eq!(observed_date(2023, BankHoliday::NewYear), date(2023, 1, 2));
        assert_eq!(observed_date(2025, BankHoliday::NewYear), date(2025, 1, 1));
    }

    #[test]
    fn test_christmas_on_saturday() {
        let set = holidays_for_year(2021);
        assert!(set.contains(&date(2021, 12, 27)));
        assert!(set.contains(&date(2021, 12, 28)));
        assert!(!set.contains(&date(2021, 12, 25)));
    }

    #[test]
    fn test_christmas_on_sunday() {
        assert_eq!(observed_date(2022, BankHoliday::Christmas), date(2022, 12, 27));
        assert_eq!(observed_date(2022, BankHoliday::Boxing), date(2022, 12, 26));
    }

    #[test]
    fn test_christmas_on_friday_moves_boxing_day() {
        assert_eq!(observed_date(2020, BankHoliday::Christmas), date(2020, 12, 25));
        assert_eq!(observed_date(2020, BankHoliday::Boxing), date(2020, 12, 28));
    }

    #[test]
    fn test_easter_derived_dates() {
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(observed_date(2024, BankHoliday::GoodFriday), date(2024, 3, 29));
        assert_eq!(observed_date(2024, BankHoliday::EasterMonday), date(2024, 4, 1));

        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(2019), Some(date(2019, 4, 21)));
        assert_eq!(easter_sunday(2038), Some(date(2038, 4, 25)));
        assert_eq!(easter_sunday(2285), Some(date(2285, 3, 22)));
    }

    #[test]
    fn test_may_and_august_mondays() {
        assert_eq!(observed_date(2024, BankHoliday::EarlyMay), date(2024, 5, 6));
        assert_eq!(observed_date(2024, BankHoliday::Spring), date(2024, 5, 27));
        assert_eq!(observed_date(2024, BankHoliday::Summer), date(2024, 8, 26));
        // May 2023 starts on a Monday
        assert_eq!(observed_date(2023, BankHoliday::EarlyMay), date(2023, 5, 1));
        // August 2026 ends on a Monday
        assert_eq!(observed_date(2026, BankHoliday::Summer), date(2026, 8, 31));
    }

    #[test]
    fn test_calendar_order() {
        let list = bank_holidays(2025);
        assert_eq!(list.first().map(|h| h.holiday), Some(BankHoliday::NewYear));
        assert_eq!(list.last().map(|h| h.holiday), Some(BankHoliday::Boxing));
        assert!(list.windows(2).all(|w| w[0].date < w[1].date));
    }
}
