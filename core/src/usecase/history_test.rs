#[cfg(test)]
mod tests {
    use crate::usecase::history::HistoryUseCase;
    use crate::repository::StatusRepository;
    use crate::model::month::MonthId;
    use crate::model::settings::Settings;
    use crate::model::status::{DayStatus, StatusMap};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use anyhow::{anyhow, Result};

    struct MockStatusRepo {
        months: BTreeMap<MonthId, StatusMap>,
    }

    impl StatusRepository for MockStatusRepo {
        fn load(&self, month: MonthId) -> Result<StatusMap> {
            Ok(self.months.get(&month).cloned().unwrap_or_default())
        }
        fn save(&self, _month: MonthId, _statuses: &StatusMap) -> Result<()> { unimplemented!() }
        fn clear(&self, _month: MonthId) -> Result<()> { unimplemented!() }
        fn months(&self) -> Result<Vec<MonthId>> { Ok(self.months.keys().copied().collect()) }
    }

    struct BrokenRepo;
    impl StatusRepository for BrokenRepo {
        fn load(&self, _month: MonthId) -> Result<StatusMap> { Err(anyhow!("disk on fire")) }
        fn save(&self, _month: MonthId, _statuses: &StatusMap) -> Result<()> { unimplemented!() }
        fn clear(&self, _month: MonthId) -> Result<()> { unimplemented!() }
        fn months(&self) -> Result<Vec<MonthId>> { Ok(vec![MonthId::new(2025, 1).unwrap()]) }
    }

    fn all_in(days: &[u32]) -> StatusMap {
        days.iter().map(|&d| (d, DayStatus::In)).collect()
    }

    #[test]
    fn test_get_monthly_history_newest_first() {
        let march = MonthId::new(2025, 3).unwrap();
        let april = MonthId::new(2025, 4).unwrap();
        let mut months = BTreeMap::new();
        // March 2025: 21 eligible, 11 required
        months.insert(march, all_in(&[3, 4, 5, 6, 7, 10, 11, 12, 13, 14, 17]));
        // April 2025: 20 eligible with Easter, 10 required
        months.insert(april, all_in(&[1, 2, 3]));

        let repo = MockStatusRepo { months };
        let today = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        let history = HistoryUseCase::new(&repo)
            .get_monthly_history(&Settings::default(), today)
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].month, april);
        assert_eq!(history[0].label, "April 2025");
        assert_eq!(history[0].summary.eligible_working_days, 20);
        assert_eq!(history[0].summary.remaining_days, 7);

        assert_eq!(history[1].month, march);
        assert_eq!(history[1].summary.required_days, 11);
        assert!(history[1].summary.is_met());
    }

    #[test]
    fn test_history_respects_holiday_toggle() {
        let april = MonthId::new(2025, 4).unwrap();
        let repo = MockStatusRepo { months: [(april, all_in(&[18]))].into_iter().collect() };
        let settings = Settings { include_holidays: false, ..Settings::default() };
        let today = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();

        let history = HistoryUseCase::new(&repo).get_monthly_history(&settings, today).unwrap();
        assert_eq!(history[0].summary.eligible_working_days, 22);
        assert_eq!(history[0].summary.completed_days, 1);
    }

    #[test]
    fn test_history_propagates_repository_errors() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        let result = HistoryUseCase::new(&BrokenRepo).get_monthly_history(&Settings::default(), today);
        assert!(result.is_err());
    }
}
