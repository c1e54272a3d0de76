//! Calendar date samplers.

use chrono::{Days, NaiveDate};
use rand::Rng;

/// Date `days` after `start`.
pub fn add_days(start: NaiveDate, days: u32) -> NaiveDate {
    start + Days::new(u64::from(days))
}

/// Signed day count from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Uniform date in `start ..= start + window_days`. One draw.
pub fn random_date<R: Rng>(rng: &mut R, start: NaiveDate, window_days: u32) -> NaiveDate {
    add_days(start, rng.gen_range(0..=window_days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_random_date_within_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let last = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        for _ in 0..1000 {
            let date = random_date(&mut rng, epoch(), 365);
            assert!(date >= epoch() && date <= last);
        }
    }

    #[test]
    fn test_days_between() {
        let later = add_days(epoch(), 10);
        assert_eq!(days_between(epoch(), later), 10);
        assert_eq!(days_between(later, epoch()), -10);
    }

    #[test]
    fn test_add_days_crosses_leap_day() {
        let feb28 = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(add_days(feb28, 1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
