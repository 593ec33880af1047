use chrono::{Datelike, Local, NaiveDate};

/// Whole years between `birthdate` and `today`.
///
/// Compares (month, day) rather than day-of-year, so leap years don't
/// shift the birthday by one. A `today` before the birthdate yields 0.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> u32 {
    if today < birthdate {
        return 0;
    }
    let mut years = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

pub fn current_age(birthdate: NaiveDate) -> u32 {
    age_on(birthdate, Local::now().date_naive())
}
