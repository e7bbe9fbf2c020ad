//! Resolves the month a sale happened in from its date of sale.

use time::{
    Date, Month, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::Error;

/// Get the English name of the month in which `date_of_sale` falls, e.g. "January".
///
/// The month is read straight from the calendar date written in
/// `date_of_sale`. Dates with a UTC offset are not converted to another
/// timezone, so "2021-11-30T23:00:00-05:00" is in November.
///
/// Accepted formats are RFC 3339 date-times, date-times without an offset
/// (e.g. "2021-11-27T20:29:54") and plain dates (e.g. "2021-11-27").
///
/// # Errors
/// Returns [Error::InvalidDate] if `date_of_sale` is not in one of the accepted formats.
pub fn month_of_sale(date_of_sale: &str) -> Result<&'static str, Error> {
    parse_month(date_of_sale.trim())
        .map(month_name)
        .ok_or_else(|| Error::InvalidDate(date_of_sale.to_owned()))
}

fn parse_month(text: &str) -> Option<Month> {
    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(date_time.month());
    }

    let naive_format =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    if let Ok(date_time) = PrimitiveDateTime::parse(&text.replacen(' ', "T", 1), naive_format) {
        return Some(date_time.month());
    }

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.month())
}

/// The full English name of `month`.
///
/// This is a fixed table so the result does not depend on the host's locale.
pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

#[cfg(test)]
mod tests {
    use time::Month;

    use crate::Error;

    use super::{month_name, month_of_sale};

    #[test]
    fn reads_month_from_rfc3339_date_time() {
        assert_eq!(month_of_sale("2021-11-27T20:29:54+05:30"), Ok("November"));
        assert_eq!(month_of_sale("2022-01-05T10:00:00.000Z"), Ok("January"));
    }

    #[test]
    fn does_not_convert_between_timezones() {
        // In UTC these would be in the next or previous month.
        assert_eq!(month_of_sale("2021-11-30T23:00:00-05:00"), Ok("November"));
        assert_eq!(month_of_sale("2021-12-01T01:00:00+05:30"), Ok("December"));
    }

    #[test]
    fn reads_month_from_naive_date_time() {
        assert_eq!(month_of_sale("2021-07-27T20:29:54"), Ok("July"));
        assert_eq!(month_of_sale("2021-07-27 20:29:54.123"), Ok("July"));
    }

    #[test]
    fn reads_month_from_plain_date() {
        assert_eq!(month_of_sale("2022-03-01"), Ok("March"));
    }

    #[test]
    fn rejects_unparseable_dates() {
        assert_eq!(
            month_of_sale("not a date"),
            Err(Error::InvalidDate("not a date".to_owned()))
        );
        assert!(month_of_sale("").is_err());
        assert!(month_of_sale("2022-13-01").is_err());
    }

    #[test]
    fn month_names_are_in_calendar_order() {
        let names: Vec<_> = (1..=12)
            .map(|number| month_name(Month::try_from(number).unwrap()))
            .collect();

        assert_eq!(
            names,
            [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December"
            ]
        );
    }
}
