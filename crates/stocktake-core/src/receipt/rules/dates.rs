//! Production date parsing.

use chrono::NaiveDate;

use super::patterns::DATE_DMY;

/// Extract a production date from text.
///
/// Receipts print dates day-first ("12/05/2023", also with `.` or `-`
/// separators). Returns the first substring that parses to a valid
/// calendar date.
pub fn parse_production_date(text: &str) -> Option<NaiveDate> {
    for caps in DATE_DMY.captures_iter(text) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let year = parse_year(&caps[3]);

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }
    None
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if year < 100 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 {
            2000 + year
        } else {
            1900 + year
        }
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_separated() {
        assert_eq!(
            parse_production_date("12/05/2023"),
            NaiveDate::from_ymd_opt(2023, 5, 12)
        );
    }

    #[test]
    fn test_other_separators() {
        assert_eq!(
            parse_production_date("12.05.2023"),
            NaiveDate::from_ymd_opt(2023, 5, 12)
        );
        assert_eq!(
            parse_production_date("1-9-2023"),
            NaiveDate::from_ymd_opt(2023, 9, 1)
        );
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(
            parse_production_date("12/05/23"),
            NaiveDate::from_ymd_opt(2023, 5, 12)
        );
        assert_eq!(
            parse_production_date("12/05/99"),
            NaiveDate::from_ymd_opt(1999, 5, 12)
        );
    }

    #[test]
    fn test_embedded_in_line() {
        assert_eq!(
            parse_production_date("DATE 12/05/2023 325 ML TO CROWN 14"),
            NaiveDate::from_ymd_opt(2023, 5, 12)
        );
    }

    #[test]
    fn test_invalid_date_skipped() {
        // 45/13 is not a calendar date; nothing else matches.
        assert_eq!(parse_production_date("45/13/2023"), None);
        assert_eq!(parse_production_date("no date here"), None);
    }
}
