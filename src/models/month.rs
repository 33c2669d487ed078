use std::fmt;

/// Calendar month, mapped to the two-digit directory codes used by the
/// satellite data layout ("01".."12").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Two-digit folder code for this month
    pub fn code(self) -> &'static str {
        match self {
            Month::January => "01",
            Month::February => "02",
            Month::March => "03",
            Month::April => "04",
            Month::May => "05",
            Month::June => "06",
            Month::July => "07",
            Month::August => "08",
            Month::September => "09",
            Month::October => "10",
            Month::November => "11",
            Month::December => "12",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
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

    /// Look up a month by its two-digit folder code
    pub fn from_code(code: &str) -> Option<Month> {
        Month::ALL.iter().copied().find(|m| m.code() == code)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_cover_all_twelve_folders() {
        let codes: Vec<&str> = Month::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(
            codes,
            vec!["01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12"]
        );
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Month::from_code("01"), Some(Month::January));
        assert_eq!(Month::from_code("09"), Some(Month::September));
        assert_eq!(Month::from_code("12"), Some(Month::December));
        assert_eq!(Month::from_code("13"), None);
        assert_eq!(Month::from_code("1"), None); // codes are zero-padded
    }

    #[test]
    fn test_display_uses_month_name() {
        assert_eq!(Month::July.to_string(), "July");
    }
}
