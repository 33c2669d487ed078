use chrono::{Datelike, Local};
use std::path::PathBuf;

use crate::models::Month;
use crate::utils::constants::VARIABLE;

/// Generate default output directory with format: figures-{YYMMDD}
pub fn generate_default_output_dir() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    PathBuf::from(format!("figures-{:02}{:02}{:02}", year, month, day))
}

/// Image file name for one month, e.g. `01_xch4.png`
pub fn output_filename(month: Month) -> String {
    format!("{}_{}.png", month.code(), VARIABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_output_dir() {
        let dir = generate_default_output_dir();
        let dir_str = dir.to_string_lossy();

        assert!(dir_str.starts_with("figures-"));
        // "figures-" plus a six-digit date stamp
        assert_eq!(dir_str.len(), "figures-".len() + 6);
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename(Month::January), "01_xch4.png");
        assert_eq!(output_filename(Month::December), "12_xch4.png");
    }
}
