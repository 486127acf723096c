//! Load holiday lists from CSV
//!
//! Expected header: `date[,localName,name]`, dates as YYYY-MM-DD.

use super::holidays::Holiday;
use super::parse_date;
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Raw CSV row; only `date` is required
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    date: String,
    #[serde(rename = "localName", default)]
    local_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl CsvRow {
    fn into_holiday(self) -> Result<Holiday> {
        let date = parse_date(&self.date)?;
        let name = self.name.or(self.local_name).unwrap_or_default();
        Ok(Holiday { date, name })
    }
}

/// Load holidays from a CSV file
pub fn load_holidays<P: AsRef<Path>>(path: P) -> Result<Vec<Holiday>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load holidays from any reader (e.g., string buffer, network response body)
pub fn load_holidays_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Holiday>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Holiday>> {
    let mut holidays = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        holidays.push(row.into_holiday()?);
    }

    log::debug!("Loaded {} holidays", holidays.len());
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use chrono::NaiveDate;

    #[test]
    fn test_load_holidays_from_reader() {
        let data = "date,localName,name\n\
                    2026-11-26,Thanksgiving Day,Thanksgiving Day\n\
                    2026-12-25,Christmas Day,Christmas Day\n";
        let holidays = load_holidays_from_reader(data.as_bytes()).unwrap();

        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].date, NaiveDate::from_ymd_opt(2026, 11, 26).unwrap());
        assert_eq!(holidays[1].name, "Christmas Day");
    }

    #[test]
    fn test_load_date_only_column() {
        let data = "date\n2026-01-01\n";
        let holidays = load_holidays_from_reader(data.as_bytes()).unwrap();
        assert_eq!(holidays.len(), 1);
        assert!(holidays[0].name.is_empty());
    }

    #[test]
    fn test_malformed_date_is_fatal() {
        let data = "date\n2026-01-01\n2026-02-31\n";
        match load_holidays_from_reader(data.as_bytes()) {
            Err(ProjectionError::MalformedDate { input }) => assert_eq!(input, "2026-02-31"),
            other => panic!("expected MalformedDate, got {:?}", other),
        }
    }

    #[test]
    fn test_load_default_holiday_file() {
        let holidays = load_holidays("data/holidays/us_2026.csv").expect("Failed to load holidays");
        assert_eq!(holidays.len(), 13);
        assert_eq!(
            crate::calendar::HolidayCalendar::from_holidays(&holidays),
            crate::calendar::HolidayCalendar::fallback_us_2026()
        );
    }
}
