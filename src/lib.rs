pub mod date;
pub mod loader;
pub mod stats;
pub mod summary;
pub mod units;

use miette::Diagnostic;
use thiserror::Error;

pub use date::{convert_date, DateError};
pub use loader::LoadError;
pub use stats::{find_last_occurrence, find_max, find_min, mean, Extreme, StatsError};
pub use summary::{generate_daily_summary, generate_summary, SummaryError};
pub use units::{fahrenheit_to_celsius, format_temperature, Celsius, Fahrenheit};

/// One row of the forecast. The date is kept as written in the source and
/// only validated when it gets rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRecord {
    pub date: String,
    pub min_temp_f: i32,
    pub max_temp_f: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherDataset {
    // Kept in file order, statistics tie-break on it
    pub records: Vec<WeatherRecord>,
}

impl WeatherDataset {
    pub fn new(records: Vec<WeatherRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeatherRecord> {
        self.records.iter()
    }

    pub fn min_temps(&self) -> Vec<i32> {
        self.records.iter().map(|record| record.min_temp_f).collect()
    }

    pub fn max_temps(&self) -> Vec<i32> {
        self.records.iter().map(|record| record.max_temp_f).collect()
    }
}

impl FromIterator<WeatherRecord> for WeatherDataset {
    fn from_iter<I: IntoIterator<Item = WeatherRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WeatherDataset {
    type Item = &'a WeatherRecord;
    type IntoIter = std::slice::Iter<'a, WeatherRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Summary(#[from] SummaryError),
}
