use miette::Diagnostic;
use thiserror::Error;

use crate::{
    date::{convert_date, DateError},
    stats::{find_max, find_min, mean, Extreme, StatsError},
    units::{format_temperature, Celsius, Fahrenheit},
    WeatherDataset,
};

#[derive(Debug, Error, Diagnostic)]
pub enum SummaryError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Stats(#[from] StatsError),
}

/// Multi-day overview: extremes with the day they occur on, then averages.
///
/// ```text
/// 2 Day Overview
///   The lowest temperature will be 1.1°C, and will occur on Monday 05 July 2021.
///   The highest temperature will be 16.7°C, and will occur on Tuesday 06 July 2021.
///   The average low this week is 2.2°C.
///   The average high this week is 15.3°C.
/// ```
///
/// An empty dataset has no extremes and fails with [`StatsError::EmptyInput`].
pub fn generate_summary(dataset: &WeatherDataset) -> Result<String, SummaryError> {
    let min_temps = dataset.min_temps();
    let max_temps = dataset.max_temps();

    let coldest = find_min(&min_temps).ok_or(StatsError::EmptyInput)?;
    let hottest = find_max(&max_temps).ok_or(StatsError::EmptyInput)?;

    let lines = [
        format!("{} Day Overview", dataset.len()),
        format!(
            "  The lowest temperature will be {}, and will occur on {}.",
            celsius(coldest.value),
            day_of(dataset, coldest)?
        ),
        format!(
            "  The highest temperature will be {}, and will occur on {}.",
            celsius(hottest.value),
            day_of(dataset, hottest)?
        ),
        format!(
            "  The average low this week is {}.",
            format_temperature(Celsius::from(Fahrenheit(mean(&min_temps)?)))
        ),
        format!(
            "  The average high this week is {}.",
            format_temperature(Celsius::from(Fahrenheit(mean(&max_temps)?)))
        ),
    ];

    Ok(join_lines(&lines))
}

/// One block per day, in dataset order, each followed by a blank line.
pub fn generate_daily_summary(dataset: &WeatherDataset) -> Result<String, SummaryError> {
    let mut lines = Vec::with_capacity(dataset.len() * 4);
    for record in dataset {
        lines.push(format!("---- {} ----", convert_date(&record.date)?));
        lines.push(format!(
            "  Minimum Temperature: {}",
            celsius(record.min_temp_f)
        ));
        lines.push(format!(
            "  Maximum Temperature: {}",
            celsius(record.max_temp_f)
        ));
        lines.push(String::new());
    }

    Ok(join_lines(&lines))
}

fn celsius(fahrenheit: i32) -> String {
    format_temperature(Celsius::from(Fahrenheit(fahrenheit.into())))
}

fn day_of(dataset: &WeatherDataset, extreme: Extreme<i32>) -> Result<String, SummaryError> {
    let record = dataset
        .records
        .get(extreme.index)
        .ok_or(StatsError::NotFound)?;
    Ok(convert_date(&record.date)?)
}

fn join_lines(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|line| line.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
