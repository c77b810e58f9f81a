use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use weather::{
    generate_daily_summary, generate_summary, Error, LoadError, StatsError, SummaryError,
    WeatherDataset,
};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

fn report(path: &Path) -> Result<String, Error> {
    let dataset = WeatherDataset::load(path)?;
    let overview = generate_summary(&dataset)?;
    let daily = generate_daily_summary(&dataset)?;
    Ok(format!("{overview}\n{daily}"))
}

#[test]
fn full_report_from_file() {
    let file = create_temp_csv(
        "date,min,max\n\
         2021-07-02T07:00:00+08:00,49,67\n\
         2021-07-03T07:00:00+08:00,57,68\n\
         2021-07-04T07:00:00+08:00,56,62\n\
         2021-07-05T07:00:00+08:00,55,61\n\
         2021-07-06T07:00:00+08:00,53,62\n",
    );

    assert_eq!(
        report(file.path()).unwrap(),
        "5 Day Overview\n  \
         The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.\n  \
         The highest temperature will be 20.0°C, and will occur on Saturday 03 July 2021.\n  \
         The average low this week is 12.2°C.\n  \
         The average high this week is 17.8°C.\n\
         \n\
         ---- Friday 02 July 2021 ----\n  \
         Minimum Temperature: 9.4°C\n  \
         Maximum Temperature: 19.4°C\n\
         \n\
         ---- Saturday 03 July 2021 ----\n  \
         Minimum Temperature: 13.9°C\n  \
         Maximum Temperature: 20.0°C\n\
         \n\
         ---- Sunday 04 July 2021 ----\n  \
         Minimum Temperature: 13.3°C\n  \
         Maximum Temperature: 16.7°C\n\
         \n\
         ---- Monday 05 July 2021 ----\n  \
         Minimum Temperature: 12.8°C\n  \
         Maximum Temperature: 16.1°C\n\
         \n\
         ---- Tuesday 06 July 2021 ----\n  \
         Minimum Temperature: 11.7°C\n  \
         Maximum Temperature: 16.7°C\n\
         \n"
    );
}

#[test]
fn blank_rows_do_not_count_as_days() {
    let file = create_temp_csv("date,min,max\n2021-07-05,34,57\n\n2021-07-06,38,62\n\n");
    let dataset = WeatherDataset::load(file.path()).unwrap();
    assert_eq!(dataset.len(), 2);
    assert!(generate_summary(&dataset)
        .unwrap()
        .starts_with("2 Day Overview\n"));
}

#[test]
fn header_only_file_fails_on_overview() {
    let file = create_temp_csv("date,min,max\n");
    let err = report(file.path()).unwrap_err();
    assert!(
        matches!(err, Error::Summary(SummaryError::Stats(StatsError::EmptyInput))),
        "{err:?}"
    );
}

#[test]
fn short_row_fails_to_load() {
    let file = create_temp_csv("date,min,max\n2021-07-05,34\n");
    let err = report(file.path()).unwrap_err();
    assert!(
        matches!(err, Error::Load(LoadError::MalformedRow { line: 2, .. })),
        "{err:?}"
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = report(&dir.path().join("missing.csv")).unwrap_err();
    assert!(
        matches!(err, Error::Load(LoadError::SourceUnavailable { .. })),
        "{err:?}"
    );
}
