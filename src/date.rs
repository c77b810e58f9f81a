use miette::Diagnostic;
use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

#[derive(Debug, Error, Diagnostic)]
pub enum DateError {
    #[error("Invalid ISO date: `{input}`")]
    #[diagnostic(
        code(weather::date::invalid),
        help("dates are expected as YYYY-MM-DD")
    )]
    Invalid { input: String },
    #[error(transparent)]
    #[diagnostic(code(weather::date::format))]
    Format(#[from] time::error::Format),
}

/// Parses a calendar date. A trailing time of day (with or without an
/// offset) is accepted and dropped.
pub fn parse_iso_date(input: &str) -> Result<Date, DateError> {
    let input = input.trim();
    if let Ok(date) = Date::parse(input, format_description!("[year]-[month]-[day]")) {
        return Ok(date);
    }
    if let Ok(datetime) = OffsetDateTime::parse(input, &Rfc3339) {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = PrimitiveDateTime::parse(
        input,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        return Ok(datetime.date());
    }
    Err(DateError::Invalid {
        input: input.to_string(),
    })
}

/// Turns `2021-07-06` into `Tuesday 06 July 2021`.
pub fn convert_date(iso_string: &str) -> Result<String, DateError> {
    let date = parse_iso_date(iso_string)?;
    // `time` only knows English names, whatever the host locale.
    Ok(date.format(format_description!(
        "[weekday] [day] [month repr:long] [year]"
    ))?)
}
