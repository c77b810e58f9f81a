use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};

use csv::StringRecord;
use miette::Diagnostic;
use thiserror::Error;

use crate::{WeatherDataset, WeatherRecord};

const FIELDS: usize = 3;

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Could not open `{}`", path.display())]
    #[diagnostic(code(weather::load::source_unavailable))]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed row on line {line}: {reason}")]
    #[diagnostic(
        code(weather::load::malformed_row),
        help("each row should read `date,min,max` with integer temperatures")
    )]
    MalformedRow { line: u64, reason: String },
    #[error(transparent)]
    #[diagnostic(code(weather::load::csv))]
    Csv(#[from] csv::Error),
}

impl WeatherDataset {
    /// Reads a `date,min,max` CSV file. The first row is a header and is
    /// ignored, blank rows are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            // field count is checked per row to report it as a malformed row
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            if is_blank(&row) {
                continue;
            }
            records.push(WeatherRecord::parse(&row)?);
        }

        Ok(Self::new(records))
    }
}

impl FromStr for WeatherDataset {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

impl WeatherRecord {
    fn parse(row: &StringRecord) -> Result<Self, LoadError> {
        let line = row.position().map_or(0, |position| position.line());
        let malformed = |reason: String| LoadError::MalformedRow { line, reason };

        if row.len() != FIELDS {
            return Err(malformed(format!(
                "expected {FIELDS} fields, found {}",
                row.len()
            )));
        }

        let temperature = |index: usize, name: &str| {
            let field = &row[index];
            field
                .trim()
                .parse::<i32>()
                .map_err(|e| malformed(format!("{name} temperature `{field}`: {e}")))
        };

        Ok(Self {
            date: row[0].to_string(),
            min_temp_f: temperature(1, "min")?,
            max_temp_f: temperature(2, "max")?,
        })
    }
}

fn is_blank(row: &StringRecord) -> bool {
    row.len() <= 1 && row.iter().all(|field| field.trim().is_empty())
}
