use csv::StringRecord;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::models::{LaunchRecord, Outcome, PayloadBounds};

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

/// Errors that can occur while loading the launch table
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Line {line}: invalid payload mass '{value}'")]
    InvalidPayload { line: u64, value: String },

    #[error("Line {line}: invalid class '{value}', expected 0 or 1")]
    InvalidOutcome { line: u64, value: String },

    #[error("Dataset contains no launch records")]
    Empty,
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    site: usize,
    payload: usize,
    class: usize,
    booster_category: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| normalize_header(h) == name)
                .ok_or(DatasetError::MissingColumn(name))
        };

        Ok(Self {
            site: find(SITE_COLUMN)?,
            payload: find(PAYLOAD_COLUMN)?,
            class: find(CLASS_COLUMN)?,
            booster_category: find(BOOSTER_CATEGORY_COLUMN)?,
        })
    }
}

/// Spreadsheet exports sometimes prefix the first header with a BOM
fn normalize_header(name: &str) -> &str {
    name.trim().trim_start_matches('\u{feff}')
}

/// Immutable in-memory launch table
///
/// Loaded once at startup and shared read-only by every request handler.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
}

impl Dataset {
    /// Load the table from a CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Parse the table from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = Columns::resolve(reader.headers()?)?;

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row = result?;
            // Header is line 1
            let line = row
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2);
            records.push(parse_row(&row, &columns, line)?);
        }

        Self::from_records(records)
    }

    /// Build a table from already parsed records
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        let bounds = compute_bounds(&records).ok_or(DatasetError::Empty)?;
        Ok(Self { records, bounds })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Minimum and maximum payload mass over the whole table
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Distinct sites in order of first appearance
    pub fn sites(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.site.as_str())
            .filter(|site| seen.insert(*site))
            .collect()
    }
}

fn field<'a>(row: &'a StringRecord, idx: usize) -> &'a str {
    row.get(idx).unwrap_or("")
}

fn parse_row(row: &StringRecord, columns: &Columns, line: u64) -> Result<LaunchRecord, DatasetError> {
    let payload_raw = field(row, columns.payload);
    let payload_mass_kg = payload_raw
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| DatasetError::InvalidPayload {
            line,
            value: payload_raw.to_string(),
        })?;

    let class_raw = field(row, columns.class);
    let outcome = parse_class(class_raw).ok_or_else(|| DatasetError::InvalidOutcome {
        line,
        value: class_raw.to_string(),
    })?;

    Ok(LaunchRecord {
        site: field(row, columns.site).to_string(),
        payload_mass_kg,
        outcome,
        booster_category: field(row, columns.booster_category).to_string(),
    })
}

/// Accepts `0`/`1` as well as float-formatted `0.0`/`1.0`
fn parse_class(raw: &str) -> Option<Outcome> {
    if let Ok(class) = raw.parse::<u8>() {
        return Outcome::from_class(class);
    }
    match raw.parse::<f64>() {
        Ok(v) if v == 1.0 => Some(Outcome::Success),
        Ok(v) if v == 0.0 => Some(Outcome::Failure),
        _ => None,
    }
}

fn compute_bounds(records: &[LaunchRecord]) -> Option<PayloadBounds> {
    let first = records.first()?.payload_mass_kg;
    let bounds = records.iter().fold(
        PayloadBounds { min: first, max: first },
        |acc, r| PayloadBounds {
            min: acc.min.min(r.payload_mass_kg),
            max: acc.max.max(r.payload_mass_kg),
        },
    );
    Some(bounds)
}
