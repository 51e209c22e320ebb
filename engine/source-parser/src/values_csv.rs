//! Dynasty value CSV export parsing
//!
//! The export has a header row and one row per player or pick. Header names are
//! matched loosely because the export has renamed columns over time.

use tracing::{debug, info};
use value_registry::RawValueRecord;

/// What a CSV column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Position,
    Age,
    Value1Qb,
    Value2Qb,
    /// Source identifiers, not used for valuation
    Id,
    Ignored,
}

impl Column {
    fn from_header(header: &str) -> Self {
        let key = header.trim().replace('"', "").to_lowercase().split_whitespace().collect::<Vec<_>>().join("_");

        if key.contains("name") || key == "player" {
            Column::Name
        } else if key == "position" || key == "pos" {
            Column::Position
        } else if key == "age" {
            Column::Age
        } else if key == "value_1qb" {
            Column::Value1Qb
        } else if key == "value_2qb" {
            Column::Value2Qb
        } else if key.contains("id") {
            Column::Id
        } else {
            Column::Ignored
        }
    }
}

/// Split one CSV line into trimmed fields
///
/// A double quote toggles quoting and is dropped; commas inside quotes belong
/// to the field.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

fn parse_value(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_age(field: &str) -> Option<u32> {
    let field = field.trim();
    field.parse::<u32>().ok().or_else(|| {
        parse_value(field).filter(|age| *age >= 0.0).map(|age| age.trunc() as u32)
    })
}

fn non_empty(field: &str) -> Option<String> {
    (!field.is_empty()).then(|| field.to_string())
}

/// Parse a dynasty value CSV export into raw records
///
/// Rows without both a name and a position are dropped. Numeric fields that do
/// not parse are left absent.
pub fn parse_values_csv(text: &str) -> Vec<RawValueRecord> {
    let lines: Vec<&str> = text.trim().lines().map(|line| line.trim_end_matches('\r')).collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let columns: Vec<Column> = lines[0].split(',').map(Column::from_header).collect();
    debug!("CSV columns: {:?}", columns);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in &lines[1..] {
        let fields = split_csv_line(line);
        let mut name = String::new();
        let mut position = String::new();
        let mut age = None;
        let mut value_1qb = None;
        let mut value_2qb = None;

        for (index, column) in columns.iter().enumerate() {
            let field = fields.get(index).map(String::as_str).unwrap_or("");
            match column {
                Column::Name => name = field.to_string(),
                Column::Position => position = field.to_string(),
                Column::Age => age = parse_age(field),
                Column::Value1Qb => value_1qb = parse_value(field),
                Column::Value2Qb => value_2qb = parse_value(field),
                Column::Id | Column::Ignored => {}
            }
        }

        if name.is_empty() || position.is_empty() {
            skipped += 1;
            continue;
        }

        records.push(RawValueRecord::dynasty(name, non_empty(&position), age, value_1qb, value_2qb));
    }

    info!("Parsed {} dynasty rows ({} skipped)", records.len(), skipped);
    records
}
