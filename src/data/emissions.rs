//! GFEI average CO2 emissions per km

use super::{line_of, next_record, open_reader};

/// Title, subtitle and column names precede the data
const HEADER_ROWS: usize = 3;

/// Latest emissions value of one country (g CO2 / km)
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CountryValue {
    pub(crate) country: String,
    pub(crate) value: u32,
}

/// Load the last column of every row. Rows whose last cell is blank are
/// skipped.
pub(crate) fn load_emissions(path: &str) -> Result<Vec<CountryValue>, String> {
    let mut reader = open_reader(path)?;
    let mut records = reader.records();

    for i in 0..HEADER_ROWS {
        next_record(&mut records, path, &format!("header row {}", i + 1))?;
    }

    let mut values = Vec::new();
    for result in records {
        let record = result.map_err(|e| format!("{}: {}", path, e))?;
        let country = record.get(0).unwrap_or("").trim();
        let last = record.iter().last().unwrap_or("").trim();
        if country.is_empty() || last.is_empty() {
            continue;
        }

        let value = last.parse::<u32>().map_err(|_| {
            format!(
                "{}:{}: invalid emissions value {:?} for {}",
                path,
                line_of(&record),
                last,
                country
            )
        })?;

        values.push(CountryValue {
            country: country.to_string(),
            value,
        });
    }

    Ok(values)
}
