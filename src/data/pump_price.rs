//! World Bank pump price for gasoline (USD per litre)

use std::collections::HashMap;

use super::{line_of, next_record, open_reader, parse_cell};

/// Load the pump price of `year` for every country that has one.
/// The value column is located by matching the year in the header row.
pub(crate) fn load_pump_prices(path: &str, year: u16) -> Result<HashMap<String, f64>, String> {
    let mut reader = open_reader(path)?;
    let mut records = reader.records();

    let header = next_record(&mut records, path, "the header row")?;
    let wanted = year.to_string();
    let column = header
        .iter()
        .position(|cell| cell.trim() == wanted)
        .ok_or_else(|| format!("{}: no column for year {}", path, year))?;

    let mut prices = HashMap::new();
    for result in records {
        let record = result.map_err(|e| format!("{}: {}", path, e))?;
        let country = record.get(0).unwrap_or("").trim();
        if country.is_empty() {
            continue;
        }

        let cell = record.get(column).unwrap_or("");
        if let Some(price) = parse_cell(cell, path, line_of(&record))? {
            prices.insert(country.to_string(), price);
        }
    }

    Ok(prices)
}
