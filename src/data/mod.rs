//! CSV loaders for GFEI and World Bank data sets

mod consumption;
mod emissions;
mod pump_price;

pub(crate) use consumption::{ConsumptionTable, CountrySeries, load_consumption};
pub(crate) use emissions::load_emissions;
pub(crate) use pump_price::load_pump_prices;

use std::collections::HashMap;

use csv::{Reader, ReaderBuilder, StringRecord};

/// Consumption and pump price of one country for the same year
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PricePoint {
    pub(crate) country: String,
    pub(crate) pump_price: f64,
    pub(crate) consumption: f64,
}

/// Result of joining consumption with pump prices
#[derive(Debug, Default)]
pub(crate) struct PriceJoin {
    /// Countries with both values, in consumption file order
    pub(crate) points: Vec<PricePoint>,
    /// Countries with a consumption value but no pump price
    pub(crate) missing: Vec<String>,
}

/// Join consumption values of `year` with pump prices by country name.
/// Countries without a consumption value for that year are left out entirely.
pub(crate) fn join_price(
    consumption: &ConsumptionTable,
    year: u16,
    prices: &HashMap<String, f64>,
) -> PriceJoin {
    let mut join = PriceJoin::default();

    for series in &consumption.countries {
        let Some(value) = series.value_for(year) else {
            continue;
        };
        match prices.get(&series.country) {
            Some(&pump_price) => join.points.push(PricePoint {
                country: series.country.clone(),
                pump_price,
                consumption: value,
            }),
            None => join.missing.push(series.country.clone()),
        }
    }

    join
}

/// Open a headerless, ragged CSV file
fn open_reader(path: &str) -> Result<Reader<std::fs::File>, String> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("Error opening {}: {}", path, e))
}

/// Read the next record, failing if the file ends first
fn next_record(
    records: &mut impl Iterator<Item = csv::Result<StringRecord>>,
    path: &str,
    what: &str,
) -> Result<StringRecord, String> {
    records
        .next()
        .ok_or_else(|| format!("{}: file ends before {}", path, what))?
        .map_err(|e| format!("{}: {}", path, e))
}

/// Parse a numeric cell; blank cells are missing data
fn parse_cell(cell: &str, path: &str, line: u64) -> Result<Option<f64>, String> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("{}:{}: invalid number {:?}", path, line, cell))
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
