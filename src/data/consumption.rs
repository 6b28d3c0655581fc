//! GFEI average fuel consumption per year

use super::{line_of, next_record, open_reader, parse_cell};

/// Rows before the year labels
const HEADER_ROWS: usize = 2;

/// Consumption values of one country (L / 100 km), blank years dropped
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CountrySeries {
    pub(crate) country: String,
    pub(crate) points: Vec<(u16, f64)>,
}

impl CountrySeries {
    pub(crate) fn value_for(&self, year: u16) -> Option<f64> {
        self.points
            .iter()
            .find(|(y, _)| *y == year)
            .map(|&(_, v)| v)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ConsumptionTable {
    pub(crate) years: Vec<u16>,
    /// In file order
    pub(crate) countries: Vec<CountrySeries>,
}

impl ConsumptionTable {
    pub(crate) fn get(&self, country: &str) -> Option<&CountrySeries> {
        self.countries.iter().find(|s| s.country == country)
    }
}

pub(crate) fn load_consumption(path: &str) -> Result<ConsumptionTable, String> {
    let mut reader = open_reader(path)?;
    let mut records = reader.records();

    for i in 0..HEADER_ROWS {
        next_record(&mut records, path, &format!("header row {}", i + 1))?;
    }

    let year_row = next_record(&mut records, path, "the year row")?;
    let years = year_row
        .iter()
        .skip(1)
        .map(str::trim)
        .take_while(|cell| !cell.is_empty())
        .map(|cell| {
            cell.parse::<u16>().map_err(|_| {
                format!("{}:{}: invalid year {:?}", path, line_of(&year_row), cell)
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if years.is_empty() {
        return Err(format!("{}: no year columns found", path));
    }

    let mut countries = Vec::new();
    for result in records {
        let record = result.map_err(|e| format!("{}: {}", path, e))?;
        let country = record.get(0).unwrap_or("").trim();
        if country.is_empty() {
            continue;
        }

        let line = line_of(&record);
        let mut points = Vec::new();
        for (year, cell) in years.iter().zip(record.iter().skip(1)) {
            if let Some(value) = parse_cell(cell, path, line)? {
                points.push((*year, value));
            }
        }

        countries.push(CountrySeries {
            country: country.to_string(),
            points,
        });
    }

    Ok(ConsumptionTable { years, countries })
}
