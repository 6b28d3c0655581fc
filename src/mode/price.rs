//! Fuel consumption vs pump price scatter plot

use crate::chart::{ExportConfig, Heading, LabelSide, LabelledPoint, render_price_chart};
use crate::data::{PricePoint, join_price, load_consumption, load_pump_prices};
use crate::output::{
    print_file_info, print_info, print_price_header, print_price_row, print_section,
    print_warning,
};

use super::{fail, report_export};

/// Countries labelled when none are given, first one highlighted
const DEFAULT_LABELS: [(&str, LabelSide); 8] = [
    ("Canada", LabelSide::Right),
    ("United States", LabelSide::Left),
    ("Malaysia", LabelSide::Right),
    ("India", LabelSide::Left),
    ("Germany", LabelSide::Left),
    ("Portugal", LabelSide::Bottom),
    ("Iceland", LabelSide::Right),
    ("Argentina", LabelSide::Right),
];

fn parse_side(side: &str) -> Result<LabelSide, String> {
    match side.trim().to_ascii_lowercase().as_str() {
        "top" => Ok(LabelSide::Top),
        "bottom" => Ok(LabelSide::Bottom),
        "left" => Ok(LabelSide::Left),
        "right" => Ok(LabelSide::Right),
        other => Err(format!(
            "invalid label side {:?} (expected top, bottom, left or right)",
            other
        )),
    }
}

/// Parse `COUNTRY` or `COUNTRY:SIDE`
fn parse_label(arg: &str) -> Result<(String, LabelSide), String> {
    match arg.rsplit_once(':') {
        Some((country, side)) => Ok((country.trim().to_string(), parse_side(side)?)),
        None => Ok((arg.trim().to_string(), LabelSide::Right)),
    }
}

fn side_name(side: LabelSide) -> &'static str {
    match side {
        LabelSide::Top => "top",
        LabelSide::Bottom => "bottom",
        LabelSide::Left => "left",
        LabelSide::Right => "right",
    }
}

/// Split joined points into labelled ones (in label order) and the rest.
/// Only the first requested label is highlighted, even when it has no point.
fn split_labelled(
    points: Vec<PricePoint>,
    labels: &[(String, LabelSide)],
) -> (Vec<PricePoint>, Vec<LabelledPoint>, Vec<String>) {
    let mut rest = points;
    let mut labelled = Vec::new();
    let mut not_found = Vec::new();

    for (index, (country, side)) in labels.iter().enumerate() {
        match rest.iter().position(|p| &p.country == country) {
            Some(i) => labelled.push(LabelledPoint {
                point: rest.remove(i),
                side: *side,
                highlight: index == 0,
            }),
            None => not_found.push(country.clone()),
        }
    }

    (rest, labelled, not_found)
}

/// Run the price report, optionally exporting the scatter plot
pub fn run_price(
    consumption_file: &str,
    price_file: &str,
    year: u16,
    labels: &[String],
    quiet: bool,
    export: Option<&ExportConfig>,
) {
    let labels: Vec<(String, LabelSide)> = if labels.is_empty() {
        DEFAULT_LABELS
            .iter()
            .map(|(country, side)| (country.to_string(), *side))
            .collect()
    } else {
        labels
            .iter()
            .map(|l| parse_label(l))
            .collect::<Result<_, _>>()
            .unwrap_or_else(|e| fail(&e))
    };

    let table = load_consumption(consumption_file).unwrap_or_else(|e| fail(&e));
    let prices = load_pump_prices(price_file, year).unwrap_or_else(|e| fail(&e));
    let join = join_price(&table, year, &prices);

    if join.points.is_empty() {
        fail(&format!("No country has both values for {}", year));
    }

    if !quiet {
        println!();
        print_file_info("Consumption", consumption_file);
        print_file_info("Pump price", price_file);
        println!("Year: {}, Countries: {}", year, join.points.len());
        println!();
        if !join.missing.is_empty() {
            print_info(&format!(
                "Removed {} countries without a {} pump price: {}",
                join.missing.len(),
                year,
                join.missing.join(", ")
            ));
        }
    }

    print_section(&format!("Fuel Consumption vs Pump Price ({})", year));
    print_price_header();
    for p in &join.points {
        let side = labels
            .iter()
            .find(|(country, _)| country == &p.country)
            .map(|(_, side)| side_name(*side));
        print_price_row(&p.country, p.pump_price, p.consumption, side);
    }

    let (unlabelled, labelled, not_found) = split_labelled(join.points, &labels);
    for country in &not_found {
        print_warning(&format!("{} has no data point for {}", country, year));
    }

    if let Some(config) = export {
        let heading = Heading {
            title: "Cars tend to be more fuel efficient in countries where gas costs more"
                .to_string(),
            subtitle: format!(
                "Average fuel consumption (L / 100 km) against gasoline pump price (USD / L), {}",
                year
            ),
        };
        report_export(
            render_price_chart(&unlabelled, &labelled, &heading, config),
            &config.path,
        );
    }
}
