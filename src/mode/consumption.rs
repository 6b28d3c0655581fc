//! Fuel consumption over time

use crate::chart::{ExportConfig, Heading, LineRole, LineSeries, render_consumption_chart};
use crate::data::{CountrySeries, load_consumption};
use crate::output::{
    print_file_info, print_info, print_section, print_series_header, print_series_row,
    print_warning,
};

use super::{fail, report_export};

fn role_of(country: &str, highlight: &str, featured: &[String]) -> LineRole {
    if country == highlight {
        LineRole::Highlight
    } else if featured.iter().any(|f| f == country) {
        LineRole::Featured
    } else {
        LineRole::Background
    }
}

fn role_name(role: LineRole) -> &'static str {
    match role {
        LineRole::Highlight => "highlight",
        LineRole::Featured => "featured",
        LineRole::Background => "other",
    }
}

/// Headline describing the most recent movement of a series
fn trend_phrase(series: &CountrySeries) -> &'static str {
    match series.points.as_slice() {
        [.., (_, previous), (_, latest)] if latest < previous => "is still decreasing",
        [.., (_, previous), (_, latest)] if latest > previous => "is increasing again",
        [_, _, ..] => "has stopped decreasing",
        _ => "is barely documented",
    }
}

/// Run the consumption report, optionally exporting the line chart
pub fn run_consumption(
    filename: &str,
    highlight: &str,
    featured: &[String],
    quiet: bool,
    export: Option<&ExportConfig>,
) {
    let table = load_consumption(filename).unwrap_or_else(|e| fail(&e));

    for country in std::iter::once(highlight).chain(featured.iter().map(String::as_str)) {
        if table.get(country).is_none() {
            print_warning(&format!("{} not found in {}", country, filename));
        }
    }

    let mut series: Vec<LineSeries> = table
        .countries
        .iter()
        .filter(|s| !s.points.is_empty())
        .map(|s| LineSeries {
            country: s.country.clone(),
            role: role_of(&s.country, highlight, featured),
            points: s.points.clone(),
        })
        .collect();

    if series.is_empty() {
        fail(&format!("No consumption values found in {}", filename));
    }

    // Most prominent first; stable, so file order holds within a role
    series.sort_by_key(|s| std::cmp::Reverse(s.role));

    if !quiet {
        println!();
        print_file_info("Consumption", filename);
        println!(
            "Years: {}-{}, Countries: {}",
            table.years[0],
            table.years[table.years.len() - 1],
            series.len()
        );
        println!();
    }

    print_section("Average Fuel Consumption (L/100km)");
    print_series_header();
    for s in &series {
        print_series_row(&s.country, role_name(s.role), &s.points);
    }

    let skipped = table.countries.len() - series.len();
    if skipped > 0 && !quiet {
        print_info(&format!("Skipped {} countries without any value", skipped));
    }

    if let Some(config) = export {
        let title = match table.get(highlight) {
            Some(s) => format!("{} car fuel consumption {}", highlight, trend_phrase(s)),
            None => "Car fuel consumption by country".to_string(),
        };
        let heading = Heading {
            title,
            subtitle: "Average litres of gasoline-equivalent per 100 km (L / 100 km)".to_string(),
        };
        report_export(
            render_consumption_chart(&series, &table.years, &heading, config),
            &config.path,
        );
    }
}
