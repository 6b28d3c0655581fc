//! Average CO2 emissions bar chart

use crate::chart::colors::{BarColorScale, EMISSIONS_ANCHORS, bar_color};
use crate::chart::{BarDatum, ExportConfig, Heading, render_emissions_chart};
use crate::data::load_emissions;
use crate::output::{
    print_bar_header, print_bar_row, print_file_info, print_section, print_warning,
};

use super::{fail, report_export};

/// Run the emissions report, optionally exporting the bar chart
pub fn run_emissions(
    filename: &str,
    highlight: &str,
    ceiling: u32,
    quiet: bool,
    export: Option<&ExportConfig>,
) {
    let mut values = load_emissions(filename).unwrap_or_else(|e| fail(&e));
    if values.is_empty() {
        fail(&format!("No emissions values found in {}", filename));
    }

    // Stable sort keeps file order among equal values
    values.sort_by_key(|v| v.value);
    let smallest = values[0].value;

    let scale = BarColorScale::new(&EMISSIONS_ANCHORS, smallest, ceiling)
        .unwrap_or_else(|e| fail(&e.to_string()));

    if !values.iter().any(|v| v.country == highlight) {
        print_warning(&format!("{} not found in {}", highlight, filename));
    }

    let clamped = values
        .iter()
        .filter(|v| v.country != highlight && v.value > ceiling)
        .count();
    if clamped > 0 {
        print_warning(&format!(
            "{} value(s) above the ceiling of {} share the darkest color",
            clamped, ceiling
        ));
    }

    let bars: Vec<BarDatum> = values
        .iter()
        .map(|v| BarDatum {
            country: v.country.clone(),
            value: v.value,
            color: bar_color(&scale, &v.country, v.value, highlight),
        })
        .collect();

    if !quiet {
        println!();
        print_file_info("Emissions", filename);
        println!(
            "Gradient: {} colors from {} to {} g/km",
            scale.len(),
            smallest,
            ceiling
        );
        println!();
    }

    print_section("Average CO2 Emissions (g/km)");
    print_bar_header();
    for (rank, bar) in bars.iter().rev().enumerate() {
        print_bar_row(
            rank + 1,
            &bar.country,
            bar.value,
            bar.color,
            bar.country == highlight,
        );
    }

    if let Some(config) = export {
        // Sorted ascending, so the last bar is the largest
        let top = &values[values.len() - 1].country;
        let heading = Heading {
            title: format!("Cars in {} have the highest emissions", top),
            subtitle: "Average grams of CO₂ emitted per kilometer driven (g CO₂ / km)"
                .to_string(),
        };
        report_export(render_emissions_chart(&bars, &heading, config), &config.path);
    }
}
