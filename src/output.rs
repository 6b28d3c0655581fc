use colored::*;

use crate::color::Rgb;

/// Width of the country column in every table
const COUNTRY_WIDTH: usize = 24;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_info(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

pub(crate) fn print_section(title: &str) {
    println!("{}", style_label(&format!("[{}]", title)));
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Hex code printed in its own color
pub(crate) fn swatch(color: Rgb) -> ColoredString {
    color.to_hex().truecolor(color.r, color.g, color.b)
}

fn country_cell(country: &str) -> String {
    format!("{:<width$}", country, width = COUNTRY_WIDTH)
}

pub(crate) fn print_file_info(label: &str, filename: &str) {
    println!("{}: {}", label, get_display_name(filename));
}

pub(crate) fn print_bar_header() {
    println!("{:>4}  {}{:>6}  COLOR", "#", country_cell("COUNTRY"), "VALUE");
    print_separator(4 + 2 + COUNTRY_WIDTH + 6 + 9);
}

pub(crate) fn print_bar_row(rank: usize, country: &str, value: u32, color: Rgb, highlight: bool) {
    let name = if highlight {
        style_label(&country_cell(country))
    } else {
        country_cell(country).normal()
    };
    println!("{:>4}  {}{:>6}  {}", rank, name, value, swatch(color));
}

pub(crate) fn print_series_header() {
    println!(
        "{}{:<11}{:>10}{:>8}{:>8}",
        country_cell("COUNTRY"),
        "ROLE",
        "YEARS",
        "FIRST",
        "LATEST"
    );
    print_separator(COUNTRY_WIDTH + 11 + 10 + 8 + 8);
}

pub(crate) fn print_series_row(country: &str, role: &str, points: &[(u16, f64)]) {
    let years = match (points.first(), points.last()) {
        (Some((first, _)), Some((last, _))) if first != last => format!("{}-{}", first, last),
        (Some((year, _)), _) => year.to_string(),
        _ => "-".to_string(),
    };
    let value = |p: Option<&(u16, f64)>| match p {
        Some((_, v)) => format!("{:>8.1}", v),
        None => format!("{:>8}", "-"),
    };
    println!(
        "{}{:<11}{:>10}{}{}",
        country_cell(country),
        role,
        years,
        value(points.first()),
        value(points.last())
    );
}

pub(crate) fn print_price_header() {
    println!(
        "{}{:>8}{:>13}  LABEL",
        country_cell("COUNTRY"),
        "USD/L",
        "L/100km"
    );
    print_separator(COUNTRY_WIDTH + 8 + 13 + 7);
}

pub(crate) fn print_price_row(country: &str, price: f64, consumption: f64, label: Option<&str>) {
    let name = if label.is_some() {
        style_label(&country_cell(country))
    } else {
        country_cell(country).normal()
    };
    println!(
        "{}{:>8.2}{:>13.1}  {}",
        name,
        price,
        consumption,
        label.unwrap_or("")
    );
}

pub(crate) fn print_gradient_header() {
    println!("{:>4}  {:<8}{:>4}{:>5}{:>5}", "#", "HEX", "R", "G", "B");
    print_separator(4 + 2 + 8 + 4 + 5 + 5);
}

pub(crate) fn print_gradient_row(index: usize, hex: &str, r: u8, g: u8, b: u8) {
    println!(
        "{:>4}  {:<8}{:>4}{:>5}{:>5}",
        index,
        hex.truecolor(r, g, b),
        r,
        g,
        b
    );
}
