//! Gradient table printing

use crate::color::{ColorError, Gradient, Rgb, polylinear_gradient, two_color_gradient};
use crate::output::{
    print_gradient_header, print_gradient_row, print_info, print_section, swatch,
};

use super::fail;

/// Parse `#RRGGBB` or `R,G,B`
fn parse_color(arg: &str) -> Result<Rgb, ColorError> {
    if !arg.contains(',') {
        return arg.trim().parse();
    }

    let parts: Vec<&str> = arg.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(ColorError::InvalidArgument(format!(
            "expected R,G,B with three channels, got {:?}",
            arg
        )));
    };
    let channel = |s: &str| {
        s.parse::<i64>().map_err(|_| {
            ColorError::InvalidArgument(format!("invalid channel value {:?} in {:?}", s, arg))
        })
    };
    Rgb::try_from([channel(*r)?, channel(*g)?, channel(*b)?])
}

/// Two anchors give an exact-length linear gradient, more give a polylinear one
fn build_gradient(anchors: &[Rgb], count: usize) -> Result<Gradient, ColorError> {
    match anchors {
        [start, finish] => two_color_gradient(*start, *finish, count),
        _ => polylinear_gradient(anchors, count),
    }
}

/// Print the colors of a gradient through the given anchors
pub fn run_gradient(colors: &[String], count: usize, quiet: bool) {
    let anchors: Vec<Rgb> = colors
        .iter()
        .map(|c| parse_color(c))
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| fail(&e.to_string()));

    let gradient = build_gradient(&anchors, count).unwrap_or_else(|e| fail(&e.to_string()));

    if !quiet {
        println!();
        println!(
            "Anchors: {}",
            anchors
                .iter()
                .map(|&c| swatch(c).to_string())
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        println!();
        if gradient.len() != count {
            print_info(&format!(
                "Requested {} colors, the polylinear gradient has {}",
                count,
                gradient.len()
            ));
        }
    }

    let table = gradient.table();
    print_section(&format!(
        "Gradient ({} colors, {} to {})",
        gradient.len(),
        gradient.first(),
        gradient.last()
    ));
    print_gradient_header();
    for i in 0..gradient.len() {
        print_gradient_row(i, &table.hex[i], table.red[i], table.green[i], table.blue[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("#FED976").unwrap(), Rgb::new(254, 217, 118));
        assert_eq!(parse_color("254, 217, 118").unwrap(), Rgb::new(254, 217, 118));
        assert!(parse_color("256,0,0").is_err());
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("1,2,x").is_err());
    }

    #[test]
    fn test_build_gradient_picks_algorithm() {
        let two = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        assert_eq!(build_gradient(&two, 9).unwrap().len(), 9);

        let three = [Rgb::new(0, 0, 0), Rgb::new(9, 9, 9), Rgb::new(255, 255, 255)];
        assert_eq!(build_gradient(&three, 9).unwrap().len(), 7);
    }
}
