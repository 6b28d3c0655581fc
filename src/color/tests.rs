//! Unit tests for color module

use super::gradient::MAX_COLORS;
use super::{ColorError, Rgb, polylinear_gradient, two_color_gradient};

fn hex(s: &str) -> Rgb {
    Rgb::from_hex(s).unwrap()
}

fn hexes(colors: &[Rgb]) -> Vec<String> {
    colors.iter().map(|c| c.to_hex()).collect()
}

#[test]
fn test_hex_parse_channels() {
    assert_eq!(hex("#FED976"), Rgb::new(254, 217, 118));
    assert_eq!(hex("#fd8d3c"), Rgb::new(253, 141, 60));
}

#[test]
fn test_hex_format_zero_padded() {
    assert_eq!(Rgb::new(177, 0, 0).to_hex(), "#B10000");
    assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");
}

#[test]
fn test_hex_round_trip_all_channel_values() {
    for v in 0..=255u8 {
        let c = Rgb::new(v, 255 - v, v / 2);
        assert_eq!(Rgb::from_hex(&c.to_hex()), Ok(c));
    }
}

#[test]
fn test_hex_rejects_bad_input() {
    for bad in ["", "#FFF", "#FFFFFFF", "#GG0000", "#12345Z", "#ÄÄÄÄÄ"] {
        assert!(
            matches!(Rgb::from_hex(bad), Err(ColorError::InvalidArgument(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_from_str_matches_from_hex() {
    let parsed: Rgb = "#600000".parse().unwrap();
    assert_eq!(parsed, Rgb::new(0x60, 0, 0));
}

#[test]
fn test_channel_range_checked() {
    assert_eq!(
        Rgb::try_from([254i64, 217, 118]),
        Ok(Rgb::new(254, 217, 118))
    );
    assert!(Rgb::try_from([256i64, 0, 0]).is_err());
    assert!(Rgb::try_from([0i64, -1, 0]).is_err());
}

#[test]
fn test_two_color_endpoints() {
    let start = Rgb::new(12, 200, 7);
    let finish = Rgb::new(250, 3, 99);
    for n in 2..40 {
        let g = two_color_gradient(start, finish, n).unwrap();
        assert_eq!(g.len(), n);
        assert_eq!(g.first(), start);
        assert_eq!(g.last(), finish);
    }
}

#[test]
fn test_two_color_midpoint_truncates() {
    let g = two_color_gradient(hex("#000000"), hex("#FFFFFF"), 3).unwrap();
    assert_eq!(hexes(g.colors()), vec!["#000000", "#7F7F7F", "#FFFFFF"]);
}

#[test]
fn test_two_color_monotonic_rising() {
    let g = two_color_gradient(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 10).unwrap();
    for pair in g.colors().windows(2) {
        assert!(pair[0].r <= pair[1].r);
        assert!(pair[0].g <= pair[1].g);
        assert!(pair[0].b <= pair[1].b);
    }
}

#[test]
fn test_two_color_monotonic_falling() {
    let g = two_color_gradient(hex("#FED976"), hex("#B10000"), 17).unwrap();
    for pair in g.colors().windows(2) {
        assert!(pair[0].r >= pair[1].r);
        assert!(pair[0].g >= pair[1].g);
        assert!(pair[0].b >= pair[1].b);
    }
}

#[test]
fn test_two_color_deterministic() {
    let a = two_color_gradient(hex("#FD8D3C"), hex("#B10000"), 25).unwrap();
    let b = two_color_gradient(hex("#FD8D3C"), hex("#B10000"), 25).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_two_color_rejects_short_count() {
    let c = Rgb::new(1, 2, 3);
    assert!(matches!(
        two_color_gradient(c, c, 1),
        Err(ColorError::InvalidArgument(_))
    ));
    assert!(two_color_gradient(c, c, 0).is_err());
}

#[test]
fn test_polylinear_two_anchors_is_linear() {
    let anchors = [hex("#FFFFFF"), hex("#000000")];
    let poly = polylinear_gradient(&anchors, 10).unwrap();
    let linear = two_color_gradient(anchors[0], anchors[1], 10).unwrap();
    assert_eq!(poly.len(), 10);
    assert_eq!(poly, linear);
}

#[test]
fn test_polylinear_length_undercount() {
    let anchors = [hex("#FFD982"), hex("#FD8D3C"), hex("#B10000")];
    let g = polylinear_gradient(&anchors, 9).unwrap();
    // 9 / 2 = 4 per segment, shared boundary counted once
    assert_eq!(g.len(), 7);
    assert_eq!(g.colors()[3], anchors[1]);
}

#[test]
fn test_polylinear_length_formula() {
    let anchors = [
        Rgb::new(0, 0, 0),
        Rgb::new(90, 10, 200),
        Rgb::new(255, 255, 0),
        Rgb::new(20, 20, 20),
    ];
    for n in 6..60 {
        let segment = n / 3;
        let g = polylinear_gradient(&anchors, n).unwrap();
        assert_eq!(g.len(), segment + 2 * (segment - 1), "n = {}", n);
    }
}

#[test]
fn test_polylinear_boundaries() {
    let anchors = [hex("#FED976"), hex("#FD8D3C"), hex("#B10000")];
    for n in [4, 5, 9, 50, 113] {
        let g = polylinear_gradient(&anchors, n).unwrap();
        assert_eq!(g.first(), anchors[0]);
        assert_eq!(g.last(), anchors[2]);
    }
}

#[test]
fn test_polylinear_no_duplicate_boundary() {
    let anchors = [Rgb::new(0, 0, 0), Rgb::new(100, 100, 100), Rgb::new(200, 200, 200)];
    let g = polylinear_gradient(&anchors, 10).unwrap();
    let middle = g.colors().iter().filter(|&&c| c == anchors[1]).count();
    assert_eq!(middle, 1);
}

#[test]
fn test_polylinear_rejects_degenerate_input() {
    let c = Rgb::new(5, 5, 5);
    assert!(polylinear_gradient(&[], 10).is_err());
    assert!(polylinear_gradient(&[c], 10).is_err());
    // 5 / 3 = 1 color per segment is not enough to hold both anchors
    assert!(matches!(
        polylinear_gradient(&[c, c, c, c], 5),
        Err(ColorError::InvalidArgument(_))
    ));
}

#[test]
fn test_color_table_parallel() {
    let g = polylinear_gradient(&[hex("#FED976"), hex("#FD8D3C"), hex("#B10000")], 20).unwrap();
    let table = g.table();
    assert_eq!(table.hex.len(), g.len());
    assert_eq!(table.red.len(), g.len());
    assert_eq!(table.green.len(), g.len());
    assert_eq!(table.blue.len(), g.len());
    for (i, c) in g.colors().iter().enumerate() {
        assert_eq!(table.hex[i], c.to_hex());
        assert_eq!([table.red[i], table.green[i], table.blue[i]], [c.r, c.g, c.b]);
    }
}

#[test]
fn test_truncate_keeps_prefix() {
    let g = two_color_gradient(Rgb::new(0, 0, 0), Rgb::new(9, 9, 9), 10).unwrap();
    let short = g.clone().truncate(9);
    assert_eq!(short.len(), 9);
    assert_eq!(short.colors(), &g.colors()[..9]);
}

#[test]
fn test_oversized_count_rejected() {
    let c = Rgb::new(0, 0, 0);
    assert_eq!(two_color_gradient(c, c, MAX_COLORS).unwrap().len(), MAX_COLORS);
    for n in [MAX_COLORS + 1, usize::MAX] {
        assert!(matches!(
            two_color_gradient(c, c, n),
            Err(ColorError::InvalidArgument(_))
        ));
        assert!(matches!(
            polylinear_gradient(&[c, c, c], n),
            Err(ColorError::InvalidArgument(_))
        ));
    }
}
