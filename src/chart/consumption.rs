//! Fuel consumption over time, one line per country

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, Symbol, TextStyle},
    series::Line,
};

use super::colors::{
    BACKGROUND_LINE, COLOR_AXIS, COLOR_BACKGROUND, COLOR_GRID, COLOR_SUBTITLE, COLOR_TITLE,
    GREYS, HIGHLIGHT,
};
use super::{ExportConfig, Heading, export};

/// Y axis range (L / 100 km)
const Y_MIN: f64 = 2.0;
const Y_MAX: f64 = 11.5;

const FEATURED_SYMBOL_SIZE: f64 = 5.0;
const HIGHLIGHT_SYMBOL_SIZE: f64 = 7.0;

/// How prominently a country is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum LineRole {
    Background,
    Featured,
    Highlight,
}

pub(crate) struct LineSeries {
    pub(crate) country: String,
    pub(crate) role: LineRole,
    pub(crate) points: Vec<(u16, f64)>,
}

fn styled_line(series: &LineSeries) -> Line {
    let data: Vec<Vec<f64>> = series
        .points
        .iter()
        .map(|&(year, value)| vec![year as f64, value])
        .collect();
    let line = Line::new().name(series.country.as_str()).data(data);

    match series.role {
        LineRole::Background => line
            .show_symbol(false)
            .line_style(LineStyle::new().width(1).color(BACKGROUND_LINE)),
        LineRole::Featured => line
            .symbol(Symbol::Circle)
            .symbol_size(FEATURED_SYMBOL_SIZE)
            .line_style(LineStyle::new().width(2).color(GREYS[2]))
            .item_style(ItemStyle::new().color(GREYS[2])),
        LineRole::Highlight => line
            .symbol(Symbol::Circle)
            .symbol_size(HIGHLIGHT_SYMBOL_SIZE)
            .line_style(LineStyle::new().width(2).color(HIGHLIGHT))
            .item_style(ItemStyle::new().color(HIGHLIGHT)),
    }
}

/// Render every series; background lines first so featured and highlighted
/// ones stay on top.
pub(crate) fn render_consumption_chart(
    series: &[LineSeries],
    years: &[u16],
    heading: &Heading,
    config: &ExportConfig,
) -> Result<(), String> {
    let (Some(&first_year), Some(&last_year)) = (years.first(), years.last()) else {
        return Err("No data to render".to_string());
    };

    let mut ordered: Vec<&LineSeries> = series.iter().collect();
    ordered.sort_by_key(|s| s.role);

    let legend_data: Vec<String> = ordered
        .iter()
        .rev()
        .filter(|s| s.role != LineRole::Background)
        .map(|s| s.country.clone())
        .collect();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(heading.title.as_str())
                .subtext(heading.subtitle.as_str())
                .left("2%")
                .top("2%")
                .text_style(TextStyle::new().color(COLOR_TITLE).font_size(18))
                .subtext_style(TextStyle::new().color(COLOR_SUBTITLE).font_size(13)),
        )
        .legend(
            Legend::new()
                .data(legend_data)
                .bottom("1%")
                .item_gap(24)
                .text_style(TextStyle::new().color(COLOR_AXIS).font_size(13)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("3%")
                .bottom("8%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .min(first_year as f64)
                .max(last_year as f64)
                .axis_label(
                    AxisLabel::new()
                        .color(COLOR_AXIS)
                        .font_size(12)
                        .formatter("{value}"),
                )
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(1).color(COLOR_GRID)),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .min(Y_MIN)
                .max(Y_MAX)
                .axis_label(AxisLabel::new().color(COLOR_AXIS).font_size(12))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(1).color(COLOR_GRID)),
                ),
        );

    for s in ordered {
        chart = chart.series(styled_line(s));
    }

    export(&chart, config)
}
