//! Horizontal bar chart of CO2 emissions per country

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    datatype::DataPointItem,
    element::{AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle},
    series::Bar,
};

use super::colors::{COLOR_AXIS, COLOR_BACKGROUND, COLOR_GRID, COLOR_SUBTITLE, COLOR_TITLE};
use super::{ExportConfig, Heading, export};
use crate::color::Rgb;

/// One bar, already colored
pub(crate) struct BarDatum {
    pub(crate) country: String,
    pub(crate) value: u32,
    pub(crate) color: Rgb,
}

/// Render bars bottom to top in the given order
pub(crate) fn render_emissions_chart(
    bars: &[BarDatum],
    heading: &Heading,
    config: &ExportConfig,
) -> Result<(), String> {
    if bars.is_empty() {
        return Err("No data to render".to_string());
    }

    let countries: Vec<String> = bars.iter().map(|b| b.country.clone()).collect();
    let data: Vec<DataPointItem> = bars
        .iter()
        .map(|b| {
            DataPointItem::new(b.value as f64)
                .name(b.country.as_str())
                .item_style(ItemStyle::new().color(b.color.to_hex()))
        })
        .collect();

    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(heading.title.as_str())
                .subtext(heading.subtitle.as_str())
                .left("2%")
                .top("1%")
                .text_style(TextStyle::new().color(COLOR_TITLE).font_size(18))
                .subtext_style(TextStyle::new().color(COLOR_SUBTITLE).font_size(13)),
        )
        .grid(
            Grid::new()
                .left("2%")
                .right("6%")
                .bottom("4%")
                .top("9%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(COLOR_SUBTITLE).font_size(12))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(1).color(COLOR_GRID)),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(countries)
                .axis_label(AxisLabel::new().color(COLOR_AXIS).font_size(12)),
        )
        .series(Bar::new().name("CO2").data(data));

    export(&chart, config)
}
