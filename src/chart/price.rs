//! Scatter plot of fuel consumption against pump price

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisType, Color, ItemStyle, Label, LabelPosition, LineStyle, SplitLine,
        TextStyle,
    },
    series::Scatter,
};

use super::colors::{
    COLOR_AXIS, COLOR_BACKGROUND, COLOR_GRID, COLOR_SUBTITLE, COLOR_TITLE, GREYS, HIGHLIGHT,
};
use super::{ExportConfig, Heading, export, round2};
use crate::data::PricePoint;

const SYMBOL_SIZE: f64 = 9.0;

/// Side of the marker a country label is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabelSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl LabelSide {
    fn position(self) -> LabelPosition {
        match self {
            LabelSide::Top => LabelPosition::Top,
            LabelSide::Bottom => LabelPosition::Bottom,
            LabelSide::Left => LabelPosition::Left,
            LabelSide::Right => LabelPosition::Right,
        }
    }
}

/// A named point, drawn in the highlight color when `highlight` is set
#[derive(Debug)]
pub(crate) struct LabelledPoint {
    pub(crate) point: PricePoint,
    pub(crate) side: LabelSide,
    pub(crate) highlight: bool,
}

fn xy(p: &PricePoint) -> Vec<f64> {
    vec![round2(p.pump_price), round2(p.consumption)]
}

fn value_axis(name: &str) -> Axis {
    Axis::new()
        .type_(AxisType::Value)
        .name(name)
        .name_text_style(TextStyle::new().color(COLOR_AXIS).font_size(12))
        .axis_label(AxisLabel::new().color(COLOR_AXIS).font_size(12))
        .split_line(SplitLine::new().line_style(LineStyle::new().width(1).color(COLOR_GRID)))
}

pub(crate) fn render_price_chart(
    unlabelled: &[PricePoint],
    labelled: &[LabelledPoint],
    heading: &Heading,
    config: &ExportConfig,
) -> Result<(), String> {
    if unlabelled.is_empty() && labelled.is_empty() {
        return Err("No data to render".to_string());
    }

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
        .grid(
            Grid::new()
                .left("3%")
                .right("6%")
                .bottom("5%")
                .top("16%")
                .contain_label(true),
        )
        .x_axis(value_axis("USD / L"))
        .y_axis(value_axis("L / 100 km"))
        .series(
            Scatter::new()
                .name("Other countries")
                .symbol_size(SYMBOL_SIZE)
                .data(unlabelled.iter().map(xy).collect::<Vec<_>>())
                .item_style(ItemStyle::new().color(COLOR_SUBTITLE)),
        );

    // One series per labelled country so each label can sit on its own side
    for labelled_point in labelled {
        let color = if labelled_point.highlight {
            HIGHLIGHT
        } else {
            GREYS[4]
        };
        chart = chart.series(
            Scatter::new()
                .name(labelled_point.point.country.as_str())
                .symbol_size(SYMBOL_SIZE)
                .data(vec![xy(&labelled_point.point)])
                .item_style(ItemStyle::new().color(color))
                .label(
                    Label::new()
                        .show(true)
                        .position(labelled_point.side.position())
                        .color(color)
                        .font_size(12)
                        .formatter("{a}"),
                ),
        );
    }

    export(&chart, config)
}
