//! Color definitions for charts

use crate::color::{ColorError, Gradient, Rgb, polylinear_gradient};

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#FFFFFF";
pub(super) const BACKGROUND_LINE: &str = "#EDEDED"; // Thin lines behind the featured series

/// Grey palette, light to dark
pub(super) const GREYS: [&str; 7] = [
    "#F7F7F7", // Grid lines
    "#D9D9D9",
    "#BDBDBD", // Subtitles, unlabelled points
    "#969696", // Axis text
    "#737373", // Labelled points
    "#525252", // Titles
    "#252525",
];

pub(super) const COLOR_GRID: &str = GREYS[0];
pub(super) const COLOR_SUBTITLE: &str = GREYS[2];
pub(super) const COLOR_AXIS: &str = GREYS[3];
pub(super) const COLOR_TITLE: &str = GREYS[5];

/// Highlighted country in line and scatter charts
pub(super) const HIGHLIGHT: &str = "#C00000";

/// Highlighted country in the emissions bar chart (outside the gradient)
pub(crate) const HIGHLIGHT_BAR: Rgb = Rgb::new(0x60, 0x00, 0x00);

/// Emissions gradient anchors: yellow, orange, red
pub(crate) const EMISSIONS_ANCHORS: [Rgb; 3] = [
    Rgb::new(254, 217, 118),
    Rgb::new(253, 141, 60),
    Rgb::new(177, 0, 0),
];

/// Extra colors requested from the polylinear gradient. With three anchors
/// it returns `n - 2` or `n - 3` colors; asking for 3 more and dropping the
/// last one leaves one color per integer value from the minimum up to the
/// ceiling.
const GRADIENT_OFFSET: usize = 3;

/// Maps integer bar values to gradient colors
pub(crate) struct BarColorScale {
    minimum: u32,
    gradient: Gradient,
}

impl BarColorScale {
    pub(crate) fn new(anchors: &[Rgb], minimum: u32, ceiling: u32) -> Result<Self, ColorError> {
        if ceiling <= minimum {
            return Err(ColorError::InvalidArgument(format!(
                "gradient ceiling {} must be above the smallest value {}",
                ceiling, minimum
            )));
        }

        let requested = (ceiling - minimum) as usize + GRADIENT_OFFSET;
        let gradient = polylinear_gradient(anchors, requested)?;
        let len = gradient.len() - 1;

        Ok(Self {
            minimum,
            gradient: gradient.truncate(len),
        })
    }

    /// Color at `value - minimum`; values past the end of the gradient get
    /// the last color, values below the minimum the first.
    pub(crate) fn color_for(&self, value: u32) -> Rgb {
        let index = value.saturating_sub(self.minimum) as usize;
        self.gradient
            .colors()
            .get(index)
            .copied()
            .unwrap_or_else(|| self.gradient.last())
    }

    pub(crate) fn len(&self) -> usize {
        self.gradient.len()
    }
}

/// Bar color per value; `highlight` gets [`HIGHLIGHT_BAR`] instead of a
/// gradient color.
pub(crate) fn bar_color(
    scale: &BarColorScale,
    country: &str,
    value: u32,
    highlight: &str,
) -> Rgb {
    if country == highlight {
        HIGHLIGHT_BAR
    } else {
        scale.color_for(value)
    }
}
