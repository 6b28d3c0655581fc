//! Linear and polylinear RGB gradients

use super::{ColorError, Rgb};

/// Largest color count any gradient may be asked for
pub(crate) const MAX_COLORS: usize = 1 << 16;

fn check_count(n: usize) -> Result<(), ColorError> {
    if n > MAX_COLORS {
        return Err(ColorError::InvalidArgument(format!(
            "a gradient can have at most {} colors, got {}",
            MAX_COLORS, n
        )));
    }
    Ok(())
}

/// Ordered, read-only sequence of interpolated colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Gradient {
    colors: Vec<Rgb>,
}

/// Parallel per-channel view of a gradient: `hex[i]`, `red[i]`, `green[i]`
/// and `blue[i]` all describe the same color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColorTable {
    pub(crate) hex: Vec<String>,
    pub(crate) red: Vec<u8>,
    pub(crate) green: Vec<u8>,
    pub(crate) blue: Vec<u8>,
}

impl Gradient {
    pub(crate) fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub(crate) fn len(&self) -> usize {
        self.colors.len()
    }

    pub(crate) fn first(&self) -> Rgb {
        self.colors[0]
    }

    pub(crate) fn last(&self) -> Rgb {
        self.colors[self.colors.len() - 1]
    }

    /// Drop trailing colors so at most `len` remain
    pub(crate) fn truncate(mut self, len: usize) -> Self {
        self.colors.truncate(len);
        self
    }

    pub(crate) fn table(&self) -> ColorTable {
        ColorTable {
            hex: self.colors.iter().map(|c| c.to_hex()).collect(),
            red: self.colors.iter().map(|c| c.r).collect(),
            green: self.colors.iter().map(|c| c.g).collect(),
            blue: self.colors.iter().map(|c| c.b).collect(),
        }
    }
}

/// Interpolate a single channel at position `t` of `n`, truncating toward zero
fn lerp_channel(start: u8, finish: u8, t: usize, n: usize) -> u8 {
    let fraction = t as f64 / (n - 1) as f64;
    let value = start as f64 + fraction * (finish as f64 - start as f64);
    value as u8
}

/// `n` evenly spaced colors from `start` to `finish`, both included.
pub(crate) fn two_color_gradient(
    start: Rgb,
    finish: Rgb,
    n: usize,
) -> Result<Gradient, ColorError> {
    if n < 2 {
        return Err(ColorError::InvalidArgument(format!(
            "a gradient needs at least 2 colors, got {}",
            n
        )));
    }
    check_count(n)?;

    let mut colors = Vec::with_capacity(n);
    colors.push(start);
    for t in 1..n - 1 {
        colors.push(Rgb::new(
            lerp_channel(start.r, finish.r, t, n),
            lerp_channel(start.g, finish.g, t, n),
            lerp_channel(start.b, finish.b, t, n),
        ));
    }
    colors.push(finish);

    Ok(Gradient { colors })
}

/// Chain two-color gradients through every anchor.
///
/// Each segment gets `n / (anchors.len() - 1)` colors and every segment after
/// the first drops its leading color, which repeats the previous segment's
/// end. The result therefore has
/// `segment + (anchors.len() - 2) * (segment - 1)` colors, usually fewer than
/// `n`. Callers needing an exact count must ask for more and truncate.
pub(crate) fn polylinear_gradient(anchors: &[Rgb], n: usize) -> Result<Gradient, ColorError> {
    if anchors.len() < 2 {
        return Err(ColorError::InvalidArgument(format!(
            "a polylinear gradient needs at least 2 anchors, got {}",
            anchors.len()
        )));
    }

    check_count(n)?;

    let segments = anchors.len() - 1;
    let per_segment = n / segments;
    if per_segment < 2 {
        return Err(ColorError::InvalidArgument(format!(
            "{} colors cannot span {} segments",
            n, segments
        )));
    }

    let mut gradient = two_color_gradient(anchors[0], anchors[1], per_segment)?;
    for pair in anchors[1..].windows(2) {
        let next = two_color_gradient(pair[0], pair[1], per_segment)?;
        gradient.colors.extend_from_slice(&next.colors[1..]);
    }

    Ok(gradient)
}
