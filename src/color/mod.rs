//! RGB colors and linear color gradients

mod gradient;
mod rgb;

pub(crate) use gradient::{ColorTable, Gradient, polylinear_gradient, two_color_gradient};
pub(crate) use rgb::Rgb;

use thiserror::Error;

/// Errors raised by color parsing and gradient generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ColorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests;
