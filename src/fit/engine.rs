use kurbo::Size;

use crate::{
    error::{SharepicError, SharepicResult},
    fit::element::{Placeable, ScaleOps},
};

/// Fraction of the target box an element may occupy, per axis.
///
/// Callers reserve only part of the content area for a given element (a
/// logo should not swallow the whole canvas); the defaults of `0.5` width /
/// `0.4` height match the wizard's standard logo budget.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitRatios {
    /// Maximum width as a fraction of the box width.
    pub max_width: f64,
    /// Maximum height as a fraction of the box height.
    pub max_height: f64,
}

impl Default for FitRatios {
    fn default() -> Self {
        Self {
            max_width: 0.5,
            max_height: 0.4,
        }
    }
}

/// Fit `element` into `bounds` using the default [`FitRatios`].
#[tracing::instrument(skip(element))]
pub fn fit_to_box(element: &mut dyn Placeable, bounds: Size) -> SharepicResult<()> {
    fit_to_box_with(element, bounds, FitRatios::default())
}

/// Fit `element` into the fraction of `bounds` given by `ratios`.
///
/// Reads the element's current scaled size, picks the binding axis, and
/// applies exactly one scaling operation:
///
/// - per-axis elements are scaled along the binding axis only, to exactly
///   fill the budget on that axis;
/// - uniform-scale elements are scaled by the smaller of the two axis
///   ratios, preserving aspect.
///
/// Ties between the axis ratios bind to height. No rounding is applied;
/// the resulting sizes are the exact floating-point quotients, and re-running
/// the fit with the same box and ratios leaves the element unchanged.
#[tracing::instrument(skip(element))]
pub fn fit_to_box_with(
    element: &mut dyn Placeable,
    bounds: Size,
    ratios: FitRatios,
) -> SharepicResult<()> {
    let max_width = bounds.width * ratios.max_width;
    let max_height = bounds.height * ratios.max_height;

    let size = element.scaled_size();
    if !(size.width > 0.0 && size.width.is_finite())
        || !(size.height > 0.0 && size.height.is_finite())
    {
        return Err(SharepicError::degenerate_element(format!(
            "{:?} element has unusable size {}x{}",
            element.kind(),
            size.width,
            size.height
        )));
    }

    let width_scale = max_width / size.width;
    let height_scale = max_height / size.height;

    match element.scale_ops() {
        ScaleOps::PerAxis(ops) => {
            // Tie binds to height.
            if width_scale < height_scale {
                ops.scale_to_width(max_width);
            } else {
                ops.scale_to_height(max_height);
            }
        }
        ScaleOps::Uniform(ops) => {
            ops.scale_by(width_scale.min(height_scale));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/fit/engine.rs"]
mod tests;
