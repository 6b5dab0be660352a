use kurbo::{Rect, Size};

use crate::template::registry::TemplateDescriptor;

/// Per-edge border insets in output pixels.
///
/// The registry data specifies a single border value per template, but the
/// calculator keeps the four edges separate so a composition layer can
/// choose asymmetric insets without re-deriving the area math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Insets {
    /// Top inset.
    pub top: u32,
    /// Right inset.
    pub right: u32,
    /// Bottom inset.
    pub bottom: u32,
    /// Left inset.
    pub left: u32,
}

impl Insets {
    /// The same inset on all four edges.
    pub const fn uniform(px: u32) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }
}

/// The content-safe rectangle inside a template's border.
///
/// Always derived on demand from a [`TemplateDescriptor`], never cached
/// across template changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentArea {
    /// Left edge in output pixels (equals `insets.left`).
    pub x: u32,
    /// Top edge in output pixels (equals `insets.top`).
    pub y: u32,
    /// Usable width in output pixels.
    pub width: u32,
    /// Usable height in output pixels.
    pub height: u32,
    /// The insets this area was derived from.
    pub insets: Insets,
}

impl ContentArea {
    /// Derive a content area for an output of `width` x `height` with the
    /// given insets.
    ///
    /// Returns `None` when the insets consume an entire side — the sentinel
    /// callers must check instead of receiving a fabricated zero-size area.
    pub fn with_insets(width: u32, height: u32, insets: Insets) -> Option<ContentArea> {
        let horizontal = insets.left.checked_add(insets.right)?;
        let vertical = insets.top.checked_add(insets.bottom)?;
        if horizontal >= width || vertical >= height {
            return None;
        }
        Some(ContentArea {
            x: insets.left,
            y: insets.top,
            width: width - horizontal,
            height: height - vertical,
            insets,
        })
    }

    /// Usable size as floating-point geometry.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// The area as a rectangle in output-pixel coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x + self.width),
            f64::from(self.y + self.height),
        )
    }
}

impl TemplateDescriptor {
    /// Derive the content-safe area inside this template's border.
    ///
    /// The border is applied symmetrically to all four edges; ratio-based
    /// borders resolve to `round(ratio * height)` first. Degenerate
    /// descriptors (zero dimensions, border swallowing a whole side) yield
    /// `None`.
    pub fn content_area(&self) -> Option<ContentArea> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let border = self.border.resolve(self.height);
        ContentArea::with_insets(self.width, self.height, Insets::uniform(border))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/area.rs"]
mod tests;
