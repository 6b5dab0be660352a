use kurbo::Size;

/// Kind tag for a placeable element.
///
/// Informational only: the fit engine dispatches on the element's scaling
/// capability ([`ScaleOps`]), never on this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ElementKind {
    /// A laid-out text block.
    Text,
    /// A raster image.
    Bitmap,
    /// A vector shape with a single uniform scale.
    VectorShape,
}

/// An element the composition step can place on the canvas.
///
/// The fit engine reads the element's *current* size (after any scaling
/// applied earlier in the session) and mutates its scale through exactly one
/// of the two capability shapes exposed by [`Placeable::scale_ops`]. It
/// never manages the element's lifecycle.
pub trait Placeable {
    /// Kind tag for orchestration and diagnostics.
    fn kind(&self) -> ElementKind;

    /// Current on-canvas size, including any previously applied scaling.
    fn scaled_size(&self) -> Size;

    /// The scaling capability this element exposes.
    fn scale_ops(&mut self) -> ScaleOps<'_>;
}

/// The two capability shapes an element can expose.
pub enum ScaleOps<'a> {
    /// Independent width/height scaling (text, bitmaps).
    PerAxis(&'a mut dyn PerAxisScale),
    /// A single uniform scale factor (vector shapes).
    Uniform(&'a mut dyn UniformScale),
}

/// Independent per-axis scaling.
pub trait PerAxisScale {
    /// Scale so the element's width becomes exactly `target` pixels.
    fn scale_to_width(&mut self, target: f64);

    /// Scale so the element's height becomes exactly `target` pixels.
    fn scale_to_height(&mut self, target: f64);
}

/// Uniform scaling only; width and height change by the same factor.
pub trait UniformScale {
    /// Multiply the element's current scale by `factor`.
    fn scale_by(&mut self, factor: f64);
}

/// A text block with a known rendered size.
///
/// Text does not carry an intrinsic bitmap size; its size is whatever the
/// text layout produced, and per-axis scaling adjusts that rendered size
/// directly.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TextElement {
    /// The text content (opaque to the layout core).
    pub text: String,
    size: Size,
}

impl TextElement {
    /// Create a text element with its current rendered size.
    pub fn new(text: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            size: Size::new(width, height),
        }
    }
}

impl Placeable for TextElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Text
    }

    fn scaled_size(&self) -> Size {
        self.size
    }

    fn scale_ops(&mut self) -> ScaleOps<'_> {
        ScaleOps::PerAxis(self)
    }
}

impl PerAxisScale for TextElement {
    fn scale_to_width(&mut self, target: f64) {
        self.size.width = target;
    }

    fn scale_to_height(&mut self, target: f64) {
        self.size.height = target;
    }
}

/// A raster image with a native pixel size and per-axis scale factors.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BitmapElement {
    intrinsic: Size,
    scale_x: f64,
    scale_y: f64,
}

impl BitmapElement {
    /// Create a bitmap element from its native pixel dimensions, at scale 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            intrinsic: Size::new(f64::from(width), f64::from(height)),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Native pixel size, independent of scaling.
    pub fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }

    /// Current `(x, y)` scale factors.
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }
}

impl Placeable for BitmapElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Bitmap
    }

    fn scaled_size(&self) -> Size {
        Size::new(
            self.intrinsic.width * self.scale_x,
            self.intrinsic.height * self.scale_y,
        )
    }

    fn scale_ops(&mut self) -> ScaleOps<'_> {
        ScaleOps::PerAxis(self)
    }
}

impl PerAxisScale for BitmapElement {
    fn scale_to_width(&mut self, target: f64) {
        self.scale_x = target / self.intrinsic.width;
    }

    fn scale_to_height(&mut self, target: f64) {
        self.scale_y = target / self.intrinsic.height;
    }
}

/// A vector shape (circle, rect, ...) with one uniform scale factor.
///
/// Shapes expose no independent width/height scaling; applying the two axis
/// scales separately would distort them, so they only support
/// [`UniformScale::scale_by`].
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct VectorShapeElement {
    intrinsic: Size,
    scale: f64,
}

impl VectorShapeElement {
    /// Create a shape element from its unscaled bounding size, at scale 1.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            intrinsic: Size::new(width, height),
            scale: 1.0,
        }
    }

    /// Current uniform scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Placeable for VectorShapeElement {
    fn kind(&self) -> ElementKind {
        ElementKind::VectorShape
    }

    fn scaled_size(&self) -> Size {
        self.intrinsic * self.scale
    }

    fn scale_ops(&mut self) -> ScaleOps<'_> {
        ScaleOps::Uniform(self)
    }
}

impl UniformScale for VectorShapeElement {
    fn scale_by(&mut self, factor: f64) {
        self.scale *= factor;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fit/element.rs"]
mod tests;
