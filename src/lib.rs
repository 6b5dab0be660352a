//! Sharepic-core is the layout engine behind a wizard that composes branded
//! social-media graphics (story, post, flyer, ...) from a background image,
//! a logo and text.
//!
//! The crate covers the template-driven geometry only; rendering, file
//! handling and the widget layer are external collaborators. The pipeline
//! consulted by the composition step is:
//!
//! 1. **Resolve**: template name -> [`TemplateDescriptor`] via the fixed
//!    registry ([`registry::get`])
//! 2. **Derive**: descriptor -> [`ContentArea`], the border-inset rectangle
//!    where user content may be placed
//! 3. **Fit**: scale each placeable element into its budgeted fraction of
//!    the content area ([`fit_to_box`] / [`fit_to_box_with`])
//!
//! Whether the logo element enters step 3 at all is gated by the
//! session-scoped [`LogoToggle`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every operation is a pure computation or a simple
//!   mutation of caller-owned state; derived geometry is recomputed on
//!   demand, never cached.
//! - **No IO**: the registry is compile-time data and the toggle never
//!   touches storage.
//! - **No silent degenerate math**: unknown templates and unusable
//!   descriptors yield sentinels; zero-sized elements fail the single fit
//!   operation, and no NaN or infinity ever escapes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod fit;
mod template;
mod toggle;

pub use error::{SharepicError, SharepicResult};
pub use fit::element::{
    BitmapElement, ElementKind, PerAxisScale, Placeable, ScaleOps, TextElement, UniformScale,
    VectorShapeElement,
};
pub use fit::engine::{FitRatios, fit_to_box, fit_to_box_with};
pub use template::area::{ContentArea, Insets};
pub use template::registry::{BorderSpec, Template, TemplateDescriptor};
pub use toggle::{LogoToggle, truthy};

/// Template registry lookup functions.
pub mod registry {
    pub use crate::template::registry::{get, resolve};
}

pub use kurbo::{Rect, Size, Vec2};
