use crate::error::{SharepicError, SharepicResult};

/// Geometry descriptor for one named output format.
///
/// Descriptors are process-wide static data: defined once in the registry,
/// never mutated. All derived geometry ([`crate::ContentArea`], logo
/// anchors) is recomputed from the descriptor on demand.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TemplateDescriptor {
    /// Registry key for this format.
    pub name: &'static str,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Border inset specification.
    pub border: BorderSpec,
    /// Vertical logo anchor as a fraction of `height`, in `[0, 1]`.
    pub logo_top: f64,
    /// Vertical logo-caption anchor as a fraction of `height`, in `[0, 1]`.
    pub logo_text_top: f64,
    /// Output resolution (dots per inch).
    pub dpi: u32,
}

/// How a template's border inset is specified.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum BorderSpec {
    /// Uniform inset in output pixels.
    Absolute(u32),
    /// Inset derived from the output height: `round(ratio * height)`.
    TopRatio(f64),
}

impl BorderSpec {
    /// Resolve the effective border in pixels for a template of `height`.
    pub fn resolve(self, height: u32) -> u32 {
        match self {
            BorderSpec::Absolute(px) => px,
            BorderSpec::TopRatio(ratio) => (ratio * f64::from(height)).round() as u32,
        }
    }
}

impl TemplateDescriptor {
    /// Check the descriptor invariants.
    pub fn validate(&self) -> SharepicResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SharepicError::validation(format!(
                "template '{}' must have width > 0 and height > 0",
                self.name
            )));
        }
        if self.dpi == 0 {
            return Err(SharepicError::validation(format!(
                "template '{}' must have dpi > 0",
                self.name
            )));
        }
        for (field, ratio) in [("logo_top", self.logo_top), ("logo_text_top", self.logo_text_top)] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(SharepicError::validation(format!(
                    "template '{}' {field} must be in [0, 1]",
                    self.name
                )));
            }
        }
        if let BorderSpec::TopRatio(ratio) = self.border
            && !(0.0..=1.0).contains(&ratio)
        {
            return Err(SharepicError::validation(format!(
                "template '{}' border ratio must be in [0, 1]",
                self.name
            )));
        }
        let border = self.border.resolve(self.height);
        if border * 2 >= self.width.min(self.height) {
            return Err(SharepicError::validation(format!(
                "template '{}' border consumes the whole output",
                self.name
            )));
        }
        Ok(())
    }

    /// Vertical logo anchor in output pixels (`logo_top * height`).
    pub fn logo_anchor_y(&self) -> f64 {
        self.logo_top * f64::from(self.height)
    }

    /// Vertical logo-caption anchor in output pixels (`logo_text_top * height`).
    pub fn logo_text_anchor_y(&self) -> f64 {
        self.logo_text_top * f64::from(self.height)
    }
}

/// The closed set of output formats known to the wizard.
///
/// `*Quer` variants are landscape rotations of their portrait counterpart
/// (width/height swapped). The registry is a fixed compile-time table;
/// unknown names resolve to `None` and the caller decides the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    /// 1080x1920 vertical story.
    Story,
    /// 1080x1080 square feed post.
    Post,
    /// 1200x628 event banner.
    Event,
    /// 851x315 Facebook page header.
    FacebookHeader,
    /// A2 portrait print at 300 DPI.
    A2,
    /// A2 landscape print at 300 DPI.
    A2Quer,
    /// A3 portrait print at 300 DPI.
    A3,
    /// A3 landscape print at 300 DPI.
    A3Quer,
    /// A4 portrait print at 300 DPI.
    A4,
    /// A4 landscape print at 300 DPI.
    A4Quer,
    /// A5 portrait print at 300 DPI.
    A5,
    /// A5 landscape print at 300 DPI.
    A5Quer,
}

const fn digital(
    name: &'static str,
    width: u32,
    height: u32,
    border: u32,
    logo_top: f64,
    logo_text_top: f64,
) -> TemplateDescriptor {
    TemplateDescriptor {
        name,
        width,
        height,
        border: BorderSpec::Absolute(border),
        logo_top,
        logo_text_top,
        dpi: 72,
    }
}

// A-series pixel dimensions at 300 DPI.
const fn print(name: &'static str, width: u32, height: u32) -> TemplateDescriptor {
    TemplateDescriptor {
        name,
        width,
        height,
        border: BorderSpec::TopRatio(0.05),
        logo_top: 0.04,
        logo_text_top: 0.1,
        dpi: 300,
    }
}

const STORY: TemplateDescriptor = digital("story", 1080, 1920, 40, 0.05, 0.115);
const POST: TemplateDescriptor = digital("post", 1080, 1080, 40, 0.06, 0.14);
const EVENT: TemplateDescriptor = digital("event", 1200, 628, 32, 0.07, 0.16);
const FACEBOOK_HEADER: TemplateDescriptor = digital("facebook_header", 851, 315, 24, 0.08, 0.2);
const A2: TemplateDescriptor = print("a2", 4961, 7016);
const A2_QUER: TemplateDescriptor = print("a2_quer", 7016, 4961);
const A3: TemplateDescriptor = print("a3", 3508, 4961);
const A3_QUER: TemplateDescriptor = print("a3_quer", 4961, 3508);
const A4: TemplateDescriptor = print("a4", 2480, 3508);
const A4_QUER: TemplateDescriptor = print("a4_quer", 3508, 2480);
const A5: TemplateDescriptor = print("a5", 1748, 2480);
const A5_QUER: TemplateDescriptor = print("a5_quer", 2480, 1748);

impl Template {
    /// Every template in the registry, in a stable order.
    pub const ALL: [Template; 12] = [
        Template::Story,
        Template::Post,
        Template::Event,
        Template::FacebookHeader,
        Template::A2,
        Template::A2Quer,
        Template::A3,
        Template::A3Quer,
        Template::A4,
        Template::A4Quer,
        Template::A5,
        Template::A5Quer,
    ];

    /// Resolve a registry key to a template, `None` for unknown keys.
    pub fn from_name(name: &str) -> Option<Template> {
        match name {
            "story" => Some(Template::Story),
            "post" => Some(Template::Post),
            "event" => Some(Template::Event),
            "facebook_header" => Some(Template::FacebookHeader),
            "a2" => Some(Template::A2),
            "a2_quer" => Some(Template::A2Quer),
            "a3" => Some(Template::A3),
            "a3_quer" => Some(Template::A3Quer),
            "a4" => Some(Template::A4),
            "a4_quer" => Some(Template::A4Quer),
            "a5" => Some(Template::A5),
            "a5_quer" => Some(Template::A5Quer),
            _ => None,
        }
    }

    /// Registry key for this template.
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Geometry descriptor for this template.
    pub const fn descriptor(self) -> &'static TemplateDescriptor {
        match self {
            Template::Story => &STORY,
            Template::Post => &POST,
            Template::Event => &EVENT,
            Template::FacebookHeader => &FACEBOOK_HEADER,
            Template::A2 => &A2,
            Template::A2Quer => &A2_QUER,
            Template::A3 => &A3,
            Template::A3Quer => &A3_QUER,
            Template::A4 => &A4,
            Template::A4Quer => &A4_QUER,
            Template::A5 => &A5,
            Template::A5Quer => &A5_QUER,
        }
    }
}

/// Look up a template descriptor by registry key.
///
/// Unknown keys yield `None`; this core does not guess a default template.
pub fn get(name: &str) -> Option<&'static TemplateDescriptor> {
    Template::from_name(name).map(Template::descriptor)
}

/// Look up a template descriptor, failing with
/// [`SharepicError::TemplateNotFound`] for unknown keys.
///
/// Convenience for orchestrators that treat an unknown key as an error
/// rather than a fallback decision.
pub fn resolve(name: &str) -> SharepicResult<&'static TemplateDescriptor> {
    get(name).ok_or_else(|| SharepicError::template_not_found(name))
}

#[cfg(test)]
#[path = "../../tests/unit/template/registry.rs"]
mod tests;
