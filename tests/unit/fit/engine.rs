use super::*;
use crate::fit::element::{ElementKind, PerAxisScale, Placeable, UniformScale};

/// Per-axis probe recording every scaling call the engine makes.
struct AxisProbe {
    size: Size,
    calls: Vec<(&'static str, f64)>,
}

impl AxisProbe {
    fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            calls: Vec::new(),
        }
    }
}

impl Placeable for AxisProbe {
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

impl PerAxisScale for AxisProbe {
    fn scale_to_width(&mut self, target: f64) {
        self.calls.push(("scale_to_width", target));
        self.size.width = target;
    }

    fn scale_to_height(&mut self, target: f64) {
        self.calls.push(("scale_to_height", target));
        self.size.height = target;
    }
}

/// Uniform probe recording every factor the engine applies.
struct UniformProbe {
    size: Size,
    factors: Vec<f64>,
}

impl UniformProbe {
    fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            factors: Vec::new(),
        }
    }
}

impl Placeable for UniformProbe {
    fn kind(&self) -> ElementKind {
        ElementKind::VectorShape
    }

    fn scaled_size(&self) -> Size {
        self.size
    }

    fn scale_ops(&mut self) -> ScaleOps<'_> {
        ScaleOps::Uniform(self)
    }
}

impl UniformScale for UniformProbe {
    fn scale_by(&mut self, factor: f64) {
        self.factors.push(factor);
        self.size = Size::new(self.size.width * factor, self.size.height * factor);
    }
}

const STORY_BOX: Size = Size::new(1080.0, 1920.0);

#[test]
fn width_bound_element_scales_to_width_only() {
    // max 540x768; 800x200 binds on width.
    let mut probe = AxisProbe::new(800.0, 200.0);
    fit_to_box(&mut probe, STORY_BOX).unwrap();
    assert_eq!(probe.calls, vec![("scale_to_width", 540.0)]);
    assert_eq!(probe.size, Size::new(540.0, 200.0));
}

#[test]
fn height_bound_element_scales_to_height_only() {
    // max 540x768; 300x900 binds on height.
    let mut probe = AxisProbe::new(300.0, 900.0);
    fit_to_box(&mut probe, STORY_BOX).unwrap();
    assert_eq!(probe.calls, vec![("scale_to_height", 768.0)]);
    assert_eq!(probe.size, Size::new(300.0, 768.0));
}

#[test]
fn uniform_element_gets_exactly_one_factor() {
    // max 540x768; 200x200 -> min(2.7, 3.84) = 2.7.
    let mut probe = UniformProbe::new(200.0, 200.0);
    fit_to_box(&mut probe, STORY_BOX).unwrap();
    assert_eq!(probe.factors, vec![2.7]);
    assert_eq!(probe.size, Size::new(540.0, 540.0));
}

#[test]
fn exact_tie_binds_to_height() {
    // 1000x1000 box, ratios 0.5/0.5: both axis scales are 0.5 exactly.
    let ratios = FitRatios {
        max_width: 0.5,
        max_height: 0.5,
    };
    let mut probe = AxisProbe::new(1000.0, 1000.0);
    fit_to_box_with(&mut probe, Size::new(1000.0, 1000.0), ratios).unwrap();
    assert_eq!(probe.calls, vec![("scale_to_height", 500.0)]);
}

#[test]
fn refitting_the_same_box_does_not_drift() {
    let mut probe = AxisProbe::new(800.0, 200.0);
    fit_to_box(&mut probe, STORY_BOX).unwrap();
    let fitted = probe.size;
    fit_to_box(&mut probe, STORY_BOX).unwrap();
    assert_eq!(probe.size, fitted);
    assert_eq!(
        probe.calls,
        vec![("scale_to_width", 540.0), ("scale_to_width", 540.0)]
    );

    let mut probe = UniformProbe::new(200.0, 200.0);
    fit_to_box(&mut probe, STORY_BOX).unwrap();
    let fitted = probe.size;
    fit_to_box(&mut probe, STORY_BOX).unwrap();
    assert_eq!(probe.size, fitted);
    assert_eq!(probe.factors, vec![2.7, 1.0]);
}

#[test]
fn ratios_are_overridable_per_call() {
    let ratios = FitRatios {
        max_width: 1.0,
        max_height: 1.0,
    };
    let mut probe = AxisProbe::new(2160.0, 200.0);
    fit_to_box_with(&mut probe, STORY_BOX, ratios).unwrap();
    assert_eq!(probe.calls, vec![("scale_to_width", 1080.0)]);
}

#[test]
fn zero_sized_element_fails_without_mutation() {
    let mut probe = AxisProbe::new(0.0, 200.0);
    let err = fit_to_box(&mut probe, STORY_BOX).unwrap_err();
    assert!(matches!(err, SharepicError::DegenerateElement(_)));
    assert!(probe.calls.is_empty());
    assert_eq!(probe.size, Size::new(0.0, 200.0));

    let mut probe = UniformProbe::new(200.0, f64::NAN);
    assert!(fit_to_box(&mut probe, STORY_BOX).is_err());
    assert!(probe.factors.is_empty());
}

#[test]
fn scales_match_the_direct_quotients() {
    // Results are exact floating-point quotients, no rounding.
    let mut probe = UniformProbe::new(431.0, 217.0);
    fit_to_box(&mut probe, Size::new(997.0, 1313.0)).unwrap();
    let expected = (997.0 * 0.5 / 431.0f64).min(1313.0 * 0.4 / 217.0);
    assert_eq!(probe.factors, vec![expected]);
}
