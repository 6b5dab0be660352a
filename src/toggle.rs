/// Session-scoped flag controlling whether the logo participates in layout.
///
/// A single in-memory cell with no storage I/O of any kind: the flag never
/// persists across reloads (deliberately not serializable).
/// [`LogoToggle::initialize`] is the deterministic start-of-session reset
/// and the only way back to the default state other than an explicit enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoToggle {
    enabled: bool,
}

impl Default for LogoToggle {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl LogoToggle {
    /// A toggle in the default (enabled) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hard reset to enabled, ignoring any prior state.
    ///
    /// Expected to be invoked once per session start.
    pub fn initialize(&mut self) {
        self.enabled = true;
    }

    /// Whether the logo currently participates in layout.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the flag from a boolean.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Set the flag from an arbitrary collaborator-supplied value.
    ///
    /// UI callers historically pass whatever the widget produced (numbers,
    /// strings, null); the flag is derived via [`truthy`] rather than
    /// requiring a strict boolean.
    pub fn set_enabled_value(&mut self, value: &serde_json::Value) {
        self.enabled = truthy(value);
    }
}

/// Loose truthiness coercion for collaborator-supplied values.
///
/// `null`, `false`, numeric zero and the empty string are falsy; everything
/// else — including the string `"false"`, empty arrays and empty objects —
/// is truthy. This deliberately mirrors the coercion the wizard's UI layer
/// has always relied on.
pub fn truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}
