/// Crate-wide result alias.
pub type SharepicResult<T> = Result<T, SharepicError>;

/// Errors produced by the layout core.
///
/// Recoverable conditions (unknown template name, degenerate descriptor)
/// are reported as `Option::None` sentinels by the lookup/derivation APIs;
/// this enum covers the cases where a caller asked for a fallible
/// operation outright.
#[derive(thiserror::Error, Debug)]
pub enum SharepicError {
    /// Input data violated a documented invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A template name outside the fixed registry set.
    #[error("unknown template: {0}")]
    TemplateNotFound(String),

    /// An element with zero or non-finite dimensions reached the fit engine.
    #[error("degenerate element: {0}")]
    DegenerateElement(String),

    /// Escape hatch for collaborator errors crossing the core boundary.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SharepicError {
    /// Build a [`SharepicError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SharepicError::TemplateNotFound`].
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound(name.into())
    }

    /// Build a [`SharepicError::DegenerateElement`].
    pub fn degenerate_element(msg: impl Into<String>) -> Self {
        Self::DegenerateElement(msg.into())
    }
}
