use std::fmt;

use stackview_ui_graphics::ColorParseError;

/// Configuration rejected while building a [`crate::StackView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackViewError {
    EmptySnapPoints,
    SnapPointOutOfRange { value: u32 },
    InvalidColor(ColorParseError),
}

impl fmt::Display for StackViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackViewError::EmptySnapPoints => write!(f, "snap points must not be empty"),
            StackViewError::SnapPointOutOfRange { value } => {
                write!(f, "snap point {value} outside 1..=100")
            }
            StackViewError::InvalidColor(err) => write!(f, "invalid background color: {err}"),
        }
    }
}

impl std::error::Error for StackViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StackViewError::InvalidColor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ColorParseError> for StackViewError {
    fn from(err: ColorParseError) -> Self {
        StackViewError::InvalidColor(err)
    }
}
