use std::fmt;

pub const INVALID_INVOCATION: i32 = 100;
pub const INVALID_COORDINATES: i32 = 102;
pub const INVALID_TIER: i32 = 103;
pub const INCOMPLETE_SELECTION: i32 = 104;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

pub fn invalid_invocation_error() -> Error {
    Error {
        code: INVALID_INVOCATION,
        message: "invalid invocation".into(),
    }
}

pub fn invalid_coordinates_error() -> Error {
    Error {
        code: INVALID_COORDINATES,
        message: "coordinates out of range".into(),
    }
}

pub fn invalid_tier_error() -> Error {
    Error {
        code: INVALID_TIER,
        message: "unknown tier".into(),
    }
}

pub fn incomplete_selection_error() -> Error {
    Error {
        code: INCOMPLETE_SELECTION,
        message: "pickup, destination and tier must be selected".into(),
    }
}
