use std::fmt;

/// Display orientation constraint requested by the policy.
///
/// Resolved once at load time from the free-form `orientation` field. Only the
/// exact keywords `PORTRAIT` and `LANDSCAPE` lock the display; every other
/// value (`AUTO`, lowercase spellings, empty) leaves it unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Portrait,
    Landscape,
    #[default]
    Unspecified,
}

impl Orientation {
    pub fn from_keyword(value: &str) -> Self {
        match value {
            "PORTRAIT" => Orientation::Portrait,
            "LANDSCAPE" => Orientation::Landscape,
            _ => Orientation::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "PORTRAIT",
            Orientation::Landscape => "LANDSCAPE",
            Orientation::Unspecified => "UNSPECIFIED",
        }
    }

    /// True when the host must pin the display to a fixed orientation.
    pub fn is_locked(&self) -> bool {
        !matches!(self, Orientation::Unspecified)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
