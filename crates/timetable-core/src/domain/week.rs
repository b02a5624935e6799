//! Week selector

use serde::{Deserialize, Serialize};

/// Which calendar week the remote service should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Week {
    #[default]
    Current,
    Next,
}

impl Week {
    pub fn from_is_next(is_next: bool) -> Self {
        if is_next {
            Week::Next
        } else {
            Week::Current
        }
    }

    pub fn is_next(self) -> bool {
        self == Week::Next
    }

    /// Value of the `week` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Week::Current => "0",
            Week::Next => "1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_params() {
        assert_eq!(Week::Current.as_param(), "0");
        assert_eq!(Week::Next.as_param(), "1");
        assert_eq!(Week::from_is_next(true), Week::Next);
        assert!(!Week::default().is_next());
    }
}
