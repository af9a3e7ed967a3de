use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Message type as spelled in the export format. Exports occasionally carry
/// values beyond the documented three; those land in `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    #[default]
    Generic,
    Image,
    Share,
    #[serde(other)]
    Other,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Generic => "Generic",
            MessageKind::Image => "Image",
            MessageKind::Share => "Share",
            MessageKind::Other => "Other",
        }
    }
}

impl FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Generic" => Ok(MessageKind::Generic),
            "Image" => Ok(MessageKind::Image),
            "Share" => Ok(MessageKind::Share),
            "Other" => Ok(MessageKind::Other),
            _ => Err(format!("Invalid message kind: {}", s)),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
