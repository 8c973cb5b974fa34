//! LinkStatus Value Object
//!
//! Moderation state machine: `pending` is the only initial state,
//! `live` and `rejected` are terminal. The only legal transitions are
//! `pending -> live` and `pending -> rejected`; bulk import bypasses
//! the machine by creating links directly in `live`.

use serde::{Deserialize, Serialize};

/// Moderation status of a link, stored as a smallint code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum LinkStatus {
    Pending = 0,
    Live = 1,
    Rejected = 2,
}

impl LinkStatus {
    /// Database code
    pub fn id(&self) -> i16 {
        *self as i16
    }

    /// Restore from a database code
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Pending),
            1 => Some(Self::Live),
            2 => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Live => "live",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    /// Terminal states admit no further transitions
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for status in [LinkStatus::Pending, LinkStatus::Live, LinkStatus::Rejected] {
            assert_eq!(LinkStatus::from_id(status.id()), Some(status));
        }
        assert_eq!(LinkStatus::from_id(3), None);
        assert_eq!(LinkStatus::from_id(-1), None);
    }

    #[test]
    fn test_terminality() {
        assert!(!LinkStatus::Pending.is_terminal());
        assert!(LinkStatus::Live.is_terminal());
        assert!(LinkStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&LinkStatus::Pending).unwrap(),
            "\"pending\""
        );
        let status: LinkStatus = serde_json::from_str("\"live\"").unwrap();
        assert_eq!(status, LinkStatus::Live);
    }
}
