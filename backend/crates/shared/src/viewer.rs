//! Viewer Vocabulary
//!
//! The role/identity context under which every read and write of the link
//! catalog is evaluated. Roles form a closed enumeration so that illegal
//! role values are unrepresentable outside the storage boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Account role for authenticated users.
///
/// Anonymous viewers have no role; they are the `Viewer::Anonymous` case,
/// not a fourth variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User = 0,
    #[serde(rename = "mod")]
    Moderator = 1,
    Admin = 2,
}

impl Role {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            User => "user",
            Moderator => "mod",
            Admin => "admin",
        }
    }

    /// Moderators and admins may act on the moderation queue.
    #[inline]
    pub const fn is_moderator_or_higher(&self) -> bool {
        use Role::*;
        matches!(self, Moderator | Admin)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    #[inline]
    pub const fn from_id(id: i16) -> Option<Self> {
        use Role::*;
        match id {
            0 => Some(User),
            1 => Some(Moderator),
            2 => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Role::*;
        match code {
            "user" => Some(User),
            "mod" => Some(Moderator),
            "admin" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What the auth collaborator resolves a bearer credential to.
#[derive(Debug, Clone)]
pub struct ViewerIdentity {
    pub user_id: Uuid,
    pub user_name: String,
    pub role: Role,
}

/// The identity context of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    /// No credential, or an invalid/expired one.
    Anonymous,
    /// A resolved account.
    Known { user_id: Uuid, role: Role },
}

impl Viewer {
    pub fn from_identity(identity: Option<&ViewerIdentity>) -> Self {
        match identity {
            Some(id) => Viewer::Known {
                user_id: id.user_id,
                role: id.role,
            },
            None => Viewer::Anonymous,
        }
    }

    #[inline]
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Known { user_id, .. } => Some(*user_id),
        }
    }

    #[inline]
    pub fn role(&self) -> Option<Role> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Known { role, .. } => Some(*role),
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::Known { .. })
    }

    #[inline]
    pub fn is_moderator_or_higher(&self) -> bool {
        matches!(self.role(), Some(role) if role.is_moderator_or_higher())
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self.role(), Some(Role::Admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_roundtrip() {
        for role in [Role::User, Role::Moderator, Role::Admin] {
            assert_eq!(Role::from_id(role.id()), Some(role));
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_id(7), None);
        assert_eq!(Role::from_code("superuser"), None);
    }

    #[test]
    fn test_role_checks() {
        assert!(!Role::User.is_moderator_or_higher());
        assert!(Role::Moderator.is_moderator_or_higher());
        assert!(Role::Admin.is_moderator_or_higher());
        assert!(!Role::Moderator.is_admin());
        assert!(Role::Admin.is_admin());
    }

    #[test]
    fn test_viewer_from_identity() {
        let anon = Viewer::from_identity(None);
        assert!(!anon.is_authenticated());
        assert_eq!(anon.user_id(), None);
        assert_eq!(anon.role(), None);
        assert!(!anon.is_moderator_or_higher());

        let identity = ViewerIdentity {
            user_id: Uuid::new_v4(),
            user_name: "drifter".to_string(),
            role: Role::Moderator,
        };
        let viewer = Viewer::from_identity(Some(&identity));
        assert!(viewer.is_authenticated());
        assert_eq!(viewer.user_id(), Some(identity.user_id));
        assert!(viewer.is_moderator_or_higher());
        assert!(!viewer.is_admin());
    }
}
