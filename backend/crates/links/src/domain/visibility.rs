//! Visibility Filter
//!
//! Pure predicate deciding which links a viewer may list:
//! - `live` is visible to everyone
//! - `pending` is visible to moderators/admins, and to the submitter
//! - `rejected` is visible to no one through listings

use kernel::viewer::Viewer;

use crate::domain::entity::link::Link;
use crate::domain::value_object::link_status::LinkStatus;

/// Whether `viewer` may see `link` in listings and normal-mode selection.
pub fn is_visible(link: &Link, viewer: &Viewer) -> bool {
    match link.status {
        LinkStatus::Live => true,
        LinkStatus::Pending => {
            if viewer.is_moderator_or_higher() {
                return true;
            }
            match (viewer.user_id(), link.submitter_id) {
                (Some(viewer_id), Some(submitter_id)) => viewer_id == submitter_id,
                _ => false,
            }
        }
        LinkStatus::Rejected => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::submitted_url::SubmittedUrl;
    use kernel::viewer::Role;
    use uuid::Uuid;

    fn link(status: LinkStatus, submitter_id: Option<Uuid>) -> Link {
        Link {
            id: 1,
            url: SubmittedUrl::new("https://example.com").unwrap(),
            title: "Example".to_string(),
            submitter_id,
            status,
            created_at_ms: 0,
            approved_at_ms: None,
            approved_by: None,
            tags: vec![],
        }
    }

    #[test]
    fn test_live_visible_to_everyone() {
        let link = link(LinkStatus::Live, Some(Uuid::new_v4()));
        assert!(is_visible(&link, &Viewer::Anonymous));
        assert!(is_visible(
            &link,
            &Viewer::Known {
                user_id: Uuid::new_v4(),
                role: Role::User
            }
        ));
    }

    #[test]
    fn test_pending_hidden_from_anonymous() {
        let link = link(LinkStatus::Pending, Some(Uuid::new_v4()));
        assert!(!is_visible(&link, &Viewer::Anonymous));
    }

    #[test]
    fn test_pending_visible_to_submitter_only() {
        let submitter = Uuid::new_v4();
        let link = link(LinkStatus::Pending, Some(submitter));

        assert!(is_visible(
            &link,
            &Viewer::Known {
                user_id: submitter,
                role: Role::User
            }
        ));
        assert!(!is_visible(
            &link,
            &Viewer::Known {
                user_id: Uuid::new_v4(),
                role: Role::User
            }
        ));
    }

    #[test]
    fn test_pending_visible_to_moderators() {
        let link = link(LinkStatus::Pending, Some(Uuid::new_v4()));
        for role in [Role::Moderator, Role::Admin] {
            assert!(is_visible(
                &link,
                &Viewer::Known {
                    user_id: Uuid::new_v4(),
                    role
                }
            ));
        }
    }

    #[test]
    fn test_rejected_hidden_from_everyone() {
        let submitter = Uuid::new_v4();
        let link = link(LinkStatus::Rejected, Some(submitter));
        assert!(!is_visible(&link, &Viewer::Anonymous));
        assert!(!is_visible(
            &link,
            &Viewer::Known {
                user_id: submitter,
                role: Role::User
            }
        ));
        assert!(!is_visible(
            &link,
            &Viewer::Known {
                user_id: Uuid::new_v4(),
                role: Role::Admin
            }
        ));
    }

    #[test]
    fn test_imported_pending_without_submitter() {
        // Pending with no submitter: only moderators can see it
        let link = link(LinkStatus::Pending, None);
        assert!(!is_visible(
            &link,
            &Viewer::Known {
                user_id: Uuid::new_v4(),
                role: Role::User
            }
        ));
        assert!(is_visible(
            &link,
            &Viewer::Known {
                user_id: Uuid::new_v4(),
                role: Role::Moderator
            }
        ));
    }
}
