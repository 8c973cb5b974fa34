//! Selection Engine
//!
//! Picks one link to present next. Pure function over a snapshot of
//! the catalog; the caller supplies the RNG, the viewer, the client's
//! seen-history (`exclude_urls`), and the mode flag.
//!
//! Two modes:
//! - Review mode: candidates are all pending links, the exclusion list
//!   is ignored so moderators can re-see an item they skipped
//! - Normal mode: candidates are the links visible to this viewer
//!   minus the excluded URLs; when the viewer has seen everything, the
//!   history is treated as exhausted and selection falls back to the
//!   full live set (repeats allowed, pending excluded)
//!
//! Selection within the final candidate set is uniform by index. No
//! category weighting or feedback bias.

use rand::Rng;

use kernel::viewer::Viewer;

use crate::domain::entity::link::Link;
use crate::domain::value_object::link_status::LinkStatus;
use crate::domain::visibility::is_visible;

/// Pick the next link, or `None` when nothing qualifies.
///
/// `None` is a normal empty result, not an error.
pub fn select_next<'a, R: Rng + ?Sized>(
    links: &'a [Link],
    viewer: &Viewer,
    exclude_urls: &[String],
    approval_mode: bool,
    rng: &mut R,
) -> Option<&'a Link> {
    if approval_mode {
        let pending: Vec<&Link> = links.iter().filter(|l| l.status.is_pending()).collect();
        return pick_uniform(&pending, rng);
    }

    let unseen: Vec<&Link> = links
        .iter()
        .filter(|l| is_visible(l, viewer))
        .filter(|l| !exclude_urls.iter().any(|u| u == l.url.as_str()))
        .collect();

    if !unseen.is_empty() {
        return pick_uniform(&unseen, rng);
    }

    // History exhausted: allow repeats, but only from the live pool
    let live: Vec<&Link> = links
        .iter()
        .filter(|l| l.status == LinkStatus::Live)
        .collect();
    pick_uniform(&live, rng)
}

fn pick_uniform<'a, R: Rng + ?Sized>(candidates: &[&'a Link], rng: &mut R) -> Option<&'a Link> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::submitted_url::SubmittedUrl;
    use kernel::viewer::Role;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use uuid::Uuid;

    fn link(id: i64, url: &str, status: LinkStatus, submitter_id: Option<Uuid>) -> Link {
        Link {
            id,
            url: SubmittedUrl::new(url).unwrap(),
            title: format!("Link {id}"),
            submitter_id,
            status,
            created_at_ms: id,
            approved_at_ms: None,
            approved_by: None,
            tags: vec![],
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_empty_catalog_returns_none() {
        let picked = select_next(&[], &Viewer::Anonymous, &[], false, &mut rng());
        assert!(picked.is_none());
    }

    #[test]
    fn test_normal_mode_skips_excluded() {
        let links = vec![
            link(1, "https://a.example", LinkStatus::Live, None),
            link(2, "https://b.example", LinkStatus::Live, None),
        ];
        let exclude = vec!["https://a.example".to_string()];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_next(&links, &Viewer::Anonymous, &exclude, false, &mut rng);
            assert_eq!(picked.map(|l| l.id), Some(2));
        }
    }

    #[test]
    fn test_fallback_when_history_exhausted() {
        let links = vec![
            link(1, "https://a.example", LinkStatus::Live, None),
            link(2, "https://b.example", LinkStatus::Live, None),
        ];
        let exclude = vec![
            "https://a.example".to_string(),
            "https://b.example".to_string(),
        ];

        let picked = select_next(&links, &Viewer::Anonymous, &exclude, false, &mut rng());
        assert!(picked.is_some(), "exhausted history must allow repeats");
        assert_eq!(picked.unwrap().status, LinkStatus::Live);
    }

    #[test]
    fn test_fallback_never_returns_pending() {
        // A moderator has seen every live link; their visible set also
        // contains pending items, but the fallback pool is live-only.
        let viewer = Viewer::Known {
            user_id: Uuid::new_v4(),
            role: Role::Moderator,
        };
        let links = vec![
            link(1, "https://a.example", LinkStatus::Live, None),
            link(2, "https://p.example", LinkStatus::Pending, Some(Uuid::new_v4())),
        ];
        let exclude = vec![
            "https://a.example".to_string(),
            "https://p.example".to_string(),
        ];

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_next(&links, &viewer, &exclude, false, &mut rng).unwrap();
            assert_eq!(picked.status, LinkStatus::Live);
        }
    }

    #[test]
    fn test_normal_mode_respects_visibility() {
        let submitter = Uuid::new_v4();
        let links = vec![link(
            1,
            "https://p.example",
            LinkStatus::Pending,
            Some(submitter),
        )];

        // Anonymous sees nothing and there is no live fallback
        assert!(select_next(&links, &Viewer::Anonymous, &[], false, &mut rng()).is_none());

        // The submitter can draw their own pending link
        let viewer = Viewer::Known {
            user_id: submitter,
            role: Role::User,
        };
        let picked = select_next(&links, &viewer, &[], false, &mut rng());
        assert_eq!(picked.map(|l| l.id), Some(1));
    }

    #[test]
    fn test_review_mode_only_pending_and_ignores_exclusions() {
        let viewer = Viewer::Known {
            user_id: Uuid::new_v4(),
            role: Role::Moderator,
        };
        let links = vec![
            link(1, "https://live.example", LinkStatus::Live, None),
            link(2, "https://p1.example", LinkStatus::Pending, Some(Uuid::new_v4())),
            link(3, "https://p2.example", LinkStatus::Pending, Some(Uuid::new_v4())),
        ];
        // Exclusions cover every pending URL; review mode ignores them
        let exclude = vec![
            "https://p1.example".to_string(),
            "https://p2.example".to_string(),
        ];

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_next(&links, &viewer, &exclude, true, &mut rng).unwrap();
            assert!(picked.status.is_pending());
        }
    }

    #[test]
    fn test_review_mode_empty_queue_returns_none() {
        let viewer = Viewer::Known {
            user_id: Uuid::new_v4(),
            role: Role::Moderator,
        };
        let links = vec![link(1, "https://live.example", LinkStatus::Live, None)];
        assert!(select_next(&links, &viewer, &[], true, &mut rng()).is_none());
    }

    #[test]
    fn test_uniform_selection_reaches_all_candidates() {
        let links = vec![
            link(1, "https://a.example", LinkStatus::Live, None),
            link(2, "https://b.example", LinkStatus::Live, None),
            link(3, "https://c.example", LinkStatus::Live, None),
        ];

        let mut seen = std::collections::HashSet::new();
        let mut rng = rng();
        for _ in 0..200 {
            let picked = select_next(&links, &Viewer::Anonymous, &[], false, &mut rng).unwrap();
            seen.insert(picked.id);
        }
        assert_eq!(seen.len(), 3, "every live link should be reachable");
    }
}
