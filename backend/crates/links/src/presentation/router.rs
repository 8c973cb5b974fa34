//! Links Router

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;

use crate::domain::repository::{LinkRepository, TagRepository, ViewerResolver};
use crate::infra::postgres::PgLinksRepository;
use crate::presentation::handlers::{self, LinksAppState};

/// Create the links router with PostgreSQL repository
pub fn links_router<V>(repo: PgLinksRepository, viewer_resolver: V) -> Router
where
    V: ViewerResolver + Send + Sync + 'static,
{
    links_router_generic(repo, viewer_resolver)
}

/// Create a generic links router for any repository implementation
pub fn links_router_generic<R, V>(repo: R, viewer_resolver: V) -> Router
where
    R: LinkRepository + TagRepository + Clone + Send + Sync + 'static,
    V: ViewerResolver + Send + Sync + 'static,
{
    let state = LinksAppState {
        repo: Arc::new(repo),
        viewer_resolver: Arc::new(viewer_resolver),
    };

    Router::new()
        .route("/urls", get(handlers::list_links::<R, V>))
        .route("/urls", post(handlers::submit_link::<R, V>))
        .route("/urls/next", post(handlers::next_link::<R, V>))
        .route("/urls/{id}/approve", post(handlers::approve_link::<R, V>))
        .route("/urls/{id}/reject", post(handlers::reject_link::<R, V>))
        .route("/urls/{id}", patch(handlers::update_link::<R, V>))
        .route("/admin/import", post(handlers::import_links::<R, V>))
        .route("/tags", get(handlers::list_tags::<R, V>))
        .route("/tags", post(handlers::create_tag::<R, V>))
        .route("/tags/{id}", patch(handlers::update_tag::<R, V>))
        .route("/tags/{id}", delete(handlers::delete_tag::<R, V>))
        .with_state(state)
}
