//! Public page contexts.
//!
//! Every public page carries the site settings next to its own data, so a
//! renderer never needs a second request for the header and footer.

pub mod handlers;

use serde::Serialize;

use crate::models::site::SiteView;
use crate::site;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PageContext<T: Serialize> {
    pub site: SiteView,
    #[serde(flatten)]
    pub body: T,
}

/// Wraps `body` with the current site settings.
pub async fn with_site<T: Serialize>(state: &AppState, body: T) -> PageContext<T> {
    let settings = site::store::load(&state.db).await;
    PageContext {
        site: SiteView::new(settings, state.media.as_ref()),
        body,
    }
}
