pub mod ad;
pub mod category;
pub mod index;
pub mod location;
pub mod user;

use classifieds_core::pagination::{Page, Paginator};

use crate::state::AppState;

/// Build the paginator for `total` rows and resolve the requested page.
pub(crate) fn paginate(state: &AppState, total: i64, raw_page: Option<&str>) -> (Paginator, Page) {
    let paginator = Paginator::new(total, state.config.page_size);
    let page = paginator.page(raw_page);
    (paginator, page)
}
