//! Pagination engine.
//!
//! Drives a token-based fetch function until the server reports the end of
//! the sequence, accumulating every page in fetch order.

use std::future::Future;

use tracing::debug;
use workflow_history_core::observer::PaginationObserver;
use workflow_history_core::page::Page;
use workflow_history_core::token::ContinuationToken;

/// Fetches every page of a sequence and returns the concatenated items.
///
/// Pages are requested strictly one after another, starting from the empty
/// token, because each request needs the token returned by the previous one.
/// `observer.on_start` fires before the first fetch, `on_update` after each
/// page with everything accumulated so far, and `on_complete` once the
/// sentinel token has been received.
///
/// # Errors
///
/// Returns the first error produced by `fetch_page`. Items accumulated up to
/// that point are dropped and `on_complete` is not called.
pub async fn drain<T, E, F, Fut>(
    mut fetch_page: F,
    observer: &dyn PaginationObserver<T>,
) -> Result<Vec<T>, E>
where
    F: FnMut(ContinuationToken) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    observer.on_start();

    let mut accumulated = Vec::new();
    let mut token = ContinuationToken::start();
    let mut pages = 0_usize;

    loop {
        let page = fetch_page(token).await?;
        pages += 1;
        accumulated.extend(page.events);
        observer.on_update(&accumulated);
        debug!(page = pages, accumulated = accumulated.len(), "page accumulated");

        if page.next_page_token.is_exhausted() {
            break;
        }
        token = page.next_page_token;
    }

    observer.on_complete(&accumulated);
    Ok(accumulated)
}
