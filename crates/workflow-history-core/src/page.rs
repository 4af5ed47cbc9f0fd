//! Pages returned by paged history calls.

use serde::{Deserialize, Deserializer, Serialize};

use crate::event::RawEvent;
use crate::token::ContinuationToken;

/// One page of a paginated sequence.
///
/// If `next_page_token` is the exhausted sentinel the caller must stop
/// requesting pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server-defined order.
    pub events: Vec<T>,
    /// Token for the next page, or the empty sentinel.
    pub next_page_token: ContinuationToken,
}

impl<T> Page<T> {
    /// Creates a page.
    #[must_use]
    pub fn new(events: Vec<T>, next_page_token: impl Into<ContinuationToken>) -> Self {
        Self {
            events,
            next_page_token: next_page_token.into(),
        }
    }

    /// Creates the final page of a sequence.
    #[must_use]
    pub fn last(events: Vec<T>) -> Self {
        Self::new(events, ContinuationToken::start())
    }
}

/// A page of raw history events as returned by the transport.
pub type HistoryPage = Page<RawEvent>;

/// Wire shape of `GetWorkflowExecutionHistory` responses.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    /// Wrapped event list; absent on some empty responses.
    #[serde(default)]
    pub history: HistoryBody,
    /// Token for the next page; absent or empty on the last page.
    #[serde(default, deserialize_with = "nullable_token")]
    pub next_page_token: ContinuationToken,
}

/// Event list wrapper inside a history response.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HistoryBody {
    /// Raw events in server order.
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

fn nullable_token<'de, D>(deserializer: D) -> Result<ContinuationToken, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ContinuationToken::from(Option::<String>::deserialize(
        deserializer,
    )?))
}

impl From<HistoryResponse> for HistoryPage {
    fn from(response: HistoryResponse) -> Self {
        Self {
            events: response.history.events,
            next_page_token: response.next_page_token,
        }
    }
}

/// Per-call parameters handed to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Token of the page to fetch; empty for the first page.
    pub token: ContinuationToken,
    /// Upper bound on the number of events the server should return.
    pub page_size: Option<u32>,
}

impl PageRequest {
    /// Request for the page identified by `token`.
    #[must_use]
    pub fn at(token: ContinuationToken) -> Self {
        Self {
            token,
            page_size: None,
        }
    }

    /// Sets the page size limit.
    #[must_use]
    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }
}
