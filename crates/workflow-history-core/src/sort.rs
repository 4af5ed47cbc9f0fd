//! Sort order to endpoint selection.

use crate::route::ApiRoute;

/// Direction in which the history endpoint is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryEndpoint {
    /// Oldest event first.
    Ascending,
    /// Newest event first.
    Descending,
}

impl HistoryEndpoint {
    /// The logical API route serving this direction.
    #[must_use]
    pub fn route(self) -> ApiRoute {
        match self {
            Self::Ascending => ApiRoute::EventsAscending,
            Self::Descending => ApiRoute::EventsDescending,
        }
    }
}

/// Returns `true` if `value` names a supported sort order.
#[must_use]
pub fn is_valid_sort_order(value: &str) -> bool {
    matches!(value, "ascending" | "descending")
}

/// Maps a requested sort order to an endpoint.
///
/// Anything that is not a valid sort order, including `None`, reads
/// newest-first.
#[must_use]
pub fn endpoint_for_sort_order(sort: Option<&str>) -> HistoryEndpoint {
    match sort {
        Some(value) if is_valid_sort_order(value) && value == "ascending" => {
            HistoryEndpoint::Ascending
        }
        _ => HistoryEndpoint::Descending,
    }
}
