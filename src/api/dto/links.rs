//! DTOs for the visited links endpoints.

use serde::Deserialize;

/// Request carrying one batch of raw links.
///
/// Links are arbitrary user-supplied text and are not required to be URLs;
/// the ingest pipeline decides per link whether a domain can be extracted.
#[derive(Debug, Deserialize)]
pub struct LinksRequest {
    pub links: Vec<String>,
}

/// Raw query parameters of the visited domains endpoint.
///
/// Both bounds arrive as untyped query-string text and are parsed in the
/// handler so that a non-numeric value produces a descriptive failure status
/// instead of a framework rejection.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}
