use serde::Deserialize;

/// Body of an inbound cost advisory request.
///
/// Both fields are optional; an empty JSON object is a valid request. The
/// tag, when present, is a `key:value` cost-allocation pair.
#[derive(Debug, Deserialize)]
pub struct AdvisorRequest {
    pub region: Option<String>,
    pub tag: Option<String>,
}
