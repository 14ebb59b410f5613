use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Error body returned by the API alongside a non-success status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
