pub mod encode;
pub mod grid;
pub mod page;
pub mod parse;

pub use encode::{handle_encode, EncodeRequest, EncodeResponse, __path_handle_encode};
pub use grid::{handle_grid, __path_handle_grid};
pub use page::{handle_page, handle_reverse, handle_submit, SubmitForm};
pub use parse::{handle_parse, ParseRequest, ParseResponse, __path_handle_parse};

use crate::models::AppConfig;
use crate::services::QueryParams;

/// Query parameter carrying the page's contrast threshold
pub const THRESHOLD_PARAM: &str = "threshold";

/// Threshold from the query, clamped to the configured range
pub(crate) fn threshold_from(params: &QueryParams, config: &AppConfig) -> f64 {
    let requested = params
        .get(THRESHOLD_PARAM)
        .and_then(|t| t.trim().parse::<f64>().ok());
    config.threshold(requested)
}
