use crate::config::TrendsConfig;
use crate::encoding::encode_keyword_for_transport;
use crate::types::ComparisonRequest;

/// User-facing deep link to the service's explore page for a comparison.
pub fn explore_link(config: &TrendsConfig, req: &ComparisonRequest) -> String {
    let baseline = encode_keyword_for_transport(req.baseline_keyword());
    let target = encode_keyword_for_transport(req.target_keyword());
    format!(
        "{}?date={}&q={},{}&hl={}",
        config.explore_page(),
        urlencoding::encode(req.time_window().time_token()),
        baseline.url_form,
        target.url_form,
        urlencoding::encode(&config.locale),
    )
}
