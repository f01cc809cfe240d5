//! Takes over the chart container: loading placeholder, data validation and
//! the hand-off to [`ChartPanel`](super::ChartPanel).

use tracing::{error, warn};

use super::data::ChartData;
use super::panel::ChartState;
use crate::core::config::PageConfig;

/// Everything the panel needs once the container has been claimed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartMount {
    pub container_id: String,
    pub state: ChartState,
    pub config: PageConfig,
}

/// Decide what the container shows for the raw attribute values.
pub fn resolve_state(labels: Option<&str>, scores: Option<&str>) -> ChartState {
    match ChartData::parse(labels, scores) {
        Ok(ChartData::Ready(series)) => ChartState::Ready(series),
        Ok(ChartData::Empty) => ChartState::Empty,
        Ok(ChartData::Mismatched { labels, scores }) => {
            warn!(labels, scores, "score chart labels and scores differ in length");
            ChartState::Empty
        }
        Err(err) => {
            error!(%err, "error parsing chart data");
            ChartState::Failed
        }
    }
}

/// Id of the loading line; the panel removes it once it has mounted.
pub const LOADING_ID: &str = "score-chart-loading";
const LOADING_STYLE: &str = "text-align:center; color:#64748b;";

/// Placeholder shown while the data is read and the panel starts up.
pub fn loading_markup() -> String {
    format!(
        r#"<p id="{LOADING_ID}" class="score-chart__status" style="{LOADING_STYLE}">{}</p>"#,
        crate::t!("chart-loading")
    )
}

/// Claim the chart container, if this page has one. The loading line stays
/// up until the panel replaces it.
#[cfg(target_arch = "wasm32")]
pub fn prepare(document: &web_sys::Document, config: &PageConfig) -> Option<ChartMount> {
    let Some(canvas) = document.get_element_by_id(&config.chart_id) else {
        tracing::debug!(id = %config.chart_id, "no score chart on this page");
        return None;
    };
    let Some(container) = canvas.parent_element() else {
        warn!(id = %config.chart_id, "score chart canvas has no container");
        return None;
    };

    let labels = canvas.get_attribute(&config.labels_attribute);
    let scores = canvas.get_attribute(&config.scores_attribute);

    container.set_inner_html(&loading_markup());

    let state = resolve_state(labels.as_deref(), scores.as_deref());

    if container.id().is_empty() {
        container.set_id(&config.chart_root_id);
    }

    Some(ChartMount {
        container_id: container.id(),
        state,
        config: config.clone(),
    })
}
