//! Page contract: selectors, element ids and tuning values shared by both
//! enhancements. `PageConfig::default()` matches the markup the server renders.

use serde::Deserialize;

/// Scores never scale the Y axis below this ceiling.
pub const DEFAULT_AXIS_FLOOR: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Checkboxes that reveal a password field.
    pub toggle_selector: String,
    /// Container pairing a checkbox with its field.
    pub group_selector: String,
    /// Fields the toggle may flip, in document order.
    pub field_selector: String,
    /// Canvas carrying the serialized score data.
    pub chart_id: String,
    /// Id given to the chart container when the page did not name it.
    pub chart_root_id: String,
    pub labels_attribute: String,
    pub scores_attribute: String,
    pub axis_floor: f64,
    /// Pixel height the fill gradient fades over.
    pub gradient_height: f64,
    pub glow_delay_ms: u32,
    pub glow_hold_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toggle_selector: r#".form-check-input[type="checkbox"]"#.into(),
            group_selector: ".input-group".into(),
            field_selector: r#"input[type="password"], input[type="text"]"#.into(),
            chart_id: "scoreChart".into(),
            chart_root_id: "score-chart-root".into(),
            labels_attribute: "data-labels".into(),
            scores_attribute: "data-scores".into(),
            axis_floor: DEFAULT_AXIS_FLOOR,
            gradient_height: 400.0,
            glow_delay_ms: 1_000,
            glow_hold_ms: 1_000,
        }
    }
}

impl PageConfig {
    /// Parse overrides published by the page (e.g. a JSON `data-config`
    /// attribute). Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn with_axis_floor(mut self, floor: f64) -> Self {
        self.axis_floor = floor;
        self
    }

    pub fn with_glow_timing(mut self, delay_ms: u32, hold_ms: u32) -> Self {
        self.glow_delay_ms = delay_ms;
        self.glow_hold_ms = hold_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_markup() {
        let config = PageConfig::default();
        assert_eq!(config.chart_id, "scoreChart");
        assert_eq!(config.labels_attribute, "data-labels");
        assert_eq!(config.scores_attribute, "data-scores");
        assert_eq!(config.axis_floor, 20.0);
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let config = PageConfig::from_json(r#"{"axisFloor": 10, "glowDelayMs": 250}"#).unwrap();
        assert_eq!(config.axis_floor, 10.0);
        assert_eq!(config.glow_delay_ms, 250);
        assert_eq!(config.glow_hold_ms, 1_000);
        assert_eq!(config.group_selector, ".input-group");
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        assert!(PageConfig::from_json("{axisFloor: 10").is_err());
    }
}
