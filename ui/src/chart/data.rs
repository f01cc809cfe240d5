//! Score data embedded by the server as JSON attributes on the chart canvas.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Axis maxima at or below this use fine ticks.
const FINE_STEP_LIMIT: f64 = 20.0;

#[derive(Debug, Error)]
pub enum ChartDataError {
    #[error("labels attribute is not a JSON array of strings: {0}")]
    MalformedLabels(#[source] serde_json::Error),
    #[error("scores attribute is not a JSON array of numbers: {0}")]
    MalformedScores(#[source] serde_json::Error),
}

/// Outcome of reading the two attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// Either sequence is empty.
    Empty,
    /// Both sequences have entries but cannot be index-aligned.
    Mismatched { labels: usize, scores: usize },
    Ready(ScoreSeries),
}

impl ChartData {
    /// Decode the raw attribute values. An absent or blank attribute reads
    /// as an empty array.
    pub fn parse(labels: Option<&str>, scores: Option<&str>) -> Result<Self, ChartDataError> {
        let labels: Vec<String> = decode(labels).map_err(ChartDataError::MalformedLabels)?;
        let scores: Vec<f64> = decode(scores).map_err(ChartDataError::MalformedScores)?;

        if labels.is_empty() || scores.is_empty() {
            return Ok(Self::Empty);
        }
        if labels.len() != scores.len() {
            return Ok(Self::Mismatched {
                labels: labels.len(),
                scores: scores.len(),
            });
        }
        Ok(Self::Ready(ScoreSeries { labels, scores }))
    }
}

fn decode<T: DeserializeOwned>(raw: Option<&str>) -> Result<Vec<T>, serde_json::Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(json) => serde_json::from_str(json),
    }
}

/// Non-empty, index-aligned exam dates and scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSeries {
    labels: Vec<String>,
    scores: Vec<f64>,
}

impl ScoreSeries {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Highest score, never below `floor`.
    pub fn max_score(&self, floor: f64) -> f64 {
        self.scores.iter().copied().fold(floor, f64::max)
    }

    pub fn axis(&self, floor: f64) -> AxisScale {
        AxisScale::for_max(self.max_score(floor))
    }

    /// Latest score strictly beats the one before it. Ties do not count.
    pub fn improved(&self) -> bool {
        match self.scores.as_slice() {
            [.., previous, latest] => latest > previous,
            _ => false,
        }
    }
}

/// Y axis derived from the highest score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub max_score: f64,
    pub y_max: f64,
    pub step: f64,
}

impl AxisScale {
    pub fn for_max(max_score: f64) -> Self {
        let step = if max_score <= FINE_STEP_LIMIT { 2.0 } else { 5.0 };
        Self {
            max_score,
            y_max: max_score + 2.0,
            step,
        }
    }

    /// Share of the maximum, in percent.
    pub fn percentage(&self, score: f64) -> f64 {
        score / self.max_score * 100.0
    }
}
