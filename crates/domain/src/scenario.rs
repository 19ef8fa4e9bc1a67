//! Scenario configuration.
//!
//! A scenario is the hand-authored input of one run: the event log, the
//! distribution both pools start from, and the chart settings the renderer
//! needs to label and scale its bars.

use crate::entities::{Block, EventLog, SwapEvent};
use crate::error::{HookError, Result};
use crate::value_objects::LiquidityDistribution;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fixed captions shown around the pools.
pub mod text {
    pub const TITLE: &str = "Sandwich-Resistant Hook";
    pub const CAPTION: &str = "Highlighted state is used for swap delta";
    pub const BASE_TITLE: &str = "Base State";
    pub const TEMP_TITLE: &str = "Temporary State (resets every block)";
}

/// Vertical axis of the bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub y_max: u32,
    pub y_step: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            y_max: 6,
            y_step: 1,
        }
    }
}

/// Everything needed to play one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    #[serde(default = "default_title")]
    pub title: String,
    /// One label per slot, e.g. `p* - 4f`.
    pub bar_names: Vec<String>,
    #[serde(default)]
    pub chart: ChartConfig,
    /// Distribution shown by both pools before the first swap.
    pub initial: LiquidityDistribution,
    pub blocks: EventLog,
    /// Stop playback after this many events.
    #[serde(default)]
    pub stop_after: Option<usize>,
}

fn default_title() -> String {
    text::TITLE.to_string()
}

/// JSON shape of a scenario before any domain validation.
#[derive(Deserialize)]
struct RawScenario {
    #[serde(default = "default_title")]
    title: String,
    bar_names: Vec<String>,
    #[serde(default)]
    chart: ChartConfig,
    initial: Vec<i64>,
    blocks: Vec<Vec<RawSwapEvent>>,
    #[serde(default)]
    stop_after: Option<usize>,
}

#[derive(Deserialize)]
struct RawSwapEvent {
    label: String,
    base_pool: Vec<i64>,
    temp_pool: Vec<i64>,
}

impl RawSwapEvent {
    fn build(self) -> Result<SwapEvent> {
        Ok(SwapEvent::new(
            self.label,
            LiquidityDistribution::try_from_raw(&self.base_pool)?,
            LiquidityDistribution::try_from_raw(&self.temp_pool)?,
        ))
    }
}

impl RawScenario {
    fn build(self) -> Result<Scenario> {
        let blocks = self
            .blocks
            .into_iter()
            .map(|events| -> Result<Block> {
                let events = events
                    .into_iter()
                    .map(RawSwapEvent::build)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Block::new(events))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Scenario {
            title: self.title,
            bar_names: self.bar_names,
            chart: self.chart,
            initial: LiquidityDistribution::try_from_raw(&self.initial)?,
            blocks: EventLog::new(blocks)?,
            stop_after: self.stop_after,
        })
    }
}

impl Scenario {
    /// Parses and validates a JSON scenario.
    ///
    /// # Errors
    /// `InvalidScenario` for malformed JSON or a wrong shape,
    /// `InvalidDistribution` for negative slots or mismatched widths,
    /// `EmptyBlock` for a block without swaps.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawScenario = serde_json::from_str(json)?;
        let scenario = raw.build()?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that bar names, the initial distribution and every snapshot share one width.
    ///
    /// Snapshots taller than the chart are reported but accepted.
    pub fn validate(&self) -> Result<()> {
        let width = self.bar_names.len();
        self.initial.ensure_width(width, "initial distribution")?;
        if let Some(log_width) = self.blocks.width().filter(|&w| w != width) {
            return Err(HookError::invalid_distribution(format!(
                "event snapshots have {log_width} slots, but {width} bar names are configured"
            )));
        }
        if self.chart.y_step == 0 {
            return Err(HookError::InvalidScenario("chart y_step must be positive".into()));
        }

        let events = self.blocks.iter().map(|(_, e)| e);
        let snapshots = std::iter::once(&self.initial)
            .chain(events.flat_map(|e| [&e.base_pool, &e.temp_pool]));
        for snapshot in snapshots {
            if snapshot.max() > self.chart.y_max {
                warn!(
                    snapshot = %snapshot,
                    y_max = self.chart.y_max,
                    "snapshot exceeds chart range, bars will be clipped"
                );
            }
        }
        Ok(())
    }

    /// The attacker/victim sandwich played against the hook.
    ///
    /// Block 2 only carries placeholder swaps, so playback stops after its
    /// first event.
    ///
    /// # Errors
    /// Whatever [`EventLog::new`] reports for the scripted blocks.
    pub fn sandwich_attack() -> Result<Self> {
        let bar_names = [
            "p* - 4f", "p* - 3f", "p* - 2f", "p* - f", "p* + f", "p* + 2f", "p* + 3f", "p* + 4f",
            "p* + 5f", "p* + 6f", "p* + 7f",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let swap = |label: &str, base: [u32; 11], temp: [u32; 11]| {
            SwapEvent::new(
                label,
                LiquidityDistribution::new(base.to_vec()),
                LiquidityDistribution::new(temp.to_vec()),
            )
        };
        let settled = [1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1];

        let blocks = vec![
            Block::new(vec![
                swap(
                    "buy 1 unit of liquidity (attacker)",
                    [1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1],
                    [1, 1, 2, 0, 0, 0, 1, 1, 1, 1, 1],
                ),
                swap(
                    "buy 3 units of liquidity (victim)",
                    [1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1],
                    [1, 1, 5, 0, 0, 0, 0, 0, 0, 1, 1],
                ),
                swap(
                    "sell 1 unit of liquidity (attacker)",
                    [1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1],
                    [1, 1, 4, 0, 0, 0, 0, 0, 1, 1, 1],
                ),
            ]),
            Block::new(vec![
                swap("buy 1 unit of liquidity (random)", settled, settled),
                swap("...", settled, settled),
                swap("...", settled, settled),
            ]),
        ];

        Ok(Self {
            title: default_title(),
            bar_names,
            chart: ChartConfig::default(),
            initial: LiquidityDistribution::new(vec![1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 1]),
            blocks: EventLog::new(blocks)?,
            stop_after: Some(4),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandwich_attack_is_valid() {
        let scenario = Scenario::sandwich_attack().unwrap();
        scenario.validate().unwrap();
        assert_eq!(scenario.blocks.block_count(), 2);
        assert_eq!(scenario.blocks.event_count(), 6);
        assert_eq!(scenario.bar_names.len(), 11);
        assert_eq!(scenario.stop_after, Some(4));
    }

    #[test]
    fn test_json_round_trip_keeps_blocks() {
        let scenario = Scenario::sandwich_attack().unwrap();
        let json = scenario.to_json().unwrap();
        let parsed = Scenario::from_json(&json).unwrap();
        assert_eq!(parsed, scenario);
    }

    #[test]
    fn test_defaults_applied() {
        let json = r#"{
            "bar_names": ["a", "b"],
            "initial": [1, 1],
            "blocks": [[{"label": "x", "base_pool": [1, 0], "temp_pool": [0, 0]}]]
        }"#;
        let scenario = Scenario::from_json(json).unwrap();
        assert_eq!(scenario.title, text::TITLE);
        assert_eq!(scenario.chart, ChartConfig::default());
        assert_eq!(scenario.stop_after, None);
    }

    #[test]
    fn test_rejects_bar_name_mismatch() {
        let json = r#"{
            "bar_names": ["a", "b", "c"],
            "initial": [1, 1, 1],
            "blocks": [[{"label": "x", "base_pool": [1, 0], "temp_pool": [0, 0]}]]
        }"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert!(matches!(err, HookError::InvalidDistribution { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Scenario::from_json("{ not json").unwrap_err();
        assert!(matches!(err, HookError::InvalidScenario(_)));

        let wrong_shape = r#"{"bar_names": ["a"], "initial": ["x"], "blocks": []}"#;
        assert!(matches!(
            Scenario::from_json(wrong_shape).unwrap_err(),
            HookError::InvalidScenario(_)
        ));
    }

    #[test]
    fn test_negative_slot_reports_invalid_distribution() {
        let json = r#"{
            "bar_names": ["a", "b"],
            "initial": [1, -1],
            "blocks": [[{"label": "x", "base_pool": [1, 0], "temp_pool": [0, 0]}]]
        }"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert!(matches!(err, HookError::InvalidDistribution { .. }));
        assert!(err.to_string().contains("slot 1 has value -1"));
    }

    #[test]
    fn test_snapshot_width_mismatch_reports_invalid_distribution() {
        let json = r#"{
            "bar_names": ["a", "b"],
            "initial": [1, 1],
            "blocks": [[{"label": "x", "base_pool": [1, 0], "temp_pool": [0, 0, 0]}]]
        }"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert!(matches!(err, HookError::InvalidDistribution { .. }));
        assert!(err.to_string().contains("temp pool of event 0.0"));
    }

    #[test]
    fn test_empty_block_reports_empty_block() {
        let json = r#"{"bar_names": ["a"], "initial": [1], "blocks": [[]]}"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert!(matches!(err, HookError::EmptyBlock { block: 0 }));
    }
}
