//! Text renderers standing in for the animation engine.

use hookviz_domain::SinkError;
use hookviz_domain::classification::bar_colors;
use hookviz_domain::enums::{PoolKind, ZoneColor};
use hookviz_domain::scenario::{Scenario, text};
use hookviz_domain::value_objects::LiquidityDistribution;
use hookviz_sequencer::operation::{Operation, OperationSink};
use hookviz_sequencer::state::PresentationState;
use hookviz_sequencer::table::Table;
use prettytable::{Cell, Row, format};
use std::io::Write;

/// Builds the printable label table.
pub fn label_table(table: &Table) -> prettytable::Table {
    let mut out = prettytable::Table::new();
    out.set_format(*format::consts::FORMAT_BOX_CHARS);

    let mut header = vec![Cell::new("")];
    header.extend(table.column_headers().iter().map(|h| Cell::new(h)));
    out.set_titles(Row::new(header));

    for (row_header, cells) in table.row_headers().iter().zip(table.cells()) {
        let mut row = vec![Cell::new(row_header)];
        row.extend(
            cells
                .iter()
                .map(|c| Cell::new(c.as_deref().unwrap_or(""))),
        );
        out.add_row(Row::new(row));
    }
    out
}

fn zone_char(color: ZoneColor) -> char {
    match color {
        ZoneColor::Green => 'G',
        ZoneColor::Blue => 'B',
        ZoneColor::Red => 'R',
    }
}

/// One-line bar chart: each slot as `<value><zone>`.
pub fn bars(distribution: &LiquidityDistribution) -> String {
    distribution
        .slots()
        .iter()
        .zip(bar_colors(distribution))
        .map(|(v, c)| format!("{v}{}", zone_char(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn pool_title(pool: PoolKind) -> &'static str {
    match pool {
        PoolKind::Base => text::BASE_TITLE,
        PoolKind::Temp => text::TEMP_TITLE,
    }
}

/// Writes a readable transcript of the operation stream.
pub struct ConsoleSink<W: Write> {
    out: W,
    table: Table,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, table: Table) -> Self {
        Self { out, table }
    }

    /// Prints the title, captions and the starting pools.
    pub fn intro(&mut self, scenario: &Scenario) -> std::io::Result<()> {
        writeln!(self.out, "{}", scenario.title)?;
        writeln!(self.out, "{}", text::CAPTION)?;
        writeln!(self.out, "slots: {}", scenario.bar_names.join(" | "))?;
        for pool in [PoolKind::Base, PoolKind::Temp] {
            let initial = bars(&scenario.initial);
            writeln!(self.out, "{:<38} {initial}", pool_title(pool))?;
        }
        writeln!(self.out)
    }

    /// Prints what both pools show once playback ended, and what they showed before.
    pub fn outro(&mut self, state: &PresentationState) -> std::io::Result<()> {
        for pool in [PoolKind::Base, PoolKind::Temp] {
            let cursor = state.cursor(pool);
            let current = bars(cursor.current());
            match cursor.previous() {
                Some(previous) => {
                    let previous = bars(previous);
                    writeln!(self.out, "{:<38} {current} (was {previous})", pool_title(pool))?;
                }
                None => writeln!(self.out, "{:<38} {current}", pool_title(pool))?,
            }
        }
        Ok(())
    }

    fn write_op(&mut self, op: &Operation) -> std::io::Result<()> {
        match op {
            Operation::HighlightCell { row, col } => {
                let label = self.table.cell(*row, *col).unwrap_or("");
                let block = self
                    .table
                    .column_headers()
                    .get(*col)
                    .map_or("", String::as_str);
                writeln!(self.out, "▶ {block}, swap {}: {label}", row + 1)
            }
            Operation::UnhighlightCell { .. } => writeln!(self.out),
            Operation::Highlight { pool } => {
                writeln!(self.out, "  [*] {} used for swap delta", pool_title(*pool))
            }
            Operation::Unhighlight { pool } => writeln!(self.out, "  [ ] {}", pool_title(*pool)),
            Operation::Transition { pool, from, to } => {
                writeln!(self.out, "  {pool:<4} {}", bars(from))?;
                writeln!(self.out, "    -> {}", bars(to))
            }
        }
    }
}

impl<W: Write> OperationSink for ConsoleSink<W> {
    fn apply(&mut self, op: &Operation) -> Result<(), SinkError> {
        self.write_op(op)
            .map_err(|e| SinkError::new(format!("console write failed: {e}")))
    }
}

/// Writes each operation as one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> OperationSink for JsonLinesSink<W> {
    fn apply(&mut self, op: &Operation) -> Result<(), SinkError> {
        let line = serde_json::to_string(op)
            .map_err(|e| SinkError::new(e.to_string()))?;
        writeln!(self.out, "{line}")
            .map_err(|e| SinkError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookviz_domain::entities::SwapEvent;
    use hookviz_sequencer::machine::EventRole;
    use hookviz_sequencer::table::project;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bars_show_zones() {
        let d = LiquidityDistribution::new(vec![1, 2, 0, 0, 1]);
        assert_eq!(bars(&d), "1G 2G 0B 0B 1R");
    }

    #[test]
    fn test_label_table_has_all_labels() {
        let scenario = Scenario::sandwich_attack().unwrap();
        let table = project(&scenario.blocks).unwrap();
        let printed = label_table(&table).to_string();
        assert!(printed.contains("Block 2"));
        assert!(printed.contains("sell 1 unit of liquidity (attacker)"));
    }

    #[test]
    fn test_console_sink_transcript() {
        let scenario = Scenario::sandwich_attack().unwrap();
        let table = project(&scenario.blocks).unwrap();
        let mut sink = ConsoleSink::new(Vec::new(), table);
        sink.apply(&Operation::HighlightCell { row: 1, col: 0 })
            .unwrap();
        sink.apply(&Operation::Highlight {
            pool: PoolKind::Temp,
        })
        .unwrap();

        let out = String::from_utf8(sink.out).unwrap();
        assert_eq!(
            out,
            "▶ Block 1, swap 2: buy 3 units of liquidity (victim)\n  [*] Temporary State (resets every block) used for swap delta\n"
        );
    }

    #[test]
    fn test_json_lines_sink() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.apply(&Operation::UnhighlightCell { row: 0, col: 1 })
            .unwrap();
        let out = String::from_utf8(sink.out).unwrap();
        assert_eq!(out, "{\"op\":\"unhighlight_cell\",\"row\":0,\"col\":1}\n");
    }

    #[test]
    fn test_demo_scenario_loads() {
        let json = include_str!("../../../demos/two_blocks.json");
        let scenario = Scenario::from_json(json).unwrap();
        let table = project(&scenario.blocks).unwrap();
        assert_eq!((table.rows(), table.columns()), (2, 2));
        assert_eq!(table.cell(1, 1), None);
    }

    #[test]
    fn test_outro_shows_last_transition() {
        let scenario = Scenario::sandwich_attack().unwrap();
        let table = project(&scenario.blocks).unwrap();
        let mut sink = ConsoleSink::new(Vec::new(), table);

        let fresh = PresentationState::new(LiquidityDistribution::new(vec![1, 0]));
        sink.outro(&fresh).unwrap();

        let out = String::from_utf8(sink.out).unwrap();
        assert_eq!(
            out,
            "Base State                             1G 0B\nTemporary State (resets every block)   1G 0B\n"
        );
    }

    #[test]
    fn test_outro_after_playback_shows_previous() {
        let scenario = Scenario::sandwich_attack().unwrap();
        let table = project(&scenario.blocks).unwrap();
        let mut sink = ConsoleSink::new(Vec::new(), table);

        let swap = SwapEvent::new(
            "buy",
            LiquidityDistribution::new(vec![0, 1]),
            LiquidityDistribution::new(vec![0, 0]),
        );
        let state = PresentationState::new(LiquidityDistribution::new(vec![1, 1]))
            .after(EventRole::FirstInBlock, &swap);
        sink.outro(&state).unwrap();

        let out = String::from_utf8(sink.out).unwrap();
        assert!(out.starts_with("Base State"));
        assert!(out.contains("0B 1R (was 1G 1G)"));
        assert!(out.contains("0B 0B (was 1G 1G)"));
    }
}
