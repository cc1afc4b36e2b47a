//! End-of-session statistics output.

use anyhow::Result;
use guessing_core::{LedgerSummary, ScoreRecord};
use std::fmt;

/// Plain-text view of a session summary.
pub struct TextReport<'a> {
    pub title: &'a str,
    pub summary: &'a LedgerSummary,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(f, "\n{}", self.title)?;
        writeln!(f, "Rounds played: {}", summary.rounds)?;
        writeln!(f, "Average score: {:.2}", summary.average)?;
        writeln!(f, "High scores:")?;
        write_records(f, &summary.top)?;

        if summary.players.len() > 1 {
            writeln!(f, "High scores by player:")?;
            for player in &summary.players {
                writeln!(
                    f,
                    "{} ({} rounds, average {:.2}):",
                    player.player_id, player.rounds, player.average
                )?;
                write_records(f, &player.top)?;
            }
        }
        Ok(())
    }
}

fn write_records(f: &mut fmt::Formatter<'_>, records: &[ScoreRecord]) -> fmt::Result {
    if records.is_empty() {
        writeln!(f, "  (none)")?;
    }
    for record in records {
        writeln!(f, "  {record}")?;
    }
    Ok(())
}

/// Render the summary as plain text.
pub fn render_text(title: &str, summary: &LedgerSummary) -> String {
    TextReport { title, summary }.to_string()
}

/// Print the summary as text or as pretty JSON.
pub fn print(title: &str, summary: &LedgerSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", render_text(title, summary));
    }
    Ok(())
}
