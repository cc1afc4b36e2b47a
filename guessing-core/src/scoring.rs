//! Score tracking across the rounds of a session.

use crate::ScoreRecord;
use serde::Serialize;

/// Append-only record of every round played in a session.
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    records: Vec<ScoreRecord>,
}

/// Statistics for one player within a ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player_id: String,
    pub rounds: usize,
    pub average: f64,
    pub top: Vec<ScoreRecord>,
}

/// Report produced at the end of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub rounds: usize,
    pub average: f64,
    pub top: Vec<ScoreRecord>,
    pub players: Vec<PlayerSummary>,
}

impl ScoreLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished round.
    pub fn add(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records.iter()
    }

    /// Mean score over every record, or 0.0 when the ledger is empty.
    pub fn average(&self) -> f64 {
        mean(self.records.iter())
    }

    /// Mean score over one player's records, or 0.0 when they have none.
    pub fn average_for(&self, player_id: &str) -> f64 {
        mean(self.for_player(player_id).into_iter())
    }

    /// The `n` highest-scoring records, best first. Equal scores keep the
    /// order they were added in.
    pub fn top(&self, n: usize) -> Vec<&ScoreRecord> {
        highest(self.records.iter(), n)
    }

    /// The `n` highest-scoring records for one player, best first.
    pub fn top_for(&self, player_id: &str, n: usize) -> Vec<&ScoreRecord> {
        highest(self.for_player(player_id).into_iter(), n)
    }

    /// Distinct player ids in order of first appearance.
    pub fn player_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for record in &self.records {
            if !ids.contains(&record.player_id()) {
                ids.push(record.player_id());
            }
        }
        ids
    }

    /// Build the end-of-session report with `top_n` entries per list.
    pub fn summary(&self, top_n: usize) -> LedgerSummary {
        let players = self
            .player_ids()
            .into_iter()
            .map(|id| PlayerSummary {
                player_id: id.to_string(),
                rounds: self.for_player(id).len(),
                average: self.average_for(id),
                top: self.top_for(id, top_n).into_iter().cloned().collect(),
            })
            .collect();

        LedgerSummary {
            rounds: self.len(),
            average: self.average(),
            top: self.top(top_n).into_iter().cloned().collect(),
            players,
        }
    }

    fn for_player(&self, player_id: &str) -> Vec<&ScoreRecord> {
        self.records
            .iter()
            .filter(|record| record.player_id() == player_id)
            .collect()
    }
}

impl Extend<ScoreRecord> for ScoreLedger {
    fn extend<I: IntoIterator<Item = ScoreRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

fn mean<'a>(records: impl Iterator<Item = &'a ScoreRecord>) -> f64 {
    let (total, count) = records.fold((0i64, 0usize), |(total, count), record| {
        (total + i64::from(record.score()), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

fn highest<'a>(records: impl Iterator<Item = &'a ScoreRecord>, n: usize) -> Vec<&'a ScoreRecord> {
    let mut sorted: Vec<&ScoreRecord> = records.collect();
    // sort_by is stable, so ties stay in insertion order
    sorted.sort_by(|a, b| b.score().cmp(&a.score()));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(entries: &[(i32, &str)]) -> ScoreLedger {
        let mut ledger = ScoreLedger::new();
        ledger.extend(
            entries
                .iter()
                .map(|(score, id)| ScoreRecord::new(*score, *id)),
        );
        ledger
    }

    fn pairs<'a>(records: &[&'a ScoreRecord]) -> Vec<(i32, &'a str)> {
        records
            .iter()
            .map(|record| (record.score(), record.player_id()))
            .collect()
    }

    #[test]
    fn new_ledger_averages_zero() {
        let ledger = ScoreLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.average(), 0.0);
        assert!(ledger.top(3).is_empty());
    }

    #[test]
    fn average_of_all_scores() {
        let ledger = ledger(&[(10, "A"), (20, "B"), (30, "A")]);
        assert_eq!(ledger.average(), 20.0);
    }

    #[test]
    fn average_for_one_player() {
        let ledger = ledger(&[(5, "A"), (30, "B"), (10, "A")]);
        assert_eq!(ledger.average_for("A"), 7.5);
        assert_eq!(ledger.average_for("B"), 30.0);
        assert_eq!(ledger.average_for("nobody"), 0.0);
    }

    #[test]
    fn top_is_sorted_descending() {
        let ledger = ledger(&[(5, "A"), (30, "B"), (10, "A")]);
        assert_eq!(pairs(&ledger.top(2)), vec![(30, "B"), (10, "A")]);
    }

    #[test]
    fn top_keeps_insertion_order_for_ties() {
        let ledger = ledger(&[(10, "first"), (20, "B"), (10, "second"), (10, "third")]);
        assert_eq!(
            pairs(&ledger.top(4)),
            vec![(20, "B"), (10, "first"), (10, "second"), (10, "third")]
        );
    }

    #[test]
    fn top_never_exceeds_available_records() {
        let ledger = ledger(&[(1, "A"), (2, "B")]);
        assert_eq!(ledger.top(10).len(), 2);
        assert!(ledger.top(0).is_empty());
    }

    #[test]
    fn top_for_filters_by_player() {
        let ledger = ledger(&[(5, "A"), (30, "B"), (10, "A"), (7, "A")]);
        assert_eq!(pairs(&ledger.top_for("A", 2)), vec![(10, "A"), (7, "A")]);
        assert!(ledger.top_for("C", 2).is_empty());
    }

    #[test]
    fn top_for_outlives_the_player_id() {
        let ledger = ledger(&[(5, "A"), (30, "B"), (10, "A")]);
        let top = {
            let id = String::from("A");
            ledger.top_for(&id, 1)
        };
        assert_eq!(pairs(&top), vec![(10, "A")]);
    }

    #[test]
    fn player_ids_follow_first_appearance() {
        let ledger = ledger(&[(1, "Smart"), (2, "Dumb"), (3, "Smart")]);
        assert_eq!(ledger.player_ids(), vec!["Smart", "Dumb"]);
    }

    #[test]
    fn summary_collects_per_player_stats() {
        let ledger = ledger(&[(5, "A"), (30, "B"), (10, "A")]);
        let summary = ledger.summary(1);

        assert_eq!(summary.rounds, 3);
        assert_eq!(summary.average, 15.0);
        assert_eq!(summary.top, vec![ScoreRecord::new(30, "B")]);
        assert_eq!(summary.players.len(), 2);

        let a = &summary.players[0];
        assert_eq!(a.player_id, "A");
        assert_eq!(a.rounds, 2);
        assert_eq!(a.average, 7.5);
        assert_eq!(a.top, vec![ScoreRecord::new(10, "A")]);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = ledger(&[(40, "User")]).summary(5);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["rounds"], 1);
        assert_eq!(json["top"][0]["player_id"], "User");
        assert_eq!(json["top"][0]["score"], 40);
    }
}
