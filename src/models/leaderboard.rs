use serde::Deserialize;

/// One row of the city leaderboard, ranked by the server.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub city: String,
    #[serde(rename = "totalCarbonFootprint")]
    pub total_carbon_footprint: f64,
    #[serde(default)]
    pub date: Option<String>,
}

/// City-scoped ranking in the server's order. Rank is purely
/// positional; the client applies no re-sort and no tie-break.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &LeaderboardEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, total: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            city: "Austin".to_string(),
            total_carbon_footprint: total,
            date: None,
        }
    }

    #[test]
    fn test_ranks_are_positional() {
        let board = Leaderboard::new(vec![entry("a", 30.0), entry("b", 20.0), entry("c", 10.0)]);
        let ranks: Vec<(usize, String)> = board
            .ranked()
            .map(|(rank, e)| (rank, e.name.clone()))
            .collect();
        assert_eq!(
            ranks,
            vec![
                (1, "a".to_string()),
                (2, "b".to_string()),
                (3, "c".to_string())
            ]
        );
    }

    #[test]
    fn test_ties_keep_server_order() {
        let board = Leaderboard::new(vec![entry("x", 20.0), entry("y", 20.0)]);
        let names: Vec<&str> = board.ranked().map(|(_, e)| e.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_entry_deserialization() {
        let json = r#"{"name":"Dana","city":"Austin","totalCarbonFootprint":12.5,"date":"2024-01-02"}"#;
        let entry: LeaderboardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.total_carbon_footprint, 12.5);
        assert_eq!(entry.date.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn test_entry_without_date() {
        let json = r#"{"name":"Dana","city":"Austin","totalCarbonFootprint":12.5}"#;
        assert!(serde_json::from_str::<LeaderboardEntry>(json).is_ok());
    }
}
