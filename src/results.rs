use serde::Serialize;

use crate::team::Team;

/// One row of the final standings, consumed read-only by outer reporters.
#[derive(Clone, Debug, Serialize)]
pub struct StandingsRow {
    pub sponsor: String,
    pub wins: u32,
    pub losses: u32,
    pub active: bool,
    pub budget: f64,
    pub inventory_size: usize,
}

/// Project a roster into standings rows, best record first.
///
/// The sort is stable, so teams with equal wins keep roster order.
pub fn standings(roster: &[Team]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = roster
        .iter()
        .map(|team| StandingsRow {
            sponsor: team.sponsor.clone(),
            wins: team.wins,
            losses: team.losses,
            active: team.active,
            budget: team.budget,
            inventory_size: team.inventory.len(),
        })
        .collect();
    rows.sort_by(|a, b| b.wins.cmp(&a.wins));
    rows
}

/// Serialize standings to JSON for external reporting.
pub fn standings_json(rows: &[StandingsRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(sponsor: &str, wins: u32, losses: u32, active: bool) -> Team {
        let mut t = Team::new(sponsor, 20000.0);
        t.wins = wins;
        t.losses = losses;
        t.active = active;
        t
    }

    #[test]
    fn test_standings_sorted_by_wins() {
        let roster = vec![
            team("Ford", 0, 1, false),
            team("Toyota", 2, 0, true),
            team("Honda", 1, 1, false),
        ];
        let rows = standings(&roster);
        let order: Vec<&str> = rows.iter().map(|r| r.sponsor.as_str()).collect();
        assert_eq!(order, vec!["Toyota", "Honda", "Ford"]);
        assert!(rows[0].active);
    }

    #[test]
    fn test_standings_json_round() {
        let roster = vec![team("Toyota", 2, 0, true)];
        let json = standings_json(&standings(&roster)).unwrap();
        assert!(json.contains("\"sponsor\": \"Toyota\""));
        assert!(json.contains("\"wins\": 2"));
    }
}
