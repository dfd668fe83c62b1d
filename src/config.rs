use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BUDGET_HIGH, DEFAULT_BUDGET_INCREMENT, DEFAULT_BUDGET_LOW, PRIZE_MONEY};
use crate::error::{Result, TourneyError};
use crate::team::Team;

/// Tournament configuration record.
///
/// Outer layers may deserialize this from TOML/JSON; the core only
/// validates and consumes it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Informational only.
    pub tournament_name: String,

    /// Opaque handle for the catalog loader, typically a CSV path.
    pub catalog_source: String,

    /// Roster size; must be a positive power of two.
    pub team_count: usize,

    /// Allowed team budgets form the discrete range
    /// `budget_low, budget_low + budget_increment, ..., budget_high`.
    pub budget_low: f64,
    pub budget_high: f64,
    pub budget_increment: f64,

    /// Credited to a match winner before re-allocation.
    pub prize_money: f64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            tournament_name: "rally".to_string(),
            catalog_source: "cardata_modified.csv".to_string(),
            team_count: 8,
            budget_low: DEFAULT_BUDGET_LOW,
            budget_high: DEFAULT_BUDGET_HIGH,
            budget_increment: DEFAULT_BUDGET_INCREMENT,
            prize_money: PRIZE_MONEY,
        }
    }
}

impl TournamentConfig {
    /// Check the configuration invariants. Violations are fatal at setup.
    pub fn validate(&self) -> Result<()> {
        if self.team_count == 0 || !self.team_count.is_power_of_two() {
            return Err(TourneyError::TeamCountNotPowerOfTwo(self.team_count));
        }
        if self.budget_low > self.budget_high || self.budget_increment <= 0.0 {
            return Err(TourneyError::InvalidBudgetRange {
                low: self.budget_low,
                high: self.budget_high,
                increment: self.budget_increment,
            });
        }
        Ok(())
    }

    /// The allowed budget values, lowest first.
    ///
    /// Levels are generated by index rather than by repeated addition, so
    /// representation error cannot drop `budget_high` from the set.
    pub fn budget_levels(&self) -> Vec<f64> {
        let steps =
            ((self.budget_high - self.budget_low) / self.budget_increment + 1e-9) as usize;
        (0..=steps)
            .map(|i| self.budget_low + i as f64 * self.budget_increment)
            .collect()
    }

    /// Draw one budget uniformly from the discrete range.
    pub fn sample_budget<R: Rng>(&self, rng: &mut R) -> f64 {
        let levels = self.budget_levels();
        levels[rng.gen_range(0..levels.len())]
    }

    /// Build a roster with budgets sampled from the discrete range.
    ///
    /// Sponsors are assigned round-robin when the list is shorter than
    /// the roster, so every configured sponsor fields at least one team.
    pub fn build_roster<R: Rng>(&self, sponsors: &[String], rng: &mut R) -> Result<Vec<Team>> {
        self.check_sponsors(sponsors)?;
        Ok((0..self.team_count)
            .map(|i| Team::new(sponsors[i % sponsors.len()].clone(), self.sample_budget(rng)))
            .collect())
    }

    /// Build a roster where every team starts with the same budget.
    /// The fixed budget must fall within `[budget_low, budget_high]`.
    pub fn build_roster_fixed(&self, sponsors: &[String], budget: f64) -> Result<Vec<Team>> {
        self.check_sponsors(sponsors)?;
        if budget < self.budget_low || budget > self.budget_high {
            return Err(TourneyError::BudgetOutOfRange {
                budget,
                low: self.budget_low,
                high: self.budget_high,
            });
        }
        Ok((0..self.team_count)
            .map(|i| Team::new(sponsors[i % sponsors.len()].clone(), budget))
            .collect())
    }

    fn check_sponsors(&self, sponsors: &[String]) -> Result<()> {
        self.validate()?;
        if sponsors.is_empty() {
            return Err(TourneyError::NoSponsors);
        }
        if sponsors.len() > self.team_count {
            return Err(TourneyError::TooManySponsors {
                sponsors: sponsors.len(),
                team_count: self.team_count,
            });
        }
        Ok(())
    }
}
