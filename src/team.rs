use serde::Serialize;

use crate::allocation::Allocation;
use crate::catalog::Car;

/// A competing team: a sponsor, a budget, and the cars it currently owns.
///
/// Teams are created once at roster-generation time and never destroyed;
/// eliminated teams stay in the roster with `active = false`. All mutation
/// goes through the engine-facing methods below. The team itself holds no
/// allocation or match logic.
#[derive(Clone, Debug, Serialize)]
pub struct Team {
    /// Sponsoring car maker; fixed for the team's lifetime.
    pub sponsor: String,

    /// Money left to spend on cars.
    pub budget: f64,

    /// Budget the team started the tournament with.
    pub initial_budget: f64,

    /// Cars currently owned. Replaced wholesale on each allocation,
    /// never partially merged.
    pub inventory: Vec<Car>,

    /// False once the team loses a match.
    pub active: bool,

    pub wins: u32,
    pub losses: u32,

    /// Aggregate score from each match played, in order.
    pub scores: Vec<f64>,
}

impl Team {
    pub fn new(sponsor: impl Into<String>, budget: f64) -> Self {
        Team {
            sponsor: sponsor.into(),
            budget,
            initial_budget: budget,
            inventory: Vec::new(),
            active: true,
            wins: 0,
            losses: 0,
            scores: Vec::new(),
        }
    }

    /// Replace the inventory with a fresh allocation and debit its cost.
    pub fn apply_allocation(&mut self, allocation: Allocation) {
        self.budget -= allocation.spent;
        self.inventory = allocation.cars;
    }

    /// Record a match outcome. A loss eliminates the team.
    pub fn record_match_result(&mut self, won: bool, score: f64) {
        self.scores.push(score);
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
            self.active = false;
        }
    }

    /// Add prize money to the budget ahead of re-allocation.
    pub fn credit_prize(&mut self, amount: f64) {
        self.budget += amount;
    }

    /// Sum of the inventory's MPG ratings.
    pub fn inventory_score(&self) -> f64 {
        self.inventory.iter().map(|c| c.mpg).sum()
    }
}
