//! Rally Core - budget-constrained tournament simulation library.
//!
//! Teams backed by a car-maker sponsor buy an inventory of cars under a
//! budget, then meet in a single-elimination bracket decided by aggregate
//! fuel efficiency. Purchasing is a pluggable strategy: a greedy
//! MPG-descending heuristic or an exact 0/1-knapsack solver, selectable
//! per engine so their tournament outcomes can be compared side by side.

pub mod allocation;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod matchup;
pub mod results;
pub mod team;
pub mod tournament;

pub use allocation::{Allocation, AllocationPolicy, ExactKnapsack, Greedy};
pub use catalog::{Car, CarCatalog};
pub use config::TournamentConfig;
pub use constants::PRIZE_MONEY;
pub use error::{Result, TourneyError};
pub use matchup::{resolve_match, MatchOutcome, Side};
pub use results::{standings, standings_json, StandingsRow};
pub use team::Team;
pub use tournament::TournamentEngine;
