use thiserror::Error;

/// Tournament errors.
///
/// Every variant is fatal to the operation that raised it; the engine
/// never downgrades one of these to a logged warning.
#[derive(Debug, Error)]
pub enum TourneyError {
    #[error("team count must be a positive power of two, got {0}")]
    TeamCountNotPowerOfTwo(usize),

    #[error("fixed budget {budget} outside allowed range [{low}, {high}]")]
    BudgetOutOfRange { budget: f64, low: f64, high: f64 },

    #[error("budget range is empty or has a non-positive increment: low={low}, high={high}, increment={increment}")]
    InvalidBudgetRange {
        low: f64,
        high: f64,
        increment: f64,
    },

    #[error("{sponsors} sponsors configured for only {team_count} teams")]
    TooManySponsors { sponsors: usize, team_count: usize },

    #[error("sponsor list is empty")]
    NoSponsors,

    #[error("car catalog unavailable: {0}")]
    CatalogUnavailable(#[source] std::io::Error),

    #[error("tournament has no teams")]
    EmptyRoster,

    #[error("no active teams to compete")]
    NoActiveTeams,

    #[error("both {team1} and {team2} entered the match with empty inventories")]
    EmptyBracketPairing { team1: String, team2: String },

    #[error("allocation budget must be non-negative, got {0}")]
    NegativeBudget(f64),
}

pub type Result<T> = std::result::Result<T, TourneyError>;
