use rand::Rng;

use crate::error::{Result, TourneyError};
use crate::team::Team;

/// Which side of a pairing won.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

/// Outcome of a resolved match.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    pub winner: Side,
    pub team1_score: f64,
    pub team2_score: f64,
}

/// Decide a head-to-head match from the two teams' inventories.
///
/// A team with no cars automatically loses to an opponent that has any;
/// both sides empty is ambiguous and fatal. Otherwise the higher summed
/// MPG wins, and an exact tie is settled by a fair coin flip on the
/// injected RNG so runs stay reproducible under a fixed seed.
pub fn resolve_match<R: Rng>(team1: &Team, team2: &Team, rng: &mut R) -> Result<MatchOutcome> {
    let score1 = team1.inventory_score();
    let score2 = team2.inventory_score();

    if team1.inventory.is_empty() || team2.inventory.is_empty() {
        if team1.inventory.is_empty() && team2.inventory.is_empty() {
            return Err(TourneyError::EmptyBracketPairing {
                team1: team1.sponsor.clone(),
                team2: team2.sponsor.clone(),
            });
        }
        let winner = if team1.inventory.is_empty() {
            Side::Second
        } else {
            Side::First
        };
        return Ok(MatchOutcome {
            winner,
            team1_score: score1,
            team2_score: score2,
        });
    }

    let winner = if score1 > score2 {
        Side::First
    } else if score2 > score1 {
        Side::Second
    } else if rng.gen::<f64>() < 0.5 {
        Side::First
    } else {
        Side::Second
    };

    Ok(MatchOutcome {
        winner,
        team1_score: score1,
        team2_score: score2,
    })
}
