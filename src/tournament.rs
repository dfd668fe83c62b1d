use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::allocation::AllocationPolicy;
use crate::catalog::CarCatalog;
use crate::config::TournamentConfig;
use crate::error::{Result, TourneyError};
use crate::matchup::{resolve_match, Side};
use crate::team::Team;

/// Single-elimination tournament over a power-of-two roster.
///
/// The engine owns the roster exclusively. Each round pairs the still-
/// active teams positionally, (0,1) then (2,3) and so on in roster order.
/// Every match marks the loser inactive, credits the winner its prize
/// money, and re-runs the allocation policy with the topped-up budget.
/// The policy is a type parameter so greedy and exact-knapsack
/// tournaments can be run side by side on the same roster.
#[derive(Clone, Debug)]
pub struct TournamentEngine<P: AllocationPolicy> {
    teams: Vec<Team>,
    catalog: CarCatalog,
    policy: P,
    prize_money: f64,
    champion: Option<usize>,
}

impl<P: AllocationPolicy> TournamentEngine<P> {
    /// Build an engine from an existing roster.
    ///
    /// The roster size must be a positive power of two; anything else is
    /// a configuration error, not a runtime condition to recover from.
    pub fn new(roster: Vec<Team>, catalog: CarCatalog, policy: P, prize_money: f64) -> Result<Self> {
        if roster.is_empty() || !roster.len().is_power_of_two() {
            return Err(TourneyError::TeamCountNotPowerOfTwo(roster.len()));
        }
        Ok(TournamentEngine {
            teams: roster,
            catalog,
            policy,
            prize_money,
            champion: None,
        })
    }

    /// Build an engine from a validated config, drawing team budgets from
    /// the config's discrete budget range.
    pub fn from_config<R: Rng>(
        config: &TournamentConfig,
        sponsors: &[String],
        catalog: CarCatalog,
        policy: P,
        rng: &mut R,
    ) -> Result<Self> {
        let roster = config.build_roster(sponsors, rng)?;
        Self::new(roster, catalog, policy, config.prize_money)
    }

    /// Have every team purchase its initial inventory via the active
    /// policy.
    pub fn buy_initial_inventories(&mut self) -> Result<()> {
        for team in &mut self.teams {
            let alloc = self
                .policy
                .allocate(&team.sponsor, team.budget, &self.catalog)?;
            trace!(
                "{} initial {}: {} cars for {:.0}",
                team.sponsor,
                self.policy.name(),
                alloc.cars.len(),
                alloc.spent
            );
            team.apply_allocation(alloc);
        }
        Ok(())
    }

    /// Drive the bracket to completion and return the champion.
    ///
    /// The injected RNG is used only for tie-breaks, so a fixed seed makes
    /// the whole run reproducible.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<&Team> {
        if self.teams.is_empty() {
            return Err(TourneyError::EmptyRoster);
        }

        let mut active: Vec<usize> = (0..self.teams.len())
            .filter(|&i| self.teams[i].active)
            .collect();
        if active.is_empty() {
            return Err(TourneyError::NoActiveTeams);
        }

        let mut round = 1;
        while active.len() > 1 {
            // A power-of-two roster can never produce an odd round; an odd
            // count here is a defect, not a state to carry a team through.
            assert!(
                active.len() % 2 == 0,
                "odd active team count {} entering round {}",
                active.len(),
                round
            );

            let mut next_round = Vec::with_capacity(active.len() / 2);
            for k in (0..active.len()).step_by(2) {
                let i = active[k];
                let j = active[k + 1];

                let outcome = resolve_match(&self.teams[i], &self.teams[j], rng)?;
                let (win, lose, win_score, lose_score) = match outcome.winner {
                    Side::First => (i, j, outcome.team1_score, outcome.team2_score),
                    Side::Second => (j, i, outcome.team2_score, outcome.team1_score),
                };

                self.teams[win].record_match_result(true, win_score);
                self.teams[lose].record_match_result(false, lose_score);
                debug!(
                    "round {}: {} beats {} ({:.1} vs {:.1})",
                    round, self.teams[win].sponsor, self.teams[lose].sponsor, win_score, lose_score
                );

                // Winner restocks with the prize money added in.
                self.teams[win].credit_prize(self.prize_money);
                let winner = &self.teams[win];
                let alloc = self
                    .policy
                    .allocate(&winner.sponsor, winner.budget, &self.catalog)?;
                self.teams[win].apply_allocation(alloc);

                next_round.push(win);
            }

            active = next_round;
            round += 1;
        }

        let idx = active[0];
        self.teams[idx].active = true;
        self.champion = Some(idx);
        debug!("champion: {}", self.teams[idx].sponsor);
        Ok(&self.teams[idx])
    }

    /// The full roster, eliminated teams included.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn champion(&self) -> Option<&Team> {
        self.champion.map(|i| &self.teams[i])
    }
}

impl<P: AllocationPolicy + Clone + Sync> TournamentEngine<P> {
    /// Run the bracket `n` times in parallel and return each run's
    /// champion sponsor.
    ///
    /// Every simulation clones the engine as configured (call this before
    /// `run`), buys initial inventories, and plays the bracket with its
    /// own RNG seeded from `seed`, so results are reproducible.
    pub fn run_simulations(&self, n: usize, seed: u64) -> Result<Vec<String>> {
        let mut master = ChaCha8Rng::seed_from_u64(seed);
        let seeds: Vec<u64> = (0..n).map(|_| master.gen()).collect();

        seeds
            .par_iter()
            .map(|&sim_seed| {
                let mut engine = self.clone();
                let mut rng = ChaCha8Rng::seed_from_u64(sim_seed);
                engine.buy_initial_inventories()?;
                let champion = engine.run(&mut rng)?;
                Ok(champion.sponsor.clone())
            })
            .collect()
    }
}
