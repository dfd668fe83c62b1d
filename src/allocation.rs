use crate::catalog::{Car, CarCatalog};
use crate::error::{Result, TourneyError};

/// Result of an allocation call: the cars bought and what they cost.
#[derive(Clone, Debug, Default)]
pub struct Allocation {
    pub cars: Vec<Car>,
    pub spent: f64,
}

impl Allocation {
    /// Total efficiency of the selected cars.
    pub fn total_mpg(&self) -> f64 {
        self.cars.iter().map(|c| c.mpg).sum()
    }
}

/// Strategy for selecting a budget-respecting subset of a sponsor's cars.
///
/// Postconditions for every implementation: `spent` equals the sum of the
/// selected prices, `spent <= budget`, and the selection is drawn from
/// `catalog.cars_for(sponsor)`. A negative budget is fatal; a sponsor with
/// no cars yields an empty allocation.
pub trait AllocationPolicy {
    fn allocate(&self, sponsor: &str, budget: f64, catalog: &CarCatalog) -> Result<Allocation>;

    /// Short name for logging and reports.
    fn name(&self) -> &'static str;
}

/// Greedy MPG-descending heuristic.
///
/// Sorts candidates by MPG descending (stable, so catalog order is kept
/// among equal ratings) and admits a car iff its price fits the budget
/// *remaining* after earlier purchases. Cars skipped because an earlier,
/// more efficient car consumed the budget are never reconsidered, so the
/// result can leave budget on the table. O(n log n).
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl AllocationPolicy for Greedy {
    fn allocate(&self, sponsor: &str, budget: f64, catalog: &CarCatalog) -> Result<Allocation> {
        if budget < 0.0 {
            return Err(TourneyError::NegativeBudget(budget));
        }

        let mut candidates = catalog.cars_for(sponsor);
        candidates.sort_by(|a, b| b.mpg.total_cmp(&a.mpg));

        let mut cars = Vec::new();
        let mut spent = 0.0;
        for car in candidates {
            if spent + car.price <= budget {
                spent += car.price;
                cars.push(car.clone());
            }
        }

        Ok(Allocation { cars, spent })
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Exact 0/1 knapsack solver maximizing total MPG.
///
/// Works on an integer capacity: the budget is rounded down and each price
/// rounded up, so a selection can never overspend a fractional budget.
/// Builds the full `dp[i][w]` table (`i` = first i candidates, `w` =
/// capacity) with the recurrence
/// `dp[i][w] = max(dp[i-1][w], dp[i-1][w - price_i] + mpg_i)`
/// and recovers the selection by walking `i = n..1`, taking item i
/// wherever `dp[i][w] != dp[i-1][w]`. Optimal for integer capacities at
/// O(n × budget) time and space, which gets expensive for large budgets.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactKnapsack;

impl AllocationPolicy for ExactKnapsack {
    fn allocate(&self, sponsor: &str, budget: f64, catalog: &CarCatalog) -> Result<Allocation> {
        if budget < 0.0 {
            return Err(TourneyError::NegativeBudget(budget));
        }

        let candidates = catalog.cars_for(sponsor);
        let capacity = budget.floor() as usize;
        let n = candidates.len();
        if n == 0 {
            return Ok(Allocation::default());
        }

        let weights: Vec<usize> = candidates.iter().map(|c| c.price.ceil() as usize).collect();

        let mut dp = vec![vec![0.0f64; capacity + 1]; n + 1];
        for i in 1..=n {
            let weight = weights[i - 1];
            let value = candidates[i - 1].mpg;
            for w in 0..=capacity {
                dp[i][w] = if weight <= w {
                    let take = dp[i - 1][w - weight] + value;
                    if take > dp[i - 1][w] {
                        take
                    } else {
                        dp[i - 1][w]
                    }
                } else {
                    dp[i - 1][w]
                };
            }
        }

        // Walk the table back to recover which cars were taken.
        let mut cars = Vec::new();
        let mut w = capacity;
        for i in (1..=n).rev() {
            if dp[i][w] != dp[i - 1][w] {
                cars.push(candidates[i - 1].clone());
                w -= weights[i - 1];
            }
        }
        cars.reverse();

        let spent = cars.iter().map(|c| c.price).sum();
        Ok(Allocation { cars, spent })
    }

    fn name(&self) -> &'static str {
        "knapsack"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn car(make: &str, model: &str, mpg: f64, price: f64) -> Car {
        Car {
            make: make.to_string(),
            model: model.to_string(),
            mpg,
            price,
        }
    }

    fn make_catalog() -> CarCatalog {
        CarCatalog::from_cars(vec![
            car("Toyota", "Prius", 54.0, 28000.0),
            car("Toyota", "Corolla", 38.0, 21000.0),
            car("Toyota", "Camry", 39.0, 25000.0),
            car("Honda", "Civic", 42.0, 23000.0),
        ])
    }

    #[test]
    fn test_greedy_uses_remaining_budget() {
        let catalog = make_catalog();
        let alloc = Greedy.allocate("Toyota", 50000.0, &catalog).unwrap();

        // Prius (54 MPG) first; Camry (39) no longer fits the remaining
        // 22000, Corolla (38) does.
        let models: Vec<&str> = alloc.cars.iter().map(|c| c.model.as_str()).collect();
        assert_eq!(models, vec!["Prius", "Corolla"]);
        assert_eq!(alloc.spent, 49000.0);
    }

    #[test]
    fn test_greedy_stable_tie_break() {
        let catalog = CarCatalog::from_cars(vec![
            car("Ford", "Focus", 34.0, 1000.0),
            car("Ford", "Fiesta", 34.0, 1000.0),
            car("Ford", "Fusion", 34.0, 1000.0),
        ]);
        let alloc = Greedy.allocate("Ford", 2500.0, &catalog).unwrap();

        // Equal MPG keeps catalog order; only the first two fit.
        let models: Vec<&str> = alloc.cars.iter().map(|c| c.model.as_str()).collect();
        assert_eq!(models, vec!["Focus", "Fiesta"]);
    }

    #[test]
    fn test_knapsack_beats_greedy_on_gap_fixture() {
        // Greedy grabs the 10-MPG car for 6 and can no longer afford
        // either 5-priced car; the optimal pair is 6 + 6 = 12 MPG.
        let catalog = CarCatalog::from_cars(vec![
            car("Tesla", "A", 10.0, 6.0),
            car("Tesla", "B", 6.0, 5.0),
            car("Tesla", "C", 6.0, 5.0),
        ]);

        let greedy = Greedy.allocate("Tesla", 10.0, &catalog).unwrap();
        assert_eq!(greedy.total_mpg(), 10.0);
        assert_eq!(greedy.spent, 6.0);

        let exact = ExactKnapsack.allocate("Tesla", 10.0, &catalog).unwrap();
        assert_eq!(exact.total_mpg(), 12.0);
        assert_eq!(exact.spent, 10.0);
    }

    #[test]
    fn test_negative_budget_is_fatal() {
        let catalog = make_catalog();
        for policy in [&Greedy as &dyn AllocationPolicy, &ExactKnapsack] {
            let err = policy.allocate("Toyota", -1.0, &catalog).unwrap_err();
            assert!(matches!(err, TourneyError::NegativeBudget(_)));
        }
    }

    #[test]
    fn test_unknown_sponsor_gets_empty_allocation() {
        let catalog = make_catalog();
        for policy in [&Greedy as &dyn AllocationPolicy, &ExactKnapsack] {
            let alloc = policy.allocate("Bugatti", 100000.0, &catalog).unwrap();
            assert!(alloc.cars.is_empty());
            assert_eq!(alloc.spent, 0.0);
        }
    }

    #[test]
    fn test_free_cars_selectable_below_unit_budget() {
        // A zero-priced car has zero weight and must be taken even when
        // the budget rounds down to a capacity of 0.
        let catalog = CarCatalog::from_cars(vec![car("Tesla", "Demo", 50.0, 0.0)]);

        let greedy = Greedy.allocate("Tesla", 0.5, &catalog).unwrap();
        let exact = ExactKnapsack.allocate("Tesla", 0.5, &catalog).unwrap();
        assert_eq!(greedy.total_mpg(), 50.0);
        assert_eq!(exact.total_mpg(), 50.0);
        assert_eq!(exact.spent, 0.0);
    }

    #[test]
    fn test_knapsack_fractional_budget_never_overspends() {
        let catalog = CarCatalog::from_cars(vec![
            car("Kia", "Rio", 36.0, 5.4),
            car("Kia", "Soul", 31.0, 5.4),
        ]);
        // Truncating both budget and prices would admit both cars for a
        // real spend of 10.8 against a budget of 10.5.
        let alloc = ExactKnapsack.allocate("Kia", 10.5, &catalog).unwrap();
        assert!(alloc.spent <= 10.5);
        assert_eq!(alloc.cars.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_budget_invariant(
            specs in prop::collection::vec((0.0f64..100.0, 0.0f64..1000.0), 0..8),
            budget in 0.0f64..2000.0,
        ) {
            let cars: Vec<Car> = specs
                .iter()
                .enumerate()
                .map(|(i, &(mpg, price))| car("Mazda", &format!("M{i}"), mpg, price))
                .collect();
            let catalog = CarCatalog::from_cars(cars);

            for policy in [&Greedy as &dyn AllocationPolicy, &ExactKnapsack] {
                let alloc = policy.allocate("Mazda", budget, &catalog).unwrap();
                let price_sum: f64 = alloc.cars.iter().map(|c| c.price).sum();
                prop_assert!(alloc.spent <= budget);
                prop_assert_eq!(alloc.spent, price_sum);
                for chosen in &alloc.cars {
                    prop_assert!(catalog.cars().contains(chosen));
                }
            }
        }

        #[test]
        fn prop_knapsack_at_least_as_good_as_greedy(
            specs in prop::collection::vec((0.0f64..100.0, 1.0f64..50.0), 1..8),
            budget in 0.0f64..120.0,
        ) {
            let cars: Vec<Car> = specs
                .iter()
                .enumerate()
                .map(|(i, &(mpg, price))| car("Mazda", &format!("M{i}"), mpg, price.floor()))
                .collect();
            let catalog = CarCatalog::from_cars(cars);
            let budget = budget.floor();

            let greedy = Greedy.allocate("Mazda", budget, &catalog).unwrap();
            let exact = ExactKnapsack.allocate("Mazda", budget, &catalog).unwrap();
            prop_assert!(exact.total_mpg() >= greedy.total_mpg() - 1e-9);
        }
    }
}
