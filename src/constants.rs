/// Prize money credited to a match winner before re-allocation
pub const PRIZE_MONEY: f64 = 50_000.0;

/// Default lower bound of the discrete team budget range
pub const DEFAULT_BUDGET_LOW: f64 = 10_000.0;

/// Default upper bound of the discrete team budget range
pub const DEFAULT_BUDGET_HIGH: f64 = 50_000.0;

/// Default step between allowed budget values
pub const DEFAULT_BUDGET_INCREMENT: f64 = 5_000.0;
