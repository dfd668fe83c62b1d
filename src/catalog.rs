use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TourneyError};

/// A purchasable car.
///
/// Records are immutable once loaded from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub make: String,
    pub model: String,

    /// Highway fuel efficiency (MPG-H). Higher is better.
    pub mpg: f64,

    pub price: f64,
}

/// Read-only collection of cars available for purchase.
///
/// The catalog preserves source order; no other ordering is meaningful.
/// It is shared read-only across all teams and never mutated after load.
#[derive(Clone, Debug, Default)]
pub struct CarCatalog {
    cars: Vec<Car>,
}

impl CarCatalog {
    /// Build a catalog from in-memory records.
    pub fn from_cars(cars: Vec<Car>) -> Self {
        CarCatalog { cars }
    }

    /// Read a catalog from a CSV file.
    /// Format: Make,Model,MPG-H,Price with a header row.
    ///
    /// Rows with unparsable numeric fields are skipped; a missing or
    /// unreadable file is fatal and not retried.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(TourneyError::CatalogUnavailable)?;
        let reader = BufReader::new(file);

        let mut cars = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(TourneyError::CatalogUnavailable)?;
            let line = line.trim();
            if line_no == 0 || line.is_empty() {
                // Header row
                continue;
            }

            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() != 4 {
                continue;
            }

            let (mpg, price) = match (
                parts[2].trim().parse::<f64>(),
                parts[3].trim().parse::<f64>(),
            ) {
                (Ok(mpg), Ok(price)) if mpg >= 0.0 && price >= 0.0 => (mpg, price),
                _ => continue,
            };

            cars.push(Car {
                make: parts[0].trim().to_string(),
                model: parts[1].trim().to_string(),
                mpg,
                price,
            });
        }

        Ok(CarCatalog { cars })
    }

    /// All cars whose make equals `sponsor`, in catalog order.
    pub fn cars_for(&self, sponsor: &str) -> Vec<&Car> {
        self.cars.iter().filter(|c| c.make == sponsor).collect()
    }

    /// All cars in the catalog, in source order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}
