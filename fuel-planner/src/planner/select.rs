//! Cheapest-stop selection.
//!
//! Catalog prices are never modified. The highway discount is applied by
//! [`HighwayDiscount::effective_price`] each time a price is compared, so a
//! station seen at several checkpoints, or in several runs, is discounted
//! exactly once per comparison.

use serde::Serialize;

use crate::domain::GasStop;

use super::config::HighwayDiscount;

impl HighwayDiscount {
    /// Price used for comparison and costing.
    pub fn effective_price(&self, stop: &GasStop) -> f64 {
        if stop.is_highway_accessible(&self.marker) {
            stop.price_per_gallon - self.amount
        } else {
            stop.price_per_gallon
        }
    }
}

/// A station chosen for a refuelling stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedStop {
    /// The station as stored in the catalog (undiscounted price).
    pub station: GasStop,

    /// Price per gallon after any highway discount.
    pub effective_price: f64,
}

impl SelectedStop {
    /// Discount applied to the posted price, zero for off-highway stations.
    pub fn discount(&self) -> f64 {
        self.station.price_per_gallon - self.effective_price
    }
}

/// Pick the candidate with the lowest effective price.
///
/// Ties go to the first candidate. Returns `None` for no candidates.
pub fn select_cheapest<'a>(
    candidates: impl IntoIterator<Item = &'a GasStop>,
    discount: &HighwayDiscount,
) -> Option<SelectedStop> {
    let mut best: Option<(f64, &GasStop)> = None;

    for stop in candidates {
        let price = discount.effective_price(stop);
        match best {
            Some((best_price, _)) if price >= best_price => {}
            _ => best = Some((price, stop)),
        }
    }

    best.map(|(effective_price, stop)| SelectedStop {
        station: stop.clone(),
        effective_price,
    })
}
