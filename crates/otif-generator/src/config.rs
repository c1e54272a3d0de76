//! Sampling parameters of the fulfillment model.
//!
//! Every probability, band and pool size used by the row generator lives
//! here so each field's causal rule can be read (and tested) in isolation.

use chrono::NaiveDate;

use crate::record::{Category, Region, ShippingMethod};

/// Seed used for every generation run.
pub const DEFAULT_SEED: u64 = 42;

/// Per-shipping-method parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingProfile {
    pub method: ShippingMethod,
    /// Relative selection weight.
    pub weight: f64,
    /// Days between order and promised delivery.
    pub sla_days: u32,
    /// Probability that an extra delay is added to the base lead time.
    pub late_probability: f64,
}

/// Unit price band of a product category (inclusive).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBand {
    pub category: Category,
    pub min: f64,
    pub max: f64,
}

/// Mean and standard deviation of a rounded Gaussian draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianParams {
    pub mean: f64,
    pub stddev: f64,
}

/// Full configuration of the order simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub seed: u64,
    /// First possible order date.
    pub epoch: NaiveDate,
    /// Order dates fall in `epoch ..= epoch + order_window_days`.
    pub order_window_days: u32,

    pub shipping: Vec<ShippingProfile>,
    /// Upper bound of the uniform extra delay applied to late orders.
    pub max_extra_delay_days: u32,

    pub customer_pool: u32,
    pub product_pool: u32,
    pub regions: Vec<Region>,
    pub categories: Vec<PriceBand>,
    pub warehouses: Vec<&'static str>,

    pub units_ordered: GaussianParams,
    pub max_units_ordered: u32,
    pub shortfall_probability: f64,
    pub max_shortfall: u32,

    pub discount_probability: f64,
    pub min_discount: f64,
    pub max_discount: f64,

    pub ship_delay: GaussianParams,

    pub defect_probability: f64,
    pub defect_types: Vec<&'static str>,
    pub return_probability: f64,
}

impl SimulationConfig {
    /// Looks up the profile of a shipping method.
    ///
    /// Falls back to the first profile if the method is not configured, which
    /// cannot happen for methods drawn from `self.shipping`.
    pub fn shipping_profile(&self, method: ShippingMethod) -> &ShippingProfile {
        self.shipping
            .iter()
            .find(|p| p.method == method)
            .unwrap_or(&self.shipping[0])
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            epoch: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            order_window_days: 365,
            shipping: vec![
                ShippingProfile {
                    method: ShippingMethod::Standard,
                    weight: 0.7,
                    sla_days: 5,
                    late_probability: 0.18,
                },
                ShippingProfile {
                    method: ShippingMethod::Expedited,
                    weight: 0.3,
                    sla_days: 2,
                    late_probability: 0.08,
                },
            ],
            max_extra_delay_days: 5,
            customer_pool: 2500,
            product_pool: 800,
            regions: vec![Region::North, Region::South, Region::East, Region::West],
            categories: vec![
                PriceBand {
                    category: Category::Electronics,
                    min: 80.0,
                    max: 300.0,
                },
                PriceBand {
                    category: Category::Home,
                    min: 15.0,
                    max: 120.0,
                },
                PriceBand {
                    category: Category::Sports,
                    min: 20.0,
                    max: 180.0,
                },
                PriceBand {
                    category: Category::Toys,
                    min: 10.0,
                    max: 60.0,
                },
            ],
            warehouses: vec!["WH-A", "WH-B", "WH-C", "WH-D"],
            units_ordered: GaussianParams {
                mean: 3.0,
                stddev: 2.0,
            },
            max_units_ordered: 12,
            shortfall_probability: 0.05,
            max_shortfall: 2,
            discount_probability: 0.2,
            min_discount: 0.05,
            max_discount: 0.30,
            ship_delay: GaussianParams {
                mean: 1.0,
                stddev: 1.0,
            },
            defect_probability: 0.03,
            defect_types: vec!["Damaged", "Wrong Item", "Missing Parts", "Other"],
            return_probability: 0.02,
        }
    }
}
