//! Order row generator and dataset assembler.

use crate::config::SimulationConfig;
use crate::generators::{
    add_days, bernoulli, choose, choose_weighted, clamp, days_between, random_date, round2,
    rounded_gaussian, uniform_int, uniform_price,
};
use crate::record::OrderRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic order simulator.
///
/// Owns its RNG. Every [`assemble`](Self::assemble) call reseeds it from
/// `config.seed`, so datasets of different sizes share a common prefix.
pub struct OrderGenerator {
    config: SimulationConfig,
    rng: StdRng,
    /// Number of rows generated since the last reseed.
    index: u64,
}

impl OrderGenerator {
    /// Create a generator seeded from `config.seed`.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            rng,
            index: 0,
        }
    }

    /// Reset the RNG to the configured seed and restart numbering at 1.
    pub fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.config.seed);
        self.index = 0;
    }

    /// Get the number of rows generated since the last reseed.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Reseed, then generate `count` records in order.
    pub fn assemble(&mut self, count: usize) -> Vec<OrderRecord> {
        self.reseed();
        self.records(count).collect()
    }

    /// Lazily generate the next `count` records without reseeding.
    pub fn records(&mut self, count: usize) -> OrderRecordIterator<'_> {
        OrderRecordIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate the next record.
    ///
    /// Draws happen in a fixed order; reordering any step changes every
    /// subsequent record for the same seed.
    pub fn next_record(&mut self) -> OrderRecord {
        let cfg = &self.config;
        let rng = &mut self.rng;
        self.index += 1;
        let index = self.index;

        let order_date = random_date(rng, cfg.epoch, cfg.order_window_days);
        let shipping = choose_weighted(rng, &cfg.shipping, |p| p.weight);
        let sla_days = shipping.sla_days;

        let customer_number = uniform_int(rng, 1, cfg.customer_pool);
        let region = *choose(rng, &cfg.regions);

        let band = choose(rng, &cfg.categories);
        let unit_price = uniform_price(rng, band.min, band.max);
        let product_number = uniform_int(rng, 1, cfg.product_pool);
        let warehouse_id = *choose(rng, &cfg.warehouses);

        let units_ordered = rounded_gaussian(
            rng,
            cfg.units_ordered.mean,
            cfg.units_ordered.stddev,
            1,
            i64::from(cfg.max_units_ordered),
        ) as u32;
        let units_shipped = if bernoulli(rng, cfg.shortfall_probability) {
            let shortfall = uniform_int(rng, 1, cfg.max_shortfall.min(units_ordered));
            clamp(units_ordered.saturating_sub(shortfall), 1, units_ordered)
        } else {
            units_ordered
        };

        let discount_rate = if bernoulli(rng, cfg.discount_probability) {
            uniform_price(rng, cfg.min_discount, cfg.max_discount)
        } else {
            0.0
        };

        let promised_date = add_days(order_date, sla_days);

        let mut lead_time_days = uniform_int(rng, 1, sla_days + 1);
        if bernoulli(rng, shipping.late_probability) {
            lead_time_days += uniform_int(rng, 1, cfg.max_extra_delay_days);
        }
        let deliver_date = add_days(order_date, lead_time_days);

        let ship_delay = rounded_gaussian(
            rng,
            cfg.ship_delay.mean,
            cfg.ship_delay.stddev,
            0,
            i64::from(lead_time_days),
        ) as u32;
        let ship_date = add_days(order_date, ship_delay);

        let late_days = days_between(promised_date, deliver_date).max(0) as u32;
        let in_full_flag = units_shipped == units_ordered;
        let on_time_flag = deliver_date <= promised_date;
        let otif_flag = on_time_flag && in_full_flag;

        let defect_flag = bernoulli(rng, cfg.defect_probability);
        let defect_type = if defect_flag {
            *choose(rng, &cfg.defect_types)
        } else {
            ""
        };
        let return_flag = bernoulli(rng, cfg.return_probability);

        let revenue = round2(f64::from(units_shipped) * unit_price * (1.0 - discount_rate));

        OrderRecord {
            index,
            order_date,
            promised_date,
            ship_date,
            deliver_date,
            customer_number,
            region,
            product_number,
            category: band.category,
            units_ordered,
            units_shipped,
            unit_price,
            discount_rate,
            shipping_method: shipping.method,
            warehouse_id,
            defect_flag,
            defect_type,
            return_flag,
            lead_time_days,
            late_days,
            in_full_flag,
            on_time_flag,
            otif_flag,
            revenue,
        }
    }
}

/// Generate one dataset of `count` records from a fresh generator.
pub fn generate_dataset(config: SimulationConfig, count: usize) -> Vec<OrderRecord> {
    OrderGenerator::new(config).assemble(count)
}

/// Iterator that lazily generates order records.
pub struct OrderRecordIterator<'a> {
    generator: &'a mut OrderGenerator,
    remaining: usize,
}

impl Iterator for OrderRecordIterator<'_> {
    type Item = OrderRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for OrderRecordIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ShippingMethod;

    fn dataset(count: usize) -> Vec<OrderRecord> {
        generate_dataset(SimulationConfig::default(), count)
    }

    fn share(rows: &[OrderRecord], pred: impl Fn(&OrderRecord) -> bool) -> f64 {
        rows.iter().filter(|r| pred(r)).count() as f64 / rows.len() as f64
    }

    #[test]
    fn test_assemble_length_and_sequential_ids() {
        let rows = dataset(500);

        assert_eq!(rows.len(), 500);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.index, i as u64 + 1);
            assert_eq!(row.order_id(), format!("O{:07}", i + 1));
        }
    }

    #[test]
    fn test_assemble_zero_rows() {
        assert!(dataset(0).is_empty());
    }

    #[test]
    fn test_deterministic_generation() {
        assert_eq!(dataset(200), dataset(200));
    }

    #[test]
    fn test_assemble_reseeds_every_call() {
        let mut generator = OrderGenerator::new(SimulationConfig::default());

        let first = generator.assemble(100);
        let second = generator.assemble(100);
        assert_eq!(first, second);
        assert_eq!(generator.current_index(), 100);
    }

    #[test]
    fn test_larger_dataset_extends_smaller() {
        let small = dataset(300);
        let medium = dataset(3000);

        assert_eq!(&medium[..300], &small[..]);
    }

    #[test]
    fn test_records_continue_without_reseed() {
        let mut generator = OrderGenerator::new(SimulationConfig::default());
        let head: Vec<_> = generator.records(10).collect();
        let tail: Vec<_> = generator.records(10).collect();

        let all = dataset(20);
        assert_eq!(&all[..10], &head[..]);
        assert_eq!(&all[10..], &tail[..]);
        assert_eq!(tail[0].index, 11);
    }

    #[test]
    fn test_records_size_hint() {
        let mut generator = OrderGenerator::new(SimulationConfig::default());
        let iter = generator.records(7);
        assert_eq!(iter.len(), 7);
    }

    #[test]
    fn test_different_seed_changes_output() {
        let config = SimulationConfig {
            seed: 7,
            ..SimulationConfig::default()
        };
        assert_ne!(generate_dataset(config, 50), dataset(50));
    }

    #[test]
    fn test_unit_invariants() {
        for row in dataset(5000) {
            assert!(row.units_shipped >= 1);
            assert!(row.units_shipped <= row.units_ordered);
            assert!(row.units_ordered <= 12);
        }
    }

    #[test]
    fn test_date_invariants() {
        let config = SimulationConfig::default();
        for row in dataset(5000) {
            let sla = config.shipping_profile(row.shipping_method).sla_days;
            assert_eq!(row.promised_date, add_days(row.order_date, sla));
            assert_eq!(row.deliver_date, add_days(row.order_date, row.lead_time_days));
            assert!(row.lead_time_days >= 1);
            assert!(row.deliver_date >= row.order_date);
            assert!(row.ship_date >= row.order_date);
            assert!(row.ship_date <= row.deliver_date);
        }
    }

    #[test]
    fn test_lead_time_bounds_by_method() {
        let config = SimulationConfig::default();
        for row in dataset(5000) {
            let sla = config.shipping_profile(row.shipping_method).sla_days;
            assert!(row.lead_time_days <= sla + 1 + config.max_extra_delay_days);
        }
    }

    #[test]
    fn test_derived_flags() {
        for row in dataset(5000) {
            let expected_late = days_between(row.promised_date, row.deliver_date).max(0) as u32;
            assert_eq!(row.late_days, expected_late);
            assert_eq!(row.in_full_flag, row.units_shipped == row.units_ordered);
            assert_eq!(row.on_time_flag, row.deliver_date <= row.promised_date);
            assert_eq!(row.otif_flag, row.on_time_flag && row.in_full_flag);
            assert_eq!(row.on_time_flag, row.late_days == 0);
        }
    }

    #[test]
    fn test_revenue_and_pricing() {
        let config = SimulationConfig::default();
        for row in dataset(5000) {
            let expected =
                round2(f64::from(row.units_shipped) * row.unit_price * (1.0 - row.discount_rate));
            assert_eq!(row.revenue, expected);
            assert!(row.revenue >= 0.0);

            let band = config
                .categories
                .iter()
                .find(|b| b.category == row.category)
                .unwrap();
            assert!(row.unit_price >= band.min && row.unit_price <= band.max);

            assert!(
                row.discount_rate == 0.0 || (0.05..=0.30).contains(&row.discount_rate),
                "discount {}",
                row.discount_rate
            );
        }
    }

    #[test]
    fn test_categorical_fields() {
        let config = SimulationConfig::default();
        for row in dataset(5000) {
            assert!((1..=2500).contains(&row.customer_number));
            assert!((1..=800).contains(&row.product_number));
            assert!(config.regions.contains(&row.region));
            assert!(config.warehouses.contains(&row.warehouse_id));
        }
    }

    #[test]
    fn test_defect_type_iff_defect_flag() {
        let config = SimulationConfig::default();
        for row in dataset(5000) {
            if row.defect_flag {
                assert!(config.defect_types.contains(&row.defect_type));
            } else {
                assert!(row.defect_type.is_empty());
            }
        }
    }

    #[test]
    fn test_event_rates_are_plausible() {
        let rows = dataset(50_000);

        let standard = share(&rows, |r| r.shipping_method == ShippingMethod::Standard);
        let defects = share(&rows, |r| r.defect_flag);
        let returns = share(&rows, |r| r.return_flag);
        let discounted = share(&rows, |r| r.discount_rate > 0.0);

        assert!((standard - 0.7).abs() < 0.01, "standard share {standard}");
        assert!((defects - 0.03).abs() < 0.005, "defect rate {defects}");
        assert!((returns - 0.02).abs() < 0.005, "return rate {returns}");
        assert!((discounted - 0.2).abs() < 0.01, "discount rate {discounted}");
    }

    #[test]
    fn test_forced_shortfall_never_below_one() {
        let config = SimulationConfig {
            shortfall_probability: 1.0,
            ..SimulationConfig::default()
        };
        let rows = generate_dataset(config, 5000);

        assert!(rows.iter().any(|r| r.units_ordered == 1));
        for row in &rows {
            assert!(row.units_shipped >= 1);
            assert!(row.units_shipped <= row.units_ordered);
            if row.units_ordered > 1 {
                assert!(!row.in_full_flag);
                assert!(row.units_ordered - row.units_shipped <= 2);
            }
        }
    }

    #[test]
    fn test_forced_shortfall_single_unit_order() {
        let config = SimulationConfig {
            shortfall_probability: 1.0,
            units_ordered: crate::config::GaussianParams {
                mean: 1.0,
                stddev: 0.0,
            },
            ..SimulationConfig::default()
        };

        for row in generate_dataset(config, 500) {
            assert_eq!(row.units_ordered, 1);
            assert_eq!(row.units_shipped, 1);
        }
    }

    #[test]
    fn test_forced_late_delivery() {
        let mut config = SimulationConfig::default();
        for profile in &mut config.shipping {
            profile.late_probability = 1.0;
        }

        for row in generate_dataset(config.clone(), 5000) {
            let sla = config.shipping_profile(row.shipping_method).sla_days;
            assert!(row.lead_time_days >= 2);
            assert!(row.lead_time_days <= sla + 1 + config.max_extra_delay_days);
            assert!(row.deliver_date > row.order_date);
        }
    }
}
