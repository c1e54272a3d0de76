//! Fulfillment summary of a dataset, logged after each file is written.

use otif_generator::OrderRecord;

/// Aggregate OTIF counts over a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FulfillmentSummary {
    pub orders: u64,
    pub on_time: u64,
    pub in_full: u64,
    pub otif: u64,
    pub defects: u64,
    pub returns: u64,
    pub total_late_days: u64,
    pub revenue: f64,
}

impl FulfillmentSummary {
    pub fn from_records(records: &[OrderRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.orders += 1;
            acc.on_time += u64::from(r.on_time_flag);
            acc.in_full += u64::from(r.in_full_flag);
            acc.otif += u64::from(r.otif_flag);
            acc.defects += u64::from(r.defect_flag);
            acc.returns += u64::from(r.return_flag);
            acc.total_late_days += u64::from(r.late_days);
            acc.revenue += r.revenue;
            acc
        })
    }

    fn rate(&self, count: u64) -> f64 {
        if self.orders == 0 {
            0.0
        } else {
            count as f64 / self.orders as f64
        }
    }

    pub fn on_time_rate(&self) -> f64 {
        self.rate(self.on_time)
    }

    pub fn in_full_rate(&self) -> f64 {
        self.rate(self.in_full)
    }

    pub fn otif_rate(&self) -> f64 {
        self.rate(self.otif)
    }

    pub fn defect_rate(&self) -> f64 {
        self.rate(self.defects)
    }

    pub fn return_rate(&self) -> f64 {
        self.rate(self.returns)
    }
}
