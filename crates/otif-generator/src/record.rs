//! The order fulfillment record and its categorical fields.

use chrono::NaiveDate;
use std::fmt;

/// Sales region of the ordering customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

/// Product category. Determines the unit price band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Home,
    Sports,
    Toys,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Toys => "Toys",
        }
    }
}

/// Shipping method. Determines the SLA and the late-delivery probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingMethod {
    Standard,
    Expedited,
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Expedited => "Expedited",
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_via_as_str!(Region, Category, ShippingMethod);

/// One simulated order lifecycle with its derived fulfillment metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    /// 1-based position in the generated sequence.
    pub index: u64,
    pub order_date: NaiveDate,
    pub promised_date: NaiveDate,
    pub ship_date: NaiveDate,
    pub deliver_date: NaiveDate,
    /// Draw from the customer pool, `1..=customer_pool`.
    pub customer_number: u32,
    pub region: Region,
    /// Draw from the product pool, `1..=product_pool`.
    pub product_number: u32,
    pub category: Category,
    pub units_ordered: u32,
    pub units_shipped: u32,
    pub unit_price: f64,
    pub discount_rate: f64,
    pub shipping_method: ShippingMethod,
    pub warehouse_id: &'static str,
    pub defect_flag: bool,
    /// Empty unless `defect_flag` is set.
    pub defect_type: &'static str,
    pub return_flag: bool,
    pub lead_time_days: u32,
    pub late_days: u32,
    pub in_full_flag: bool,
    pub on_time_flag: bool,
    pub otif_flag: bool,
    pub revenue: f64,
}

impl OrderRecord {
    /// Output column names, in file order.
    ///
    /// `on_time_flag` is carried on the record but is not an output column.
    pub const COLUMNS: [&'static str; 23] = [
        "order_id",
        "order_date",
        "promised_date",
        "ship_date",
        "deliver_date",
        "customer_id",
        "region",
        "product_id",
        "category",
        "units_ordered",
        "units_shipped",
        "unit_price",
        "discount_rate",
        "shipping_method",
        "warehouse_id",
        "defect_flag",
        "defect_type",
        "return_flag",
        "lead_time_days",
        "late_days",
        "in_full_flag",
        "otif_flag",
        "revenue",
    ];

    pub fn order_id(&self) -> String {
        format!("O{:07}", self.index)
    }

    pub fn customer_id(&self) -> String {
        format!("C{:05}", self.customer_number)
    }

    pub fn product_id(&self) -> String {
        format!("P{:05}", self.product_number)
    }

    /// Render the record as string cells in [`Self::COLUMNS`] order.
    pub fn to_csv_record(&self) -> Vec<String> {
        vec![
            self.order_id(),
            self.order_date.to_string(),
            self.promised_date.to_string(),
            self.ship_date.to_string(),
            self.deliver_date.to_string(),
            self.customer_id(),
            self.region.to_string(),
            self.product_id(),
            self.category.to_string(),
            self.units_ordered.to_string(),
            self.units_shipped.to_string(),
            format!("{:.2}", self.unit_price),
            format!("{:.2}", self.discount_rate),
            self.shipping_method.to_string(),
            self.warehouse_id.to_string(),
            flag(self.defect_flag),
            self.defect_type.to_string(),
            flag(self.return_flag),
            self.lead_time_days.to_string(),
            self.late_days.to_string(),
            flag(self.in_full_flag),
            flag(self.otif_flag),
            format!("{:.2}", self.revenue),
        ]
    }
}

fn flag(value: bool) -> String {
    String::from(if value { "1" } else { "0" })
}
