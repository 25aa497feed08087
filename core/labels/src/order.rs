//! FILENAME: core/labels/src/order.rs
// PURPOSE: Order data carried by one shipping label.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingService {
    Dpd,
}

impl fmt::Display for ShippingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShippingService::Dpd => write!(f, "DPD"),
        }
    }
}

/// The article on a label, as printed in the item line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// e.g. "9 US M" or "10.5 US W"
    pub size: String,
    pub sku: String,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub shipper: ShippingService,
    pub tracking_number: String,
    pub item: Item,
    pub order_number: String,
}

/// One picking line: an item and how many packages contain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedItem {
    pub item: Item,
    pub count: u32,
}
