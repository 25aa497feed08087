//! FILENAME: core/picksheet/src/sheet.rs
// PURPOSE: Renderer-independent content of the pickup and pick sheet.

use labels::{group_items, Order, ShippingService};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickupRow {
    pub order_number: String,
    pub tracking_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickRow {
    pub name: String,
    pub sku: String,
    pub size: String,
    pub condition: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickSheet {
    pub carrier: ShippingService,
    /// One row per package, in label order
    pub pickup_rows: Vec<PickupRow>,
    /// One row per distinct item, in first-seen order
    pub pick_rows: Vec<PickRow>,
}

impl PickSheet {
    pub fn from_orders(orders: &[Order]) -> Self {
        let carrier = orders
            .first()
            .map(|o| o.shipper)
            .unwrap_or(ShippingService::Dpd);

        let pickup_rows = orders
            .iter()
            .map(|o| PickupRow {
                order_number: o.order_number.clone(),
                tracking_number: o.tracking_number.clone(),
            })
            .collect();

        let pick_rows = group_items(orders)
            .into_iter()
            .map(|counted| PickRow {
                name: counted.item.name,
                sku: counted.item.sku,
                size: counted.item.size,
                condition: counted.item.condition,
                count: counted.count,
            })
            .collect();

        PickSheet {
            carrier,
            pickup_rows,
            pick_rows,
        }
    }

    pub fn package_count(&self) -> usize {
        self.pickup_rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickup_rows.is_empty()
    }
}
