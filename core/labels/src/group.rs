//! FILENAME: core/labels/src/group.rs

use crate::{CountedItem, Order};
use std::collections::HashMap;

/// Count identical items across orders.
/// Lines keep the order in which each item first appears.
pub fn group_items(orders: &[Order]) -> Vec<CountedItem> {
    let mut index: HashMap<&crate::Item, usize> = HashMap::new();
    let mut counted: Vec<CountedItem> = Vec::new();

    for order in orders {
        match index.get(&order.item) {
            Some(&slot) => counted[slot].count += 1,
            None => {
                index.insert(&order.item, counted.len());
                counted.push(CountedItem {
                    item: order.item.clone(),
                    count: 1,
                });
            }
        }
    }

    counted
}
