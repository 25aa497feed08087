//! FILENAME: core/labels/src/lib.rs
//! PURPOSE: Turns the text of a carrier label PDF into structured orders.
//!
//! PIPELINE: PDF --> extract_text --> split_labels --> parse_label --> Order --> group_items
//!
//! One PDF usually holds many labels. Each label carries an order number, a
//! consignment (tracking) number and one item line of the form
//! `<size> | <sku> | <condition>` below the item name.

pub mod error;
pub mod extract;
pub mod group;
pub mod order;
pub mod parse;


pub use error::LabelError;
pub use extract::extract_text;
pub use group::group_items;
pub use order::{CountedItem, Item, Order, ShippingService};
pub use parse::{
    parse_label, parse_labels, split_labels, ParsedLabels, RejectedLabel, LABEL_SEPARATOR,
    MIN_LABEL_LEN,
};
