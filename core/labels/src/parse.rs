//! FILENAME: core/labels/src/parse.rs
// PURPOSE: Splits extracted text into labels and parses each label into an Order.

use crate::{Item, LabelError, Order, ShippingService};
use once_cell::sync::Lazy;
use regex::Regex;

/// Footer printed at the end of every DPD label; used as the label delimiter.
pub const LABEL_SEPARATOR: &str = "Responsible delivery - CO2 neutral";

/// Labels of this many bytes or fewer cannot hold all fields.
pub const MIN_LABEL_LEN: usize = 100;

static TRACKING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Consignment (\d{14})").expect("valid tracking regex"));

/// A line that consists of exactly nine digits.
static ORDER_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(\d{9})\n").expect("valid order regex"));

static ITEM_INFO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<name>.+)\n(?P<size>\d{1,2}(\.\d)? US \w+) \| (?P<sku>[A-Z0-9 ]+) \| (?P<condition>\w+)",
    )
    .expect("valid item regex")
});

/// A label that did not yield an order, with its position in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLabel {
    pub index: usize,
    pub reason: LabelError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLabels {
    pub orders: Vec<Order>,
    pub rejected: Vec<RejectedLabel>,
}

impl ParsedLabels {
    /// Number of label pieces seen, accepted or not.
    pub fn label_count(&self) -> usize {
        self.orders.len() + self.rejected.len()
    }
}

/// Split document text at every label footer. All pieces are kept, including
/// the trailing one after the last footer.
pub fn split_labels(text: &str) -> Vec<&str> {
    text.split(LABEL_SEPARATOR).collect()
}

/// Parse the text of a single label.
pub fn parse_label(text: &str) -> Result<Order, LabelError> {
    if text.len() <= MIN_LABEL_LEN {
        return Err(LabelError::TooShort(text.len()));
    }

    let order_number = ORDER_NUMBER
        .captures(text)
        .map(|c| c[1].to_string())
        .ok_or(LabelError::MissingOrderNumber)?;

    let tracking_number = TRACKING_NUMBER
        .captures(text)
        .map(|c| c[1].to_string())
        .ok_or(LabelError::MissingTrackingNumber)?;

    let item = ITEM_INFO
        .captures(text)
        .map(|c| Item {
            name: c["name"].trim().to_string(),
            size: c["size"].to_string(),
            sku: c["sku"].to_string(),
            condition: c["condition"].to_string(),
        })
        .ok_or(LabelError::MissingItem)?;

    Ok(Order {
        shipper: ShippingService::Dpd,
        tracking_number,
        item,
        order_number,
    })
}

/// Split and parse a whole document. Unparseable labels are collected, not fatal.
pub fn parse_labels(text: &str) -> ParsedLabels {
    let pieces = split_labels(text);
    log::debug!(target: "LABELS", "Got {} individual labels", pieces.len());

    let mut parsed = ParsedLabels::default();
    for (index, piece) in pieces.into_iter().enumerate() {
        match parse_label(piece) {
            Ok(order) => parsed.orders.push(order),
            Err(reason) => {
                // The piece after the last footer is normally empty
                match reason {
                    LabelError::TooShort(_) => {
                        log::debug!(target: "LABELS", "Label {} rejected: {}", index, reason)
                    }
                    _ => log::warn!(target: "LABELS", "Label {} rejected: {}", index, reason),
                }
                parsed.rejected.push(RejectedLabel { index, reason });
            }
        }
    }

    log::info!(
        target: "LABELS",
        "Extracted {} orders, rejected {} labels",
        parsed.orders.len(),
        parsed.rejected.len()
    );
    parsed
}
