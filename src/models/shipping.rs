//! Shipping state of the appliance in both directions.

use crate::models::{
    display::ShapeWriter,
    enums::{ModelError, ShippingOption},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct ShippingDetails {
    /// Wire string of a [`ShippingOption`](crate::models::enums::ShippingOption).
    pub shipping_option: Option<String>,
    pub inbound_shipment: Option<Shipment>,
    pub outbound_shipment: Option<Shipment>,
}

/// Carrier status and tracking number for one leg.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct Shipment {
    pub status: Option<String>,
    pub tracking_number: Option<String>,
}

impl ShippingDetails {
    pub fn parsed_shipping_option(&self) -> Option<Result<ShippingOption, ModelError>> {
        self.shipping_option.as_deref().map(str::parse)
    }
}

impl fmt::Display for ShippingDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("ShippingOption", self.shipping_option.as_deref())
            .field("InboundShipment", self.inbound_shipment.as_ref())
            .field("OutboundShipment", self.outbound_shipment.as_ref())
            .finish()
    }
}

impl fmt::Display for Shipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ShapeWriter::new(f)
            .field("Status", self.status.as_deref())
            .field("TrackingNumber", self.tracking_number.as_deref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_shipping_option() {
        let details: ShippingDetails = serde_json::from_str(
            r#"{"ShippingOption": "NEXT_DAY", "InboundShipment": {"Status": "InTransit"}}"#,
        )
        .unwrap();
        assert_eq!(details.parsed_shipping_option(), Some(Ok(ShippingOption::NextDay)));
        assert_eq!(
            details.to_string(),
            "{ShippingOption: NEXT_DAY,InboundShipment: {Status: InTransit}}"
        );

        let unknown = ShippingDetails {
            shipping_option: Some("OVERNIGHT".into()),
            ..Default::default()
        };
        assert!(matches!(unknown.parsed_shipping_option(), Some(Err(_))));
        assert_eq!(ShippingDetails::default().parsed_shipping_option(), None);
    }
}
