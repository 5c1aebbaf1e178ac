//! Closed enumerations whose wire form is a fixed, case-sensitive string.
//!
//! Shapes store these fields as plain strings so values introduced by the
//! service later still round-trip. The enums give callers a typed way to set
//! and inspect them; `From<Enum> for String` is the single conversion both
//! setter flavours go through.

use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("`{value}` is not a known {kind} value")]
    UnknownEnumValue { kind: &'static str, value: String },
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err(ModelError::UnknownEnumValue {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }
    };
}

wire_enum! {
    /// Lifecycle state of a Snowball job.
    pub enum JobState {
        New => "New",
        PreparingAppliance => "PreparingAppliance",
        PreparingShipment => "PreparingShipment",
        InTransitToCustomer => "InTransitToCustomer",
        WithCustomer => "WithCustomer",
        InTransitToAws => "InTransitToAWS",
        WithAws => "WithAWS",
        InProgress => "InProgress",
        Complete => "Complete",
        Cancelled => "Cancelled",
        Listing => "Listing",
        Pending => "Pending",
    }
}

wire_enum! {
    /// Direction of a Snowball job.
    pub enum JobType {
        Import => "IMPORT",
        Export => "EXPORT",
    }
}

wire_enum! {
    /// Preferred appliance size.
    pub enum SnowballCapacity {
        T50 => "T50",
        T80 => "T80",
        NoPreference => "NoPreference",
    }
}

wire_enum! {
    pub enum ShippingOption {
        SecondDay => "SECOND_DAY",
        NextDay => "NEXT_DAY",
        Express => "EXPRESS",
        Standard => "STANDARD",
    }
}
