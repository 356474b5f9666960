//! # The Fixed Offer
//!
//! The shop sells exactly one thing on exactly one shipping rule. Product,
//! price, currency, and shipping are compile-time constants, not inputs;
//! the only variables in a checkout are the customer email and the origin
//! the request arrived on.

/// A product offered at a fixed price, in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offer {
    /// Display name shown on the hosted checkout page
    pub name: &'static str,
    /// Short description shown under the name
    pub description: &'static str,
    /// ISO 4217 currency code, lowercase as Stripe expects it
    pub currency: &'static str,
    /// Unit amount in the currency's minor unit (pence)
    pub unit_amount_minor: u32,
    /// Quantity per checkout
    pub quantity: u32,
}

/// A flat-rate shipping option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingRate {
    /// Name shown to the customer at checkout
    pub display_name: &'static str,
    /// Flat amount in minor units
    pub amount_minor: u32,
    /// ISO 4217 currency code, lowercase
    pub currency: &'static str,
}

/// The one product this service checks out: a £5.00 Still tag.
pub const STILL_TAG: Offer = Offer {
    name: "Still tag",
    description: "One Still tag to help you pause and resume your routine.",
    currency: "gbp",
    unit_amount_minor: 500,
    quantity: 1,
};

/// Free Royal Mail 2nd Class, the only shipping option offered.
pub const ROYAL_MAIL_FREE: ShippingRate = ShippingRate {
    display_name: "Royal Mail 2nd Class (free)",
    amount_minor: 0,
    currency: "gbp",
};

/// The single country we ship to.
pub const ALLOWED_SHIPPING_COUNTRY: &str = "GB";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_is_five_pounds_sterling() {
        assert_eq!(STILL_TAG.unit_amount_minor, 500);
        assert_eq!(STILL_TAG.currency, "gbp");
        assert_eq!(STILL_TAG.quantity, 1);
    }

    #[test]
    fn test_shipping_is_free_and_matches_offer_currency() {
        assert_eq!(ROYAL_MAIL_FREE.amount_minor, 0);
        assert_eq!(ROYAL_MAIL_FREE.currency, STILL_TAG.currency);
    }
}
