//! Actions: the only way to request a state transition.

use handloom_commerce::catalog::Product;
use handloom_commerce::search::FiltersPatch;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A requested state transition.
///
/// On the wire an action is `{"type": "ADD_TO_CART", "payload": {...}}`.
/// Tags this enum does not know decode to [`Action::Unknown`] whatever their
/// payload, both through [`Action::from_json`] and through `Deserialize`, so
/// a batch containing a newer action kind still decodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the catalog.
    SetProducts(Vec<Product>),
    /// Append a product to the cart.
    AddToCart(Product),
    /// Remove the cart line at a position.
    RemoveFromCart(usize),
    /// Set (not flip) cart visibility.
    ToggleCart(bool),
    /// Merge a partial filter update.
    SetFilters(FiltersPatch),
    /// Any action kind this store does not recognize.
    Unknown,
}

impl Action {
    /// Wire tags of the recognized kinds.
    pub const KINDS: [&'static str; 5] = [
        "SET_PRODUCTS",
        "ADD_TO_CART",
        "REMOVE_FROM_CART",
        "TOGGLE_CART",
        "SET_FILTERS",
    ];

    /// Wire tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetProducts(_) => "SET_PRODUCTS",
            Action::AddToCart(_) => "ADD_TO_CART",
            Action::RemoveFromCart(_) => "REMOVE_FROM_CART",
            Action::ToggleCart(_) => "TOGGLE_CART",
            Action::SetFilters(_) => "SET_FILTERS",
            Action::Unknown => "UNKNOWN",
        }
    }

    /// Decode an action from JSON.
    ///
    /// Unrecognized tags become [`Action::Unknown`] whatever their payload;
    /// a recognized tag with a malformed payload is an error.
    pub fn from_json(json: &str) -> Result<Action, serde_json::Error> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Decode an action from an already parsed JSON value.
    pub fn from_value(mut value: Value) -> Result<Action, serde_json::Error> {
        let tag = match value.get("type").and_then(Value::as_str) {
            Some(tag) if Self::KINDS.contains(&tag) => tag.to_string(),
            _ => {
                tracing::debug!(action = %value.get("type").unwrap_or(&serde_json::Value::Null), "unrecognized action kind");
                return Ok(Action::Unknown);
            }
        };
        let payload = value
            .get_mut("payload")
            .map(Value::take)
            .unwrap_or(Value::Null);

        let action = match tag.as_str() {
            "SET_PRODUCTS" => Action::SetProducts(serde_json::from_value(payload)?),
            "ADD_TO_CART" => Action::AddToCart(serde_json::from_value(payload)?),
            "REMOVE_FROM_CART" => Action::RemoveFromCart(serde_json::from_value(payload)?),
            "TOGGLE_CART" => Action::ToggleCart(serde_json::from_value(payload)?),
            "SET_FILTERS" => Action::SetFilters(serde_json::from_value(payload)?),
            _ => Action::Unknown,
        };
        Ok(action)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Action::from_value(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handloom_commerce::Money;

    #[test]
    fn test_wire_format() {
        let action = Action::RemoveFromCart(2);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "REMOVE_FROM_CART", "payload": 2 }));

        let action = Action::SetFilters(FiltersPatch::max_price(Money::new(1000)));
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "SET_FILTERS", "payload": { "maxPrice": 1000 } })
        );
    }

    #[test]
    fn test_kind_matches_wire_tag() {
        let actions = [
            Action::SetProducts(Vec::new()),
            Action::RemoveFromCart(0),
            Action::ToggleCart(true),
            Action::SetFilters(FiltersPatch::default()),
        ];
        for action in actions {
            let json = serde_json::to_value(&action).unwrap();
            assert_eq!(json["type"], action.kind());
            assert!(Action::KINDS.contains(&action.kind()));
        }
    }

    #[test]
    fn test_from_json_recognized() {
        let action = Action::from_json(r#"{"type":"TOGGLE_CART","payload":true}"#).unwrap();
        assert_eq!(action, Action::ToggleCart(true));
    }

    #[test]
    fn test_from_json_unknown_kind() {
        let action = Action::from_json(r#"{"type":"APPLY_COUPON","payload":{"code":"DIWALI"}}"#).unwrap();
        assert_eq!(action, Action::Unknown);

        let action = Action::from_json(r#"{"payload":1}"#).unwrap();
        assert_eq!(action, Action::Unknown);
    }

    #[test]
    fn test_deserialize_batch_with_unknown_kind() {
        let json = r#"[
            {"type":"TOGGLE_CART","payload":true},
            {"type":"APPLY_COUPON","payload":{"code":"DIWALI"}},
            {"type":"REMOVE_FROM_CART","payload":0}
        ]"#;
        let actions: Vec<Action> = serde_json::from_str(json).unwrap();
        assert_eq!(
            actions,
            vec![Action::ToggleCart(true), Action::Unknown, Action::RemoveFromCart(0)]
        );
    }

    #[test]
    fn test_deserialize_matches_from_json() {
        let json = r#"{"type":"SET_FILTERS","payload":{"maxPrice":1000}}"#;
        let derived: Action = serde_json::from_str(json).unwrap();
        assert_eq!(derived, Action::from_json(json).unwrap());
        assert!(serde_json::from_str::<Action>(r#"{"type":"TOGGLE_CART","payload":"yes"}"#).is_err());
    }

    #[test]
    fn test_from_json_bad_payload() {
        assert!(Action::from_json(r#"{"type":"REMOVE_FROM_CART","payload":"zero"}"#).is_err());
    }
}
