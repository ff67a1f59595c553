//! Wire models mirroring the JSON payloads of the id.me API, plus the
//! mappers producing domain models from them.

use serde::Deserialize;

use crate::models::{Purchase, User};
use crate::text::html_decoded;

/// Raw decoded shape of a `/profile/{user_id}` response.
#[derive(Debug, Deserialize)]
pub struct ApiUser {
    pub name: String,
    pub user_name: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub registration: Option<String>,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
}

impl ApiUser {
    /// Convert the wire type to the domain model user.
    ///
    /// Currently total; typed fallible so required-field validation can be
    /// tightened later without changing callers.
    pub fn into_user(self) -> Option<User> {
        Some(User {
            name: self.name,
            user_name: self.user_name,
            full_name: self.full_name,
            phone_number: self.phone_number,
            registration: self.registration,
            image_url: self.image_url,
        })
    }
}

/// Raw decoded shape of one element of a `/purchases/{user_id}` response.
#[derive(Debug, Deserialize)]
pub struct ApiPurchase {
    #[serde(rename = "image")]
    pub image_url: String,
    pub purchase_date: String,
    pub item_name: String,
    pub price: String,
    #[serde(rename = "serial")]
    pub serial_number: Option<String>,
    pub description: Option<String>,
}

impl ApiPurchase {
    /// Convert the wire type to the domain model purchase. Text fields are
    /// HTML-entity-decoded on the way through.
    pub fn into_purchase(self) -> Option<Purchase> {
        Some(Purchase {
            image_url: self.image_url,
            purchase_date: self.purchase_date,
            item_name: html_decoded(&self.item_name),
            price: self.price,
            serial_number: self.serial_number,
            description: self.description.as_deref().map(html_decoded),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_user_with_renamed_fields() {
        let api_user: ApiUser = serde_json::from_value(json!({
            "name": "Jess",
            "user_name": "jess42",
            "full_name": "Jess Example",
            "phone_number": "15551234567",
            "registration": "2020-08-11T14:12:05.000Z",
            "image": "https://example.com/jess.png"
        }))
        .unwrap();

        let user = api_user.into_user().unwrap();
        assert_eq!(user.name, "Jess");
        assert_eq!(user.user_name, "jess42");
        assert_eq!(user.full_name, "Jess Example");
        assert_eq!(user.image_url.as_deref(), Some("https://example.com/jess.png"));
    }

    #[test]
    fn maps_user_without_optional_fields() {
        let api_user: ApiUser = serde_json::from_value(json!({
            "name": "Sam",
            "user_name": "sam",
            "full_name": "Sam Example"
        }))
        .unwrap();

        let user = api_user.into_user().unwrap();
        assert_eq!(user.phone_number, None);
        assert_eq!(user.registration, None);
        assert_eq!(user.image_url, None);
    }

    #[test]
    fn rejects_user_missing_required_fields() {
        let result: Result<ApiUser, _> = serde_json::from_value(json!({
            "name": "Jess",
            "user_name": "jess42"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn maps_purchase_and_decodes_html_entities() {
        let api_purchase: ApiPurchase = serde_json::from_value(json!({
            "image": "https://example.com/widget.png",
            "purchase_date": "2021-12-04T09:30:00.000-05:00",
            "item_name": "A &amp; B",
            "price": "$19.99",
            "serial": "SN-001",
            "description": "it&#39;s great"
        }))
        .unwrap();

        let purchase = api_purchase.into_purchase().unwrap();
        assert_eq!(purchase.item_name, "A & B");
        assert_eq!(purchase.description.as_deref(), Some("it's great"));
        assert_eq!(purchase.serial_number.as_deref(), Some("SN-001"));
        assert_eq!(purchase.price, "$19.99");
    }

    #[test]
    fn purchase_identity_is_structural() {
        let build = || Purchase {
            image_url: "https://example.com/widget.png".to_string(),
            purchase_date: "2021-12-04T09:30:00.000-05:00".to_string(),
            item_name: "Widget".to_string(),
            price: "$5".to_string(),
            serial_number: None,
            description: None,
        };
        assert_eq!(build(), build());

        let mut other = build();
        other.price = "$6".to_string();
        assert_ne!(build(), other);
    }
}
