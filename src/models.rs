//! Domain models for the profile and purchases screens.
//!
//! These are plain values with structural identity. Production code only
//! obtains them through the wire mappers in [`crate::datasource::wire`].

/// A user profile as presented to the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub name: String,
    pub user_name: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    /// ISO-8601 registration timestamp, kept as a string for display formatting.
    pub registration: Option<String>,
    pub image_url: Option<String>,
}

/// A single entry in a user's purchase history.
///
/// Equality and hashing cover the full field set; the presentation layer
/// relies on this when diffing the purchases list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Purchase {
    pub image_url: String,
    /// ISO-8601 purchase timestamp, kept as a string for display formatting.
    pub purchase_date: String,
    pub item_name: String,
    /// Price as returned by the API; no arithmetic is performed on it.
    pub price: String,
    pub serial_number: Option<String>,
    pub description: Option<String>,
}
