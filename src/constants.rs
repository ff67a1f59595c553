/// Base URL for requests to the id.me take-home API.
pub const API_BASE_URL: &str = "https://idme-takehome.proxy.beeceptor.com";

/// Fixed page parameter for purchase history requests.
// TODO: Add pagination
pub const PURCHASES_PAGE: &str = "1";
