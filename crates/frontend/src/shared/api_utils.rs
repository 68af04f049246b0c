//! API utilities for the REST resources
//!
//! Provides helper functions for constructing resource and item URLs.

/// Join a base URL and a resource name, tolerating stray slashes
///
/// # Example
/// ```rust,ignore
/// let url = resource_url("https://example.mockapi.io/", "/pricing_plans");
/// assert_eq!(url, "https://example.mockapi.io/pricing_plans");
/// ```
pub fn resource_url(base: &str, resource: &str) -> String {
    let base = base.trim_end_matches('/');
    let resource = resource.trim_matches('/');
    if base.is_empty() {
        format!("/{}", resource)
    } else {
        format!("{}/{}", base, resource)
    }
}

/// URL of a single item inside a resource; the id is percent-encoded
pub fn item_url(resource_url: &str, id: &str) -> String {
    format!(
        "{}/{}",
        resource_url.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}
