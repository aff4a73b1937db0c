use super::{Client, Organization, Result};
use serde_json::json;
use tracing::{info_span, Instrument};

impl Client {
    /// List the organizations visible to the token.
    /// # Errors
    /// Returns an error if the request fails or the API returns a non-success status.
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        let url = self.url(&["organizations"])?;

        let span = info_span!(
            "sentry.list_organizations",
            http.method = "GET",
            url = %url
        );
        self.get(url).instrument(span).await
    }

    /// Get an organization by slug.
    /// # Errors
    /// Returns an error if the request fails or the API returns a non-success status.
    pub async fn get_organization(&self, slug: &str) -> Result<Organization> {
        let url = self.url(&["organizations", slug])?;

        let span = info_span!(
            "sentry.get_organization",
            http.method = "GET",
            url = %url
        );
        self.get(url).instrument(span).await
    }

    /// Create an organization whose name and slug are both `slug`.
    /// # Errors
    /// Returns an error if the request fails or the API returns a non-success status.
    pub async fn create_organization(&self, slug: &str) -> Result<Organization> {
        let url = self.url(&["organizations"])?;

        let payload = json!({
            "name": slug,
            "slug": slug
        });

        let span = info_span!(
            "sentry.create_organization",
            http.method = "POST",
            url = %url
        );
        self.post(url, &payload).instrument(span).await
    }
}
