use super::{Client, ClientKey, Project, Result, Team};
use serde_json::json;
use tracing::{info_span, Instrument};

impl Client {
    /// Get a project by slug within an organization.
    /// # Errors
    /// Returns an error if the request fails or the API returns a non-success status.
    pub async fn get_project(&self, organization: &str, slug: &str) -> Result<Project> {
        let url = self.url(&["projects", organization, slug])?;

        let span = info_span!(
            "sentry.get_project",
            http.method = "GET",
            url = %url
        );
        self.get(url).instrument(span).await
    }

    /// Create a project owned by `team`.
    /// # Errors
    /// Returns an error if the request fails or the API returns a non-success status.
    pub async fn create_project(
        &self,
        organization: &str,
        team: &Team,
        name: &str,
        slug: &str,
    ) -> Result<Project> {
        let url = self.url(&["teams", organization, team.slug.as_str(), "projects"])?;

        let payload = json!({
            "name": name,
            "slug": slug
        });

        let span = info_span!(
            "sentry.create_project",
            http.method = "POST",
            url = %url
        );
        self.post(url, &payload).instrument(span).await
    }

    /// List the client keys of a project, in API order.
    /// # Errors
    /// Returns an error if the request fails or the API returns a non-success status.
    pub async fn list_client_keys(&self, organization: &str, project: &str) -> Result<Vec<ClientKey>> {
        let url = self.url(&["projects", organization, project, "keys"])?;

        let span = info_span!(
            "sentry.list_client_keys",
            http.method = "GET",
            url = %url
        );
        self.get(url).instrument(span).await
    }
}
