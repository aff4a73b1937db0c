//! Resolve-or-create orchestration.
//!
//! A failed lookup is logged and followed by a creation attempt. A 404 is
//! logged at INFO, any other lookup error at ERROR. A failed creation is
//! fatal: nothing downstream runs against a missing record.

mod slug;
pub use self::slug::Slug;

use crate::{
    sentry::{Client, Organization, Project, Team},
    Error,
};
use tracing::{error, info};

/// Organization and project to provision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub organization: Slug,
    pub project: Slug,
}

impl Target {
    /// # Errors
    /// Returns [`Error::InvalidSlug`] if either slug is invalid.
    pub fn parse(organization: &str, project: &str) -> Result<Self, Error> {
        Ok(Self {
            organization: Slug::parse(organization)?,
            project: Slug::parse(project)?,
        })
    }
}

/// Look up an organization, creating it if the lookup fails.
/// # Errors
/// Returns [`Error::Organization`] if the organization has to be created and creation fails.
pub async fn resolve_organization(client: &Client, slug: &Slug) -> Result<Organization, Error> {
    info!("Checking the organization <{}> for existence", slug);

    match client.get_organization(slug.as_str()).await {
        Ok(org) => return Ok(org),
        Err(e) if e.is_not_found() => info!("Organization <{}> does not exist", slug),
        Err(e) => error!("Get organization info failed: {}", e),
    }

    info!("Creating a non-existent organization <{}>", slug);

    let org = client
        .create_organization(slug.as_str())
        .await
        .map_err(|source| Error::Organization {
            slug: slug.to_string(),
            source,
        })?;

    info!("Organization <{}> created (id: {})", org.slug, org.id);

    Ok(org)
}

/// Look up a project in `org`, creating it if the lookup fails.
/// The organization's own slug and name stand in for the owning team.
/// # Errors
/// Returns [`Error::Project`] if the project has to be created and creation fails.
pub async fn resolve_project(
    client: &Client,
    org: &Organization,
    slug: &Slug,
) -> Result<Project, Error> {
    info!(
        "Checking the existence of the project <{}> in the organization <{}> (id: {})",
        slug, org.name, org.id
    );

    match client.get_project(&org.slug, slug.as_str()).await {
        Ok(project) => return Ok(project),
        Err(e) if e.is_not_found() => info!(
            "Project <{}> does not exist in the organization <{}>",
            slug, org.slug
        ),
        Err(e) => error!(
            "Get <{}> project info from organization <{}> failed: {}",
            slug, org.slug, e
        ),
    }

    info!("Creating a non-existent project <{}>", slug);

    let team = Team::from(org);

    let project = client
        .create_project(&org.slug, &team, slug.as_str(), slug.as_str())
        .await
        .map_err(|source| Error::Project {
            organization: org.slug.clone(),
            project: slug.to_string(),
            source,
        })?;

    info!("Project <{}> created (id: {})", project.slug, project.id);

    Ok(project)
}

/// Public DSNs of every client key of `project`, in API order.
/// # Errors
/// Returns [`Error::ClientKeys`] if the keys cannot be listed.
pub async fn public_dsns(
    client: &Client,
    org: &Organization,
    project: &Project,
) -> Result<Vec<String>, Error> {
    let keys = client
        .list_client_keys(&org.slug, &project.slug)
        .await
        .map_err(|source| Error::ClientKeys {
            project: project.slug.clone(),
            source,
        })?;

    Ok(keys.into_iter().map(|key| key.dsn.public).collect())
}

/// Ensure `target` exists and return the project's public DSNs.
/// # Errors
/// Returns an error if creating the organization or project fails, or the keys cannot be listed.
pub async fn run(client: &Client, target: &Target) -> Result<Vec<String>, Error> {
    let org = resolve_organization(client, &target.organization).await?;

    let project = resolve_project(client, &org, &target.project).await?;

    public_dsns(client, &org, &project).await
}
