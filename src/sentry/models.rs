//! Records returned by the Sentry management API.
//!
//! Only the fields this tool reads are modelled; everything else in the
//! responses is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub name: String,
}

/// Owner team passed when creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub slug: String,
    pub name: String,
}

// The organization doubles as its own team.
impl From<&Organization> for Team {
    fn from(org: &Organization) -> Self {
        Self {
            slug: org.slug.clone(),
            name: org.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientKey {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub dsn: Dsn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dsn {
    pub public: String,
    #[serde(default)]
    pub csp: Option<String>,
}
