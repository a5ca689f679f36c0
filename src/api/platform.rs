use std::time::Duration;

use anyhow::{Context, Result};
use log::warn;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const USER_AGENT: &str = "Taskdeck/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `id` and `name` tolerate absent fields so that one malformed membership
/// entry cannot fail the whole response; id-less entries are dropped in
/// [`sanitize_memberships`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationMembership {
    pub organization: Organization,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    active_organization: Option<Organization>,
}

#[derive(Debug, Deserialize)]
struct MembershipsResponse {
    #[serde(default)]
    data: Vec<OrganizationMembership>,
}

/// Blocking client for the platform REST API. Lives on a worker thread; the
/// UI thread never issues requests directly.
pub struct PlatformClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl PlatformClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// The organization currently selected for the session, if any.
    pub fn fetch_active_organization(&self) -> Result<Option<Organization>> {
        let response: SessionResponse = self
            .get("/v1/session")
            .context("failed to fetch the current session")?;
        Ok(response.active_organization)
    }

    /// All organizations the signed-in user belongs to, in platform order.
    pub fn fetch_memberships(&self) -> Result<Vec<OrganizationMembership>> {
        let response: MembershipsResponse = self
            .get("/v1/memberships")
            .context("failed to fetch organization memberships")?;
        Ok(sanitize_memberships(response.data))
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?
            .json()
            .with_context(|| format!("failed to deserialize the response from {url}"))
    }
}

/// Drops membership entries without an organization id; they cannot be keyed
/// in the sidebar or the expansion map.
fn sanitize_memberships(mut entries: Vec<OrganizationMembership>) -> Vec<OrganizationMembership> {
    let before = entries.len();
    entries.retain(|membership| !membership.organization.id.trim().is_empty());

    let dropped = before - entries.len();
    if dropped > 0 {
        warn!("skipped {dropped} membership entries without an organization id");
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(id: &str, name: &str) -> OrganizationMembership {
        OrganizationMembership {
            organization: Organization {
                id: id.to_string(),
                name: name.to_string(),
                image_url: None,
            },
            role: None,
        }
    }

    #[test]
    fn sanitize_drops_entries_without_an_id() {
        let entries = vec![
            membership("org_a", "Alpha"),
            membership("", "Ghost"),
            membership("  ", "Blank"),
            membership("org_b", "Beta"),
        ];

        let kept = sanitize_memberships(entries);
        let ids: Vec<&str> = kept.iter().map(|m| m.organization.id.as_str()).collect();
        assert_eq!(ids, vec!["org_a", "org_b"]);
    }

    #[test]
    fn sanitize_preserves_platform_order() {
        let entries = vec![
            membership("org_c", "Gamma"),
            membership("org_a", "Alpha"),
            membership("org_b", "Beta"),
        ];

        let kept = sanitize_memberships(entries);
        let ids: Vec<&str> = kept.iter().map(|m| m.organization.id.as_str()).collect();
        assert_eq!(ids, vec!["org_c", "org_a", "org_b"]);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PlatformClient::new("https://api.example.test/", None).unwrap();
        assert_eq!(client.base_url, "https://api.example.test");
    }

    #[test]
    fn membership_without_id_field_is_parsed_then_skipped() {
        let raw = r#"{"data":[{"organization":{"name":"NoId"}},{"organization":{"id":"org_a","name":"Alpha"}}]}"#;
        let response: MembershipsResponse = serde_json::from_str(raw).unwrap();
        let kept = sanitize_memberships(response.data);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].organization.id, "org_a");
    }
}
