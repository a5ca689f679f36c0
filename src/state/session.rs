use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use chrono::{DateTime, Local};
use log::warn;

use crate::api::platform::{Organization, OrganizationMembership, PlatformClient};
use crate::config::AppConfig;

/// Gate for the sidebar's real content: placeholders render until both the
/// identity and the membership fetch have resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Ready,
    Failed,
}

pub enum SessionEvent {
    ActiveOrganization(Option<Organization>),
    Memberships(Vec<OrganizationMembership>),
    Failed(String),
}

pub struct SessionState {
    pub active_organization: Option<Organization>,
    pub memberships: Vec<OrganizationMembership>,
    pub fetched_at: Option<DateTime<Local>>,
    pub events_rx: Receiver<SessionEvent>,
    pub events_tx: Sender<SessionEvent>,
    organization_loaded: bool,
    memberships_loaded: bool,
    error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        let (events_tx, events_rx) = mpsc::channel();

        Self {
            active_organization: None,
            memberships: Vec::new(),
            fetched_at: None,
            events_rx,
            events_tx,
            organization_loaded: false,
            memberships_loaded: false,
            error: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.error.is_some() {
            SessionPhase::Failed
        } else if self.organization_loaded && self.memberships_loaded {
            SessionPhase::Ready
        } else {
            SessionPhase::Loading
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Kicks off the session and membership fetch on a worker thread.
    /// Results arrive through the event channel and are applied by `poll`.
    pub fn begin_fetch(&mut self, config: &AppConfig) {
        self.organization_loaded = false;
        self.memberships_loaded = false;
        self.error = None;

        let tx = self.events_tx.clone();
        let base_url = config.api_base_url.clone();
        let token = config.api_token.clone();

        thread::spawn(move || {
            let client = match PlatformClient::new(base_url, token) {
                Ok(client) => client,
                Err(error) => {
                    let _ = tx.send(SessionEvent::Failed(format!("{error:#}")));
                    return;
                }
            };

            match client.fetch_active_organization() {
                Ok(organization) => {
                    let _ = tx.send(SessionEvent::ActiveOrganization(organization));
                }
                Err(error) => {
                    let _ = tx.send(SessionEvent::Failed(format!("{error:#}")));
                    return;
                }
            }

            match client.fetch_memberships() {
                Ok(memberships) => {
                    let _ = tx.send(SessionEvent::Memberships(memberships));
                }
                Err(error) => {
                    let _ = tx.send(SessionEvent::Failed(format!("{error:#}")));
                }
            }
        });
    }

    /// Drains pending fetch results. Called once per frame; returns whether
    /// anything changed so the caller can request a repaint.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        while let Ok(event) = self.events_rx.try_recv() {
            changed = true;
            match event {
                SessionEvent::ActiveOrganization(organization) => {
                    self.active_organization = organization;
                    self.organization_loaded = true;
                }
                SessionEvent::Memberships(memberships) => {
                    self.memberships = memberships;
                    self.memberships_loaded = true;
                }
                SessionEvent::Failed(message) => {
                    warn!("session fetch failed: {message}");
                    self.error = Some(message);
                }
            }

            if self.organization_loaded && self.memberships_loaded && self.fetched_at.is_none() {
                self.fetched_at = Some(Local::now());
            }
        }

        changed
    }

    pub fn is_active(&self, organization_id: &str) -> bool {
        self.active_organization
            .as_ref()
            .is_some_and(|organization| organization.id == organization_id)
    }

    pub fn set_active_organization(&mut self, organization: Organization) {
        self.active_organization = Some(organization);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organization(id: &str, name: &str) -> Organization {
        Organization {
            id: id.to_string(),
            name: name.to_string(),
            image_url: None,
        }
    }

    fn membership(id: &str, name: &str) -> OrganizationMembership {
        OrganizationMembership {
            organization: organization(id, name),
            role: None,
        }
    }

    #[test]
    fn gate_stays_loading_until_both_fetches_resolve() {
        let mut session = SessionState::new();
        assert_eq!(session.phase(), SessionPhase::Loading);

        session
            .events_tx
            .send(SessionEvent::ActiveOrganization(Some(organization(
                "org_b", "Beta",
            ))))
            .unwrap();
        session.poll();
        assert_eq!(session.phase(), SessionPhase::Loading);

        session
            .events_tx
            .send(SessionEvent::Memberships(vec![membership("org_b", "Beta")]))
            .unwrap();
        session.poll();
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert!(session.fetched_at.is_some());
    }

    #[test]
    fn fetch_failure_moves_the_gate_to_failed() {
        let mut session = SessionState::new();
        session
            .events_tx
            .send(SessionEvent::Failed("connection refused".into()))
            .unwrap();
        session.poll();

        assert_eq!(session.phase(), SessionPhase::Failed);
        assert_eq!(session.error(), Some("connection refused"));
    }

    #[test]
    fn only_the_platform_selected_organization_is_active() {
        let mut session = SessionState::new();
        session
            .events_tx
            .send(SessionEvent::ActiveOrganization(Some(organization(
                "org_b", "Beta",
            ))))
            .unwrap();
        session
            .events_tx
            .send(SessionEvent::Memberships(vec![
                membership("org_a", "Alpha"),
                membership("org_b", "Beta"),
            ]))
            .unwrap();
        session.poll();

        assert!(!session.is_active("org_a"));
        assert!(session.is_active("org_b"));
    }

    #[test]
    fn no_organization_means_nothing_is_active() {
        let mut session = SessionState::new();
        session
            .events_tx
            .send(SessionEvent::ActiveOrganization(None))
            .unwrap();
        session.poll();

        assert!(!session.is_active("org_a"));
    }

    #[test]
    fn poll_reports_whether_anything_arrived() {
        let mut session = SessionState::new();
        assert!(!session.poll());

        session
            .events_tx
            .send(SessionEvent::ActiveOrganization(None))
            .unwrap();
        assert!(session.poll());
    }
}
