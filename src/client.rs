//! Domain loaders
//!
//! One loader per resource kind. Each builds its endpoint path, attaches
//! identity headers from the credential store at call time, issues the
//! request through the gateway, and maps the response elements into
//! domain models. Loaders never retry and never touch caches on
//! failure; the typed error is forwarded to the caller.

use crate::config::ClientConfig;
use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::gateway::ApiGateway;
use crate::model::{Group, MasteryProgress, Mission, User};
use crate::records::{GroupRecord, MasteryProgressRecord, MissionRecord, UserRecord};

/// Header carrying the authenticated principal's username
pub const USERNAME_HEADER: &str = "username";
/// Header carrying the session token
pub const SESSION_ID_HEADER: &str = "sessionID";
/// Header naming the group pathname under which a delegated query runs
pub const AUTHORITY_HEADER: &str = "groupPathnameAuthority";

/// Client for the academy API
///
/// # Example
///
/// ```rust,no_run
/// use academy_client::{ApiClient, ClientConfig, CredentialStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = CredentialStore::new();
/// credentials.set("john-williams", "session-token");
///
/// let client = ApiClient::new(ClientConfig::default(), credentials);
/// let groups = client.load_groups_under_authority("readStudentSashes").await?;
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    gateway: ApiGateway,
    config: ClientConfig,
    credentials: CredentialStore,
}

impl ApiClient {
    pub fn new(config: ClientConfig, credentials: CredentialStore) -> Self {
        Self {
            gateway: ApiGateway::new(&config),
            config,
            credentials,
        }
    }

    /// The credential store this client reads from
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    // ==================== Loaders ====================

    /// Load the group tree the principal holds `privilege` over
    ///
    /// Returns the mapped tree roots in server order; each root's
    /// nested `children` are materialized eagerly.
    pub async fn load_groups_under_authority(&self, privilege: &str) -> Result<Vec<Group>> {
        let path = format!(
            "/v1/groups/underAuthority/{}?forPrivilegeName={}",
            urlencoding::encode(&self.principal()),
            urlencoding::encode(privilege)
        );

        let records: Vec<GroupRecord> = self
            .gateway
            .get_json(&path, &self.identity_headers(), self.config.bulk_timeout)
            .await?;

        Ok(records.into_iter().map(Group::from_record).collect())
    }

    /// Load the roster of one group under the principal's authority
    ///
    /// Sorted by last name ascending (stable and case-sensitive, so
    /// ties keep server order).
    pub async fn load_users_in_group_under_authority(
        &self,
        group_pathname: &str,
    ) -> Result<Vec<User>> {
        let path = format!(
            "/v1/groups/underAuthority/{}/{}/users",
            urlencoding::encode(&self.principal()),
            urlencoding::encode(group_pathname)
        );

        let records: Vec<UserRecord> = self
            .gateway
            .get_json(&path, &self.identity_headers(), self.config.bulk_timeout)
            .await?;

        let mut users: Vec<User> = records.into_iter().map(User::from_record).collect();
        users.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        Ok(users)
    }

    /// Load the missions of one mastery topic, server order preserved
    pub async fn load_missions(&self, program_id: i64, topic_id: &str) -> Result<Vec<Mission>> {
        let path = format!(
            "/v1/mission-manager/mastery-programs/{}/topics/{}/missions",
            program_id,
            urlencoding::encode(topic_id)
        );

        let records: Vec<MissionRecord> = self
            .gateway
            .get_json(&path, &self.identity_headers(), self.config.brief_timeout)
            .await?;

        Ok(records.into_iter().map(Mission::from_record).collect())
    }

    /// Load a user's mastery progress across all programs
    ///
    /// `for_username` names the student whose progress is requested;
    /// when that is not the principal, `group_authority` carries the
    /// group pathname granting the delegated read. Sorted by topic
    /// sequence ascending.
    pub async fn load_mastery_progress(
        &self,
        for_username: &str,
        group_authority: Option<&str>,
    ) -> Result<Vec<MasteryProgress>> {
        let path = format!(
            "/v1/mission-manager/users/{}/mastery-progress/programs",
            urlencoding::encode(for_username)
        );

        let mut headers = self.identity_headers();
        if let Some(authority) = group_authority {
            headers.push((AUTHORITY_HEADER, authority.to_string()));
        }

        let records: Vec<MasteryProgressRecord> = self
            .gateway
            .get_json(&path, &headers, self.config.bulk_timeout)
            .await?;

        let mut progresses: Vec<MasteryProgress> = records
            .into_iter()
            .map(MasteryProgress::from_record)
            .collect();
        progresses.sort_by(|a, b| a.topic_sequence.cmp(&b.topic_sequence));
        Ok(progresses)
    }

    // ==================== Helpers ====================

    /// Identity headers from the current credential snapshot; empty when
    /// credentials were never set (the server rejects such requests)
    fn identity_headers(&self) -> Vec<(&'static str, String)> {
        match self.credentials.snapshot() {
            Some(credentials) => vec![
                (USERNAME_HEADER, credentials.username),
                (SESSION_ID_HEADER, credentials.session_id),
            ],
            None => Vec::new(),
        }
    }

    fn principal(&self) -> String {
        self.credentials
            .snapshot()
            .map(|credentials| credentials.username)
            .unwrap_or_default()
    }
}
