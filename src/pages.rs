//! Page cache singletons
//!
//! One slot per page-level view. The first successful load constructs
//! the view-model, attaches it once to its named mount point(s), and
//! fills the slot; every later load writes through the slot's reactive
//! containers in place so existing bindings keep observing the same
//! containers. Failed loads log and leave the last-known-good state
//! untouched.

use crate::client::ApiClient;
use crate::error::Result;
use crate::model::{Group, MasteryProgress};
use crate::observable::Observable;
use std::sync::{Arc, Mutex};

/// Mount point for the group-authority tree view
pub const GROUP_TREE_MOUNT: &str = "groups-under-authority-tree";
/// Mount point for the mastery-progress table body
pub const MASTERY_TABLE_MOUNT: &str = "mastery-progress-table";
/// Mount point for the mastery-progress header
pub const MASTERY_HEADER_MOUNT: &str = "mastery-progress-header";

/// One-time attachment of a view-model to a named mount point
///
/// The binding and rendering mechanism is an external collaborator; the
/// cache only guarantees each mount point is bound exactly once per
/// page lifetime.
pub trait MountBinder: Send + Sync {
    fn bind_group_tree(&self, mount_point: &str, model: &Arc<GroupTreeModel>);
    fn bind_mastery_table(&self, mount_point: &str, model: &Arc<MasteryTableModel>);
}

/// View-model behind the group-authority tree
#[derive(Debug)]
pub struct GroupTreeModel {
    pub groups: Observable<Vec<Group>>,
}

impl GroupTreeModel {
    fn new(groups: Vec<Group>) -> Self {
        Self {
            groups: Observable::new(groups),
        }
    }
}

/// View-model behind the mastery-progress table and header
#[derive(Debug)]
pub struct MasteryTableModel {
    pub username: Observable<String>,
    pub progresses: Observable<Vec<MasteryProgress>>,
}

impl MasteryTableModel {
    fn new(username: String, progresses: Vec<MasteryProgress>) -> Self {
        Self {
            username: Observable::new(username),
            progresses: Observable::new(progresses),
        }
    }
}

/// Per-page cache of view-model singletons
///
/// Constructed explicitly with the client and binder it needs; exactly
/// one instance is expected per page context.
pub struct PageCache {
    api: Arc<ApiClient>,
    binder: Box<dyn MountBinder>,
    group_tree: Mutex<Option<Arc<GroupTreeModel>>>,
    mastery_table: Mutex<Option<Arc<MasteryTableModel>>>,
}

impl PageCache {
    pub fn new(api: Arc<ApiClient>, binder: Box<dyn MountBinder>) -> Self {
        Self {
            api,
            binder,
            group_tree: Mutex::new(None),
            mastery_table: Mutex::new(None),
        }
    }

    /// The client this cache loads through
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// Current group-tree singleton, once the first load has succeeded
    pub fn group_tree(&self) -> Option<Arc<GroupTreeModel>> {
        self.group_tree.lock().expect("page cache lock poisoned").clone()
    }

    /// Current mastery-table singleton, once the first load has succeeded
    pub fn mastery_table(&self) -> Option<Arc<MasteryTableModel>> {
        self.mastery_table
            .lock()
            .expect("page cache lock poisoned")
            .clone()
    }

    /// Load the group tree and upsert it into the page singleton
    pub async fn load_groups_under_authority(&self, privilege: &str) {
        match self.api.load_groups_under_authority(privilege).await {
            Ok(groups) => self.upsert_group_tree(groups),
            Err(err) => tracing::error!("{}", err),
        }
    }

    /// Load a student's mastery progress and upsert it into the page
    /// singleton, binding the table and header mounts on first success
    pub async fn load_mastery_progress(&self, username: &str, group_authority: &str) {
        match self
            .api
            .load_mastery_progress(username, Some(group_authority))
            .await
        {
            Ok(progresses) => self.upsert_mastery_table(username, progresses),
            Err(err) => tracing::error!("{}", err),
        }
    }

    fn upsert_group_tree(&self, groups: Vec<Group>) {
        let mut slot = self.group_tree.lock().expect("page cache lock poisoned");
        match slot.as_ref() {
            Some(model) => model.groups.set(groups),
            None => {
                let model = Arc::new(GroupTreeModel::new(groups));
                self.binder.bind_group_tree(GROUP_TREE_MOUNT, &model);
                *slot = Some(model);
            }
        }
    }

    fn upsert_mastery_table(&self, username: &str, progresses: Vec<MasteryProgress>) {
        let mut slot = self.mastery_table.lock().expect("page cache lock poisoned");
        match slot.as_ref() {
            Some(model) => {
                tracing::info!("reloading mastery progress cache for {}", username);
                model.username.set(username.to_string());
                model.progresses.set(progresses);
            }
            None => {
                let model = Arc::new(MasteryTableModel::new(username.to_string(), progresses));
                self.binder.bind_mastery_table(MASTERY_TABLE_MOUNT, &model);
                self.binder.bind_mastery_table(MASTERY_HEADER_MOUNT, &model);
                *slot = Some(model);
            }
        }
    }

    /// Error-surfacing variant of [`load_groups_under_authority`] for
    /// pages that chain work on completion; same cache discipline.
    ///
    /// [`load_groups_under_authority`]: PageCache::load_groups_under_authority
    pub async fn try_load_groups_under_authority(&self, privilege: &str) -> Result<()> {
        let groups = self.api.load_groups_under_authority(privilege).await?;
        self.upsert_group_tree(groups);
        Ok(())
    }

    /// Error-surfacing variant of [`load_mastery_progress`]
    ///
    /// [`load_mastery_progress`]: PageCache::load_mastery_progress
    pub async fn try_load_mastery_progress(
        &self,
        username: &str,
        group_authority: &str,
    ) -> Result<()> {
        let progresses = self
            .api
            .load_mastery_progress(username, Some(group_authority))
            .await?;
        self.upsert_mastery_table(username, progresses);
        Ok(())
    }
}
