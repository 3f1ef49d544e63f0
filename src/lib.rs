//! Rust client for the academy API
//!
//! Fetches authorization group trees, group rosters, missions, and
//! mastery-progress data, maps the responses into typed models, and
//! keeps page-lifetime view-model singletons synchronized as data is
//! lazily filled in (expanding a progress row fetches that topic's
//! missions on demand).
//!
//! # Example
//!
//! ```rust,no_run
//! use academy_client::{ApiClient, ClientConfig, CredentialStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = CredentialStore::new();
//! credentials.set("john-williams", "session-token");
//!
//! let client = ApiClient::new(ClientConfig::default(), credentials);
//!
//! // Group tree the principal may read student sashes for
//! let groups = client.load_groups_under_authority("readStudentSashes").await?;
//!
//! // A delegated read of one student's progress
//! let progress = client
//!     .load_mastery_progress("emmy-noether", Some("/academy/period-1"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod gateway;
pub mod model;
pub mod observable;
pub mod pages;
pub mod records;
pub mod view;

// Re-export main types
pub use client::ApiClient;
pub use config::ClientConfig;
pub use credentials::{CredentialStore, Credentials};
pub use error::{ApiError, Result};
pub use model::{Group, MasteryProgress, Mission, User};
pub use observable::Observable;
pub use pages::{GroupTreeModel, MasteryTableModel, MountBinder, PageCache};
pub use view::ProgressState;
