//! # Grafana API
//!
//! A Rust client library for the [Grafana](https://grafana.com/) HTTP API.
//!
//! ## Features
//!
//! - Dashboards: create, fetch (by UID or legacy slug), search, delete
//! - Data sources, teams (members, preferences, external groups)
//! - Access control: roles, role assignments, built-in role assignments
//! - Alerting provisioning: contact points, mute timings, message templates
//! - Grafana Cloud API keys, org preferences, health check
//! - Basic or bearer token authentication, injectable middleware transport
//!
//! Every operation performs exactly one HTTP round trip; failures surface as
//! [`GrafanaError`] values (transport, API status, encode/decode) and nothing
//! is retried internally.
//!
//! ## Example
//!
//! ```rust,no_run
//! use grafana_api::{Credentials, GrafanaClient};
//! use url::Url;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GrafanaClient::new(
//!         Url::parse("http://localhost:3000")?,
//!         Credentials::Basic {
//!             username: "admin".to_string(),
//!             password: "admin".to_string(),
//!         },
//!         Duration::from_secs(10),
//!     )?;
//!
//!     let team_id = client.add_team("backend", Some("backend@example.org")).await?;
//!     client.add_team_member(team_id, 4).await?;
//!
//!     for dashboard in client.dashboards().await? {
//!         println!("{} ({})", dashboard.title, dashboard.uid);
//!     }
//!     Ok(())
//! }
//! ```

mod builtin_roles;
mod client;
mod cloud;
mod contact_point;
mod dashboard;
mod datasource;
mod errors;
mod health;
mod message_template;
mod mute_timing;
mod preferences;
mod role;
mod search;
mod team;

pub use builtin_roles::BuiltInRoleAssignment;
pub use client::{Credentials, GrafanaClient};
pub use cloud::{CloudApiKey, CreateCloudApiKeyInput, ListCloudApiKeysOutput};
pub use contact_point::ContactPoint;
pub use dashboard::{Dashboard, DashboardMeta, DashboardSaveResponse};
pub use datasource::DataSource;
pub use errors::{GrafanaError, Result};
pub use health::HealthResponse;
pub use message_template::MessageTemplate;
pub use mute_timing::{
    DayOfMonthRange, MonthRange, MuteTiming, TimeInterval, TimeRange, WeekdayRange, YearRange,
};
pub use preferences::{Preferences, UpdateOrgPreferencesResponse};
pub use role::{Permission, Role, RoleAssignments};
pub use search::FolderDashboardSearchResponse;
pub use team::{SearchTeam, Team, TeamGroup, TeamMember};
