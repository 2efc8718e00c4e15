use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GrafanaClient;
use crate::errors::Result;

const MUTE_TIMINGS_PATH: &str = "/api/v1/provisioning/mute-timings";

/// Range expressions follow the upstream grammar: a single value ("1",
/// "monday") or an inclusive span ("1:3", "monday:wednesday").
pub type WeekdayRange = String;
pub type DayOfMonthRange = String;
pub type MonthRange = String;
pub type YearRange = String;

/// A named mute timing for Grafana Alerting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuteTiming {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_intervals: Vec<TimeInterval>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provenance: String,
}

/// One interval during which notifications are muted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub times: Vec<TimeRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekdays: Vec<WeekdayRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_month: Vec<DayOfMonthRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub months: Vec<MonthRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub years: Vec<YearRange>,
}

/// A start/end pair in "hh:mm" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(rename = "start_time")]
    pub start_minute: String,
    #[serde(rename = "end_time")]
    pub end_minute: String,
}

impl GrafanaClient {
    /// Fetch all mute timings
    pub async fn mute_timings(&self) -> Result<Vec<MuteTiming>> {
        self.request(Method::GET, MUTE_TIMINGS_PATH, &[], None::<&()>)
            .await
    }

    /// Fetch a mute timing by name
    pub async fn mute_timing(&self, name: &str) -> Result<MuteTiming> {
        self.request(
            Method::GET,
            &format!("{MUTE_TIMINGS_PATH}/{name}"),
            &[],
            None::<&()>,
        )
        .await
    }

    /// Create a mute timing
    pub async fn new_mute_timing(&self, timing: &MuteTiming) -> Result<()> {
        self.request_empty(Method::POST, MUTE_TIMINGS_PATH, &[], Some(timing))
            .await
    }

    /// Replace a mute timing, addressed by its name
    pub async fn update_mute_timing(&self, timing: &MuteTiming) -> Result<()> {
        self.request_empty(
            Method::PUT,
            &format!("{MUTE_TIMINGS_PATH}/{}", timing.name),
            &[],
            Some(timing),
        )
        .await
    }

    /// Delete a mute timing by name
    pub async fn delete_mute_timing(&self, name: &str) -> Result<()> {
        self.request_empty(
            Method::DELETE,
            &format!("{MUTE_TIMINGS_PATH}/{name}"),
            &[],
            None::<&()>,
        )
        .await
    }
}
