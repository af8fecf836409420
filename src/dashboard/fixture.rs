//! Fixture payload
//!
//! The static JSON document standing in for a backend. Every section and
//! field is optional; absent parts are simply not rendered.

use serde::{Deserialize, Serialize};

use super::FixtureError;

/// Whole fixture document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsSection>,
}

/// `dashboard` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_activity: Option<Vec<ActivityRecord>>,
}

/// Four independent counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_users: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_sessions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<u64>,
}

/// One row of the recent activity table, rendered verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub status: String,
}

/// `analytics` section: weekly time series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_growth: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_views: Option<Vec<f64>>,
}

impl Fixture {
    /// Parse a fixture document
    pub fn parse(bytes: &[u8]) -> Result<Self, FixtureError> {
        serde_json::from_slice(bytes).map_err(|e| FixtureError::Parse(e.to_string()))
    }

    /// Whether any section the dashboard knows how to render is present
    pub fn has_recognized_sections(&self) -> bool {
        self.dashboard.is_some() || self.analytics.is_some()
    }

    /// Hardcoded dataset shown when the fixture cannot be loaded
    pub fn fallback() -> Self {
        Self {
            dashboard: Some(DashboardSection {
                stats: Some(StatsSnapshot::fallback()),
                recent_activity: None,
            }),
            analytics: Some(AnalyticsSection::fallback()),
        }
    }
}

impl StatsSnapshot {
    pub fn fallback() -> Self {
        Self {
            total_users: Some(1250),
            active_sessions: Some(342),
            revenue: Some(125_000),
            products: Some(45),
        }
    }
}

impl AnalyticsSection {
    pub fn fallback() -> Self {
        Self {
            user_growth: Some(vec![120.0, 150.0, 180.0, 200.0, 250.0, 300.0, 350.0]),
            revenue: Some(vec![
                10000.0, 15000.0, 12000.0, 18000.0, 20000.0, 25000.0, 30000.0,
            ]),
            product_views: Some(vec![450.0, 520.0, 480.0, 600.0, 750.0, 800.0, 900.0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bundled_fixture() {
        let fixture = Fixture::parse(include_bytes!("../../data/mock-data.json")).unwrap();
        let dashboard = fixture.dashboard.as_ref().unwrap();
        assert_eq!(dashboard.stats, Some(StatsSnapshot::fallback()));
        assert_eq!(dashboard.recent_activity.as_ref().unwrap().len(), 5);
        assert_eq!(fixture.analytics, Some(AnalyticsSection::fallback()));
    }

    #[test]
    fn test_partial_payload() {
        let fixture = Fixture::parse(br#"{"dashboard":{"stats":{"revenue":10}}}"#).unwrap();
        let stats = fixture.dashboard.unwrap().stats.unwrap();
        assert_eq!(stats.revenue, Some(10));
        assert_eq!(stats.total_users, None);
        assert!(fixture.analytics.is_none());
    }

    #[test]
    fn test_unrecognized_payload() {
        let fixture = Fixture::parse(br#"{"products":[]}"#).unwrap();
        assert!(!fixture.has_recognized_sections());
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(matches!(Fixture::parse(b"<html>"), Err(FixtureError::Parse(_))));
        assert!(Fixture::parse(b"[1,2,3]").is_err());
        assert!(Fixture::parse(br#"{"dashboard":{"stats":{"revenue":-1}}}"#).is_err());
    }
}
