//! Metrics Provider
//!
//! Pluggable source for the demo data shown on the dashboards. Pages
//! consume this trait through context, so the rendering code itself
//! contains no randomness and tests can install a fixed provider.

use std::ops::Deref;
use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::state::records::local_timestamp;

/// Current weather snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherNow {
    pub temp_c: f64,
    pub description: String,
    pub wind_kmh: f64,
    pub humidity_pct: f64,
    pub uv_index: f64,
}

/// One day in the short-range forecast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub temp_c: f64,
}

/// A notice shown on the resident feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridNotice {
    /// Feed filter bucket: `grid`, `solar` or `weather`.
    pub kind: String,
    pub icon: String,
    pub title: String,
    pub message: String,
    /// Relative age copy, e.g. "10m ago".
    pub age: String,
}

/// One channel's reading from a fault scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaultReport {
    /// Channel: `voltage`, `current`, `frequency`, `temperature` or
    /// `connection`.
    pub kind: String,
    /// Classification: `low`, `high` or `normal`.
    pub severity: String,
    pub message: String,
    pub location: String,
    pub detected_at: String,
}

impl FaultReport {
    /// Nominal readings render as ok; everything else warns.
    pub fn is_nominal(&self) -> bool {
        self.severity == "normal"
    }
}

/// Source of the demo data rendered by the dashboards.
pub trait MetricsProvider {
    fn current_weather(&self) -> WeatherNow;

    fn forecast(&self) -> Vec<ForecastDay>;

    /// Seven daily kWh readings, Monday through Sunday.
    fn daily_consumption(&self) -> Vec<f64>;

    fn grid_notices(&self) -> Vec<GridNotice>;

    /// One report per monitored channel at the given location.
    fn scan_faults(&self, location: &str) -> Vec<FaultReport>;
}

/// Shared handle to the installed [`MetricsProvider`].
#[derive(Clone)]
pub struct Metrics(Rc<dyn MetricsProvider>);

impl Metrics {
    pub fn new(provider: impl MetricsProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }
}

impl Deref for Metrics {
    type Target = dyn MetricsProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Install the demo provider for the whole component tree.
pub fn provide_demo_metrics() {
    provide_context(Metrics::new(DemoMetrics));
}

/// Fetch the installed provider.
pub fn use_metrics() -> Metrics {
    use_context::<Metrics>().expect("MetricsProvider not found")
}

/// Total across the week's readings.
pub fn week_total(days: &[f64]) -> f64 {
    days.iter().sum()
}

/// Monthly estimate extrapolated from a weekly total.
pub fn month_estimate(week_kwh: f64) -> f64 {
    week_kwh * 4.3
}

/// Simulated data source backing the mockup.
pub struct DemoMetrics;

fn rand_range(lo: f64, hi: f64) -> f64 {
    lo + js_sys::Math::random() * (hi - lo)
}

/// Rounds to one decimal, the precision the dashboards display.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl MetricsProvider for DemoMetrics {
    fn current_weather(&self) -> WeatherNow {
        WeatherNow {
            temp_c: round1(rand_range(24.0, 32.0)),
            description: "Partly cloudy".to_string(),
            wind_kmh: round1(rand_range(4.0, 16.0)),
            humidity_pct: rand_range(30.0, 80.0).round(),
            uv_index: round1(rand_range(0.0, 8.0)),
        }
    }

    fn forecast(&self) -> Vec<ForecastDay> {
        ["Mon", "Tue", "Wed", "Thu", "Fri"]
            .iter()
            .map(|day| ForecastDay {
                day: day.to_string(),
                temp_c: rand_range(24.0, 32.0).round(),
            })
            .collect()
    }

    fn daily_consumption(&self) -> Vec<f64> {
        (0..7).map(|_| round1(rand_range(2.0, 8.0))).collect()
    }

    fn grid_notices(&self) -> Vec<GridNotice> {
        let notices = [
            (
                "grid",
                "⚡",
                "Peak Load Alert",
                "High grid load from 6pm-9pm. Consider switching to solar.",
                "Just now",
            ),
            (
                "solar",
                "🔆",
                "Great Solar Window",
                "Solar output optimal between 10am-2pm today.",
                "10m ago",
            ),
            (
                "weather",
                "⛅",
                "Cloud Cover Incoming",
                "Expect reduced solar output after 3pm.",
                "30m ago",
            ),
            (
                "grid",
                "🔌",
                "Scheduled Maintenance",
                "Brief outage expected at 1am tonight in your area.",
                "1h ago",
            ),
        ];

        notices
            .into_iter()
            .map(|(kind, icon, title, message, age)| GridNotice {
                kind: kind.to_string(),
                icon: icon.to_string(),
                title: title.to_string(),
                message: message.to_string(),
                age: age.to_string(),
            })
            .collect()
    }

    fn scan_faults(&self, location: &str) -> Vec<FaultReport> {
        // Fixed channel table; only the location and timestamp vary
        let channels = [
            ("voltage", "low", "Voltage below normal range"),
            ("current", "high", "Current spike detected"),
            ("frequency", "normal", "Frequency within acceptable range"),
            ("temperature", "high", "Transformer temperature elevated"),
            ("connection", "normal", "All connections stable"),
        ];

        channels
            .into_iter()
            .map(|(kind, severity, message)| FaultReport {
                kind: kind.to_string(),
                severity: severity.to_string(),
                message: message.to_string(),
                location: location.to_string(),
                detected_at: local_timestamp(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_scan_covers_every_channel_and_stamps_the_location() {
        let reports = DemoMetrics.scan_faults("Sector 7");

        assert_eq!(reports.len(), 5);
        assert!(reports.iter().all(|r| r.location == "Sector 7"));
        assert!(reports.iter().all(|r| !r.detected_at.is_empty()));

        let kinds: Vec<_> = reports.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec!["voltage", "current", "frequency", "temperature", "connection"]
        );
    }

    #[test]
    fn only_normal_severities_are_nominal() {
        let reports = DemoMetrics.scan_faults("anywhere");
        let nominal: Vec<_> = reports
            .iter()
            .filter(|r| r.is_nominal())
            .map(|r| r.kind.as_str())
            .collect();

        assert_eq!(nominal, vec!["frequency", "connection"]);
    }

    #[test]
    fn notices_fall_into_known_filter_buckets() {
        let notices = DemoMetrics.grid_notices();

        assert_eq!(notices.len(), 4);
        assert!(notices
            .iter()
            .all(|n| ["grid", "solar", "weather"].contains(&n.kind.as_str())));
    }

    #[test]
    fn weekly_totals_and_monthly_estimate() {
        let days = [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

        assert_eq!(week_total(&days), 35.0);
        assert_eq!(month_estimate(week_total(&days)), 150.5);
        assert_eq!(week_total(&[]), 0.0);
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(5.25), 5.3);
        assert_eq!(round1(5.04), 5.0);
        assert_eq!(round1(5.0), 5.0);
    }
}
