//! Record Types
//!
//! Domain records held in page-region stores, plus the small display
//! helpers the feeds use: badges, icon glyphs, validity labels and the
//! appliance energy math.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::store::HasId;

/// An alert post published by the department.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub message: String,
    /// Classification: `high`, `medium` or `low`.
    pub priority: String,
    /// Human-readable creation time.
    pub posted_at: String,
}

impl HasId for Post {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A broadcast weather alert with a validity window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub id: u64,
    pub title: String,
    /// Kind: `thunderstorm`, `heavy-rain`, `snow`, `heat-wave`, ...
    pub kind: String,
    /// Classification: `warning`, `advisory` or `emergency`.
    pub severity: String,
    pub message: String,
    /// End of the validity window, local wall-clock time.
    pub valid_until: NaiveDateTime,
    pub sent_at: String,
}

impl HasId for WeatherAlert {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A published news article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Classification: `maintenance`, `updates`, `outage` or `general`.
    pub category: String,
    pub published_at: String,
}

impl HasId for NewsItem {
    fn id(&self) -> u64 {
        self.id
    }
}

/// An appliance row in the energy calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub id: u64,
    pub name: String,
    /// Rated draw in watts, strictly positive.
    pub watts: f64,
    /// Usage hours per day, non-negative.
    pub hours: f64,
}

impl HasId for Appliance {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Appliance {
    /// Daily energy use in kWh. Derived at render time, never stored.
    pub fn daily_kwh(&self) -> f64 {
        self.watts * self.hours / 1000.0
    }
}

/// Total daily energy across all appliances, in kWh.
pub fn total_daily_kwh(items: &[Appliance]) -> f64 {
    items.iter().map(Appliance::daily_kwh).sum()
}

/// Daily running cost at the given tariff (currency per kWh).
pub fn daily_cost(daily_kwh: f64, cost_per_kwh: f64) -> f64 {
    daily_kwh * cost_per_kwh
}

/// Human-readable timestamp for freshly created records.
pub fn local_timestamp() -> String {
    Local::now().format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Upper-cased badge text for a classification field.
pub fn badge_label(classification: &str) -> String {
    classification.to_uppercase()
}

/// Badge tone classes for a classification field.
pub fn badge_class(classification: &str) -> &'static str {
    match classification {
        "high" | "warning" | "emergency" | "outage" => "bg-red-500 text-white",
        "medium" | "advisory" => "bg-yellow-500 text-black",
        "low" | "normal" | "updates" => "bg-emerald-500 text-black",
        "maintenance" => "bg-blue-500 text-white",
        _ => "bg-gray-500 text-white",
    }
}

/// ACTIVE/EXPIRED label for a weather alert validity window.
///
/// Recomputed on every render, so an alert flips to EXPIRED purely by
/// wall-clock advance, with no data mutation.
pub fn validity_label(valid_until: NaiveDateTime, now: NaiveDateTime) -> &'static str {
    if valid_until > now {
        "ACTIVE"
    } else {
        "EXPIRED"
    }
}

/// Icon glyph for a fault channel. Unknown channels get a generic
/// warning glyph.
pub fn fault_icon(kind: &str) -> &'static str {
    match kind {
        "voltage" => "⚡",
        "current" => "🔌",
        "frequency" => "〰️",
        "temperature" => "🌡️",
        "connection" => "🔗",
        _ => "⚠️",
    }
}

/// Icon glyph for a weather alert kind.
pub fn weather_icon(kind: &str) -> &'static str {
    match kind {
        "thunderstorm" => "⛈️",
        "heavy-rain" => "🌧️",
        "snow" => "❄️",
        "heat-wave" => "☀️",
        "cold-wave" => "🧊",
        "wind" => "💨",
        "fog" => "🌫️",
        _ => "☁️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fan() -> Appliance {
        Appliance {
            id: 1,
            name: "Fan".to_string(),
            watts: 75.0,
            hours: 8.0,
        }
    }

    #[test]
    fn daily_energy_for_a_fan() {
        assert_eq!(fan().daily_kwh(), 0.6);
        assert_eq!(format!("{:.2} kWh", fan().daily_kwh()), "0.60 kWh");
    }

    #[test]
    fn daily_cost_at_tariff_eight() {
        let kwh = total_daily_kwh(&[fan()]);
        assert_eq!(format!("₹{:.2}", daily_cost(kwh, 8.0)), "₹4.80");
    }

    #[test]
    fn total_over_empty_list_is_zero() {
        assert_eq!(total_daily_kwh(&[]), 0.0);
    }

    #[test]
    fn badges_are_upper_cased() {
        assert_eq!(badge_label("high"), "HIGH");
        assert_eq!(badge_label("heat-wave"), "HEAT-WAVE");
    }

    #[test]
    fn badge_class_falls_back_for_unknown_levels() {
        assert_eq!(badge_class("high"), "bg-red-500 text-white");
        assert_eq!(badge_class("nonsense"), "bg-gray-500 text-white");
    }

    #[test]
    fn validity_flips_across_the_window_with_no_mutation() {
        let valid_until = Local::now().naive_local();
        let before = valid_until - Duration::minutes(5);
        let after = valid_until + Duration::minutes(5);

        assert_eq!(validity_label(valid_until, before), "ACTIVE");
        assert_eq!(validity_label(valid_until, after), "EXPIRED");
    }

    #[test]
    fn fault_icons_cover_known_channels_and_fall_back() {
        assert_eq!(fault_icon("voltage"), "⚡");
        assert_eq!(fault_icon("connection"), "🔗");
        assert_eq!(fault_icon("gamma-rays"), "⚠️");
    }

    #[test]
    fn weather_icons_fall_back_to_a_cloud() {
        assert_eq!(weather_icon("thunderstorm"), "⛈️");
        assert_eq!(weather_icon("meteor"), "☁️");
    }
}
