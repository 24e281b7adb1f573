//! Payload types returned inside the `{ data: ... }` envelope.
//!
//! Reference data (`Location`, `Metric`) and the summary statistics are typed;
//! raw records and trend results stay opaque JSON because only the chart and
//! trend views look inside them.

use crate::quality::QualityLevel;
use chrono::NaiveDate;
use eco_utils::dates::parse_date;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Accept an identifier sent either as a JSON number or a string.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(id) => id.to_string(),
        RawId::Text(id) => id,
    })
}

/// Accept a statistic sent as a JSON number or a numeric string (SQL
/// decimals often arrive quoted). Null or a non-numeric string reads as `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(n)) => Some(n),
        Some(RawNumber::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// A monitoring location (reference data, fetched once).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Location {
    /// Selector label: "Name, Country" when the country is known.
    pub fn label(&self) -> String {
        match self.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

/// A measured quantity (reference data, fetched once).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Metric {
    /// Selector label: the display name, falling back to the wire name.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ => &self.name,
        }
    }
}

/// One element of the raw climate series.
///
/// The record is kept as the JSON the backend sent. Accessors read the
/// fields the raw-data charts need and return `None` when a field is absent,
/// null, or of an unexpected type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClimateRecord(pub Value);

impl ClimateRecord {
    fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.field(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    pub fn location_id(&self) -> Option<String> {
        self.text("location_id")
    }

    pub fn location_name(&self) -> Option<String> {
        self.text("location_name")
    }

    /// The observation date as sent (ISO date, possibly with a time part).
    pub fn date_text(&self) -> Option<String> {
        self.text("date")
    }

    pub fn date(&self) -> Option<NaiveDate> {
        let raw = self.date_text()?;
        let day = raw.get(..10).unwrap_or(&raw);
        parse_date(day).ok()
    }

    pub fn metric(&self) -> Option<String> {
        self.text("metric")
    }

    pub fn unit(&self) -> Option<String> {
        self.text("unit")
    }

    /// Numeric value; numeric strings (as some SQL drivers emit decimals) are accepted.
    pub fn value(&self) -> Option<f64> {
        match self.field("value")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn quality(&self) -> Option<QualityLevel> {
        self.text("quality")?.parse().ok()
    }
}

/// Share of observations per quality tier, each a fraction in [0, 1].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityDistribution {
    #[serde(deserialize_with = "lenient_f64")]
    pub excellent: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub good: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub questionable: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub poor: Option<f64>,
}

impl QualityDistribution {
    pub fn get(&self, level: QualityLevel) -> Option<f64> {
        match level {
            QualityLevel::Excellent => self.excellent,
            QualityLevel::Good => self.good,
            QualityLevel::Questionable => self.questionable,
            QualityLevel::Poor => self.poor,
        }
    }
}

/// Backend-computed statistics for one metric.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricSummary {
    pub unit: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub min: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub avg: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub max: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub weighted_avg: Option<f64>,
    pub quality_distribution: Option<QualityDistribution>,
}

/// Weighted summary keyed by metric name.
pub type Summary = BTreeMap<String, MetricSummary>;

/// Trend analysis keyed by metric name; each entry is opaque to this layer.
pub type TrendResult = BTreeMap<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn location_accepts_numeric_and_string_ids() {
        let numeric: Location =
            serde_json::from_value(json!({"id": 4, "name": "Oslo", "country": "Norway"})).unwrap();
        assert_eq!(numeric.id, "4");
        let text: Location = serde_json::from_value(json!({"id": "x9", "name": "Quito"})).unwrap();
        assert_eq!(text.id, "x9");
        assert_eq!(text.country, None);
    }

    #[test]
    fn location_label_includes_country_when_present() {
        let with_country: Location =
            serde_json::from_value(json!({"id": 1, "name": "Irvine", "country": "USA"})).unwrap();
        assert_eq!(with_country.label(), "Irvine, USA");
        let without: Location =
            serde_json::from_value(json!({"id": 2, "name": "Reykjavik", "country": ""})).unwrap();
        assert_eq!(without.label(), "Reykjavik");
    }

    #[test]
    fn metric_label_prefers_display_name() {
        let metric: Metric = serde_json::from_value(
            json!({"name": "precipitation", "display_name": "Precipitation", "unit": "mm"}),
        )
        .unwrap();
        assert_eq!(metric.label(), "Precipitation");
        let bare: Metric = serde_json::from_value(json!({"name": "co2"})).unwrap();
        assert_eq!(bare.label(), "co2");
    }

    #[test]
    fn climate_record_accessors_read_backend_row() {
        let record = ClimateRecord(json!({
            "id": 11,
            "location_id": 2,
            "location_name": "Nairobi",
            "date": "2024-02-03",
            "metric": "temperature",
            "unit": "celsius",
            "value": 21.5,
            "quality": "good"
        }));
        assert_eq!(record.id().as_deref(), Some("11"));
        assert_eq!(record.location_id().as_deref(), Some("2"));
        assert_eq!(record.location_name().as_deref(), Some("Nairobi"));
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 2, 3));
        assert_eq!(record.metric().as_deref(), Some("temperature"));
        assert_eq!(record.unit().as_deref(), Some("celsius"));
        assert_eq!(record.value(), Some(21.5));
        assert_eq!(record.quality(), Some(QualityLevel::Good));
    }

    #[test]
    fn climate_record_tolerates_odd_shapes() {
        let record = ClimateRecord(json!({"date": "2024-02-03T00:00:00", "value": "7.25", "quality": null}));
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 2, 3));
        assert_eq!(record.value(), Some(7.25));
        assert_eq!(record.quality(), None);

        let scalar = ClimateRecord(json!(3));
        assert_eq!(scalar.date(), None);
        assert_eq!(scalar.value(), None);
    }

    #[test]
    fn summary_stats_accept_quoted_decimals() {
        let summary: Summary = serde_json::from_value(json!({
            "co2": {
                "unit": "ppm", "min": "400", "avg": "410.5", "max": 420, "weighted_avg": null,
                "quality_distribution": {"excellent": "0.5", "good": 0.3, "poor": "n/a"}
            }
        }))
        .unwrap();
        let co2 = &summary["co2"];
        assert_eq!(co2.min, Some(400.0));
        assert_eq!(co2.avg, Some(410.5));
        assert_eq!(co2.max, Some(420.0));
        assert_eq!(co2.weighted_avg, None);
        let dist = co2.quality_distribution.as_ref().unwrap();
        assert_eq!(dist.get(QualityLevel::Excellent), Some(0.5));
        assert_eq!(dist.get(QualityLevel::Good), Some(0.3));
        assert_eq!(dist.get(QualityLevel::Questionable), None);
        assert_eq!(dist.get(QualityLevel::Poor), None);
    }

    #[test]
    fn summary_fields_are_optional() {
        let summary: Summary = serde_json::from_value(json!({
            "co2": {"unit": "ppm", "min": 400, "avg": 410.5, "max": 420},
            "humidity": {}
        }))
        .unwrap();
        assert_eq!(summary["co2"].avg, Some(410.5));
        assert_eq!(summary["co2"].weighted_avg, None);
        assert_eq!(summary["humidity"], MetricSummary::default());
    }

    #[test]
    fn quality_distribution_lookup_by_level() {
        let dist: QualityDistribution =
            serde_json::from_value(json!({"excellent": 0.5, "poor": 0.1})).unwrap();
        assert_eq!(dist.get(QualityLevel::Excellent), Some(0.5));
        assert_eq!(dist.get(QualityLevel::Good), None);
        assert_eq!(dist.get(QualityLevel::Poor), Some(0.1));
    }
}
