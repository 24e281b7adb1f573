//! Trend panels: a readable rendering of the backend's opaque trend payload.

use eco_api::TrendResult;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct TrendRow {
    pub label: String,
    pub value: String,
}

/// One panel per metric, in metric-name order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPanel {
    pub metric: String,
    pub rows: Vec<TrendRow>,
}

/// "rate_of_change" -> "Rate of change"
pub fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Scalars print plainly (floats to at most three decimals), nested values as compact JSON.
pub fn format_trend_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) => {
                let fixed = format!("{:.3}", f);
                fixed.trim_end_matches('0').trim_end_matches('.').to_string()
            }
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

pub fn trend_panels(trends: &TrendResult) -> Vec<TrendPanel> {
    trends
        .iter()
        .map(|(metric, data)| {
            let rows = match data {
                Value::Object(fields) => fields
                    .iter()
                    .map(|(key, value)| TrendRow {
                        label: humanize_key(key),
                        value: format_trend_value(value),
                    })
                    .collect(),
                other => vec![TrendRow {
                    label: "Trend".to_string(),
                    value: format_trend_value(other),
                }],
            };
            TrendPanel {
                metric: metric.clone(),
                rows,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("rate_of_change"), "Rate of change");
        assert_eq!(humanize_key("trend"), "Trend");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_format_trend_value() {
        assert_eq!(format_trend_value(&json!(null)), "-");
        assert_eq!(format_trend_value(&json!(12)), "12");
        assert_eq!(format_trend_value(&json!(0.123456)), "0.123");
        assert_eq!(format_trend_value(&json!(2.5)), "2.5");
        assert_eq!(format_trend_value(&json!("increasing")), "increasing");
        assert_eq!(format_trend_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_trend_panels_flatten_top_level_fields() {
        let mut trends = TrendResult::new();
        trends.insert(
            "temperature".to_string(),
            json!({"direction": "increasing", "rate": 0.5, "anomalies": []}),
        );
        trends.insert("co2".to_string(), json!("flat"));
        let panels = trend_panels(&trends);
        assert_eq!(panels[0].metric, "co2");
        assert_eq!(panels[0].rows, vec![TrendRow { label: "Trend".to_string(), value: "flat".to_string() }]);
        let labels: Vec<&str> = panels[1].rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Anomalies", "Direction", "Rate"]);
        assert_eq!(panels[1].rows[2].value, "0.5");
    }
}
