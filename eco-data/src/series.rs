//! Chart inputs derived from raw climate records.
//!
//! All structs derive `Serialize` so they can be handed to D3.js as JSON
//! from the Dioxus WASM frontend.

use eco_api::{ClimateRecord, QualityLevel};
use eco_utils::dates::format_date;
use serde::Serialize;

/// Series name used for records that carry no metric.
pub const UNNAMED_SERIES: &str = "value";

/// A (series, date, value) point for the multi-line trend chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub series: String,
    /// YYYY-MM-DD
    pub date: String,
    pub value: f64,
    pub quality: Option<QualityLevel>,
}

/// Line-chart points, one series per metric, ordered by date.
///
/// Records without a parseable date or a numeric value are skipped.
pub fn line_series(records: &[ClimateRecord]) -> Vec<SeriesPoint> {
    let mut points: Vec<(chrono::NaiveDate, SeriesPoint)> = records
        .iter()
        .filter_map(|record| {
            let date = record.date()?;
            let value = record.value()?;
            Some((
                date,
                SeriesPoint {
                    series: record.metric().unwrap_or_else(|| UNNAMED_SERIES.to_string()),
                    date: format_date(&date),
                    value,
                    quality: record.quality(),
                },
            ))
        })
        .collect();
    points.sort_by_key(|(date, _)| *date);
    points.into_iter().map(|(_, point)| point).collect()
}

/// One bar of the quality distribution chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QualityBar {
    pub quality: QualityLevel,
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
}

/// Number of records per quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualityCounts {
    pub excellent: usize,
    pub good: usize,
    pub questionable: usize,
    pub poor: usize,
    /// Records with a missing or unknown quality label.
    pub unclassified: usize,
}

impl QualityCounts {
    pub fn from_records(records: &[ClimateRecord]) -> Self {
        let mut counts = QualityCounts::default();
        for record in records {
            match record.quality() {
                Some(QualityLevel::Excellent) => counts.excellent += 1,
                Some(QualityLevel::Good) => counts.good += 1,
                Some(QualityLevel::Questionable) => counts.questionable += 1,
                Some(QualityLevel::Poor) => counts.poor += 1,
                None => counts.unclassified += 1,
            }
        }
        counts
    }

    pub fn count(&self, level: QualityLevel) -> usize {
        match level {
            QualityLevel::Excellent => self.excellent,
            QualityLevel::Good => self.good,
            QualityLevel::Questionable => self.questionable,
            QualityLevel::Poor => self.poor,
        }
    }

    /// Records with a known quality tier.
    pub fn classified(&self) -> usize {
        self.excellent + self.good + self.questionable + self.poor
    }

    pub fn total(&self) -> usize {
        self.classified() + self.unclassified
    }

    /// Fraction of classified records in `level`; `None` when nothing is classified.
    pub fn share(&self, level: QualityLevel) -> Option<f64> {
        let classified = self.classified();
        if classified == 0 {
            return None;
        }
        Some(self.count(level) as f64 / classified as f64)
    }

    /// Mean quality weight of the classified records.
    pub fn mean_weight(&self) -> Option<f64> {
        let classified = self.classified();
        if classified == 0 {
            return None;
        }
        let weighted: f64 = QualityLevel::ALL
            .iter()
            .map(|level| self.count(*level) as f64 * level.weight())
            .sum();
        Some(weighted / classified as f64)
    }

    /// Tier holding the most records; ties go to the better tier.
    pub fn dominant(&self) -> Option<QualityLevel> {
        QualityLevel::ALL
            .iter()
            .copied()
            .filter(|level| self.count(*level) > 0)
            .fold(None, |best: Option<QualityLevel>, level| match best {
                Some(b) if self.count(b) >= self.count(level) => Some(b),
                _ => Some(level),
            })
    }

    /// Bars for the quality distribution chart, best tier first.
    pub fn bars(&self) -> Vec<QualityBar> {
        QualityLevel::ALL
            .iter()
            .map(|&level| QualityBar {
                quality: level,
                label: level.label(),
                count: self.count(level),
                color: level.color(),
            })
            .collect()
    }
}
