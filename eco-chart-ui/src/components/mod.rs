//! Dioxus RSX components for the EcoVision dashboard.

mod analysis_type_toggle;
mod chart_card;
mod date_range_picker;
mod filter_panel;
mod loading_spinner;
mod location_selector;
mod metric_selector;
mod quality_indicator;
mod quality_selector;
mod raw_charts;
mod result_panel;
mod summary_cards;
mod trend_view;

pub use analysis_type_toggle::AnalysisTypeToggle;
pub use chart_card::ChartCard;
pub use date_range_picker::DateRangePicker;
pub use filter_panel::FilterPanel;
pub use loading_spinner::LoadingSpinner;
pub use location_selector::LocationSelector;
pub use metric_selector::MetricSelector;
pub use quality_indicator::QualityIndicator;
pub use quality_selector::QualitySelector;
pub use raw_charts::RawCharts;
pub use result_panel::ResultPanel;
pub use summary_cards::SummaryCards;
pub use trend_view::TrendView;
