pub mod history_table;
pub mod prediction_card;
pub mod price_trend_chart;

pub use history_table::HistoryTable;
pub use prediction_card::PredictionCard;
pub use price_trend_chart::PriceTrendChart;
