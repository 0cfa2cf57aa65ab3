//! Daily summary model and the filter pipeline over it.

pub mod filter;
pub mod label;
pub mod types;

pub use filter::{filter_day, format_publication_date, SummaryError};
pub use label::extract_label;
pub use types::{DailySummary, Item, OneOrMany, ResultRecord};
