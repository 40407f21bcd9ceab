pub mod events;
pub mod listing;
pub mod price;
pub mod price_chart;
pub mod state;
pub mod subject;
pub mod timeline;
