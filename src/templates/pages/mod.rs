pub mod history;
pub mod home;
pub mod listing;
pub mod price_chart;

pub use history::history_card;
pub use home::home_page;
pub use listing::{listing_page, ListingView};
pub use price_chart::price_chart_card;
