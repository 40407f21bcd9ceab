mod listing_tests;
mod navigation_tests;
