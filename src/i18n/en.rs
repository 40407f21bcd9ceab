pub(super) const STRINGS: &[(&str, &str)] = &[
    ("app.name", "Aura Historia"),
    ("nav.home", "Home"),
    // listing history
    ("history.title", "History"),
    ("history.noData", "No data available for this listing."),
    ("history.noEvents", "No events available for this filter."),
    ("history.filters.all", "All"),
    ("history.filters.price", "Price"),
    ("history.filters.availability", "Availability"),
    ("history.events.created", "Recorded in the system"),
    ("history.events.statusChanged", "Status changed from {{oldState}} to {{newState}}"),
    ("history.events.priceDiscovered", "Price discovered: {{price}}"),
    ("history.events.priceChanged", "Price {{verb}} from {{oldPrice}} to {{newPrice}}"),
    ("history.events.priceFallen", "fallen"),
    ("history.events.priceIncreased", "increased"),
    ("history.events.priceRemoved", "Price removed: {{price}}"),
    ("product.history.noData", "No data available for this product."),
    ("item.history.noData", "No data available for this item."),
    // states
    ("productState.listed", "Listed"),
    ("productState.available", "Available"),
    ("productState.reserved", "Reserved"),
    ("productState.sold", "Sold"),
    ("productState.removed", "Removed"),
    ("productState.unknown", "Unknown"),
    // price badges
    ("priceBadge.discovered", "Price discovered"),
    ("priceBadge.dropped", "Price dropped"),
    ("priceBadge.increased", "Price increased"),
    ("priceBadge.removed", "Price removed"),
    // price chart
    ("priceChart.title", "Price history"),
    ("priceChart.noData", "No price data available."),
    ("priceChart.timeRanges.1d", "1D"),
    ("priceChart.timeRanges.5d", "5D"),
    ("priceChart.timeRanges.1m", "1M"),
    ("priceChart.timeRanges.3m", "3M"),
    ("priceChart.timeRanges.6m", "6M"),
    ("priceChart.timeRanges.1y", "1Y"),
    ("priceChart.timeRanges.all", "All"),
    // listing page
    ("listing.shop", "Shop"),
    ("listing.price", "Price"),
    ("listing.state", "Status"),
    ("listing.noPrice", "Price on request"),
    ("listing.viewAtShop", "View at the shop"),
    // landing page
    ("home.title", "Antiques from many shops, in one place"),
    ("home.intro", "Track price and availability changes of individual listings."),
    ("home.lookup.shopId", "Shop ID"),
    ("home.lookup.listingId", "Listing ID"),
    ("home.lookup.submit", "Show history"),
];
