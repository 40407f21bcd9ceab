pub(super) const STRINGS: &[(&str, &str)] = &[
    ("app.name", "Aura Historia"),
    ("nav.home", "Startseite"),
    // listing history
    ("history.title", "Historie"),
    ("history.noData", "Keine Daten für diesen Artikel vorhanden."),
    ("history.noEvents", "Keine Events für diesen Filter verfügbar."),
    ("history.filters.all", "Alle"),
    ("history.filters.price", "Preis"),
    ("history.filters.availability", "Verfügbarkeit"),
    ("history.events.created", "Im System erfasst"),
    ("history.events.statusChanged", "Status geändert von {{oldState}} zu {{newState}}"),
    ("history.events.priceDiscovered", "Preis entdeckt: {{price}}"),
    ("history.events.priceChanged", "Preis {{verb}} von {{oldPrice}} auf {{newPrice}}"),
    ("history.events.priceFallen", "gefallen"),
    ("history.events.priceIncreased", "gestiegen"),
    ("history.events.priceRemoved", "Preis entfernt: {{price}}"),
    ("product.history.noData", "Keine Daten für diesen Artikel vorhanden."),
    ("item.history.noData", "Keine Daten für diesen Artikel vorhanden."),
    // states
    ("productState.listed", "Gelistet"),
    ("productState.available", "Verfügbar"),
    ("productState.reserved", "Reserviert"),
    ("productState.sold", "Verkauft"),
    ("productState.removed", "Entfernt"),
    ("productState.unknown", "Unbekannt"),
    // price badges
    ("priceBadge.discovered", "Preis entdeckt"),
    ("priceBadge.dropped", "Preis gesunken"),
    ("priceBadge.increased", "Preis gestiegen"),
    ("priceBadge.removed", "Preis entfernt"),
    // price chart
    ("priceChart.title", "Preisverlauf"),
    ("priceChart.noData", "Keine Preisdaten vorhanden."),
    ("priceChart.timeRanges.1d", "1T"),
    ("priceChart.timeRanges.5d", "5T"),
    ("priceChart.timeRanges.1m", "1M"),
    ("priceChart.timeRanges.3m", "3M"),
    ("priceChart.timeRanges.6m", "6M"),
    ("priceChart.timeRanges.1y", "1J"),
    ("priceChart.timeRanges.all", "Alle"),
    // listing page
    ("listing.shop", "Händler"),
    ("listing.price", "Preis"),
    ("listing.state", "Status"),
    ("listing.noPrice", "Preis auf Anfrage"),
    ("listing.viewAtShop", "Zum Angebot beim Händler"),
    // landing page
    ("home.title", "Antiquitäten aus vielen Shops im Blick"),
    ("home.intro", "Verfolge Preis- und Verfügbarkeitsänderungen einzelner Angebote."),
    ("home.lookup.shopId", "Shop-ID"),
    ("home.lookup.listingId", "Angebots-ID"),
    ("home.lookup.submit", "Historie anzeigen"),
];
