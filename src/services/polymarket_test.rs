use super::*;

#[test]
fn catalog_respects_the_limit() {
	let service = PolymarketService::new();
	assert_eq!(service.markets(2).len(), 2);
	assert_eq!(service.markets(20).len(), 4);
}

#[test]
fn catalog_uses_venue_native_ids() {
	let ids: Vec<String> = PolymarketService::new()
		.markets(usize::MAX)
		.into_iter()
		.map(|m| m.id)
		.collect();
	assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[test]
fn lookup_finds_markets_by_venue_id_only() {
	let service = PolymarketService::new();
	let market = service.market_by_id("3").unwrap();
	assert!(market.title.contains("Nikkei"));
	assert_eq!(market.venue, "Polymarket");
	assert!(service.market_by_id("mkt-3").is_none());
	assert!(service.market_by_id("99").is_none());
}
