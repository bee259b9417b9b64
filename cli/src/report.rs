//! Console reports for collections, assets and classified failures.

use crate::{display::section, item, notify_error, prelude::*};

/// Print the collection identity, market data, 24h and 7d statistics and the
/// social links that are present.
pub(crate) fn print_collection_report<W: Write>(
    out: &mut W,
    collection: &Collection,
    stats: &CollectionStats,
) -> std::io::Result<()> {
    section(out, "📊", "NFT Collection Info")?;
    writeln!(out, "Name: {}", collection.name)?;
    writeln!(
        out,
        "Description: {}",
        collection
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("N/A")
    )?;
    writeln!(out, "Total Supply: {}", compact_number(stats.total_supply))?;
    writeln!(out, "Owners: {}", compact_number(stats.num_owners))?;

    section(out, "💰", "Market Data")?;
    writeln!(out, "Floor Price: {}", wei_to_eth(stats.floor_price))?;
    writeln!(out, "Market Cap: {}", wei_to_eth(stats.market_cap))?;
    writeln!(out, "Total Volume: {}", wei_to_eth(stats.total_volume))?;
    writeln!(out, "Average Price: {}", wei_to_eth(stats.average_price))?;

    section(out, "📈", "Volume Stats (24h)")?;
    writeln!(out, "Volume: {}", wei_to_eth(stats.one_day_volume))?;
    writeln!(out, "Change: {}", signed_percent(stats.one_day_change))?;
    writeln!(out, "Sales: {}", compact_number(stats.one_day_sales))?;

    section(out, "📊", "Volume Stats (7d)")?;
    writeln!(out, "Volume: {}", wei_to_eth(stats.seven_day_volume))?;
    writeln!(out, "Change: {}", signed_percent(stats.seven_day_change))?;
    writeln!(out, "Sales: {}", compact_number(stats.seven_day_sales))?;

    if let Some(url) = non_empty(&collection.external_url) {
        writeln!(out, "\n🔗 Website: {url}")?;
    }
    if let Some(handle) = non_empty(&collection.twitter_username) {
        writeln!(out, "🐦 Twitter: @{handle}")?;
    }
    if let Some(url) = non_empty(&collection.discord_url) {
        writeln!(out, "💬 Discord: {url}")?;
    }

    Ok(())
}

/// Print a single asset with its traits and last sale.
pub(crate) fn print_asset_report<W: Write>(out: &mut W, asset: &Asset) -> std::io::Result<()> {
    section(out, "🖼", "NFT Asset Info")?;
    writeln!(
        out,
        "Name: {}",
        asset.name.as_deref().unwrap_or("N/A")
    )?;
    writeln!(out, "Token ID: {}", asset.token_id)?;
    writeln!(
        out,
        "Contract: {} ({})",
        asset.asset_contract.address, asset.asset_contract.schema_name
    )?;
    writeln!(
        out,
        "Collection: {} ({})",
        asset.collection.name, asset.collection.slug
    )?;
    if let Some(owner) = &asset.owner {
        writeln!(out, "Owner: {}", owner.display_name())?;
    }
    if !asset.permalink.is_empty() {
        writeln!(out, "Link: {}", asset.permalink)?;
    }

    section(out, "🧬", "Traits")?;
    if asset.traits.is_empty() {
        writeln!(out, "No traits")?;
    }
    for attr in &asset.traits {
        let mut line = format!("{}: {}", attr.trait_type, attr.value_text());

        if let Some(display_type) = &attr.display_type {
            line.push_str(&format!(" [{display_type}]"));
        }
        if let Some(count) = attr.trait_count {
            line.push_str(&format!(" ({} with this trait)", compact_number(count as f64)));
        }

        item!(out, "{line}")?;
    }

    let Some(sale) = &asset.last_sale else {
        return Ok(());
    };

    section(out, "🧾", "Last Sale")?;
    let symbol = sale
        .payment_token
        .as_ref()
        .map(|token| token.symbol.as_str())
        .unwrap_or("ETH");
    match sale.price() {
        Some(price) => writeln!(out, "Price: {price:.4} {symbol}")?,
        None => writeln!(out, "Price: N/A")?,
    }
    writeln!(out, "Date: {}", sale.event_timestamp)?;
    if let Some(tx) = &sale.transaction {
        writeln!(out, "From: {}", tx.from_account.display_name())?;
        writeln!(out, "To: {}", tx.to_account.display_name())?;
        if let Some(hash) = &tx.transaction_hash {
            writeln!(out, "Transaction: {hash}")?;
        }
    }

    Ok(())
}

/// Remediation tips for each kind of failure.
pub(crate) fn tips(kind: ErrorKind) -> &'static [&'static str] {
    match kind {
        ErrorKind::RateLimit => &[
            "Add OPENSEA_API_KEY to your environment or .env file to increase rate limits",
            "Wait 30-60 seconds before trying again",
        ],
        ErrorKind::NotFound => &[
            "Check if the collection slug or contract address is correct",
            "Try searching on OpenSea first to verify the collection exists",
        ],
        ErrorKind::NetworkError => &[
            "Check your internet connection",
            "Try again in a few moments",
        ],
        ErrorKind::InvalidInput => &[
            "Verify the contract address format (should start with 0x)",
            "Check that the token ID is a valid number",
        ],
        ErrorKind::ApiError => &[
            "Try again in a few moments",
            "Check the OpenSea status page for any ongoing issues",
        ],
    }
}

/// Print a classified failure to `err`, followed by its tips on `out`.
pub(crate) fn print_error<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    error: &OpenSeaError,
) -> std::io::Result<()> {
    notify_error!(err, "{}", error.message())?;
    writeln!(out, "\n💡 {}", "Tips:".bold())?;

    for tip in tips(error.kind()) {
        writeln!(out, "- {tip}")?;
    }

    Ok(())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_collection_report_sections() {
        let collection: Collection = serde_json::from_value(json!({
            "name": "Foo",
            "slug": "foo",
            "external_url": "https://foo.xyz",
            "twitter_username": "foo_nft"
        }))
        .unwrap();
        let stats: CollectionStats = serde_json::from_value(json!({
            "floor_price": 1e18,
            "total_volume": 5e18,
            "num_owners": 10,
            "total_supply": 10000,
            "one_day_change": 5.2,
            "seven_day_change": -3
        }))
        .unwrap();

        let text = render(|out| print_collection_report(out, &collection, &stats));

        assert!(text.contains("Name: Foo"));
        assert!(text.contains("Description: N/A"));
        assert!(text.contains("Total Supply: 10.0K"));
        assert!(text.contains("Owners: 10"));
        assert!(text.contains("Floor Price: 1.0000 ETH"));
        assert!(text.contains("Total Volume: 5.0000 ETH"));
        assert!(text.contains("Market Cap: 0 ETH"));
        assert!(text.contains("Change: +5.20%"));
        assert!(text.contains("Change: -3.00%"));
        assert!(text.contains("🔗 Website: https://foo.xyz"));
        assert!(text.contains("🐦 Twitter: @foo_nft"));
        assert!(!text.contains("Discord"));
    }

    #[test]
    fn test_collection_report_null_stats() {
        let collection: Collection =
            serde_json::from_value(json!({ "name": "Foo", "slug": "foo" })).unwrap();
        let stats: CollectionStats = serde_json::from_value(json!({
            "floor_price": null,
            "one_day_change": null,
            "num_owners": 10
        }))
        .unwrap();

        let text = render(|out| print_collection_report(out, &collection, &stats));

        assert!(text.contains("Floor Price: 0 ETH"));
        assert!(text.contains("Change: +0.00%"));
        assert!(text.contains("Owners: 10"));
    }

    #[test]
    fn test_asset_report_with_traits_and_sale() {
        let asset: Asset = serde_json::from_value(json!({
            "token_id": "42",
            "name": "Ape #42",
            "permalink": "https://opensea.io/assets/0xbc4c/42",
            "asset_contract": { "address": "0xbc4c", "schema_name": "ERC721" },
            "owner": { "address": "0xowner", "user": { "username": "alice" } },
            "collection": { "name": "Bored Ape Yacht Club", "slug": "boredapeyachtclub" },
            "traits": [
                { "trait_type": "Background", "value": "Blue", "trait_count": 1242 },
                { "trait_type": "Level", "value": 3, "display_type": "number" }
            ],
            "last_sale": {
                "event_type": "successful",
                "event_timestamp": "2022-01-01T00:00:00",
                "total_price": "2500000000000000000",
                "payment_token": { "symbol": "WETH", "decimals": 18 },
                "transaction": {
                    "from_account": { "address": "0xseller" },
                    "to_account": { "address": "0xbuyer" },
                    "transaction_hash": "0xhash"
                },
                "quantity": "1"
            }
        }))
        .unwrap();

        let text = render(|out| print_asset_report(out, &asset));

        assert!(text.contains("Name: Ape #42"));
        assert!(text.contains("Token ID: 42"));
        assert!(text.contains("Collection: Bored Ape Yacht Club (boredapeyachtclub)"));
        assert!(text.contains("Owner: alice"));
        assert!(text.contains("Background: Blue (1.2K with this trait)"));
        assert!(text.contains("Level: 3 [number]"));
        assert!(text.contains("Price: 2.5000 WETH"));
        assert!(text.contains("From: 0xseller"));
        assert!(text.contains("To: 0xbuyer"));
    }

    #[test]
    fn test_print_error_with_tips() {
        let error = OpenSeaError::from_response(429, String::new());

        let mut out = Vec::new();
        let mut err = Vec::new();
        print_error(&mut out, &mut err, &error).unwrap();
        let text = String::from_utf8(out).unwrap();
        let err_text = String::from_utf8(err).unwrap();

        assert!(err_text.contains("Rate limit exceeded. Please wait and try again"));
        assert!(!err_text.contains("Tips:"));
        assert!(!text.contains("Rate limit exceeded"));
        assert!(text.contains("Tips:"));
        assert!(text.contains("- Add OPENSEA_API_KEY"));
        assert!(text.contains("- Wait 30-60 seconds before trying again"));
    }

    #[test]
    fn test_every_kind_has_tips() {
        for kind in [
            ErrorKind::NotFound,
            ErrorKind::RateLimit,
            ErrorKind::InvalidInput,
            ErrorKind::ApiError,
            ErrorKind::NetworkError,
        ] {
            assert!(!tips(kind).is_empty());
        }
    }
}
