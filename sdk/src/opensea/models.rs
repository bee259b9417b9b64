use serde::{Deserialize, Deserializer, Serialize};

/// Collection metadata as returned by `GET /collection/{slug}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Collection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub banner_image_url: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub discord_url: Option<String>,
    #[serde(default)]
    pub instagram_username: Option<String>,
    #[serde(default)]
    pub telegram_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owned_asset_count: f64,
}

/// Aggregate market statistics of a collection. ETH amounts are expressed in
/// wei-equivalent units. Fields missing or `null` upstream default to `0`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CollectionStats {
    #[serde(deserialize_with = "null_as_default")]
    pub one_day_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub one_day_change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub one_day_sales: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub seven_day_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub seven_day_change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub seven_day_sales: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub thirty_day_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub thirty_day_change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub thirty_day_sales: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_sales: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_supply: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_owners: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub num_reports: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub floor_price: f64,
}

/// A single NFT as returned by `GET /asset/{address}/{token_id}` and as an
/// element of `GET /assets`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Asset {
    #[serde(default)]
    pub id: u64,
    pub token_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permalink: String,
    pub asset_contract: AssetContract,
    #[serde(default)]
    pub owner: Option<Account>,
    #[serde(default)]
    pub creator: Option<Account>,
    pub collection: Collection,
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: Vec<Trait>,
    #[serde(default)]
    pub last_sale: Option<LastSale>,
}

/// The contract an asset belongs to.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetContract {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_contract_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub schema_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    pub total_supply: Option<String>,
    pub description: Option<String>,
}

/// Owner, creator or transaction party.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Account {
    pub address: String,
    #[serde(default)]
    pub user: Option<AccountUser>,
}

impl Account {
    /// Username if the account has one, the address otherwise.
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| user.username.as_deref())
            .unwrap_or(&self.address)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AccountUser {
    #[serde(default)]
    pub username: Option<String>,
}

/// Key/value attribute of an asset, e.g. `Background: Blue`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Trait {
    pub trait_type: String,
    pub value: serde_json::Value,
    #[serde(default)]
    pub display_type: Option<String>,
    #[serde(default)]
    pub max_value: Option<serde_json::Value>,
    #[serde(default)]
    pub trait_count: Option<u64>,
}

impl Trait {
    /// Trait value without the JSON quoting of strings.
    pub fn value_text(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// The most recent sale of an asset.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LastSale {
    #[serde(deserialize_with = "null_as_default")]
    pub event_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub event_timestamp: String,
    /// Integer amount in the smallest unit of the payment token.
    pub total_price: Option<String>,
    pub payment_token: Option<PaymentToken>,
    pub transaction: Option<SaleTransaction>,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: String,
}

impl LastSale {
    /// Sale price in whole payment-token units, if it can be computed.
    pub fn price(&self) -> Option<f64> {
        let total = self.total_price.as_deref()?.parse::<f64>().ok()?;
        let decimals = self
            .payment_token
            .as_ref()
            .map(|token| token.decimals)
            .unwrap_or(18);

        Some(total / 10f64.powi(decimals as i32))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PaymentToken {
    pub symbol: String,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub eth_price: Option<String>,
    #[serde(default)]
    pub usd_price: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SaleTransaction {
    pub from_account: Account,
    pub to_account: Account,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// == Response envelopes ==

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionResponse {
    pub(crate) collection: Collection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionStatsResponse {
    pub(crate) stats: CollectionStats,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssetsResponse {
    #[serde(default)]
    pub(crate) assets: Vec<Asset>,
}

// == Used by serde ==

fn default_decimals() -> u32 {
    18
}

/// OpenSea sends `null` for numbers and strings it has no value for, e.g.
/// the floor price of a collection without listings.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn test_stats_missing_fields_default_to_zero() {
        let stats: CollectionStats =
            serde_json::from_value(json!({ "floor_price": 1.5e18 })).unwrap();

        assert_eq!(stats.floor_price, 1.5e18);
        assert_eq!(stats.num_owners, 0.0);
        assert_eq!(stats.market_cap, 0.0);
    }

    #[test]
    fn test_null_fields_default_to_zero() {
        let stats: CollectionStats = serde_json::from_value(json!({
            "floor_price": null,
            "average_price": null,
            "num_owners": 10
        }))
        .unwrap();

        assert_eq!(stats.floor_price, 0.0);
        assert_eq!(stats.average_price, 0.0);
        assert_eq!(stats.num_owners, 10.0);

        let asset: Asset = serde_json::from_value(json!({
            "token_id": "1",
            "permalink": null,
            "asset_contract": { "address": "0xbc4c", "name": null, "symbol": null },
            "collection": { "name": "Foo", "slug": "foo", "owned_asset_count": null }
        }))
        .unwrap();

        assert_eq!(asset.permalink, "");
        assert_eq!(asset.asset_contract.address, "0xbc4c");
        assert_eq!(asset.asset_contract.symbol, "");
        assert_eq!(asset.collection.owned_asset_count, 0.0);
    }

    #[test]
    fn test_last_sale_price_uses_token_decimals() {
        let sale: LastSale = serde_json::from_value(json!({
            "event_type": "successful",
            "event_timestamp": "2022-01-01T00:00:00",
            "total_price": "2500000",
            "payment_token": { "symbol": "USDC", "decimals": 6 },
            "quantity": "1"
        }))
        .unwrap();

        assert_eq!(sale.price(), Some(2.5));
    }

    #[test]
    fn test_last_sale_price_without_total() {
        let sale = LastSale::default();

        assert_eq!(sale.price(), None);
    }

    #[test]
    fn test_account_display_name_prefers_username() {
        let mut account = Account {
            address: "0xabc".to_string(),
            user: None,
        };
        assert_eq!(account.display_name(), "0xabc");

        account.user = Some(AccountUser {
            username: Some("alice".to_string()),
        });
        assert_eq!(account.display_name(), "alice");
    }

    #[test]
    fn test_trait_value_text() {
        let string_trait: Trait =
            serde_json::from_value(json!({ "trait_type": "Background", "value": "Blue" }))
                .unwrap();
        let number_trait: Trait =
            serde_json::from_value(json!({ "trait_type": "Level", "value": 7 })).unwrap();

        assert_eq!(string_trait.value_text(), "Blue");
        assert_eq!(number_trait.value_text(), "7");
    }
}
