use crate::{
    command_title,
    prelude::*,
    report::{print_asset_report, print_error},
};

/// Look up a single asset by contract address and token ID.
pub(crate) async fn check_asset<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    client: &OpenSeaClient,
    contract: &str,
    token_id: &str,
) -> AnyResult<(), NftCheckerCliError> {
    command_title!(out, "Checking NFT asset '{contract}' #{token_id}")?;

    match client.fetch_asset(contract, token_id).await {
        Ok(asset) => print_asset_report(out, &asset)?,
        Err(e) => print_error(out, err, &e)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use {super::*, mockito::Server, serde_json::json};

    #[tokio::test]
    async fn test_check_asset() {
        let mut server = Server::new_async().await;
        let client = OpenSeaClient::builder()
            .with_base_url(&server.url())
            .build();

        let mock = server
            .mock("GET", "/asset/0xbc4c/7")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "token_id": "7",
                    "name": "Ape #7",
                    "asset_contract": { "address": "0xbc4c", "schema_name": "ERC721" },
                    "collection": { "name": "Bored Ape Yacht Club", "slug": "boredapeyachtclub" },
                    "traits": [{ "trait_type": "Fur", "value": "Golden Brown" }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let mut out = Vec::new();
        let mut err = Vec::new();
        check_asset(&mut out, &mut err, &client, "0xbc4c", "7")
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Name: Ape #7"));
        assert!(text.contains("Fur: Golden Brown"));
        assert!(!text.contains("Last Sale"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_check_asset_invalid_token() {
        let mut server = Server::new_async().await;
        let client = OpenSeaClient::builder()
            .with_base_url(&server.url())
            .build();

        let mock = server
            .mock("GET", "/asset/0xbc4c/abc")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(json!({ "message": "token_id must be numeric" }).to_string())
            .create_async()
            .await;

        let mut out = Vec::new();
        let mut err = Vec::new();
        check_asset(&mut out, &mut err, &client, "0xbc4c", "abc")
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let err_text = String::from_utf8(err).unwrap();

        assert!(err_text.contains("Invalid request: token_id must be numeric"));
        assert!(text.contains("Check that the token ID is a valid number"));

        mock.assert_async().await;
    }
}
