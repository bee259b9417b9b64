use crate::{
    command_title,
    prelude::*,
    report::{print_collection_report, print_error},
};

/// Check a collection given either its slug or one of its contract addresses.
pub(crate) async fn check_collection<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    client: &OpenSeaClient,
    contract: &str,
) -> AnyResult<(), NftCheckerCliError> {
    command_title!(out, "Checking NFT collection '{contract}'")?;

    match fetch_collection_report(client, contract).await {
        Ok((collection, stats)) => print_collection_report(out, &collection, &stats)?,
        Err(e) => print_error(out, err, &e)?,
    }

    Ok(())
}

/// Resolve the identifier and fetch the collection and its stats
/// concurrently.
pub(crate) async fn fetch_collection_report(
    client: &OpenSeaClient,
    identifier: &str,
) -> Result<(Collection, CollectionStats), OpenSeaError> {
    let slug = resolve_slug(client, identifier).await?;

    tokio::try_join!(
        client.fetch_collection(&slug),
        client.fetch_collection_stats(&slug)
    )
}

/// Contract addresses are resolved to a slug through the collection of their
/// first asset. Anything else is taken as a slug.
pub(crate) async fn resolve_slug(
    client: &OpenSeaClient,
    identifier: &str,
) -> Result<String, OpenSeaError> {
    if !is_contract_address(identifier) {
        return Ok(identifier.to_string());
    }

    let assets = client.fetch_assets_by_contract(identifier, 1, 0).await?;

    let Some(asset) = assets.into_iter().next() else {
        return Err(OpenSeaError::not_found(EmptyAssetPage {
            contract: identifier.to_string(),
        }));
    };

    log::info!(
        "Resolved contract {identifier} to collection '{}'",
        asset.collection.slug
    );

    Ok(asset.collection.slug)
}
