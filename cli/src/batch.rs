use {
    crate::{
        check::fetch_collection_report,
        command_title,
        notify_success,
        prelude::*,
        report::{print_collection_report, print_error},
    },
    std::time::Duration,
};

/// Tally of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BatchSummary {
    pub(crate) total: usize,
    pub(crate) succeeded: usize,
    pub(crate) failed: usize,
}

/// Check every collection listed in `file`, one identifier per line.
///
/// Items are processed sequentially with `delay` between them. A failing item
/// is reported and the run moves on to the next one.
pub(crate) async fn check_batch<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    client: &OpenSeaClient,
    file: &Path,
    delay: Duration,
) -> AnyResult<BatchSummary, NftCheckerCliError> {
    let content = tokio::fs::read_to_string(file).await.map_err(|e| {
        NftCheckerCliError::Any(anyhow!(
            "Failed to read batch file {}: {e}",
            file.display()
        ))
    })?;

    let identifiers = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();

    command_title!(
        out,
        "Checking {} NFT collections from '{}'",
        identifiers.len(),
        file.display()
    )?;

    let mut summary = BatchSummary {
        total: identifiers.len(),
        ..Default::default()
    };

    for (index, identifier) in identifiers.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        writeln!(
            out,
            "\n[{}/{}] Processing {}",
            index + 1,
            summary.total,
            identifier.bold()
        )?;

        match fetch_collection_report(client, identifier).await {
            Ok((collection, stats)) => {
                print_collection_report(out, &collection, &stats)?;
                summary.succeeded += 1;
            }
            Err(e) => {
                log::debug!("Batch item '{identifier}' failed: {}", e.kind());
                print_error(out, err, &e)?;
                summary.failed += 1;
            }
        }
    }

    notify_success!(
        out,
        "Batch complete: {} succeeded, {} failed ({} total)",
        summary.succeeded,
        summary.failed,
        summary.total
    )?;

    Ok(summary)
}
