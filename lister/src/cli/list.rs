//! Listing command
//!
//! Selects the records and hands them to the matching renderer.

use std::borrow::Cow;
use std::io::Write;

use anyhow::Context;
use endpoint_lister_common::EndpointRecord;
use tracing::debug;

use super::{Cli, OutputFormat};
use crate::{catalog, render};

/// Execute the listing command, writing to `out`
pub fn execute<W: Write>(cli: &Cli, out: W) -> anyhow::Result<()> {
    let records = select(cli);
    debug!(
        endpoints = records.len(),
        group = cli.group.map(|g| g.as_str()),
        format = ?cli.format,
        "rendering endpoint listing"
    );

    match cli.format {
        OutputFormat::Text => {
            render::write_text(out, &records).context("failed to write endpoint listing")?;
        }
        OutputFormat::Json => {
            render::write_json(out, &records).context("failed to write endpoint listing")?;
        }
    }
    Ok(())
}

fn select(cli: &Cli) -> Cow<'static, [EndpointRecord]> {
    match cli.group {
        Some(group) => Cow::Owned(catalog::by_group(group)),
        None => Cow::Borrowed(catalog::all()),
    }
}
