//! Listing renderers
//!
//! Rendering is a pure function of the record slice: the same records always
//! produce the same bytes.

use std::io::Write;

use endpoint_lister_common::{CommonError, CommonResult, EndpointRecord};
use serde::Serialize;

/// First line of the text listing
pub const HEADER: &str = "Remaining endpoints to update:";

/// Title of the JSON listing
pub const JSON_TITLE: &str = "Remaining endpoints to update";

/// Prefix of the parameter line in each block
pub const PARAMS_PREFIX: &str = "  Params: ";

/// Text lines of the listing, without line terminators.
///
/// Header first, then per record the route line, the params line and an
/// empty separator line.
pub fn lines(records: &[EndpointRecord]) -> impl Iterator<Item = String> + '_ {
    std::iter::once(HEADER.to_string()).chain(records.iter().flat_map(|record| {
        [
            record.route_line(),
            format!("{}{}", PARAMS_PREFIX, record.params_line()),
            String::new(),
        ]
    }))
}

/// Write the text listing, one `\n`-terminated line at a time.
///
/// Returns the number of lines written.
pub fn write_text<W: Write>(mut out: W, records: &[EndpointRecord]) -> CommonResult<usize> {
    let mut written = 0;
    for line in lines(records) {
        writeln!(out, "{}", line)?;
        written += 1;
    }
    out.flush()?;
    tracing::debug!(lines = written, "text listing written");
    Ok(written)
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    title: &'static str,
    endpoints: &'a [EndpointRecord],
}

/// Write the listing as a pretty-printed JSON document followed by a newline.
pub fn write_json<W: Write>(mut out: W, records: &[EndpointRecord]) -> CommonResult<()> {
    let listing = Listing {
        title: JSON_TITLE,
        endpoints: records,
    };
    serde_json::to_writer_pretty(&mut out, &listing).map_err(|e| {
        if e.is_io() {
            CommonError::Io(e.into())
        } else {
            CommonError::Serialization(e)
        }
    })?;
    writeln!(out)?;
    out.flush()?;
    tracing::debug!(endpoints = records.len(), "json listing written");
    Ok(())
}
