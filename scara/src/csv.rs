//! Functions for reading/writing CSV format.
pub use csv::Error;
use csv::{ReaderBuilder, Writer};
use serde::{de::DeserializeOwned, Serialize};

/// Parse headerless CSV rows, lines starting with `#` are skipped.
pub fn parse_csv<D, R>(r: R) -> Result<Vec<D>, Error>
where
    D: DeserializeOwned,
    R: std::io::Read,
{
    ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(r)
        .deserialize()
        .collect()
}

/// Write rows as CSV, with a header if the row type is a struct.
pub fn dump_csv<W, S, I>(w: W, rows: I) -> Result<(), Error>
where
    W: std::io::Write,
    S: Serialize,
    I: IntoIterator<Item = S>,
{
    let mut w = Writer::from_writer(w);
    rows.into_iter().try_for_each(|row| w.serialize(row))?;
    w.flush()?;
    Ok(())
}
