use csv::Writer;
use std::path::Path;

/// Write a header line followed by one record per row.
pub fn write_csv(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> csv::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
