use crate::models::session::Session;
use csv::Writer;
use std::path::Path;

/// Write sessions as CSV with a header row.
pub fn write_csv(path: &Path, sessions: &[Session]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "owner_name",
        "plate",
        "phone",
        "address",
        "spot_id",
        "entry_time",
        "exit_time",
        "fee",
    ])?;

    for s in sessions {
        wtr.write_record(&[
            s.owner_name.clone(),
            s.plate.clone(),
            s.phone.clone(),
            s.address.clone(),
            s.spot_id.to_string(),
            s.entry_time.to_string(),
            s.exit_time.to_string(),
            format!("{:.2}", s.fee),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
