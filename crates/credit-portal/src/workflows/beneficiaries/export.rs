use std::io::Write;

use super::domain::Beneficiary;

pub const CSV_HEADER: [&str; 9] = [
    "id",
    "name",
    "email",
    "income_min",
    "income_max",
    "credit_score",
    "risk_band",
    "application_date",
    "status",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("{0} export is not available yet")]
    Unsupported(&'static str),
}

/// Write the rows, in the given order, as CSV.
pub fn write_csv<W: Write>(rows: &[Beneficiary], writer: W) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for row in rows {
        csv.write_record([
            row.id.to_string(),
            row.name.clone(),
            row.email.clone(),
            row.income_band.min.to_string(),
            row.income_band.max.to_string(),
            row.credit_score.to_string(),
            row.risk_band.label().to_string(),
            row.application_date.format("%Y-%m-%d").to_string(),
            row.status.label().to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn csv_string(rows: &[Beneficiary]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
