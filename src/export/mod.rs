pub mod formats;

use crate::api::ContentReport;
use crate::content::ContentTable;
use crate::error::Result;
use crate::export::formats::content::ContentStatistics;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::io::Write;

const RECORD_TYPE: &str = "basecontent.report";
const EXPORT_VERSION: &str = "1.0";

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[value(name = "tsv")]
    Tsv,
    #[value(name = "json")]
    Json,
}

/// Root structure of a JSON export.
#[derive(Debug, Serialize)]
pub struct ContentExport<'a> {
    #[serde(rename = "$type")]
    pub record_type: String,

    pub version: String,
    #[serde(serialize_with = "serialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,

    pub source: String,
    pub statistics: ContentStatistics,
    pub columns: Vec<&'static str>,
    pub positions: &'a ContentTable,
}

impl<'a> ContentExport<'a> {
    pub fn new(source: impl Into<String>, report: &'a ContentReport) -> Self {
        Self {
            record_type: RECORD_TYPE.to_string(),
            version: EXPORT_VERSION.to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.into(),
            statistics: ContentStatistics::from(report),
            columns: report.table.column_names(),
            positions: &report.table,
        }
    }
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

/// Write `report` in the requested format. `source` names the input in the
/// JSON envelope.
pub fn write_report<W: Write>(
    report: &ContentReport,
    source: &str,
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Tsv => report.table.write_tsv(writer)?,
        OutputFormat::Json => {
            let export = ContentExport::new(source, report);
            serde_json::to_writer_pretty(&mut writer, &export)
                .context("failed to serialize report")?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
