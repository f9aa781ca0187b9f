//! Line-oriented dataset writing and JSON statistics reports

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{Error, Result, tictactoe::TreeStats};

/// Write dataset lines to any sink, one record per line.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write dataset lines to a file, creating or truncating it.
pub fn write_lines_to_path(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, lines)
}

/// Summary of a generate/solve run, exportable as JSON
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DatasetReport {
    pub tree: TreeStats,
    pub unique_records: usize,
    pub root_value: i32,
}

/// Write a run report as pretty-printed JSON.
pub fn write_report_json(path: &Path, report: &DatasetReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, format!("{json}\n")).map_err(|source| Error::Io {
        operation: format!("write {}", path.display()),
        source,
    })?;
    Ok(())
}
