use crate::models::Holidays;
use anyhow::Result;
use csv::WriterBuilder;
use serde_json::Value;
use std::io::Write;

/// Write holidays as a pretty JSON array.
pub fn write_json<W: Write>(holidays: &Holidays, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, holidays)?;
    writeln!(out)?;
    Ok(())
}

/// Write holidays as CSV with a header row.
///
/// Columns depend on the shape: `date` / `date,name` / `date,name,id`.
pub fn write_csv<W: Write>(holidays: &Holidays, out: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(out);
    match holidays {
        Holidays::DatesOnly(dates) => {
            wtr.write_record(["date"])?;
            for d in dates {
                wtr.write_record([safe_cell(d)])?;
            }
        }
        Holidays::Minimal(list) => {
            wtr.write_record(["date", "name"])?;
            for h in list {
                wtr.write_record([safe_cell(&h.date), safe_cell(&h.name)])?;
            }
        }
        Holidays::Full(items) => {
            wtr.write_record(["date", "name", "id"])?;
            for item in items {
                wtr.write_record([
                    safe_cell(str_at(item, &["start", "date"])),
                    safe_cell(str_at(item, &["summary"])),
                    safe_cell(str_at(item, &["id"])),
                ])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

/// One `date  name` line per holiday.
pub fn write_text<W: Write>(holidays: &Holidays, mut out: W) -> Result<()> {
    match holidays {
        Holidays::DatesOnly(dates) => {
            for d in dates {
                writeln!(out, "{d}")?;
            }
        }
        Holidays::Minimal(list) => {
            for h in list {
                writeln!(out, "{}  {}", h.date, h.name)?;
            }
        }
        Holidays::Full(items) => {
            for item in items {
                writeln!(
                    out,
                    "{}  {}",
                    str_at(item, &["start", "date"]),
                    str_at(item, &["summary"])
                )?;
            }
        }
    }
    Ok(())
}

fn str_at<'a>(v: &'a Value, path: &[&str]) -> &'a str {
    path.iter()
        .try_fold(v, |cur, key| cur.get(key))
        .and_then(Value::as_str)
        .unwrap_or("")
}

// Spreadsheets evaluate cells starting with these as formulas.
fn safe_cell(s: &str) -> String {
    if s.starts_with(['=', '+', '-', '@']) {
        format!("'{s}")
    } else {
        s.to_string()
    }
}
