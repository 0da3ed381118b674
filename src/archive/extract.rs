//! Document metadata extraction
//!
//! Builds a [`DocumentRecord`] from file stat data, the timestamp embedded in
//! the file name and the PDF itself (page count and first-page text).

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Duration, Local, Months, NaiveDate, NaiveDateTime, TimeZone};
use regex::Regex;

use crate::cache::DocumentCache;
use crate::fingerprint::Fingerprint;
use crate::pdf::PdfEngine;

use super::error::{ArchiveError, ArchiveResult};
use super::types::DocumentRecord;

/// `year_month_day_hour_minute_second` at the start of a file name
static FILENAME_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)_(\d+)_(\d+)_(\d+)_(\d+)_(\d+)").expect("valid timestamp pattern")
});

/// Extracts document records through a [`PdfEngine`]
#[derive(Clone)]
pub struct MetadataExtractor {
    engine: Arc<dyn PdfEngine>,
}

impl MetadataExtractor {
    pub fn new(engine: Arc<dyn PdfEngine>) -> Self {
        Self { engine }
    }

    /// Return the record for `path`, extracting and caching it on first use
    ///
    /// A cached record is returned unchanged without touching the file. On a
    /// miss the stat and PDF work run on the blocking pool; the cache lock is
    /// only held for the lookup and the final store, so a concurrent miss on
    /// the same path may extract twice and the last store wins.
    pub async fn extract(
        &self,
        path: &Path,
        cache: &DocumentCache,
    ) -> ArchiveResult<Arc<DocumentRecord>> {
        let id = Fingerprint::of(path);
        if let Some(record) = cache.lookup(id).await {
            return Ok(record);
        }

        tracing::debug!("Extracting metadata of {}", path.display());
        let engine = Arc::clone(&self.engine);
        let path_owned = path.to_path_buf();
        let record =
            tokio::task::spawn_blocking(move || read_record(engine.as_ref(), path_owned, id))
                .await??;

        Ok(cache.store(record).await)
    }
}

/// Build a record for `path` without consulting any cache
pub fn read_record(
    engine: &dyn PdfEngine,
    path: PathBuf,
    id: Fingerprint,
) -> ArchiveResult<DocumentRecord> {
    let (size, modified) = {
        let file = File::open(&path).map_err(|e| ArchiveError::io(&path, e))?;
        let meta = file.metadata().map_err(|e| ArchiveError::io(&path, e))?;
        let modified = meta.modified().map_err(|e| ArchiveError::io(&path, e))?;
        (meta.len(), DateTime::<Local>::from(modified))
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_date = parse_filename_timestamp(&name)
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .unwrap_or(modified);

    let (pages, text) = {
        let doc = engine.open(&path).map_err(|e| ArchiveError::pdf(&path, e))?;
        let pages = doc.page_count().map_err(|e| ArchiveError::pdf(&path, e))?;
        let text = if pages > 0 {
            doc.page(0)
                .and_then(|page| page.text())
                .map_err(|e| ArchiveError::pdf(&path, e))?
        } else {
            String::new()
        };
        (pages, text)
    };

    Ok(DocumentRecord {
        id,
        name,
        size,
        created: modified,
        file_date,
        pages,
        content: BASE64.encode(text.as_bytes()),
        path,
    })
}

/// Parse the leading `YYYY_MM_DD_HH_MM_SS` timestamp of a file name
///
/// Anything after the sixth field is ignored. Out-of-range values roll over
/// into the next unit, so month 13 is January of the following year and
/// February 30 lands in March. Returns `None` when a field is missing or the
/// result does not fit the calendar range.
pub fn parse_filename_timestamp(name: &str) -> Option<NaiveDateTime> {
    let caps = FILENAME_TIMESTAMP.captures(name)?;
    let field = |i: usize| caps.get(i)?.as_str().parse::<i64>().ok();

    let year = i32::try_from(field(1)?).ok()?;
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;

    let month = field(2)?;
    let start = if month == 0 {
        start.checked_sub_months(Months::new(1))?
    } else {
        start.checked_add_months(Months::new(u32::try_from(month - 1).ok()?))?
    };

    start
        .checked_add_signed(Duration::try_days(field(3)? - 1)?)?
        .checked_add_signed(Duration::try_hours(field(4)?)?)?
        .checked_add_signed(Duration::try_minutes(field(5)?)?)?
        .checked_add_signed(Duration::try_seconds(field(6)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_timestamp_with_suffix() {
        assert_eq!(
            parse_filename_timestamp("2021_03_04_10_15_30_report.pdf"),
            Some(naive(2021, 3, 4, 10, 15, 30))
        );
    }

    #[test]
    fn test_parse_timestamp_without_suffix() {
        assert_eq!(
            parse_filename_timestamp("2019_12_31_23_59_59.pdf"),
            Some(naive(2019, 12, 31, 23, 59, 59))
        );
    }

    #[test]
    fn test_parse_timestamp_unpadded_fields() {
        assert_eq!(
            parse_filename_timestamp("2020_1_2_3_4_5.pdf"),
            Some(naive(2020, 1, 2, 3, 4, 5))
        );
    }

    #[test]
    fn test_no_timestamp() {
        assert_eq!(parse_filename_timestamp("report.pdf"), None);
        assert_eq!(parse_filename_timestamp("2021_03_04_report.pdf"), None);
        assert_eq!(parse_filename_timestamp("scan_2021_03_04_10_15_30.pdf"), None);
    }

    #[test]
    fn test_out_of_range_values_roll_over() {
        assert_eq!(
            parse_filename_timestamp("2021_13_04_10_15_30_report.pdf"),
            Some(naive(2022, 1, 4, 10, 15, 30))
        );
        assert_eq!(
            parse_filename_timestamp("2021_02_30_10_15_30.pdf"),
            Some(naive(2021, 3, 2, 10, 15, 30))
        );
        assert_eq!(
            parse_filename_timestamp("2021_03_04_25_15_30.pdf"),
            Some(naive(2021, 3, 5, 1, 15, 30))
        );
        assert_eq!(
            parse_filename_timestamp("2021_12_31_23_59_60.pdf"),
            Some(naive(2022, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_zero_month_and_day_roll_back() {
        assert_eq!(
            parse_filename_timestamp("2021_00_00_00_00_00.pdf"),
            Some(naive(2020, 11, 30, 0, 0, 0))
        );
    }

    #[test]
    fn test_unrepresentable_timestamp_is_rejected() {
        assert_eq!(
            parse_filename_timestamp("99999999999_03_04_10_15_30.pdf"),
            None
        );
        assert_eq!(
            parse_filename_timestamp("2021_03_04_10_15_99999999999999999999.pdf"),
            None
        );
    }
}
