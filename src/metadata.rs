use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use exif::{In, Reader, Tag};

/// Source of the raw "date taken" string for a file. Kept as a trait so
/// the pipeline can be driven by a canned reader in tests.
pub trait MetadataReader {
    /// The raw date string for a file, or `None` when it carries none.
    fn date_taken(&self, path: &Path) -> Option<String>;
}

/// Reads the capture date from embedded EXIF data.
pub struct ExifReader;

impl MetadataReader for ExifReader {
    fn date_taken(&self, path: &Path) -> Option<String> {
        let file = File::open(path).ok()?;
        let reader = Reader::new()
            .read_from_container(&mut BufReader::new(file))
            .ok()?;

        let tags = [Tag::DateTimeOriginal, Tag::DateTimeDigitized, Tag::DateTime];
        for tag in &tags {
            if let Some(field) = reader.get_field(*tag, In::PRIMARY) {
                let val = field.display_value().to_string();
                if let Some(dt) = parse_exif_datetime(&val) {
                    // Month-first rendering, the token order the date
                    // normalizer expects.
                    return Some(dt.format("%-m/%-d/%Y %H:%M").to_string());
                }
            }
        }

        None
    }
}

/// EXIF datetimes have no timezone info - they are local time as-is.
fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let cleaned = s
        .replace('-', ":")
        .replace('/', ":")
        .replace('\\', ":")
        .replace('.', ":");

    if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, "%Y:%m:%d %H:%M:%S") {
        return Some(dt);
    }

    if let Ok(d) = chrono::NaiveDate::parse_from_str(cleaned.split(' ').next()?, "%Y:%m:%d") {
        return Some(d.and_hms_opt(0, 0, 0)?);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_exif_datetime() {
        let dt = parse_exif_datetime("2021:03:04 17:05:30").expect("parse");
        assert_eq!(dt.format("%-m/%-d/%Y %H:%M").to_string(), "3/4/2021 17:05");
    }

    #[test]
    fn parses_sloppy_separators_and_date_only() {
        assert!(parse_exif_datetime("2021-03-04 17:05:30").is_some());
        assert!(parse_exif_datetime("2021/03/04").is_some());
        assert!(parse_exif_datetime("not a date").is_none());
    }

    #[test]
    fn missing_file_yields_none() {
        assert!(ExifReader.date_taken(Path::new("/no/such/file.jpg")).is_none());
    }
}
