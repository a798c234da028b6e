use crate::compose::compose;
use crate::date::{self, CanonicalDate};
use crate::media::FileEntry;

/// Where the date token for a rename came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Metadata,
    ModifiedTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Rename { new_name: String, source: DateSource },
    SkipNoMetadata,
    SkipUnparseable { raw: String },
}

/// The pure decision for one file, computed before any side effect.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub entry: FileEntry,
    pub decision: Decision,
}

/// Decide what to do with one file. Pure function of the snapshot, the
/// raw metadata and the fallback flag; preview and apply both consume
/// the result so they cannot disagree.
pub fn plan(entry: FileEntry, raw: Option<&str>, fallback_mdate: bool) -> RenamePlan {
    // An empty or whitespace-only string means the reader found nothing.
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());

    let decision = match raw {
        Some(raw) => match date::normalize(raw) {
            CanonicalDate::Token(token) => Decision::Rename {
                new_name: compose(&entry.name, &token),
                source: DateSource::Metadata,
            },
            CanonicalDate::Unparseable(raw) => Decision::SkipUnparseable { raw },
        },
        None if fallback_mdate => {
            let token = date::from_modified(&entry.modified);
            Decision::Rename {
                new_name: compose(&entry.name, &token),
                source: DateSource::ModifiedTime,
            }
        }
        None => Decision::SkipNoMetadata,
    };

    RenamePlan { entry, decision }
}
