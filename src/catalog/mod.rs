//! Catalog of known time zone identifiers, enriched with city and country names.

use std::cmp::Ordering;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

use once_cell::sync::Lazy;
use unicase::UniCase;

mod countries;


/// Default system time zone directory, overridable with the `TZDIR` environment variable
const ZONEINFO_DIR: &str = "/usr/share/zoneinfo";

/// Magic bytes of a TZif file
const TZIF_MAGIC: [u8; 4] = *b"TZif";

/// Zone identifiers nest at most three segments deep; deeper trees only occur
/// in malformed or cyclic directory layouts
const MAX_WALK_DEPTH: usize = 4;

/// A catalog row for one time zone identifier
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ZoneEntry {
    /// IANA identifier, e.g. `"Asia/Tokyo"`
    pub id: String,
    /// City name derived from the identifier's last path segment
    pub city: String,
    /// Country name from the bundled metadata table, when it has an entry
    pub country: Option<&'static str>,
}

/// Derives a city label from a zone identifier.
///
/// Takes the substring after the last `/`, or the whole identifier if there is
/// none, and replaces underscores with spaces. Total function, never fails.
///
/// # Example
///
/// ```rust
/// assert_eq!(worldclock::city_from_zone_id("America/Argentina/Buenos_Aires"), "Buenos Aires");
/// assert_eq!(worldclock::city_from_zone_id("UTC"), "UTC");
/// ```
pub fn city_from_zone_id(id: &str) -> String {
    let segment = match id.rfind('/') {
        Some(position) => &id[position + 1..],
        None => id,
    };
    segment.replace('_', " ")
}

/// Returns the country a zone identifier belongs to, when the bundled metadata
/// table has an entry for it.
pub fn country_for(id: &str) -> Option<&'static str> {
    countries::lookup(id)
}

/// Case-folding collation used to order the catalog when the caller supplies none.
pub fn default_collation(a: &str, b: &str) -> Ordering {
    UniCase::new(a).cmp(&UniCase::new(b))
}

/// Builds the full catalog, ordered by a caller-supplied city collation.
///
/// Identifier sources are tried in a fixed order: the platform time zone
/// database is enumerated when present, otherwise the list bundled with the
/// compiled rules database is used. Enumeration failure is absorbed here and
/// never surfaced. Ties under the collation are broken by identifier so the
/// ordering is total and reproducible.
pub fn all_zones_sorted_by<F>(collate: F) -> Vec<ZoneEntry>
where
    F: Fn(&str, &str) -> Ordering,
{
    let mut entries: Vec<ZoneEntry> = zone_ids()
        .into_iter()
        .map(|id| {
            let city = city_from_zone_id(&id);
            let country = countries::lookup(&id);
            ZoneEntry { id, city, country }
        })
        .collect();
    entries.sort_by(|a, b| collate(&a.city, &b.city).then_with(|| a.id.cmp(&b.id)));
    entries
}

/// Builds the full catalog under the default collation.
pub fn all_zones() -> Vec<ZoneEntry> {
    all_zones_sorted_by(default_collation)
}

/// Catalog built once per process
static CATALOG: Lazy<Vec<ZoneEntry>> = Lazy::new(all_zones);

/// Returns the memoized catalog under the default collation.
///
/// Building the catalog enumerates and sorts hundreds of entries; rebuilding
/// it per render is safe but wasteful, so callers that do not need a custom
/// collation should prefer this accessor.
pub fn all_zones_cached() -> &'static [ZoneEntry] {
    &CATALOG
}

/// Enumerates zone identifiers, falling back to the bundled list when the
/// platform database is unavailable.
fn zone_ids() -> Vec<String> {
    match system_zone_ids() {
        Ok(ids) => {
            log::debug!("enumerated {} zone identifiers from the system database", ids.len());
            ids
        }
        Err(error) => {
            log::debug!("system zone enumeration unavailable, using bundled list: {}", error);
            tzdb::TZ_NAMES.iter().map(|&name| name.to_owned()).collect()
        }
    }
}

/// Walks the platform time zone directory and collects the identifiers of all
/// TZif files recognized by the rules database.
fn system_zone_ids() -> io::Result<Vec<String>> {
    let root = std::env::var("TZDIR").unwrap_or_else(|_| ZONEINFO_DIR.to_owned());
    let mut ids = Vec::new();
    collect_zone_ids(Path::new(&root), "", 0, &mut ids)?;
    if ids.is_empty() {
        return Err(io::Error::new(io::ErrorKind::NotFound, "no TZif files found"));
    }
    ids.sort_unstable();
    Ok(ids)
}

fn collect_zone_ids(dir: &Path, prefix: &str, depth: usize, ids: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        // Variant trees at the top level are not zone identifiers
        if prefix.is_empty() && matches!(name.as_str(), "posix" | "right") {
            continue;
        }
        let id = match prefix.is_empty() {
            true => name,
            false => format!("{}/{}", prefix, name),
        };
        let path = entry.path();
        // Follow symlinks, the directory is full of them; some trees also
        // carry dangling ones, which are not zones
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(_) => continue,
        };
        if metadata.is_dir() {
            if depth + 1 < MAX_WALK_DEPTH {
                collect_zone_ids(&path, &id, depth + 1, ids)?;
            }
        } else if is_tzif(&path) && tzdb::tz_by_name(&id).is_some() {
            ids.push(id);
        }
    }
    Ok(())
}

/// Checks the magic bytes of a candidate TZif file.
fn is_tzif(path: &Path) -> bool {
    let mut magic = [0; 4];
    match fs::File::open(path).and_then(|mut file| file.read_exact(&mut magic)) {
        Ok(()) => magic == TZIF_MAGIC,
        Err(_) => false,
    }
}
