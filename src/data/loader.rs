use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;

use super::model::{Dataset, Offer};

// ---------------------------------------------------------------------------
// LoadError – the single failure outcome of loading
// ---------------------------------------------------------------------------

/// Anything that can go wrong while loading the catalogue. One failure
/// anywhere (missing file, broken header, unparseable price) fails the
/// whole load; there is no partial dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Fixed catalogue path, resolved against the working directory.
pub const DATA_PATH: &str = "data.csv";

static DATASET: OnceLock<Result<Dataset, LoadError>> = OnceLock::new();

/// Load `data.csv`, at most once per process.
///
/// The first call reads and parses the file; every later call returns the
/// cached outcome, success or failure. There is no invalidation; a changed
/// file requires a restart.
pub fn load() -> &'static Result<Dataset, LoadError> {
    DATASET.get_or_init(|| load_csv(Path::new(DATA_PATH)))
}

/// Parse a `;`-delimited offer CSV into a [`Dataset`].
///
/// Expected header: `Pays`, `Type`, `Prix`, `Nom`, `Lien` required;
/// `Categorie`, `Variété`, `Date` optional. Rows are typed at parse time:
/// a non-numeric `Prix` anywhere fails the load.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(file);

    let headers = reader.headers()?.clone();
    for required in ["Pays", "Type", "Prix", "Nom", "Lien"] {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }
    let has_category = headers.iter().any(|h| h == "Categorie");

    let mut offers = Vec::new();
    for result in reader.deserialize() {
        let offer: Offer = result?;
        offers.push(offer);
    }

    Ok(Dataset::from_offers(offers, has_category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sourcing-lion-{name}-{}.csv", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_catalogue_with_category_column() {
        let path = write_fixture(
            "v1",
            "Categorie;Pays;Type;Nom;Prix;Lien\n\
             Fleurs;FR;Indoor;GreenFarm;1200;https://example.com/a\n\
             Vape;ES;Distillat;VapeCo;35.5;https://example.com/b\n",
        );
        let ds = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(ds.has_category);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.offers[0].category.as_deref(), Some("Fleurs"));
        assert_eq!(ds.offers[1].price, 35.5);
        assert_eq!(ds.price_bounds, (35, 1200));
        assert!(!ds.has_variety);
    }

    #[test]
    fn loads_catalogue_without_category_column() {
        let path = write_fixture(
            "v2",
            "Pays;Type;Nom;Variété;Prix;Lien;Date\n\
             FR;Outdoor;AltFarm;Gelato;900;https://example.com/c;2025-09-01\n",
        );
        let ds = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(!ds.has_category);
        assert!(ds.categories.is_empty());
        assert!(ds.has_variety);
        assert!(ds.has_harvest_date);
        assert_eq!(ds.offers[0].variety.as_deref(), Some("Gelato"));
        assert_eq!(ds.offers[0].harvest_date.as_deref(), Some("2025-09-01"));
    }

    #[test]
    fn load_is_computed_once_and_cached() {
        // Repeated calls return the same cached outcome, not a re-read.
        let first = load();
        let second = load();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_csv(Path::new("/nonexistent/data.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn missing_required_column_is_a_load_error() {
        let path = write_fixture("nohdr", "Pays;Type;Nom;Lien\nFR;Indoor;X;https://x\n");
        let err = load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, LoadError::MissingColumn("Prix")));
    }

    #[test]
    fn unparseable_price_fails_the_whole_load() {
        let path = write_fixture(
            "badprice",
            "Pays;Type;Nom;Prix;Lien\n\
             FR;Indoor;GreenFarm;cheap;https://example.com/a\n",
        );
        let err = load_csv(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, LoadError::Csv(_)));
    }
}
