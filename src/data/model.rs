use serde::Deserialize;

// ---------------------------------------------------------------------------
// Offer – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single supplier offer (one row of `data.csv`).
///
/// Field names map to the French CSV headers. `Categorie`, `Variété` and
/// `Date` are only present in some source files; absent columns deserialize
/// to `None` for every row.
#[derive(Debug, Clone, Deserialize)]
pub struct Offer {
    #[serde(rename = "Categorie", default)]
    pub category: Option<String>,
    #[serde(rename = "Pays")]
    pub country: String,
    /// Production type or method (Indoor, Distillat, Gummies…).
    #[serde(rename = "Type")]
    pub kind: String,
    /// Supplier name.
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Variété", default)]
    pub variety: Option<String>,
    /// Price in euros, per kg or per unit depending on the product.
    #[serde(rename = "Prix")]
    pub price: f64,
    /// Catalogue URL.
    #[serde(rename = "Lien")]
    pub link: String,
    /// Harvest date, kept as text.
    #[serde(rename = "Date", default)]
    pub harvest_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded catalogue
// ---------------------------------------------------------------------------

/// The full parsed catalogue with pre-computed filter option sets.
///
/// Offers keep source-file order; nothing downstream re-sorts them.
/// Immutable after load: a changed file on disk requires a restart.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All offers (rows), in file order.
    pub offers: Vec<Offer>,
    /// Whether the source file carried a `Categorie` column.
    pub has_category: bool,
    /// Sorted unique categories (empty when `has_category` is false).
    pub categories: Vec<String>,
    /// Unique countries in first-seen order.
    pub countries: Vec<String>,
    /// Unique types in first-seen order.
    pub kinds: Vec<String>,
    /// Whether any row carries a `Variété` value.
    pub has_variety: bool,
    /// Whether any row carries a `Date` value.
    pub has_harvest_date: bool,
    /// (min, max) of the price column, truncated to whole euros.
    pub price_bounds: (i64, i64),
}

impl Dataset {
    /// Build the filter option indices from the loaded offers.
    pub fn from_offers(offers: Vec<Offer>, has_category: bool) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut countries: Vec<String> = Vec::new();
        let mut kinds: Vec<String> = Vec::new();

        for offer in &offers {
            if let Some(cat) = &offer.category {
                if !categories.contains(cat) {
                    categories.push(cat.clone());
                }
            }
            if !countries.contains(&offer.country) {
                countries.push(offer.country.clone());
            }
            if !kinds.contains(&offer.kind) {
                kinds.push(offer.kind.clone());
            }
        }
        // Categories are offered sorted; countries and types keep file order.
        categories.sort();

        let price_bounds = price_bounds(&offers);
        let has_variety = offers.iter().any(|o| o.variety.is_some());
        let has_harvest_date = offers.iter().any(|o| o.harvest_date.is_some());

        Dataset {
            offers,
            has_category,
            categories,
            countries,
            kinds,
            has_variety,
            has_harvest_date,
            price_bounds,
        }
    }

    /// Number of offers.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

/// Integer slider bounds: min/max price truncated toward zero.
fn price_bounds(offers: &[Offer]) -> (i64, i64) {
    let mut iter = offers.iter().map(|o| o.price);
    let Some(first) = iter.next() else {
        return (0, 0);
    };
    let (mut min, mut max) = (first, first);
    for p in iter {
        min = min.min(p);
        max = max.max(p);
    }
    (min as i64, max as i64)
}
