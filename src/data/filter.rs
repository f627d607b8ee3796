use std::collections::BTreeSet;

use super::model::{Dataset, Offer};

// ---------------------------------------------------------------------------
// FilterSelection – the user's current constraints
// ---------------------------------------------------------------------------

/// What the user has selected in the side panel. Transient, recreated per
/// session; the filtered result is always derived from it, never stored.
///
/// Multi-select semantics are literal: a value must be in the selected set
/// to pass, so an empty set matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub countries: BTreeSet<String>,
    pub kinds: BTreeSet<String>,
    /// Inclusive upper price bound in whole euros.
    pub max_price: i64,
}

/// Initialise a [`FilterSelection`] that excludes nothing: every value
/// selected and the price bound at the dataset maximum.
pub fn default_selection(dataset: &Dataset) -> FilterSelection {
    FilterSelection {
        categories: dataset.categories.iter().cloned().collect(),
        countries: dataset.countries.iter().cloned().collect(),
        kinds: dataset.kinds.iter().cloned().collect(),
        max_price: dataset.price_bounds.1,
    }
}

// ---------------------------------------------------------------------------
// Row filtering
// ---------------------------------------------------------------------------

/// Return indices of offers that pass all active filters, in file order.
///
/// All predicates are conjunctive:
/// * category in the selected set (only when the dataset has the column)
/// * country in the selected set
/// * type in the selected set
/// * price ≤ `max_price` (inclusive)
///
/// Pure function of its inputs; an empty result is a valid outcome.
pub fn filtered_indices(dataset: &Dataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .offers
        .iter()
        .enumerate()
        .filter(|(_, offer)| passes(dataset, selection, offer))
        .map(|(i, _)| i)
        .collect()
}

fn passes(dataset: &Dataset, selection: &FilterSelection, offer: &Offer) -> bool {
    if dataset.has_category {
        let selected = match &offer.category {
            Some(cat) => selection.categories.contains(cat),
            None => false,
        };
        if !selected {
            return false;
        }
    }
    selection.countries.contains(&offer.country)
        && selection.kinds.contains(&offer.kind)
        && offer.price <= selection.max_price as f64
}

// ---------------------------------------------------------------------------
// Cascading option sets
// ---------------------------------------------------------------------------

/// Countries offered for the current category selection: unique values over
/// rows whose category is selected, in first-seen order.
///
/// The cascade is one-way: the category choice narrows the country options,
/// but nothing narrows the category options back.
pub fn available_countries(dataset: &Dataset, categories: &BTreeSet<String>) -> Vec<String> {
    available_values(dataset, categories, |offer| &offer.country)
}

/// Types offered for the current category selection; see
/// [`available_countries`].
pub fn available_kinds(dataset: &Dataset, categories: &BTreeSet<String>) -> Vec<String> {
    available_values(dataset, categories, |offer| &offer.kind)
}

fn available_values<'a>(
    dataset: &'a Dataset,
    categories: &BTreeSet<String>,
    field: impl Fn(&'a Offer) -> &'a String,
) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for offer in &dataset.offers {
        if dataset.has_category {
            match &offer.category {
                Some(cat) if categories.contains(cat) => {}
                _ => continue,
            }
        }
        let value = field(offer);
        if !values.contains(value) {
            values.push(value.clone());
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_offer;

    /// Dataset from spec scenarios: FR/Indoor at 10, ES/Outdoor at 20.
    fn two_country_dataset() -> Dataset {
        Dataset::from_offers(
            vec![
                sample_offer(None, "FR", "Indoor", 10.0),
                sample_offer(None, "ES", "Outdoor", 20.0),
            ],
            false,
        )
    }

    fn selection(countries: &[&str], kinds: &[&str], max_price: i64) -> FilterSelection {
        FilterSelection {
            categories: BTreeSet::new(),
            countries: countries.iter().map(|s| s.to_string()).collect(),
            kinds: kinds.iter().map(|s| s.to_string()).collect(),
            max_price,
        }
    }

    #[test]
    fn country_filter_keeps_only_selected_rows() {
        let ds = two_country_dataset();
        let sel = selection(&["FR"], &["Indoor", "Outdoor"], 20);
        assert_eq!(filtered_indices(&ds, &sel), [0]);
    }

    #[test]
    fn lowering_the_price_bound_empties_the_result() {
        let ds = two_country_dataset();
        let sel = selection(&["FR"], &["Indoor", "Outdoor"], 5);
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn empty_country_selection_matches_nothing() {
        let ds = two_country_dataset();
        let sel = selection(&[], &["Indoor", "Outdoor"], 20);
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn price_bound_is_inclusive() {
        let ds = two_country_dataset();
        let sel = selection(&["FR", "ES"], &["Indoor", "Outdoor"], 20);
        assert_eq!(filtered_indices(&ds, &sel), [0, 1]);
    }

    #[test]
    fn default_selection_excludes_nothing() {
        let ds = two_country_dataset();
        let sel = default_selection(&ds);
        assert_eq!(sel.max_price, 20);
        assert_eq!(filtered_indices(&ds, &sel).len(), ds.len());
    }

    #[test]
    fn result_rows_satisfy_every_active_predicate() {
        let ds = Dataset::from_offers(
            vec![
                sample_offer(Some("Fleurs"), "FR", "Indoor", 1200.0),
                sample_offer(Some("Fleurs"), "ES", "Outdoor", 800.0),
                sample_offer(Some("Vape"), "ES", "Distillat", 35.0),
                sample_offer(Some("Comestibles"), "US", "Gummies", 12.0),
            ],
            true,
        );
        let sel = FilterSelection {
            categories: ["Fleurs", "Vape"].iter().map(|s| s.to_string()).collect(),
            countries: ["ES"].iter().map(|s| s.to_string()).collect(),
            kinds: ["Outdoor", "Distillat"].iter().map(|s| s.to_string()).collect(),
            max_price: 800,
        };
        let indices = filtered_indices(&ds, &sel);
        assert_eq!(indices, [1, 2]);
        for &i in &indices {
            let offer = &ds.offers[i];
            assert!(sel.categories.contains(offer.category.as_deref().unwrap()));
            assert!(sel.countries.contains(&offer.country));
            assert!(sel.kinds.contains(&offer.kind));
            assert!(offer.price <= sel.max_price as f64);
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = two_country_dataset();
        let sel = selection(&["FR"], &["Indoor"], 15);
        assert_eq!(filtered_indices(&ds, &sel), filtered_indices(&ds, &sel));
    }

    #[test]
    fn widening_a_selection_never_shrinks_the_result() {
        let ds = two_country_dataset();
        let narrow = selection(&["FR"], &["Indoor", "Outdoor"], 20);
        let mut wide = narrow.clone();
        wide.countries.insert("ES".to_string());

        let narrow_rows = filtered_indices(&ds, &narrow);
        let wide_rows = filtered_indices(&ds, &wide);
        assert!(narrow_rows.iter().all(|i| wide_rows.contains(i)));
        assert!(wide_rows.len() >= narrow_rows.len());
    }

    #[test]
    fn raising_the_price_bound_never_shrinks_the_result() {
        let ds = two_country_dataset();
        let low = selection(&["FR", "ES"], &["Indoor", "Outdoor"], 10);
        let mut high = low.clone();
        high.max_price = 20;

        let low_rows = filtered_indices(&ds, &low);
        let high_rows = filtered_indices(&ds, &high);
        assert!(low_rows.iter().all(|i| high_rows.contains(i)));
        assert!(high_rows.len() >= low_rows.len());
    }

    #[test]
    fn category_cascade_restricts_country_and_type_options() {
        let ds = Dataset::from_offers(
            vec![
                sample_offer(Some("Fleurs"), "FR", "Indoor", 1200.0),
                sample_offer(Some("Fleurs"), "ES", "Outdoor", 800.0),
                sample_offer(Some("Vape"), "US", "Distillat", 35.0),
            ],
            true,
        );
        let fleurs: BTreeSet<String> = ["Fleurs".to_string()].into();
        assert_eq!(available_countries(&ds, &fleurs), ["FR", "ES"]);
        assert_eq!(available_kinds(&ds, &fleurs), ["Indoor", "Outdoor"]);

        let none: BTreeSet<String> = BTreeSet::new();
        assert!(available_countries(&ds, &none).is_empty());
    }

    #[test]
    fn cascade_without_category_column_offers_everything() {
        let ds = two_country_dataset();
        let empty: BTreeSet<String> = BTreeSet::new();
        assert_eq!(available_countries(&ds, &empty), ["FR", "ES"]);
        assert_eq!(available_kinds(&ds, &empty), ["Indoor", "Outdoor"]);
    }
}
