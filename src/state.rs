use crate::color::CategoryColors;
use crate::data::filter::{
    available_countries, available_kinds, default_selection, filtered_indices, FilterSelection,
};
use crate::data::loader::LoadError;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalogue (None when the load failed).
    pub dataset: Option<Dataset>,

    /// Terminal load failure message; set once, never cleared.
    pub load_error: Option<String>,

    /// The user's current filter constraints.
    pub selection: FilterSelection,

    /// Country options offered for the current category selection.
    pub available_countries: Vec<String>,

    /// Type options offered for the current category selection.
    pub available_kinds: Vec<String>,

    /// Indices of offers passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Category → colour mapping for the filter panel and table.
    pub category_colors: CategoryColors,
}

impl AppState {
    /// Build the state from the one-time load outcome.
    pub fn from_load(outcome: &Result<Dataset, LoadError>) -> Self {
        let mut state = AppState {
            dataset: None,
            load_error: None,
            selection: FilterSelection {
                categories: Default::default(),
                countries: Default::default(),
                kinds: Default::default(),
                max_price: 0,
            },
            available_countries: Vec::new(),
            available_kinds: Vec::new(),
            visible_indices: Vec::new(),
            category_colors: CategoryColors::new(&[]),
        };
        match outcome {
            Ok(dataset) => state.set_dataset(dataset.clone()),
            Err(e) => {
                log::error!("failed to load catalogue: {e}");
                state.load_error = Some(e.to_string());
            }
        }
        state
    }

    /// Ingest the loaded catalogue, initialise selection and option sets.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.selection = default_selection(&dataset);
        self.available_countries = available_countries(&dataset, &self.selection.categories);
        self.available_kinds = available_kinds(&dataset, &self.selection.categories);
        self.visible_indices = (0..dataset.len()).collect();
        self.category_colors = CategoryColors::new(&dataset.categories);
        self.dataset = Some(dataset);
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.selection);
        }
    }

    /// Toggle a category and cascade into the country/type option sets.
    ///
    /// Values that leave the available sets stay selected (they match no
    /// visible row anyway) but can no longer be toggled; values that newly
    /// appear are selected, mirroring the default of "everything offered".
    pub fn toggle_category(&mut self, value: &str) {
        if !self.selection.categories.remove(value) {
            self.selection.categories.insert(value.to_string());
        }
        self.rebuild_available();
        self.refilter();
    }

    pub fn toggle_country(&mut self, value: &str) {
        if !self.selection.countries.remove(value) {
            self.selection.countries.insert(value.to_string());
        }
        self.refilter();
    }

    pub fn toggle_kind(&mut self, value: &str) {
        if !self.selection.kinds.remove(value) {
            self.selection.kinds.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select every offered category.
    pub fn select_all_categories(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection.categories = ds.categories.iter().cloned().collect();
        }
        self.rebuild_available();
        self.refilter();
    }

    /// Deselect every category.
    pub fn select_no_categories(&mut self) {
        self.selection.categories.clear();
        self.rebuild_available();
        self.refilter();
    }

    pub fn select_all_countries(&mut self) {
        self.selection.countries = self.available_countries.iter().cloned().collect();
        self.refilter();
    }

    pub fn select_no_countries(&mut self) {
        self.selection.countries.clear();
        self.refilter();
    }

    pub fn select_all_kinds(&mut self) {
        self.selection.kinds = self.available_kinds.iter().cloned().collect();
        self.refilter();
    }

    pub fn select_no_kinds(&mut self) {
        self.selection.kinds.clear();
        self.refilter();
    }

    /// Set the inclusive price bound.
    pub fn set_max_price(&mut self, max_price: i64) {
        if self.selection.max_price != max_price {
            self.selection.max_price = max_price;
            self.refilter();
        }
    }

    fn rebuild_available(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let new_countries = available_countries(ds, &self.selection.categories);
        let new_kinds = available_kinds(ds, &self.selection.categories);

        // Newly offered values start selected; stale selections are kept but
        // become unselectable once their checkbox disappears.
        for country in &new_countries {
            if !self.available_countries.contains(country) {
                self.selection.countries.insert(country.clone());
            }
        }
        for kind in &new_kinds {
            if !self.available_kinds.contains(kind) {
                self.selection.kinds.insert(kind.clone());
            }
        }
        self.available_countries = new_countries;
        self.available_kinds = new_kinds;
    }
}
