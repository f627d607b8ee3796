/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///      data.csv (`;`-delimited)
///            │
///            ▼
///       ┌──────────┐
///       │  loader   │  parse file once → Dataset | LoadError
///       └──────────┘
///            │
///            ▼
///       ┌──────────┐
///       │  Dataset  │  Vec<Offer>, option sets, price bounds
///       └──────────┘
///            │
///            ▼
///       ┌──────────┐
///       │  filter   │  apply selection predicates → filtered indices
///       └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
