/// Data layer: core types, loading, querying, and filtering.
///
/// Architecture:
/// ```text
///   .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  named columns, row-aligned cells
///   └──────────┘
///        │
///        ├──────────────┬──────────────┐
///        ▼              ▼              ▼
///   ┌──────────┐  ┌──────────┐  ┌──────────┐
///   │  summary  │  │  topic    │  │  filter   │
///   │ head/tail │  │ classify  │  │ compare + │
///   │ describe  │  │ by name   │  │ project   │
///   └──────────┘  └──────────┘  └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
pub mod topic;
