/// Data layer: core types, loading, filtering, and output.
///
/// Architecture:
/// ```text
///    source .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  project columns, drop rows → Filtered + stats
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  stage temp file, swap into destination
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
