//! League business logic: standings computation and export.

mod export;
mod standings;

pub use export::table_to_csv;
pub use standings::compute_table;
