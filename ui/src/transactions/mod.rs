mod table;
pub use table::{TransactionsCard, TransactionsTable};

mod export;
pub use export::{build_csv, ExportCsvButton};
