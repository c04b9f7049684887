pub mod converter;
pub mod currency_selector;
pub mod header;
pub mod historical;
pub mod rates_table;

pub use converter::Converter;
pub use header::Header;
pub use historical::Historical;
pub use rates_table::RatesTable;
