pub mod printer;

mod fmt_io_adapter;

pub use printer::{print_value, print_word, write_datum, DisplayValue, PrintError};
