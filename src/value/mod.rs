pub mod pair;
pub mod value;
pub mod word;

pub use pair::Pair;
pub use value::{Kind, PairId, TextId, Value, INT_MAX, INT_MIN};
pub use word::Word;


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
