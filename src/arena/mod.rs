pub mod arena;
pub mod text_pool;

pub use arena::{Arena, ListIter, LookupError};
pub use text_pool::TextPool;
