pub mod results;
pub mod table;

pub use results::{ErrorRecord, FetchOutcome, ResultMap};
pub use table::{PinyinGroup, PinyinTable};
