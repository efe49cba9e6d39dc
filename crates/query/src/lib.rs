//! Query-side logic: the best-effort natural-language translator and the
//! filter evaluator that decides which stored records satisfy a criteria set.

mod error;
mod eval;
mod translate;

pub use error::{QueryError, Result};
pub use eval::{filter_records, matches};
pub use translate::{translate, Translation};
