pub use crate::decorator::{Decorated, decorate};
pub use crate::errors::{HofError, Result};
pub use crate::filter::{FilterExt, Predicate, filter, try_filter};
pub use crate::format::{Formatter, prefix, tag_wrapper};
pub use crate::mapper::{MapExt, map_all, map_with, try_map_all};
pub use crate::predicate::{even, greater_than, multiple_of};
pub use crate::thunk::{logger, message};
