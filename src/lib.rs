//! Closure factories and generic filter/map helpers.
//!
//! ```rust
//! use hofkit::prelude::*;
//!
//! let input: [i64; 6] = [1, 2, 3, 4, 5, 6];
//! assert_eq!(input.filter(&greater_than(3)), vec![4, 5, 6]);
//! assert_eq!(filter(&input, &even()), vec![2, 4, 6]);
//!
//! let h1 = tag_wrapper("h1")?;
//! assert_eq!(
//!     map_all(&["Test Headline", "Another Headline"], &h1),
//!     vec!["<h1>Test Headline</h1>", "<h1>Another Headline</h1>"],
//! );
//! # Ok::<(), HofError>(())
//! ```

pub mod decorator;
pub mod errors;
pub mod filter;
pub mod format;
pub mod logging;
pub mod mapper;
pub mod predicate;
pub mod thunk;

pub mod prelude;
