//! Factories for integer predicates that close over a parameter.

use crate::errors::{HofError, Result};
use crate::filter::Predicate;

/// Accepts items strictly greater than `min`.
pub fn greater_than(min: i64) -> Predicate<impl Fn(&i64) -> bool + Clone, i64> {
    Predicate::new(move |item: &i64| *item > min)
}

pub fn even() -> Predicate<impl Fn(&i64) -> bool + Clone, i64> {
    Predicate::new(|item: &i64| item % 2 == 0)
}

/// Accepts multiples of `n`. Fails for `n == 0`.
pub fn multiple_of(n: i64) -> Result<Predicate<impl Fn(&i64) -> bool + Clone, i64>> {
    if n == 0 {
        return Err(HofError::invalid("n", "must not be zero"));
    }
    // `i64::MIN % -1` overflows; it is still a multiple.
    Ok(Predicate::new(move |item: &i64| {
        item.checked_rem(n).is_none_or(|rem| rem == 0)
    }))
}
