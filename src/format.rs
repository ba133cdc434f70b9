//! String formatters that carry a captured label.

use std::fmt;

use crate::errors::{HofError, Result};

pub struct Formatter<F> {
    format_fn: F,
}

impl<F> Formatter<F>
where
    F: Fn(&str) -> String,
{
    pub fn new(format_fn: F) -> Self {
        Self { format_fn }
    }

    #[inline]
    pub fn apply(&self, msg: &str) -> String {
        (self.format_fn)(msg)
    }
}

impl<F: Clone> Clone for Formatter<F> {
    fn clone(&self) -> Self {
        Self {
            format_fn: self.format_fn.clone(),
        }
    }
}

impl<F> fmt::Debug for Formatter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter").finish_non_exhaustive()
    }
}

/// Wraps messages in an opening and closing `tag`, e.g. `<h1>msg</h1>`.
///
/// # Errors
///
/// Returns [`HofError::InvalidArgument`] when `tag` is empty.
pub fn tag_wrapper(tag: impl Into<String>) -> Result<Formatter<impl Fn(&str) -> String + Clone>> {
    let tag = tag.into();
    if tag.is_empty() {
        return Err(HofError::invalid("tag", "must not be empty"));
    }
    Ok(Formatter::new(move |msg: &str| format!("<{tag}>{msg}</{tag}>")))
}

pub fn prefix(label: impl Into<String>) -> Formatter<impl Fn(&str) -> String + Clone> {
    let label = label.into();
    Formatter::new(move |msg: &str| format!("{label}{msg}"))
}
