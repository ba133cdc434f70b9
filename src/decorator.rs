//! Call-through wrappers that announce each invocation before delegating.
//!
//! Functions of several arguments are decorated by taking a tuple:
//!
//! ```rust
//! use hofkit::decorator::decorate;
//!
//! let info = decorate("display_info", |(name, age): (&str, u32)| format!("{name} is {age}"));
//! assert_eq!(info.call(("MD", 36)), "MD is 36");
//! ```

use tracing::info;

#[derive(Debug, Clone)]
pub struct Decorated<F> {
    name: &'static str,
    inner: F,
}

impl<F> Decorated<F> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        info!(function = self.name, "wrapper executed before {}", self.name);
        (self.inner)(args)
    }
}

pub fn decorate<F>(name: &'static str, inner: F) -> Decorated<F> {
    Decorated { name, inner }
}
