use std::fmt;
use std::marker::PhantomData;

/// A single-argument boolean test that owns whatever it captured at creation.
///
/// Build one from any closure with [`Predicate::new`], or use the factories in
/// [`crate::predicate`].
pub struct Predicate<P, T> {
    test_fn: P,
    _phantom: PhantomData<fn(&T) -> bool>,
}

impl<P, T> Predicate<P, T>
where
    P: Fn(&T) -> bool,
{
    pub fn new(test_fn: P) -> Self {
        Self {
            test_fn,
            _phantom: PhantomData,
        }
    }

    #[inline]
    pub fn matches(&self, item: &T) -> bool {
        (self.test_fn)(item)
    }
}

impl<P: Clone, T> Clone for Predicate<P, T> {
    fn clone(&self) -> Self {
        Self {
            test_fn: self.test_fn.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<P, T> fmt::Debug for Predicate<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("item", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// Returns the items accepted by `predicate`, in their original order.
pub fn filter<P, T>(items: &[T], predicate: &Predicate<P, T>) -> Vec<T>
where
    P: Fn(&T) -> bool,
    T: Clone,
{
    items
        .iter()
        .filter(|item| predicate.matches(item))
        .cloned()
        .collect()
}

/// Like [`filter`], but the test may fail. The first error is handed back
/// untouched and the remaining items are never visited.
pub fn try_filter<T, E, F>(items: &[T], mut test: F) -> Result<Vec<T>, E>
where
    F: FnMut(&T) -> Result<bool, E>,
    T: Clone,
{
    let mut kept = Vec::new();
    for item in items {
        if test(item)? {
            kept.push(item.clone());
        }
    }
    Ok(kept)
}

pub trait FilterExt<P, T>
where
    P: Fn(&T) -> bool,
{
    type Output;
    fn filter(&self, predicate: &Predicate<P, T>) -> Self::Output;
}

impl<P, T> FilterExt<P, T> for [T]
where
    P: Fn(&T) -> bool,
    T: Clone,
{
    type Output = Vec<T>;
    fn filter(&self, predicate: &Predicate<P, T>) -> Self::Output {
        filter(self, predicate)
    }
}
