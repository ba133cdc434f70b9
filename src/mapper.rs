use crate::format::Formatter;

/// Renders every item through `formatter`, keeping the input order.
pub fn map_all<S, F>(items: &[S], formatter: &Formatter<F>) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    items
        .iter()
        .map(|item| formatter.apply(item.as_ref()))
        .collect()
}

/// Fallible counterpart of [`map_all`]; stops at the first error and returns it as is.
pub fn try_map_all<S, E, F>(items: &[S], mut format: F) -> Result<Vec<String>, E>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Result<String, E>,
{
    items.iter().map(|item| format(item.as_ref())).collect()
}

pub fn map_with<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}

pub trait MapExt<F>
where
    F: Fn(&str) -> String,
{
    fn map_all(&self, formatter: &Formatter<F>) -> Vec<String>;
}

impl<S, F> MapExt<F> for [S]
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    fn map_all(&self, formatter: &Formatter<F>) -> Vec<String> {
        map_all(self, formatter)
    }
}
