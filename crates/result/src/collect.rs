//! Construction helpers and aggregate operations over many results

/// Wrap `value` in `Ok`
#[inline]
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Wrap `error` in `Err`
#[inline]
pub fn err<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// `Ok(value)` when present, otherwise `Err(error)`
#[inline]
pub fn from_nullable<T, E>(value: Option<T>, error: E) -> Result<T, E> {
    value.ok_or(error)
}

/// Collect every success in order, stopping at the first error.
///
/// Elements after the first `Err` are never pulled from the iterator.
///
/// ```rust
/// use paw_result::{combine, err, ok};
///
/// assert_eq!(combine([ok::<_, &str>(1), ok(2), ok(3)]), Ok(vec![1, 2, 3]));
/// assert_eq!(combine([ok(1), err("boom"), ok(3)]), Err("boom"));
/// ```
pub fn combine<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().collect()
}

/// Split into all successes and all errors, preserving order in each
pub fn partition<T, E, I>(results: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut successes = Vec::new();
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(value) => successes.push(value),
            Err(error) => errors.push(error),
        }
    }

    (successes, errors)
}

/// Success values only, in order
pub fn successes<T, E, I>(results: I) -> Vec<T>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().filter_map(Result::ok).collect()
}

/// Error values only, in order
pub fn errors<T, E, I>(results: I) -> Vec<E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().filter_map(Result::err).collect()
}

/// Combine a tuple of results with different success types.
///
/// ```rust
/// use paw_result::CombineTuple;
///
/// let port = "8080".parse::<u16>().map_err(|e| e.to_string());
/// let tls = "true".parse::<bool>().map_err(|e| e.to_string());
/// assert_eq!((port, tls).combine(), Ok((8080, true)));
/// ```
pub trait CombineTuple {
    /// `Result` of the tuple of success values
    type Output;

    /// First error left-to-right, or all values
    fn combine(self) -> Self::Output;
}

macro_rules! impl_combine_tuple {
    ($($name:ident $value:ident),+) => {
        impl<E, $($name),+> CombineTuple for ($(Result<$name, E>,)+) {
            type Output = Result<($($name,)+), E>;

            fn combine(self) -> Self::Output {
                let ($($value,)+) = self;
                Ok(($($value?,)+))
            }
        }
    };
}

impl_combine_tuple!(A a);
impl_combine_tuple!(A a, B b);
impl_combine_tuple!(A a, B b, C c);
impl_combine_tuple!(A a, B b, C c, D d);
impl_combine_tuple!(A a, B b, C c, D d, F f);
impl_combine_tuple!(A a, B b, C c, D d, F f, G g);
impl_combine_tuple!(A a, B b, C c, D d, F f, G g, H h);
impl_combine_tuple!(A a, B b, C c, D d, F f, G g, H h, I i);
