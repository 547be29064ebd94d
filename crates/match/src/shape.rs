//! Shape of slices and optional values

/// How many elements a slice holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceShape<'s, T> {
    /// No elements
    Empty,
    /// Exactly one element
    Single(&'s T),
    /// Two or more elements
    Multiple(&'s [T]),
}

impl<'s, T> SliceShape<'s, T> {
    /// Classify `slice`
    pub fn of(slice: &'s [T]) -> Self {
        match slice {
            [] => Self::Empty,
            [only] => Self::Single(only),
            _ => Self::Multiple(slice),
        }
    }
}

/// Run `empty`, `single` or `multiple` depending on the slice length
pub fn match_slice<T, U>(
    slice: &[T],
    empty: impl FnOnce() -> U,
    single: impl FnOnce(&T) -> U,
    multiple: impl FnOnce(&[T]) -> U,
) -> U {
    match SliceShape::of(slice) {
        SliceShape::Empty => empty(),
        SliceShape::Single(item) => single(item),
        SliceShape::Multiple(items) => multiple(items),
    }
}

/// Run `some` with the value, or `none`
pub fn match_nullable<T, U>(
    value: Option<T>,
    some: impl FnOnce(T) -> U,
    none: impl FnOnce() -> U,
) -> U {
    value.map_or_else(none, some)
}
