//! Array: the growable sequence used by generated code
//!
//! `Array<T>` owns its elements exclusively. Cloning an array deep-copies
//! every element; moving it transfers the buffer without copying. All
//! positional accessors are checked and return [`RuntimeError`] instead of
//! reading past the end.
//!
//! | Operation            | Cost      | Failure                      |
//! |----------------------|-----------|------------------------------|
//! | `push`, `append_value` | amortized O(1) | never                 |
//! | `pop`, `first`, `last` | O(1)    | `EmptySequence`              |
//! | `at`, `at_mut`       | O(1)      | `IndexOutOfBounds`           |
//! | `insert`, `remove`   | O(n)      | `IndexOutOfBounds`           |
//! | `slice`              | O(k)      | `InvalidRange`               |

use crate::error::{Result, RuntimeError};
use crate::format::Format;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Build an [`Array`] from a list of values
///
/// ```
/// use velocity_core::array;
///
/// let a = array![1, 2, 3];
/// assert_eq!(a.len(), 3);
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Array::from(::std::vec![$($value),+])
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Array<T> {
    items: Vec<T>,
}

impl<T> Array<T> {
    /// Create an empty array
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty array with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Create an array of `len` copies of `value`
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            items: vec![value; len],
        }
    }

    /// Create an array of `len` default values
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, T::default);
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Append a value to the end
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or(RuntimeError::EmptySequence { op: "pop" })
    }

    pub fn first(&self) -> Result<&T> {
        self.items
            .first()
            .ok_or(RuntimeError::EmptySequence { op: "first" })
    }

    pub fn first_mut(&mut self) -> Result<&mut T> {
        self.items
            .first_mut()
            .ok_or(RuntimeError::EmptySequence { op: "first" })
    }

    pub fn last(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or(RuntimeError::EmptySequence { op: "last" })
    }

    pub fn last_mut(&mut self) -> Result<&mut T> {
        self.items
            .last_mut()
            .ok_or(RuntimeError::EmptySequence { op: "last" })
    }

    /// Checked element access
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(RuntimeError::IndexOutOfBounds {
                op: "at",
                index,
                len,
            })
    }

    /// Checked mutable element access
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(RuntimeError::IndexOutOfBounds {
                op: "at",
                index,
                len,
            })
    }

    /// Element access without an error value
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Remove every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Set the length to `len`, filling new slots with `T::default()`
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        self.items.resize_with(len, T::default);
    }

    /// Set the length to `len`, filling new slots with copies of `value`
    pub fn resize_with_value(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.items.resize(len, value);
    }

    /// Ensure the total capacity is at least `capacity`
    pub fn reserve(&mut self, capacity: usize) {
        let additional = capacity.saturating_sub(self.items.len());
        self.items.reserve(additional);
    }

    /// Remove the element at `index`, shifting later elements left
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.items.len();
        if index >= len {
            return Err(RuntimeError::IndexOutOfBounds {
                op: "remove",
                index,
                len,
            });
        }
        Ok(self.items.remove(index))
    }

    /// Insert before `index`; `index == len` appends
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.items.len();
        if index > len {
            return Err(RuntimeError::IndexOutOfBounds {
                op: "insert",
                index,
                len,
            });
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Append copies of every element of `other`, preserving order
    pub fn append(&mut self, other: &Array<T>)
    where
        T: Clone,
    {
        self.items.extend_from_slice(&other.items);
    }

    /// Append a single value (same as `push`)
    pub fn append_value(&mut self, value: T) {
        self.push(value);
    }

    /// Copy `[start, end)` into a new, independent array
    pub fn slice(&self, start: usize, end: usize) -> Result<Array<T>>
    where
        T: Clone,
    {
        let len = self.items.len();
        if start > end || end > len {
            return Err(RuntimeError::InvalidRange { start, end, len });
        }
        Ok(Self {
            items: self.items[start..end].to_vec(),
        })
    }

    /// Copy `[start, len)` into a new, independent array
    pub fn slice_from(&self, start: usize) -> Result<Array<T>>
    where
        T: Clone,
    {
        self.slice(start, self.items.len())
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    /// Panics with the `IndexOutOfBounds` message when `index >= len`
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(items: &[T]) -> Self {
        Self {
            items: items.to_vec(),
        }
    }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(array: Array<T>) -> Self {
        array.items
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

/// Renders as `[a, b, c]` using each element's capability
impl<T: Format> Format for Array<T> {
    fn format(&self) -> String {
        let parts: Vec<String> = self.items.iter().map(Format::format).collect();
        format!("[{}]", parts.join(", "))
    }
}
