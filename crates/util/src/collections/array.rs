use std::{
    fmt,
    ops::{Deref, Index, IndexMut},
};

/// Heap storage whose length is fixed when it is created.
#[repr(transparent)]
pub struct Array<T> {
    inner: Box<[T]>,
}

impl<T> Array<T> {
    pub fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Array<T>
where
    T: Clone,
{
    /// Allocate `len` slots, each holding a clone of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            inner: vec![value; len].into_boxed_slice(),
        }
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(value: Vec<T>) -> Self {
        Self {
            inner: value.into_boxed_slice(),
        }
    }
}

impl<T> fmt::Debug for Array<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<Idx, T> Index<Idx> for Array<T>
where
    Idx: TryInto<usize>,
{
    type Output = T;
    fn index(&self, index: Idx) -> &Self::Output {
        let Ok(index) = index.try_into() else {
            panic!("array index does not fit in usize")
        };
        &self.inner[index]
    }
}

impl<Idx, T> IndexMut<Idx> for Array<T>
where
    Idx: TryInto<usize>,
{
    fn index_mut(&mut self, index: Idx) -> &mut Self::Output {
        let Ok(index) = index.try_into() else {
            panic!("array index does not fit in usize")
        };
        &mut self.inner[index]
    }
}
