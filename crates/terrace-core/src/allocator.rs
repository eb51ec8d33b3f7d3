use slab::Slab;
use static_assertions::const_assert_eq;
use std::{
    mem,
    num::NonZeroU32,
    ops::Index,
};

/// An opaque number that uniquely identifies the value stored in a given [`Allocator32`].
///
/// An `Option<AllocId32>` still only requires 32 bits.
pub type AllocId32 = NonZeroU32;

const_assert_eq!(
    mem::size_of::<Option<AllocId32>>(),
    mem::size_of::<AllocId32>()
);

/// Stores up to `u32::MAX - 1` values of type `T`. Indexed by 32-bit [`AllocId32`].
///
/// Values are never removed, so IDs are handed out densely in insertion order, starting at 1. This makes them stable across
/// runs that insert the same values in the same order.
#[derive(Clone, Debug)]
pub struct Allocator32<T> {
    values: Slab<T>,
}

impl<T> Default for Allocator32<T> {
    fn default() -> Self {
        Self { values: Slab::new() }
    }
}

impl<T> Allocator32<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AllocId32) -> Option<&T> {
        self.values.get(Self::id_to_index(id))
    }

    #[inline]
    pub fn insert(&mut self, value: T) -> AllocId32 {
        self.insert_with(|_| value)
    }

    /// Like `insert`, but the value gets to know its own ID before it is stored.
    pub fn insert_with(&mut self, make_value: impl FnOnce(AllocId32) -> T) -> AllocId32 {
        let entry = self.values.vacant_entry();
        let id = Self::index_to_id(entry.key());
        entry.insert(make_value(id));
        id
    }

    const MAX_VALID_INDEX: usize = (u32::MAX - 1) as usize;

    const fn id_to_index(id: AllocId32) -> usize {
        (id.get() - 1) as usize
    }

    fn index_to_id(index: usize) -> AllocId32 {
        assert!(index <= Self::MAX_VALID_INDEX);
        // Can't be zero after the increment, and can't overflow after the assertion.
        NonZeroU32::new(index as u32 + 1).unwrap()
    }
}

impl<T> Index<AllocId32> for Allocator32<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: AllocId32) -> &Self::Output {
        self.values.index(Self::id_to_index(id))
    }
}


// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
