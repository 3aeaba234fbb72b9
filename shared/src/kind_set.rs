use std::fmt;

use crate::events::EventKind;

/// A set of event kinds, stored as a bitmask over kind indexes.
///
/// Every event family holds at most [`KindSet::MAX_KINDS`] kinds, which lets
/// receivers publish the kinds they handle as an associated `const` and lets
/// dispatch test membership with a single mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u64);

impl KindSet {
    pub const EMPTY: Self = Self(0);
    pub const MAX_KINDS: usize = 64;

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The set holding the first `count` kind indexes.
    pub const fn first(count: usize) -> Self {
        if count >= Self::MAX_KINDS {
            Self(u64::MAX)
        } else {
            Self((1u64 << count) - 1)
        }
    }

    pub const fn with(self, index: usize) -> Self {
        assert!(index < Self::MAX_KINDS, "event kind index out of range");
        Self(self.0 | (1u64 << index))
    }

    pub const fn without(self, index: usize) -> Self {
        if index >= Self::MAX_KINDS {
            return self;
        }
        Self(self.0 & !(1u64 << index))
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn contains(self, index: usize) -> bool {
        index < Self::MAX_KINDS && self.0 & (1u64 << index) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Builds the set of kinds in `all` whose names appear in `handled`.
    ///
    /// Evaluated in const context by the `hooks!` and `field_hooks!` macros,
    /// so a name that matches no kind stops the build.
    pub const fn from_names(all: &[&str], handled: &[&str]) -> Self {
        assert!(
            all.len() <= Self::MAX_KINDS,
            "event families are limited to 64 kinds"
        );

        let mut bits = 0u64;
        let mut i = 0;
        while i < handled.len() {
            let mut j = 0;
            let mut found = false;
            while j < all.len() {
                if const_str_eq(handled[i], all[j]) {
                    bits |= 1u64 << j;
                    found = true;
                    break;
                }
                j += 1;
            }
            if !found {
                panic!("handler name matches no event kind of this family");
            }
            i += 1;
        }

        Self(bits)
    }

    pub fn indexes(self) -> impl Iterator<Item = usize> {
        (0..Self::MAX_KINDS).filter(move |index| self.contains(*index))
    }

    /// The kinds of family `K` contained in this set, in declaration order.
    pub fn kinds<K: EventKind>(self) -> impl Iterator<Item = K> {
        K::ALL
            .iter()
            .copied()
            .filter(move |kind| self.contains(kind.index()))
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.indexes()).finish()
    }
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
