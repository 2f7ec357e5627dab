use core::{fmt, ops::*};

use vkformat_base::{EnumCountT, EnumFromIndexT};

use crate::Format;

const NUM_WORDS: usize = (Format::COUNT + 63) / 64;

/// Set of formats, stored as one bit per format ordinal
///
/// All queries are `const`, so sets can be built as `const` LUTs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormatSet {
    bits: [u64; NUM_WORDS],
}

impl FormatSet {
    /// Set without any formats
    pub const EMPTY: FormatSet = FormatSet { bits: [0; NUM_WORDS] };

    /// Create a set from a list of formats, duplicates are allowed
    pub const fn from_formats(formats: &[Format]) -> Self {
        let mut bits = [0; NUM_WORDS];
        let mut i = 0;
        while i < formats.len() {
            let (word_idx, bit_idx) = Self::indices(formats[i]);
            bits[word_idx] |= 1u64 << bit_idx;
            i += 1;
        }
        Self { bits }
    }

    /// Check if the format is in the set
    pub const fn contains(&self, format: Format) -> bool {
        let (word_idx, bit_idx) = Self::indices(format);
        (self.bits[word_idx] >> bit_idx) & 0x1 != 0
    }

    /// Add a format to the set
    pub fn insert(&mut self, format: Format) {
        let (word_idx, bit_idx) = Self::indices(format);
        self.bits[word_idx] |= 1u64 << bit_idx;
    }

    /// Remove a format from the set
    pub fn remove(&mut self, format: Format) {
        let (word_idx, bit_idx) = Self::indices(format);
        self.bits[word_idx] &= !(1u64 << bit_idx);
    }

    /// Const implementation of bitor
    pub const fn union(self, other: FormatSet) -> FormatSet {
        let mut bits = self.bits;
        let mut i = 0;
        while i < NUM_WORDS {
            bits[i] |= other.bits[i];
            i += 1;
        }
        Self { bits }
    }

    /// Const implementation of bitand
    pub const fn intersection(self, other: FormatSet) -> FormatSet {
        let mut bits = self.bits;
        let mut i = 0;
        while i < NUM_WORDS {
            bits[i] &= other.bits[i];
            i += 1;
        }
        Self { bits }
    }

    /// Check if the sets have no format in common
    pub const fn is_disjoint(&self, other: &FormatSet) -> bool {
        self.intersection(*other).is_empty()
    }

    /// Check if no format is set
    pub const fn is_empty(&self) -> bool {
        let mut i = 0;
        while i < NUM_WORDS {
            if self.bits[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Number of formats in the set
    pub const fn len(&self) -> usize {
        let mut acc = 0;
        let mut i = 0;
        while i < NUM_WORDS {
            acc += self.bits[i].count_ones() as usize;
            i += 1;
        }
        acc
    }

    /// Iterate over the formats in the set, in ordinal order
    pub fn iter(&self) -> Iter<'_> {
        Iter { set: self, idx: 0 }
    }

    #[inline(always)]
    const fn indices(format: Format) -> (usize, u32) {
        let idx = format as usize;
        (idx / 64, (idx & 63) as u32)
    }
}

impl fmt::Debug for FormatSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for FormatSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for FormatSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for FormatSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for FormatSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<Format> for FormatSet {
    fn from_iter<T: IntoIterator<Item = Format>>(iter: T) -> Self {
        let mut set = FormatSet::EMPTY;
        for format in iter {
            set.insert(format);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FormatSet {
    type Item = Format;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the formats in a [`FormatSet`]
#[derive(Clone)]
pub struct Iter<'a> {
    set: &'a FormatSet,
    idx: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Format;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < Format::COUNT {
            let format = Format::from_idx(self.idx);
            self.idx += 1;
            match format {
                Some(format) if self.set.contains(format) => return Some(format),
                _ => {},
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Format::COUNT - self.idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove() {
        let mut set = FormatSet::EMPTY;
        assert!(set.is_empty());

        // Spans all words of the set
        set.insert(Format::R4G4UNormPack8);
        set.insert(Format::R16G16SNorm);
        set.insert(Format::ASTC12x12SrgbBlock);
        assert_eq!(set.len(), 3);
        assert!(set.contains(Format::R16G16SNorm));
        assert!(!set.contains(Format::Undefined));

        set.remove(Format::R16G16SNorm);
        assert!(!set.contains(Format::R16G16SNorm));
        assert_eq!(set.iter().collect::<Vec<_>>(), [Format::R4G4UNormPack8, Format::ASTC12x12SrgbBlock]);
    }

    #[test]
    fn const_construction() {
        const SET: FormatSet = FormatSet::from_formats(&[Format::D16UNorm, Format::S8UInt, Format::D16UNorm]);
        assert_eq!(SET.len(), 2);
        assert!(SET.contains(Format::S8UInt));
    }

    #[test]
    fn set_operations() {
        let a = FormatSet::from_formats(&[Format::R8UNorm, Format::R8SNorm, Format::BC7UNormBlock]);
        let b = FormatSet::from_formats(&[Format::R8SNorm, Format::R64SFloat]);
        let c = FormatSet::from_formats(&[Format::R32UInt]);

        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).iter().collect::<Vec<_>>(), [Format::R8SNorm]);
        assert!(!a.is_disjoint(&b));
        assert!(a.is_disjoint(&c));

        let collected: FormatSet = a.iter().chain(c.iter()).collect();
        assert_eq!(collected, a.union(c));
        assert_eq!(format!("{:?}", c), "{R32UInt}");
    }
}
