/// Growable bit buffer, packed most-significant-bit first.
///
/// Bit `i` lives in byte `i / 8` at mask `0x80 >> (i % 8)`. Bits past
/// `bit_count` in the last byte are always zero.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bits
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8; // which byte is target?
        let bit_offset = self.bit_count % 8; // which bit position is target?

        // make a new byte if needed
        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    /// Appends every bit of `other`, in order.
    pub fn extend_from(&mut self, other: &BitVec) {
        if self.bit_count % 8 == 0 {
            // byte aligned: copy whole bytes, the padding in `other` is zero
            self.bits.extend_from_slice(other.as_bytes());
            self.bit_count += other.bit_count;
            return;
        }
        for bit in other.iter() {
            self.push_bit(bit);
        }
    }

    pub fn pop(&mut self) -> Option<bool> {
        if self.bit_count == 0 {
            return None;
        }
        let index = self.bit_count - 1;
        let mask = 0x80 >> (index % 8);
        let bit = self.bits[index / 8] & mask != 0;
        self.bits[index / 8] &= !mask;
        self.bit_count -= 1;
        if self.bit_count % 8 == 0 {
            self.bits.pop();
        }
        Some(bit)
    }

    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &BitVec) -> bool {
        self.bit_count <= other.bit_count && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits {
            bytes: &self.bits,
            len: self.bit_count,
            index: 0,
        }
    }
}

/// Iterator over MSB-first packed bits, first pushed first.
pub struct Bits<'a> {
    bytes: &'a [u8],
    len: usize,
    index: usize,
}

impl<'a> Bits<'a> {
    /// Reads the first `bit_count` bits of `bytes` in place.
    ///
    /// Returns `None` if `bytes` is too short to hold `bit_count` bits.
    /// Surplus whole bytes and the padding in the last byte are never read.
    pub fn from_slice(bytes: &'a [u8], bit_count: usize) -> Option<Self> {
        if bytes.len() < bit_count.div_ceil(8) {
            return None;
        }
        Some(Bits {
            bytes,
            len: bit_count,
            index: 0,
        })
    }
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.index >= self.len {
            return None;
        }
        let bit = self.bytes[self.index / 8] & (0x80 >> (self.index % 8)) != 0;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitVec {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut vec = BitVec::new();
        for bit in iter {
            vec.push_bit(bit);
        }
        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitVec {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_msb_first_packing() {
        let v = bits("101");
        assert_eq!(v.as_bytes(), &[0b1010_0000]);
        assert_eq!(v.bit_count(), 3);

        let v = bits("1111000011");
        assert_eq!(v.as_bytes(), &[0b1111_0000, 0b1100_0000]);
        assert_eq!(v.len(), 10);
    }

    #[test]
    fn test_iter() {
        let v = bits("0110");
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![false, true, true, false]);
        assert_eq!(v.iter().len(), 4);
    }

    #[test]
    fn test_extend_aligned_and_unaligned() {
        let mut a = bits("10101010");
        a.extend_from(&bits("11"));
        assert_eq!(a, bits("1010101011"));

        let mut b = bits("1");
        b.extend_from(&bits("0111111111"));
        assert_eq!(b, bits("10111111111"));
        assert_eq!(b.as_bytes(), &[0b1011_1111, 0b1110_0000]);
    }

    #[test]
    fn test_pop_clears_bit() {
        let mut v = bits("100000001");
        assert_eq!(v.pop(), Some(true));
        assert_eq!(v, bits("10000000"));
        assert_eq!(v.as_bytes().len(), 1);
        assert_eq!(v.pop(), Some(false));
        assert_eq!(v.as_bytes(), &[0b1000_0000]);
        assert_eq!(BitVec::new().pop(), None);
    }

    #[test]
    fn test_from_slice_stops_at_bit_count() {
        let read: BitVec = Bits::from_slice(&[0xFF, 0xFF, 0xAA], 12).unwrap().collect();
        assert_eq!(read.as_bytes(), &[0xFF, 0xF0]);
        assert_eq!(read.bit_count(), 12);

        let partial = Bits::from_slice(&[0b0100_0001], 3).unwrap();
        assert_eq!(partial.len(), 3);
        assert_eq!(partial.collect::<Vec<_>>(), vec![false, true, false]);

        assert!(Bits::from_slice(&[0xFF], 9).is_none());
        assert_eq!(Bits::from_slice(&[], 0).unwrap().count(), 0);
    }

    #[test]
    fn test_prefix() {
        assert!(bits("10").is_prefix_of(&bits("101")));
        assert!(bits("101").is_prefix_of(&bits("101")));
        assert!(!bits("11").is_prefix_of(&bits("101")));
        assert!(!bits("1010").is_prefix_of(&bits("101")));
    }
}
