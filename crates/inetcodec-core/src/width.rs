//! Fixed-width segment packing shared by both address families.
//!
//! An address is a run of equally sized unsigned segments stored big-endian
//! in a single integer. IPv4 is four 8-bit octets, IPv6 is eight 16-bit
//! hextets. Everything is carried in a `u128` so one set of helpers serves
//! both widths; shifts and masks are exact and never touch floating point.

/// Segment layout of an address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Number of segments in the textual form.
    pub segments: usize,
    /// Width of one segment in bits.
    pub bits: u32,
}

/// Four 8-bit octets.
pub const IPV4_LAYOUT: Layout = Layout {
    segments: 4,
    bits: 8,
};

/// Eight 16-bit hextets.
pub const IPV6_LAYOUT: Layout = Layout {
    segments: 8,
    bits: 16,
};

impl Layout {
    /// Total width of a packed address in bits.
    #[must_use]
    pub const fn total_bits(self) -> u32 {
        self.segments as u32 * self.bits
    }

    /// Mask selecting the low `bits` of a value.
    #[must_use]
    pub const fn segment_mask(self) -> u128 {
        (1u128 << self.bits) - 1
    }

    /// Largest value representable by this layout.
    #[must_use]
    pub const fn max_value(self) -> u128 {
        if self.total_bits() >= u128::BITS {
            u128::MAX
        } else {
            (1u128 << self.total_bits()) - 1
        }
    }

    /// Returns true if `value` fits in this layout.
    #[must_use]
    pub const fn fits(self, value: u128) -> bool {
        value <= self.max_value()
    }

    /// Folds segments left to right into one integer.
    ///
    /// The first segment lands in the most-significant position. Each part is
    /// masked to the segment width, so the caller is responsible for range
    /// checking before packing.
    #[must_use]
    pub fn pack<I>(self, parts: I) -> u128
    where
        I: IntoIterator,
        I::Item: Into<u128>,
    {
        let mask = self.segment_mask();
        parts
            .into_iter()
            .fold(0u128, |acc, part| (acc << self.bits) | (part.into() & mask))
    }

    /// Splits `value` into segments, most-significant first.
    #[must_use]
    pub fn unpack(self, value: u128) -> Vec<u16> {
        let mask = self.segment_mask();
        (0..self.segments)
            .map(|i| {
                let shift = self.bits * (self.segments - 1 - i) as u32;
                // Masked to at most 16 bits, so the narrowing is exact.
                ((value >> shift) & mask) as u16
            })
            .collect()
    }
}
