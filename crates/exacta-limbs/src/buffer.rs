//! Resizable little-endian limb buffers.
//!
//! All operations here are magnitude operations: operands are non-negative
//! and the canonical form has no trailing zero limbs (zero is the empty
//! buffer). Callers that need signs layer them on top.

use std::cmp::Ordering;

/// Number of decimal digits that always fit in one limb.
const CHUNK_DIGITS: usize = 19;

/// `10^19`, the largest power of ten representable in a `u64`.
const CHUNK_BASE: u64 = 10_000_000_000_000_000_000;

/// The magnitude of a big integer: little-endian 64-bit limbs, canonical
/// (no trailing zero limbs; zero is empty).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct LimbBuffer(Vec<u64>);

impl LimbBuffer {
    /// Creates the zero magnitude.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a magnitude from a single limb.
    #[must_use]
    pub fn from_limb(limb: u64) -> Self {
        if limb == 0 {
            Self::new()
        } else {
            Self(vec![limb])
        }
    }

    /// Creates a magnitude from little-endian limbs, trimming trailing
    /// zero limbs into canonical form.
    #[must_use]
    pub fn from_limbs(mut limbs: Vec<u64>) -> Self {
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        Self(limbs)
    }

    /// Returns true if this magnitude is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of limbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no limbs (the value is zero).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the little-endian limb slice.
    #[must_use]
    pub fn limbs(&self) -> &[u64] {
        &self.0
    }

    /// Returns the number of significant bits.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        match self.0.last() {
            None => 0,
            Some(top) => self.0.len() * 64 - top.leading_zeros() as usize,
        }
    }

    /// Tests bit `i` (bit 0 is the least significant).
    #[must_use]
    pub fn bit(&self, i: usize) -> bool {
        match self.0.get(i / 64) {
            Some(limb) => (limb >> (i % 64)) & 1 == 1,
            None => false,
        }
    }

    /// Compares two magnitudes: longer wins, then lexicographic from the
    /// most significant limb.
    #[must_use]
    pub fn cmp_mag(&self, other: &Self) -> Ordering {
        match self.0.len().cmp(&other.0.len()) {
            Ordering::Equal => self.0.iter().rev().cmp(other.0.iter().rev()),
            ord => ord,
        }
    }

    /// Adds two magnitudes with carry propagation.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.0.len() >= other.0.len() {
            (&self.0, &other.0)
        } else {
            (&other.0, &self.0)
        };
        let mut out = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u64;
        for (i, &a) in long.iter().enumerate() {
            let b = short.get(i).copied().unwrap_or(0);
            let sum = u128::from(a) + u128::from(b) + u128::from(carry);
            out.push(sum as u64);
            carry = (sum >> 64) as u64;
        }
        if carry != 0 {
            out.push(carry);
        }
        Self(out)
    }

    /// Subtracts `other` from `self` with borrow propagation.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `other > self`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert!(
            self.cmp_mag(other) != Ordering::Less,
            "magnitude subtraction requires minuend >= subtrahend"
        );
        let mut out = Vec::with_capacity(self.0.len());
        let mut borrow = false;
        for (i, &a) in self.0.iter().enumerate() {
            let b = other.0.get(i).copied().unwrap_or(0);
            let (diff, b1) = a.overflowing_sub(b);
            let (diff, b2) = diff.overflowing_sub(u64::from(borrow));
            out.push(diff);
            borrow = b1 || b2;
        }
        Self::from_limbs(out)
    }

    /// Schoolbook multiplication with `u128` multiply-accumulate.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::new();
        }
        let mut out = vec![0u64; self.0.len() + other.0.len()];
        for (i, &a) in self.0.iter().enumerate() {
            if a == 0 {
                continue;
            }
            let mut carry = 0u64;
            for (j, &b) in other.0.iter().enumerate() {
                let t = u128::from(a) * u128::from(b)
                    + u128::from(out[i + j])
                    + u128::from(carry);
                out[i + j] = t as u64;
                carry = (t >> 64) as u64;
            }
            out[i + other.0.len()] = carry;
        }
        Self::from_limbs(out)
    }

    /// Divides by a single limb, returning quotient and remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem_limb(&self, divisor: u64) -> (Self, u64) {
        assert!(divisor != 0, "division by zero limb");
        let mut quotient = vec![0u64; self.0.len()];
        let mut rem = 0u128;
        for i in (0..self.0.len()).rev() {
            let cur = (rem << 64) | u128::from(self.0[i]);
            quotient[i] = (cur / u128::from(divisor)) as u64;
            rem = cur % u128::from(divisor);
        }
        (Self::from_limbs(quotient), rem as u64)
    }

    /// Long division, returning `(quotient, remainder)`.
    ///
    /// Single-limb divisors take a fast path with a running `u128`
    /// remainder; multi-limb divisors use Knuth's algorithm D.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by zero magnitude");
        if self.cmp_mag(divisor) == Ordering::Less {
            return (Self::new(), self.clone());
        }
        if divisor.0.len() == 1 {
            let (q, r) = self.div_rem_limb(divisor.0[0]);
            return (q, Self::from_limb(r));
        }
        self.div_rem_knuth(divisor)
    }

    /// Knuth algorithm D (TAOCP vol. 2, 4.3.1). Requires a multi-limb
    /// divisor no larger than the dividend.
    fn div_rem_knuth(&self, divisor: &Self) -> (Self, Self) {
        // Normalize so the divisor's top limb has its high bit set; the
        // quotient digit estimate is then off by at most two.
        let shift = divisor.0.last().map_or(0, |top| top.leading_zeros()) as usize;
        let v = divisor.shl_bits(shift).0;
        let mut u = self.shl_bits(shift).0;
        let n = v.len();
        let m = u.len() - n;
        u.push(0);

        let v_top = v[n - 1];
        let v_next = v[n - 2];
        let mut q = vec![0u64; m + 1];

        for j in (0..=m).rev() {
            // Estimate the quotient digit from the top three dividend limbs
            // against the top two divisor limbs.
            let head = (u128::from(u[j + n]) << 64) | u128::from(u[j + n - 1]);
            let mut q_hat = head / u128::from(v_top);
            let mut r_hat = head % u128::from(v_top);
            while q_hat > u128::from(u64::MAX)
                || q_hat * u128::from(v_next)
                    > (r_hat << 64) | u128::from(u[j + n - 2])
            {
                q_hat -= 1;
                r_hat += u128::from(v_top);
                if r_hat > u128::from(u64::MAX) {
                    break;
                }
            }
            let mut q_hat = q_hat as u64;

            // Multiply-subtract q_hat * v from u[j .. j + n + 1].
            let mut mul_carry = 0u64;
            let mut borrow = false;
            for i in 0..n {
                let p = u128::from(q_hat) * u128::from(v[i]) + u128::from(mul_carry);
                mul_carry = (p >> 64) as u64;
                let (d, b1) = u[j + i].overflowing_sub(p as u64);
                let (d, b2) = d.overflowing_sub(u64::from(borrow));
                u[j + i] = d;
                borrow = b1 || b2;
            }
            let (d, b1) = u[j + n].overflowing_sub(mul_carry);
            let (d, b2) = d.overflowing_sub(u64::from(borrow));
            u[j + n] = d;

            if b1 || b2 {
                // The estimate was one too large (rare); add the divisor
                // back and decrement the digit.
                q_hat -= 1;
                let mut carry = false;
                for i in 0..n {
                    let (s, c1) = u[j + i].overflowing_add(v[i]);
                    let (s, c2) = s.overflowing_add(u64::from(carry));
                    u[j + i] = s;
                    carry = c1 || c2;
                }
                u[j + n] = u[j + n].wrapping_add(u64::from(carry));
            }
            q[j] = q_hat;
        }

        u.truncate(n);
        let remainder = Self::from_limbs(u).shr_bits(shift);
        (Self::from_limbs(q), remainder)
    }

    /// Shifts left by an arbitrary bit count.
    #[must_use]
    pub fn shl_bits(&self, bits: usize) -> Self {
        if self.is_zero() || bits == 0 {
            return self.clone();
        }
        let limb_shift = bits / 64;
        let bit_shift = bits % 64;
        let mut out = vec![0u64; self.0.len() + limb_shift + 1];
        for (i, &limb) in self.0.iter().enumerate() {
            out[i + limb_shift] |= limb << bit_shift;
            if bit_shift > 0 {
                out[i + limb_shift + 1] |= limb >> (64 - bit_shift);
            }
        }
        Self::from_limbs(out)
    }

    /// Shifts right by an arbitrary bit count, discarding shifted-out bits.
    #[must_use]
    pub fn shr_bits(&self, bits: usize) -> Self {
        if self.is_zero() || bits == 0 {
            return self.clone();
        }
        let limb_shift = bits / 64;
        let bit_shift = bits % 64;
        if limb_shift >= self.0.len() {
            return Self::new();
        }
        let mut out = vec![0u64; self.0.len() - limb_shift];
        for i in 0..out.len() {
            let lo = self.0[i + limb_shift] >> bit_shift;
            let hi = if bit_shift > 0 && i + limb_shift + 1 < self.0.len() {
                self.0[i + limb_shift + 1] << (64 - bit_shift)
            } else {
                0
            };
            out[i] = lo | hi;
        }
        Self::from_limbs(out)
    }

    /// In-place `self = self * multiplier + addend`.
    fn mul_add_limb(&mut self, multiplier: u64, addend: u64) {
        let mut carry = u128::from(addend);
        for limb in &mut self.0 {
            let t = u128::from(*limb) * u128::from(multiplier) + carry;
            *limb = t as u64;
            carry = t >> 64;
        }
        if carry != 0 {
            self.0.push(carry as u64);
        }
    }

    /// Parses an unsigned decimal digit string.
    ///
    /// Accepts one or more ASCII digits and nothing else. Digits are folded
    /// in 19-digit chunks, each fitting a single limb.
    #[must_use]
    pub fn from_decimal(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut out = Self::new();
        let bytes = digits.as_bytes();
        let mut pos = 0;
        let head = bytes.len() % CHUNK_DIGITS;
        if head > 0 {
            let chunk = parse_chunk(&bytes[..head]);
            out.mul_add_limb(10u64.pow(head as u32), chunk);
            pos = head;
        }
        while pos < bytes.len() {
            let chunk = parse_chunk(&bytes[pos..pos + CHUNK_DIGITS]);
            out.mul_add_limb(CHUNK_BASE, chunk);
            pos += CHUNK_DIGITS;
        }
        Some(out)
    }

    /// Emits the canonical decimal form: minimal digits, `"0"` for zero.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut chunks = Vec::new();
        let mut rest = self.clone();
        while !rest.is_zero() {
            let (q, r) = rest.div_rem_limb(CHUNK_BASE);
            chunks.push(r);
            rest = q;
        }
        let mut out = String::with_capacity(chunks.len() * CHUNK_DIGITS);
        let mut iter = chunks.iter().rev();
        if let Some(top) = iter.next() {
            out.push_str(&top.to_string());
        }
        for chunk in iter {
            out.push_str(&format!("{chunk:019}"));
        }
        out
    }
}

impl std::fmt::Debug for LimbBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LimbBuffer({})", self.to_decimal())
    }
}

/// Parses a run of ASCII digits already validated by the caller.
fn parse_chunk(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &b| acc * 10 + u64::from(b - b'0'))
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::LimbBuffer;

    fn buf(n: u128) -> LimbBuffer {
        LimbBuffer::from_limbs(vec![n as u64, (n >> 64) as u64])
    }

    proptest! {
        #[test]
        fn add_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let sum = buf(u128::from(a)).add(&buf(u128::from(b)));
            prop_assert_eq!(sum, buf(u128::from(a) + u128::from(b)));
        }

        #[test]
        fn mul_matches_u128(a in any::<u64>(), b in any::<u64>()) {
            let prod = buf(u128::from(a)).mul(&buf(u128::from(b)));
            prop_assert_eq!(prod, buf(u128::from(a) * u128::from(b)));
        }

        #[test]
        fn div_rem_reconstructs(a in any::<u128>(), b in 1u128..) {
            let (q, r) = buf(a).div_rem(&buf(b));
            prop_assert!(r.cmp_mag(&buf(b)) == std::cmp::Ordering::Less);
            prop_assert_eq!(q.mul(&buf(b)).add(&r), buf(a));
        }

        #[test]
        fn decimal_roundtrip(a in any::<u128>()) {
            let s = a.to_string();
            let parsed = LimbBuffer::from_decimal(&s).unwrap();
            prop_assert_eq!(parsed.to_decimal(), s);
        }

        #[test]
        fn shift_roundtrip(a in any::<u64>(), bits in 0usize..200) {
            let v = LimbBuffer::from_limb(a);
            prop_assert_eq!(v.shl_bits(bits).shr_bits(bits), v);
        }
    }
}
