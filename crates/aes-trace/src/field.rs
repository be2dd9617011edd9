//! Arithmetic in GF(2^8) with the AES reduction polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! Every function here is `const` so the substitution tables can be derived at
//! compile time from the field definition instead of being pasted in.

/// Low byte of the reduction polynomial (the x^8 term is implicit).
pub(crate) const REDUCTION: u8 = 0x1b;

/// Multiplies by `x`, reducing modulo the AES polynomial.
#[inline]
pub(crate) const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Full field multiplication (shift-and-add).
pub(crate) const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse, computed as `a^254`. Zero maps to zero.
pub(crate) const fn inverse(a: u8) -> u8 {
    // a^254 = a^(2+4+8+16+32+64+128)
    let mut result = 1u8;
    let mut square = a;
    let mut i = 1;
    while i < 8 {
        square = gmul(square, square);
        result = gmul(result, square);
        i += 1;
    }
    if a == 0 {
        0
    } else {
        result
    }
}
