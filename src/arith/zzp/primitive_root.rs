//! Primitive root search for the multiplicative group of GF(p)

use tracing::{debug, trace};

use crate::errors::{FieldError, Result};

/// Find the smallest generator of the multiplicative group of GF(p).
///
/// `g` generates the group of order `p-1` iff `g^((p-1)/q) != 1 mod p` for every prime
/// factor `q` of `p-1`. The test is only meaningful for a prime `p`: a composite modulus
/// either exhausts the search, which is reported as [`FieldError::InvalidModulus`], or
/// yields a candidate that the table builder rejects.
pub fn find_primitive_root(characteristic: u32) -> Result<u32> {
    if characteristic < 2 {
        return Err(FieldError::InvalidModulus(characteristic));
    }
    // The group of GF(2) is {1}
    if characteristic == 2 {
        return Ok(1);
    }

    let group_order = characteristic - 1;
    let factors = distinct_prime_factors(group_order);

    for candidate in 2..characteristic {
        let is_generator = factors
            .iter()
            .all(|&q| pow_mod(candidate, group_order / q, characteristic) != 1);
        if is_generator {
            debug!(characteristic, generator = candidate, "found primitive root");
            return Ok(candidate);
        }
        trace!(characteristic, candidate, "rejected primitive root candidate");
    }

    Err(FieldError::InvalidModulus(characteristic))
}

/// Distinct prime factors of `n` in increasing order, by trial division
pub(crate) fn distinct_prime_factors(mut n: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut d = 2u32;
    while u64::from(d) * u64::from(d) <= u64::from(n) {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Computes `base ^ exponent mod modulus` by square and multiply
pub(crate) fn pow_mod(base: u32, exponent: u32, modulus: u32) -> u32 {
    let modulus = u64::from(modulus);
    let mut base = u64::from(base) % modulus;
    let mut exponent = exponent;
    let mut acc = 1 % modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            acc = acc * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }
    acc as u32
}
