//! Limb-level kernels over base-10^9 magnitudes
//!
//! Every function here works on unsigned magnitudes stored least significant
//! limb first. Inputs are expected to be trimmed (no most-significant zero
//! limbs, zero is `[0]`) and every returned magnitude is trimmed as well.

use std::cmp::Ordering;

/// One base-10^9 digit
pub type Limb = u32;

/// Radix of a limb
pub const BASE: Limb = 1_000_000_000;

/// Decimal digits held by a full limb
pub const LIMB_DIGITS: usize = 9;

const BASE_WIDE: u64 = BASE as u64;

/// Narrows a value already reduced modulo `BASE` back to a limb
#[inline]
fn narrow(value: u64) -> Limb {
    debug_assert!(value < BASE_WIDE);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "value is reduced modulo BASE (< 2^30) before narrowing"
    )]
    let limb = value as Limb;
    limb
}

/// Drops most-significant zero limbs, keeping at least one limb
pub fn trim(limbs: &mut Vec<Limb>) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

#[inline]
pub fn is_zero(limbs: &[Limb]) -> bool {
    matches!(limbs, [0])
}

/// Compares two trimmed magnitudes: length first, then limbs from the top
pub fn compare(lhs: &[Limb], rhs: &[Limb]) -> Ordering {
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

/// Schoolbook addition with carry propagation
pub fn add(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
    let (long, short) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &limb) in long.iter().enumerate() {
        // At most 2 * (BASE - 1) + 1, well inside u32
        let total = limb + short.get(i).copied().unwrap_or(0) + carry;
        if total >= BASE {
            sum.push(total - BASE);
            carry = 1;
        } else {
            sum.push(total);
            carry = 0;
        }
    }
    if carry > 0 {
        sum.push(carry);
    }

    trim(&mut sum);
    sum
}

/// Schoolbook subtraction with borrow propagation
///
/// Requires `lhs >= rhs`; callers resolve ordering with [`compare`] first.
pub fn sub(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
    debug_assert!(compare(lhs, rhs) != Ordering::Less);

    let mut difference = Vec::with_capacity(lhs.len());
    let mut borrow = 0;
    for (i, &limb) in lhs.iter().enumerate() {
        let subtrahend = rhs.get(i).copied().unwrap_or(0) + borrow;
        if limb >= subtrahend {
            difference.push(limb - subtrahend);
            borrow = 0;
        } else {
            difference.push(limb + BASE - subtrahend);
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0);

    trim(&mut difference);
    difference
}

/// Schoolbook convolution, O(n·m) limb products
pub fn mul(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
    if is_zero(lhs) || is_zero(rhs) {
        return vec![0];
    }

    let mut acc = vec![0u64; lhs.len() + rhs.len()];
    for (i, &a) in lhs.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &b) in rhs.iter().enumerate() {
            // < BASE + (BASE - 1)^2 + BASE, fits in u64
            let cur = acc[i + j] + u64::from(a) * u64::from(b) + carry;
            acc[i + j] = cur % BASE_WIDE;
            carry = cur / BASE_WIDE;
        }
        let mut k = i + rhs.len();
        while carry > 0 {
            let cur = acc[k] + carry;
            acc[k] = cur % BASE_WIDE;
            carry = cur / BASE_WIDE;
            k += 1;
        }
    }

    let mut product: Vec<Limb> = acc.into_iter().map(narrow).collect();
    trim(&mut product);
    product
}

/// Multiplies a magnitude by a single limb
pub fn mul_limb(lhs: &[Limb], factor: Limb) -> Vec<Limb> {
    if factor == 0 || is_zero(lhs) {
        return vec![0];
    }

    let mut product = Vec::with_capacity(lhs.len() + 1);
    let mut carry = 0u64;
    for &limb in lhs {
        let cur = u64::from(limb) * u64::from(factor) + carry;
        product.push(narrow(cur % BASE_WIDE));
        carry = cur / BASE_WIDE;
    }
    if carry > 0 {
        product.push(narrow(carry));
    }

    trim(&mut product);
    product
}

/// Short division by a single non-zero limb, returning quotient and remainder
pub fn div_rem_limb(dividend: &[Limb], divisor: Limb) -> (Vec<Limb>, Limb) {
    debug_assert!(divisor != 0);

    let divisor = u64::from(divisor);
    let mut quotient = vec![0; dividend.len()];
    let mut remainder = 0u64;
    for (i, &limb) in dividend.iter().enumerate().rev() {
        // remainder < divisor <= BASE, so this stays below BASE^2
        let cur = remainder * BASE_WIDE + u64::from(limb);
        quotient[i] = narrow(cur / divisor);
        remainder = cur % divisor;
    }

    trim(&mut quotient);
    (quotient, narrow(remainder))
}

/// Long division of magnitudes with a multi-limb divisor
///
/// Each quotient limb is found by binary search over `[0, BASE)` for the
/// largest `q` with `divisor * q <= remainder`.
pub fn div_rem(dividend: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!is_zero(divisor));

    let mut quotient = vec![0; dividend.len()];
    let mut remainder: Vec<Limb> = vec![0];
    for (i, &limb) in dividend.iter().enumerate().rev() {
        // remainder = remainder * BASE + limb
        remainder.insert(0, limb);
        trim(&mut remainder);

        if compare(&remainder, divisor) == Ordering::Less {
            continue;
        }

        let (mut low, mut high) = (1, BASE - 1);
        while low < high {
            let mid = low + (high - low).div_ceil(2);
            if compare(&mul_limb(divisor, mid), &remainder) == Ordering::Greater {
                high = mid - 1;
            } else {
                low = mid;
            }
        }

        remainder = sub(&remainder, &mul_limb(divisor, low));
        quotient[i] = low;
    }

    trim(&mut quotient);
    (quotient, remainder)
}
