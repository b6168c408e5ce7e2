//! Arithmetic modulo the Mersenne prime `p = 2^521 - 1`.

use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

/// `p = 2^521 - 1`.
pub static P: Lazy<BigInt> = Lazy::new(|| (BigInt::one() << 521) - BigInt::one());

/// `d = -376014`, the Edwards curve coefficient for E_521, reduced into
/// `[0, p)` once at first use.
pub static D: Lazy<FieldElement> = Lazy::new(|| FieldElement::reduce(&BigInt::from(-376014)));

/// A field element reduced modulo `p`: invariant `0 <= value < p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement(BigInt);

impl FieldElement {
    /// Reduces an arbitrary signed integer into `[0, p)`.
    pub fn reduce(value: &BigInt) -> Self {
        let p = &*P;
        let mut v = value % p;
        if v.sign() == Sign::Minus {
            v += p;
        }
        FieldElement(v)
    }

    pub fn zero() -> Self {
        FieldElement(BigInt::zero())
    }

    pub fn one() -> Self {
        FieldElement(BigInt::one())
    }

    pub fn value(&self) -> &BigInt {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn add(&self, other: &FieldElement) -> FieldElement {
        FieldElement::reduce(&(&self.0 + &other.0))
    }

    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        FieldElement::reduce(&(&self.0 - &other.0))
    }

    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        FieldElement::reduce(&(&self.0 * &other.0))
    }

    pub fn neg(&self) -> FieldElement {
        FieldElement::reduce(&(-&self.0))
    }

    /// Modular inverse via Fermat's little theorem: `p` is prime, so
    /// `a^-1 = a^(p-2) mod p`. `BigInt::modpow` makes no constant-time
    /// guarantee; this suite does not claim timing-attack resistance.
    pub fn inverse(&self) -> FieldElement {
        let p = &*P;
        let exp = p - BigInt::from(2);
        FieldElement::reduce(&self.0.modpow(&exp, p))
    }

    /// `self^exp mod p`.
    pub fn pow(&self, exp: &BigInt) -> FieldElement {
        FieldElement::reduce(&self.0.modpow(exp, &P))
    }
}

impl From<i64> for FieldElement {
    fn from(v: i64) -> Self {
        FieldElement::reduce(&BigInt::from(v))
    }
}

impl From<BigInt> for FieldElement {
    fn from(v: BigInt) -> Self {
        FieldElement::reduce(&v)
    }
}
