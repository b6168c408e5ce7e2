//! Affine points on the Edwards curve E_521: `x^2 + y^2 = 1 + d*x^2*y^2`
//! over `F_p`, `p = 2^521 - 1`, `d = -376014`.

use num_bigint::{BigInt, Sign};
use num_traits::One;
use once_cell::sync::Lazy;

use crate::curve::field::{FieldElement, D, P};
use crate::error::{CryptoError, Result};
use crate::sha3::aux_functions::byte_utils::{big_to_bytes_signed, bytes_to_big_signed};

/// `r`, the prime-order subgroup cardinality of the base point `G`. Scalars
/// are always reduced mod `r` before use (see [`Point::scalar_mul`]).
pub static R: Lazy<BigInt> = Lazy::new(|| {
    let two_519 = BigInt::one() << 519;
    let c = "337554763258501705789107630418782636071904961214051226618635150085779108655765"
        .parse::<BigInt>()
        .expect("R constant parses");
    two_519 - c
});

/// Each serialized coordinate occupies `byte_length(p) = 66` bytes.
pub const COORD_LEN: usize = 66;
/// Total serialized point length, `2 * COORD_LEN`.
pub const STD_BLEN: usize = 2 * COORD_LEN;

/// An affine point on E_521.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: FieldElement,
    pub y: FieldElement,
}

impl Point {
    /// The neutral element, `(0, 1)`.
    pub fn neutral() -> Self {
        Point { x: FieldElement::zero(), y: FieldElement::one() }
    }

    /// Constructs a point from raw coordinates, validating the curve
    /// equation. The neutral element `(0, 1)` is accepted without the
    /// general check: a naive `1 mod p` comparison can be sensitive to how
    /// a big-integer library normalizes small values, so the neutral
    /// element gets its own early return.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self> {
        if x.is_zero() && y == FieldElement::one() {
            return Ok(Point::neutral());
        }
        let lhs = x.mul(&x).add(&y.mul(&y));
        let rhs = FieldElement::one().add(&D.clone().mul(&x).mul(&x).mul(&y).mul(&y));
        if lhs != rhs {
            return Err(CryptoError::NotOnCurve);
        }
        Ok(Point { x, y })
    }

    /// Complete Edwards point addition. The intermediate `x1*x2*y1*y2` is
    /// reduced mod p before being combined with `d`; skipping that
    /// reduction produces superficially correct results for small inputs
    /// that silently diverge after repeated additions.
    pub fn add(&self, other: &Point) -> Point {
        let d = D.clone();
        let xy = self.x.mul(&other.x).mul(&self.y).mul(&other.y);
        let dxy = d.mul(&xy);

        let x_num = self.x.mul(&other.y).add(&self.y.mul(&other.x));
        let x_den = FieldElement::one().add(&dxy);
        let x3 = x_num.mul(&x_den.inverse());

        let y_num = self.y.mul(&other.y).sub(&self.x.mul(&other.x));
        let y_den = FieldElement::one().sub(&dxy);
        let y3 = y_num.mul(&y_den.inverse());

        Point { x: x3, y: y3 }
    }

    /// `-(x, y) = (-x mod p, y)`.
    pub fn negate(&self) -> Point {
        Point { x: self.x.neg(), y: self.y.clone() }
    }

    /// Double-and-add scalar multiplication, MSB first, after reducing `k`
    /// mod `r`. The `mod r` reduction is not optional: it bounds the loop
    /// and keeps the result in the prime-order subgroup.
    pub fn scalar_mul(&self, k: &BigInt) -> Point {
        let k = reduce_mod_r(k);
        if k.sign() == Sign::NoSign {
            return Point::neutral();
        }
        let bit_len = k.bits();
        let mut res = Point::neutral();
        for i in (0..bit_len).rev() {
            res = res.add(&res);
            if bit_at(&k, i) {
                res = res.add(self);
            }
        }
        res
    }

    /// Decompresses a point from `(x, lsb)`: solves
    /// `y = sqrt((1 - x^2) * (1 - d*x^2)^-1 mod p)` with the prescribed
    /// least-significant bit, using `p ≡ 3 (mod 4)`.
    pub fn decompress(x: FieldElement, lsb: bool) -> Result<Point> {
        let one = FieldElement::one();
        let x2 = x.mul(&x);
        let num = one.sub(&x2);
        let den = one.sub(&D.clone().mul(&x2));
        let v = num.mul(&den.inverse());

        let exp = (&*P + BigInt::from(1)) / BigInt::from(4);
        let mut r = v.pow(&exp);
        if bit_at(r.value(), 0) != lsb {
            r = r.neg();
        }
        if r.mul(&r) != v {
            return Err(CryptoError::NoSquareRoot);
        }
        Point::new(x, r)
    }

    /// Canonical 132-byte encoding: `x` then `y`, each two's-complement
    /// big-endian in exactly [`COORD_LEN`] bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = big_to_bytes_signed(self.x.value(), COORD_LEN);
        out.extend(big_to_bytes_signed(self.y.value(), COORD_LEN));
        out
    }

    /// Inverse of [`to_bytes`]: splits at the midpoint, parses each half as
    /// a signed two's-complement integer, and validates the curve
    /// equation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Point> {
        if bytes.len() != STD_BLEN {
            return Err(CryptoError::MalformedEncoding { expected: STD_BLEN, got: bytes.len() });
        }
        let x = FieldElement::reduce(&bytes_to_big_signed(&bytes[..COORD_LEN]));
        let y = FieldElement::reduce(&bytes_to_big_signed(&bytes[COORD_LEN..]));
        Point::new(x, y)
    }
}

/// Tests bit `i` (0 = least significant) of a non-negative big integer.
fn bit_at(n: &BigInt, i: u64) -> bool {
    ((n >> i) & BigInt::one()) == BigInt::one()
}

/// Reduces a scalar into `[0, r)`.
pub fn reduce_mod_r(k: &BigInt) -> BigInt {
    let r = &*R;
    let mut v = k % r;
    if v.sign() == Sign::Minus {
        v += r;
    }
    v
}

/// The base point `G`: `x = 4`, `y` determined by `lsb = 0`.
pub static G: Lazy<Point> = Lazy::new(|| {
    Point::decompress(FieldElement::from(4i64), false).expect("G must decompress")
});
