//! Sensitive byte buffers.
//!
//! Password-derived keys and intermediate KMAC key halves pass through here
//! so they are wiped when the call that produced them returns, instead of
//! lingering in freed heap pages.

use std::ops::Deref;

use zeroize::Zeroize;

/// A `Vec<u8>` that is zeroized on drop. Derefs to `&[u8]` for read access;
/// construct with `Secret::from` and read it (e.g. `.to_vec()`) through
/// that `Deref` impl.
#[derive(Clone)]
pub struct Secret(Vec<u8>);

impl From<Vec<u8>> for Secret {
    fn from(v: Vec<u8>) -> Self {
        Secret(v)
    }
}

impl Deref for Secret {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(..)")
    }
}
