// Password transform
//
// WARNING: `Base64Transform` is a reversible encoding, not a hash. Anyone who
// can read the store can recover every password. It exists for demo parity
// only; a salted slow hash can replace it by implementing `PasswordTransform`.

use crate::utils::auth::constant_time_eq;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Turns a plaintext password into the stored credential and checks a
/// candidate password against it.
pub trait PasswordTransform: Send + Sync {
    fn obfuscate(&self, plaintext: &str) -> String;

    fn matches(&self, plaintext: &str, opaque: &str) -> bool {
        constant_time_eq(&self.obfuscate(plaintext), opaque)
    }
}

/// Standard padded base64 of the UTF-8 bytes. No salt, no key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Transform;

impl PasswordTransform for Base64Transform {
    fn obfuscate(&self, plaintext: &str) -> String {
        STANDARD.encode(plaintext.as_bytes())
    }
}
