//! Correlation-identifier generation.

use rand::{Rng, thread_rng};

/// Generates a fresh correlation identifier shaped like
/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (lowercase hex groups).
///
/// Not cryptographically secure. Used only for the `nonce` request field;
/// the CSRF state parameter uses a UUID v4 instead.
pub fn correlation_id() -> String {
    let mut rng = thread_rng();
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        rng.r#gen::<u32>(),
        rng.r#gen::<u16>(),
        rng.r#gen::<u16>(),
        rng.r#gen::<u16>(),
        rng.r#gen::<u64>() & 0xffff_ffff_ffff,
    )
}
