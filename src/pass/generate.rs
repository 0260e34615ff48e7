//! Password generation.

use std::fmt;

use zeroize::Zeroize;

use super::charset;
use super::request::GenerationRequest;
use crate::rand::IndexSource;

/// How the sampler bounds its random index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingPolicy {
    /// Index in `[0, pool.len())`: every position gets a character.
    #[default]
    Exact,
    /// Index in `[0, pool.len()]`: an index equal to `pool.len()` adds nothing,
    /// so the result can come out shorter than requested.
    Legacy,
}

/// A generated password. The buffer is wiped on drop.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.0.len())
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate a password for `request`.
pub fn generate<R: IndexSource + ?Sized>(
    request: &GenerationRequest,
    policy: SamplingPolicy,
    rng: &mut R,
) -> GeneratedPassword {
    let mut chars = charset::build(request.classes);
    log::debug!(
        "generating {} chars from a {}-char pool ({:?})",
        request.length,
        chars.len(),
        policy
    );
    let pass = sample(&chars, request.length, policy, rng);
    chars.zeroize();
    pass
}

/// Draw `length` characters from `chars`. Total: an empty pool yields an
/// empty password.
pub fn sample<R: IndexSource + ?Sized>(
    chars: &[u8],
    length: usize,
    policy: SamplingPolicy,
    rng: &mut R,
) -> GeneratedPassword {
    if chars.is_empty() {
        return GeneratedPassword::default();
    }

    let bound = match policy {
        SamplingPolicy::Exact => chars.len(),
        SamplingPolicy::Legacy => chars.len() + 1,
    };

    let mut buf = String::with_capacity(length);
    for _ in 0..length {
        // Legacy: chars.get(len) is None and the position is skipped
        if let Some(&b) = chars.get(rng.index(bound)) {
            buf.push(b as char);
        }
    }
    GeneratedPassword(buf)
}
