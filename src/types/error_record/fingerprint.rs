use core::fmt::Write;

use super::ErrorRecord;

/// Configuration builder for customizing fingerprint generation.
///
/// Fingerprints group occurrences of the same error: the timestamp, stack and
/// tracking ids never take part.
///
/// # Examples
///
/// ```
/// use error_trail::ErrorBuilder;
///
/// let a = ErrorBuilder::new().code("TIMEOUT").tags(["net", "db"]).error("timed out");
/// let b = ErrorBuilder::new().code("TIMEOUT").tags(["db", "net"]).error("timed out");
///
/// assert_eq!(a.fingerprint(), b.fingerprint());
/// ```
pub struct FingerprintConfig<'a> {
    record: &'a ErrorRecord,
    include_code: bool,
    include_domain: bool,
    include_tags: bool,
    include_message: bool,
    context_keys: Option<&'a [&'a str]>,
}

impl<'a> FingerprintConfig<'a> {
    pub(crate) fn new(record: &'a ErrorRecord) -> Self {
        Self {
            record,
            include_code: true,
            include_domain: true,
            include_tags: true,
            include_message: true,
            context_keys: None,
        }
    }

    /// Whether to include the error code (default: true).
    #[must_use]
    pub fn include_code(mut self, include: bool) -> Self {
        self.include_code = include;
        self
    }

    /// Whether to include the domain (default: true).
    #[must_use]
    pub fn include_domain(mut self, include: bool) -> Self {
        self.include_domain = include;
        self
    }

    /// Whether to include tags (default: true).
    #[must_use]
    pub fn include_tags(mut self, include: bool) -> Self {
        self.include_tags = include;
        self
    }

    /// Whether to include the primary message (default: true).
    #[must_use]
    pub fn include_message(mut self, include: bool) -> Self {
        self.include_message = include;
        self
    }

    /// Include the rendered values of these context keys.
    #[must_use]
    pub fn include_context_keys(mut self, keys: &'a [&'a str]) -> Self {
        self.context_keys = Some(keys);
        self
    }

    /// Computes the fingerprint using the configured options.
    #[must_use]
    pub fn compute(&self) -> u64 {
        const FNV_OFFSET: u64 = 0xcbf29ce484222325;
        let mut hash = FNV_OFFSET;

        if self.include_code {
            hash_bytes(&mut hash, b"code:");
            let _ = write!(DisplayHasher::new(&mut hash), "{:?}", self.record.code());
        }

        if self.include_domain {
            if let Some(domain) = self.record.domain() {
                hash_bytes(&mut hash, b"domain:");
                hash_bytes(&mut hash, domain.as_bytes());
            }
        }

        if self.include_tags {
            let mut tags: Vec<&str> = self.record.tags().iter().map(String::as_str).collect();
            tags.sort_unstable();
            for tag in tags {
                hash_bytes(&mut hash, b"tag:");
                hash_bytes(&mut hash, tag.as_bytes());
            }
        }

        if self.include_message {
            hash_bytes(&mut hash, b"msg:");
            hash_bytes(&mut hash, self.record.message().as_bytes());
        }

        if let Some(keys) = self.context_keys {
            let mut keys = keys.to_vec();
            keys.sort_unstable();
            for key in keys {
                if let Some(value) = self.record.context_value(key) {
                    hash_bytes(&mut hash, b"ctx:");
                    hash_bytes(&mut hash, key.as_bytes());
                    hash_bytes(&mut hash, b"=");
                    let _ = write!(DisplayHasher::new(&mut hash), "{value}");
                }
            }
        }

        hash
    }

    /// Computes the fingerprint and returns it as a hex string.
    #[must_use]
    pub fn compute_hex(&self) -> String {
        format!("{:016x}", self.compute())
    }
}

impl ErrorRecord {
    /// Fingerprint over code, domain, sorted tags and message.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint_config().compute()
    }

    /// Hex form of [`fingerprint`](Self::fingerprint), always 16 characters.
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        self.fingerprint_config().compute_hex()
    }

    /// Creates a fingerprint configuration for customizing fingerprint generation.
    #[must_use]
    pub fn fingerprint_config(&self) -> FingerprintConfig<'_> {
        FingerprintConfig::new(self)
    }
}

/// FNV-1a prime constant for 64-bit hash.
const FNV_PRIME: u64 = 0x100000001b3;

#[inline(always)]
fn hash_bytes(hash: &mut u64, bytes: &[u8]) {
    for &byte in bytes {
        *hash ^= byte as u64;
        *hash = hash.wrapping_mul(FNV_PRIME);
    }
}

struct DisplayHasher<'a> {
    hash: &'a mut u64,
}

impl<'a> DisplayHasher<'a> {
    #[inline(always)]
    fn new(hash: &'a mut u64) -> Self {
        Self { hash }
    }
}

impl Write for DisplayHasher<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        hash_bytes(self.hash, s.as_bytes());
        Ok(())
    }
}
