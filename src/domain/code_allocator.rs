//! Sequential short code allocation.

/// Issues short codes from a monotonically increasing counter.
///
/// Codes are the base-10 rendering of `1, 2, 3, ...`. The allocator has no
/// lock of its own: it is owned by the link store and only mutated inside the
/// store's critical section, so code issuance and map insertion are
/// serialized together.
///
/// Codes whose links have expired are not retired; the counter never goes
/// backwards, so a retired code is only reissued after wrapping `u64`.
#[derive(Debug, Default)]
pub struct CodeAllocator {
    issued: u64,
}

impl CodeAllocator {
    /// Creates an allocator whose first code is `"1"`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next code, strictly greater than every code issued before.
    pub fn next_code(&mut self) -> String {
        self.issued += 1;
        self.issued.to_string()
    }
}
