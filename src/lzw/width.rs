// Code-width policy: how many bits the next symbol code occupies on the wire.
//
// The table is organized in pages of 256 slots, and the width is
// 9 + floor(log2(pages_started)). The first page holds only 255 usable
// entries (the format reserves slot 0 of the first page), so the second page
// starts at entry 255 — this off-by-one is a wire contract.
//
// Phase contract between the two sides: the width of the k-th code of a
// session is `code_width(k)`. The encoder satisfies this by sizing each
// mid-stream code right after the insert that triggered it (entries == k at
// that point) and the final pending code from entries + 1, since the decoder
// still grows by one entry for that code too. The decoder's table lags by
// exactly the two inserts implied by the current and previous codes, so it
// sizes every read from entries + 2.

const PAGE_SIZE: usize = 256;

/// Number of 256-slot pages the table has started filling. Starts at 1.
#[inline]
pub fn pages_started(entries: usize) -> u32 {
    (1 + (entries + 1) / PAGE_SIZE) as u32
}

/// Width in bits of a code emitted or consumed at the given entry count.
///
/// Capped at 16: identifiers are 16-bit, so the 17th bit the page formula
/// would request on the very last page can never be set.
#[inline]
pub fn code_width(entries: usize) -> u32 {
    (9 + pages_started(entries).ilog2()).min(16)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
