// Symbol table: the append-only (head, follow) dictionary both sides of the
// wire grow in lockstep.
//
// Identifier space:
//   0x000..=0x0FF  literal bytes
//   0x100          escape/reset marker (never stored in the table)
//   0x101..        compound symbols, assigned sequentially in insertion order
//
// Insertion order is part of the wire contract: the decoder must derive the
// same identifier for the same (head, follow) pair. A pair is stored at most
// once, so keying a map by the exact pair gives the same answer as a linear
// scan without the O(n) cost.

use std::collections::HashMap;

use super::error::CodecError;

/// Escape/reset marker. Decoded as "clear the table, start fresh".
pub const ESCAPE: u16 = 0x100;

/// Identifier of the first compound entry.
pub const FIRST_COMPOUND: u16 = 0x101;

/// Compound-entry capacity: one identifier per value left above the 257 base
/// symbols in a 16-bit code (65279 entries).
pub const MAX_ENTRIES: usize = (u16::MAX - FIRST_COMPOUND) as usize + 1;

/// Definition of one compound symbol: the byte sequence of `head`, followed
/// by one more raw byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDef {
    pub head: u16,
    pub follow: u8,
}

/// Per-session symbol table. Entries are only ever appended; `reset` is the
/// one operation that discards them.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolDef>,
    index: HashMap<(u16, u8), u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of compound entries created so far.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries.len()
    }

    /// Logical table size: 257 base identifiers plus the compound entries.
    #[inline]
    pub fn logical_len(&self) -> usize {
        FIRST_COMPOUND as usize + self.entries.len()
    }

    /// Identifier of an existing (head, follow) pair, if any.
    #[inline]
    pub fn lookup(&self, head: u16, follow: u8) -> Option<u16> {
        self.index.get(&(head, follow)).copied()
    }

    /// Append a new compound entry and return its identifier.
    ///
    /// The caller must have checked that the pair is not already present;
    /// use [`find_or_add`](Self::find_or_add) otherwise.
    pub fn insert(&mut self, head: u16, follow: u8) -> Result<u16, CodecError> {
        debug_assert!((head as usize) < self.logical_len() && head != ESCAPE);
        if self.entries.len() >= MAX_ENTRIES {
            return Err(CodecError::TableFull(self.entries.len()));
        }
        let id = FIRST_COMPOUND + self.entries.len() as u16;
        self.entries.push(SymbolDef { head, follow });
        self.index.insert((head, follow), id);
        Ok(id)
    }

    /// Identifier for (head, follow), appending a new entry if the pair has
    /// not been seen in this session.
    pub fn find_or_add(&mut self, head: u16, follow: u8) -> Result<u16, CodecError> {
        match self.lookup(head, follow) {
            Some(id) => Ok(id),
            None => self.insert(head, follow),
        }
    }

    /// Definition of a compound identifier.
    pub fn get(&self, symbol: u16) -> Option<SymbolDef> {
        let idx = symbol.checked_sub(FIRST_COMPOUND)? as usize;
        self.entries.get(idx).copied()
    }

    /// Append the byte sequence a symbol stands for onto `out`.
    ///
    /// Unwinds the head chain iteratively, so the supported chain length is
    /// bounded by table capacity rather than stack depth. On error `out` is
    /// left as it was.
    pub fn resolve(&self, symbol: u16, out: &mut Vec<u8>) -> Result<(), CodecError> {
        let start = out.len();
        let mut s = symbol;
        loop {
            if s < 0x100 {
                out.push(s as u8);
                break;
            }
            if s == ESCAPE {
                out.truncate(start);
                return Err(CodecError::InvalidSymbol(ESCAPE));
            }
            let Some(def) = self.get(s) else {
                out.truncate(start);
                return Err(CodecError::InvalidSymbol(s));
            };
            out.push(def.follow);
            s = def.head;
        }
        out[start..].reverse();
        Ok(())
    }

    /// Truncate back to the 257 base identifiers.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
