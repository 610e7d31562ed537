//! Instruction memory.

/// Word-addressable instruction memory.
///
/// Holds the program image as a sequence of 32-bit words; word `i` occupies
/// byte address `4 * i`.
#[derive(Debug, Clone)]
pub struct InstructionMemory {
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Creates an instruction memory from a program image.
    pub fn new(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Fetches the instruction word at a byte address.
    ///
    /// Fetching beyond the end of the program returns the all-zero word,
    /// which decodes to an invalid (no-op) instruction.
    pub fn fetch(&self, address: u32) -> u32 {
        self.words
            .get((address / 4) as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Returns `true` when a byte address maps to a stored program word.
    pub fn contains(&self, address: u32) -> bool {
        ((address / 4) as usize) < self.words.len()
    }

    /// Returns the program image.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns the number of instruction words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when the program image is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
