/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored most-significant-byte first.
/// Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function that doesn't require variables
///   (e.g. CLS; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry
/// important data.
/// - `(_, n, n, n)` represent a 12-bit address
/// - `(_, _, n, n)` encodes some data that is assigned to and/or compared
///   with Vx
/// - `(_, n, _, _)` refers either to the register Vx or a range of registers
///   V0..Vx
/// - `(_, _, n, _)` refers to the register Vy
///
/// Decoding is a pure transform of the instruction word; it neither touches
/// the program counter nor any other machine state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Opcode(u16);

impl Opcode {
    /// Builds an Opcode from the two bytes at the program counter.
    pub fn new(bytes: [u8; 2]) -> Self {
        Opcode(u16::from(bytes[0]) << 8 | u16::from(bytes[1]))
    }

    /// The raw instruction word, kept around for error reporting.
    pub fn word(self) -> u16 {
        self.0
    }

    /// The Opcode's component nibbles, high to low.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (((self.0 & 0xF000) >> 12) as u8, self.x(), self.y(), self.n())
    }

    /// The Opcode's second nibble.
    /// `[_x__]`
    pub fn x(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    /// The Opcode's third nibble.
    /// `[__y_]`
    pub fn y(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    /// The Opcode's fourth nibble.
    /// `[___n]`
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// The Opcode's least significant byte.
    /// `[__kk]`
    pub fn kk(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// The Opcode without its most significant nibble.
    /// `[_adr]`
    pub fn addr(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl From<u16> for Opcode {
    fn from(word: u16) -> Self {
        Opcode(word)
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_new_is_big_endian() {
        assert_eq!(Opcode::new([0xAB, 0xCD]), Opcode(0xABCD));
    }

    #[test]
    fn test_nibbles() {
        let op = Opcode(0xABCD);
        assert_eq!(op.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_x() {
        let op = Opcode(0xABCD);
        assert_eq!(op.x(), 0xB);
    }

    #[test]
    fn test_y() {
        let op = Opcode(0xABCD);
        assert_eq!(op.y(), 0xC);
    }

    #[test]
    fn test_n() {
        let op = Opcode(0xABCD);
        assert_eq!(op.n(), 0xD);
    }

    #[test]
    fn test_kk() {
        let op = Opcode(0xABCD);
        assert_eq!(op.kk(), 0xCD);
    }

    #[test]
    fn test_addr() {
        let op = Opcode(0xABCD);
        assert_eq!(op.addr(), 0x0BCD);
    }
}
