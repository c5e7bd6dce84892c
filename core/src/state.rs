use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_SPRITES, FONT_START, MEMORY_SIZE};

/// The FrameBuffer is indexed as [y][x]; pixels are 0 (off) or 1 (on)
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Compatibility switches for behavior that differs between interpreters.
///
/// The defaults match the commonly accepted Chip-8 semantics.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quirks {
    /// When set, 8xy6/8xyE shift Vy into Vx (and capture the flag bit from
    /// Vy) the way interpreters derived from the COSMAC VIP did. When unset
    /// the shifts operate on Vx alone.
    pub shift_reads_vy: bool,
}

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register of which only the low 12 bits
///   are addressable
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) an 8-bit stack pointer indexing the next free stack slot
///
/// Timers
/// - 2 8-bit timers (delay & sound) decremented only by an external tick
///
/// ## Memory
/// - a 16 entry stack that stores return addresses when subroutines are
///   called
/// - 4096 bytes of addressable memory
/// - a 64x32 frame buffer storing the contents of the next frame to be drawn
///
/// The pressed state of the 16 keys is deliberately not part of this
/// snapshot; it belongs to the host and is passed into each instruction
/// execution by value.
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; 16],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub quirks: Quirks,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];

        // The reset vector: a jump to PROGRAM_START so that execution can
        // begin from address 0 with an empty machine.
        memory[0..2].copy_from_slice(&[0x12, 0x00]);

        // 0x002 - 0x052 holds the font sprite sheet
        let font = FONT_START as usize;
        memory[font..font + FONT_SPRITES.len()].copy_from_slice(&FONT_SPRITES);

        State {
            v: [0; 16],
            i: 0,
            pc: 0,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; 16],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            quirks: Quirks::default(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_seeds_reset_jump() {
        let state = State::new();
        assert_eq!(state.pc, 0x0);
        assert_eq!(state.memory[0x0..0x2], [0x12, 0x00]);
    }

    #[test]
    fn test_new_state_seeds_font() {
        let state = State::new();
        // The zero glyph sits at the start of the font table
        assert_eq!(state.memory[0x2..0x7], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
        // The F glyph sits at the end
        assert_eq!(state.memory[0x4D..0x52], [0xF0, 0x80, 0xF0, 0x80, 0x80]);
    }
}
