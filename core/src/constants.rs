/// The horizontal size of the display measured in pixels
pub const DISPLAY_WIDTH: usize = 64;

/// The vertical size of the display measured in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// The number of addressable bytes of memory
pub const MEMORY_SIZE: usize = 4096;

/// Only the low 12 bits of the address register are addressable
pub const ADDRESS_MASK: usize = 0xFFF;

/// The address at which ROMs are loaded
pub const PROGRAM_START: u16 = 0x200;

/// The base address of the font sprite sheet, right after the reset jump
pub const FONT_START: u16 = 0x002;

/// Each font glyph is 5 bytes tall
pub const FONT_GLYPH_LEN: u16 = 5;

/// The maximum number of nested subroutine calls
pub const STACK_DEPTH: usize = 16;

/// The number of nanoseconds per CPU cycle (a 500Hz clock)
pub const CLOCK_SPEED: u64 = 2_000_000;

/// CPU cycles per timer tick; approximates a 60Hz timer against a 500Hz clock
pub const CYCLES_PER_TIMER_TICK: u8 = 8;

/// Sprites for the hexadecimal digits 0..F
///
/// Each glyph is 5 bytes where the most significant bits of each byte form
/// one 8-pixel-wide row.
/// ```text
/// 0xF0 -> ****
/// 0x90 -> *  *
/// 0x90 -> *  *
/// 0x90 -> *  *
/// 0xF0 -> ****
/// ```
pub const FONT_SPRITES: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
