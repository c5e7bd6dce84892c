use crate::constants::{MEMORY_SIZE, PROGRAM_START};
use crate::error::Error;
use crate::instruction;
use crate::opcode::Opcode;
use crate::state::{FrameBuffer, Quirks, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks the current machine `state` along with the `pressed_keys` the host
/// has reported. The keys live outside the state snapshot so that the host
/// mutates them only through the narrow press/release setters and each
/// instruction sees a consistent copy.
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers at whatever fixed rate the host chooses
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    pressed_keys: [bool; 16],
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [false; 16],
        }
    }

    /// A machine with non-default compatibility behavior.
    pub fn with_quirks(quirks: Quirks) -> Self {
        let mut chip8 = Chip8::new();
        chip8.state.quirks = quirks;
        chip8
    }

    /// Load a rom from a byte source at the conventional program start.
    ///
    /// # Arguments
    /// * `reader` a reader that yields the ROM bytes
    pub fn load_rom(&mut self, reader: &mut dyn std::io::Read) -> Result<usize, Error> {
        self.load_rom_at(reader, PROGRAM_START)
    }

    /// Load a rom from a byte source at an explicit start address.
    ///
    /// The reader is drained before anything is copied, so a ROM that does
    /// not fit in the remaining memory fails without aliasing anything.
    pub fn load_rom_at(
        &mut self,
        reader: &mut dyn std::io::Read,
        start: u16,
    ) -> Result<usize, Error> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;

        let start = start as usize;
        if start >= MEMORY_SIZE || rom.len() > MEMORY_SIZE - start {
            return Err(Error::RomTooLarge(rom.len()));
        }

        self.state.memory[start..start + rom.len()].copy_from_slice(&rom);
        Ok(rom.len())
    }

    /// Set the pressed status of key
    ///
    /// Indices outside the 16-key pad are ignored.
    ///
    /// # Arguments
    /// * `key` the index (0x0..=0xF) of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        if let Some(pressed) = self.pressed_keys.get_mut(key as usize) {
            *pressed = true;
        }
    }

    /// Unset the pressed status of key
    ///
    /// Indices outside the 16-key pad are ignored.
    ///
    /// # Arguments
    /// * `key` the index (0x0..=0xF) of the key that was released
    pub fn key_release(&mut self, key: u8) {
        if let Some(pressed) = self.pressed_keys.get_mut(key as usize) {
            *pressed = false;
        }
    }

    /// Advances the CPU by a single instruction: fetch, decode, dispatch.
    ///
    /// Timers are untouched; they only move on [`Chip8::tick_timers`].
    /// On error the machine state is left exactly as it was, and the host
    /// decides whether to halt, reset, or report.
    pub fn step(&mut self) -> Result<(), Error> {
        let op = self.fetch()?;
        self.state = instruction::execute(op, &self.state, self.pressed_keys)?;
        Ok(())
    }

    /// Decrements each nonzero timer by one.
    ///
    /// Invoked by the host at a fixed rate (conventionally 60Hz) independent
    /// of instruction throughput; nothing else decrements the timers.
    pub fn tick_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
    }

    /// Returns the FrameBuffer and clears the draw flag if the display
    /// should be redrawn.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Read-only access to the frame buffer.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// The current sound timer value; a host that wants audio beeps while
    /// this is nonzero.
    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    /// Reads the two instruction bytes at the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two
    /// subsequent bytes.
    fn fetch(&self) -> Result<Opcode, Error> {
        let pc = self.state.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return Err(Error::FetchOutOfBounds(self.state.pc));
        }
        Ok(Opcode::new([
            self.state.memory[pc],
            self.state.memory[pc + 1],
        ]))
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
