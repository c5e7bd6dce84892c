use crate::error::Error;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A state-mutating instruction handler.
pub(crate) type Handler = fn(Opcode, &State, [bool; 16]) -> Result<State, Error>;

/// Selects the handler for a given Opcode.
///
/// The two fixed full-word opcodes (clear screen, return) are matched before
/// the general nibble dispatch; everything else is cased on its leading
/// nibble plus whichever trailing nibbles its class requires. An opcode that
/// matches no arm is invalid.
pub(crate) fn from_op(op: Opcode) -> Result<Handler, Error> {
    let handler: Handler = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => clr,
        (0x0, 0x0, 0xE, 0xE) => rts,
        (0x1, ..) => jump,
        (0x2, ..) => call,
        (0x3, ..) => ske,
        (0x4, ..) => skne,
        (0x5, .., 0x0) => skre,
        (0x6, ..) => load,
        (0x7, ..) => add,
        (0x8, .., 0x0) => mv,
        (0x8, .., 0x1) => or,
        (0x8, .., 0x2) => and,
        (0x8, .., 0x3) => xor,
        (0x8, .., 0x4) => addr,
        (0x8, .., 0x5) => sub,
        (0x8, .., 0x6) => shr,
        (0x8, .., 0x7) => subn,
        (0x8, .., 0xE) => shl,
        (0x9, .., 0x0) => skrne,
        (0xA, ..) => loadi,
        (0xB, ..) => jumpi,
        (0xC, ..) => rand,
        (0xD, ..) => draw,
        (0xE, .., 0x9, 0xE) => skpr,
        (0xE, .., 0xA, 0x1) => skup,
        (0xF, .., 0x0, 0x7) => moved,
        (0xF, .., 0x0, 0xA) => keyd,
        (0xF, .., 0x1, 0x5) => loads,
        (0xF, .., 0x1, 0x8) => ld,
        (0xF, .., 0x1, 0xE) => addi,
        (0xF, .., 0x2, 0x9) => ldspr,
        (0xF, .., 0x3, 0x3) => bcd,
        (0xF, .., 0x5, 0x5) => stor,
        (0xF, .., 0x6, 0x5) => read,
        _ => return Err(Error::InvalidOpcode(op.word())),
    };
    Ok(handler)
}

/// Executes a single decoded instruction against a state snapshot.
///
/// The program counter is advanced past the instruction before dispatch;
/// handlers that redirect control flow overwrite or adjust it from there.
/// On error the input state is untouched, so a failed instruction has no
/// partial effect.
pub(crate) fn execute(op: Opcode, state: &State, pressed_keys: [bool; 16]) -> Result<State, Error> {
    let handler = from_op(op)?;
    let mut advanced = *state;
    advanced.pc = state.pc.wrapping_add(0x2);
    handler(op, &advanced, pressed_keys)
}
