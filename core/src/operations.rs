//! Every handler receives a state whose program counter has already been
//! advanced past the instruction being executed. Ordinary instructions leave
//! the counter alone; taken skips add 2 more, the key wait subtracts 2 to
//! retry itself, and jump/call/return overwrite it outright.

use crate::constants::{
    ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_LEN, FONT_START, STACK_DEPTH,
};
use crate::error::Error;
use crate::opcode::Opcode;
use crate::state::State;

/// clear the frame buffer
pub fn clr(_op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    Ok(State {
        frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        draw_flag: true,
        ..*state
    })
}

/// PC = STACK.pop()
pub fn rts(_op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    if state.sp == 0 {
        return Err(Error::StackUnderflow);
    }
    let sp = state.sp - 0x1;
    Ok(State {
        pc: state.stack[sp as usize],
        sp,
        ..*state
    })
}

/// PC = addr
pub fn jump(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    Ok(State {
        pc: op.addr(),
        ..*state
    })
}

/// STACK.push(PC); PC = addr
pub fn call(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    if state.sp as usize >= STACK_DEPTH {
        return Err(Error::StackOverflow);
    }
    let mut stack = state.stack;
    // The pc has already moved past the call, so it is the return address
    stack[state.sp as usize] = state.pc;
    Ok(State {
        pc: op.addr(),
        sp: state.sp + 0x1,
        stack,
        ..*state
    })
}

/// if Vx == kk then pc += 2
pub fn ske(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let pc = if state.v[op.x() as usize] == op.kk() {
        state.pc + 0x2
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// if Vx != kk then pc += 2
pub fn skne(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let pc = if state.v[op.x() as usize] != op.kk() {
        state.pc + 0x2
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// if Vx == Vy then pc += 2
pub fn skre(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let pc = if state.v[op.x() as usize] == state.v[op.y() as usize] {
        state.pc + 0x2
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// Vx = kk
pub fn load(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] = op.kk();
    Ok(State { v, ..*state })
}

/// Vx += kk
/// Wrapping add with no flag effect
pub fn add(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] = v[op.x() as usize].wrapping_add(op.kk());
    Ok(State { v, ..*state })
}

/// Vx = Vy
pub fn mv(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] = v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx |= Vy
pub fn or(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] |= v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx &= Vy
pub fn and(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] &= v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx ^= Vy
pub fn xor(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] ^= v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx += Vy; VF = carry
pub fn addr(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let (res, over) = state.v[op.x() as usize].overflowing_add(state.v[op.y() as usize]);
    let mut v = state.v;
    v[0xF] = if over { 0x1 } else { 0x0 };
    v[op.x() as usize] = res;
    Ok(State { v, ..*state })
}

/// Vx -= Vy; VF = no-borrow (1 iff Vx > Vy before the wraparound)
pub fn sub(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    v[0xF] = if v[op.x() as usize] > v[op.y() as usize] {
        0x1
    } else {
        0x0
    };
    v[op.x() as usize] = v[op.x() as usize].wrapping_sub(v[op.y() as usize]);
    Ok(State { v, ..*state })
}

/// Vx >>= 1; VF = the shifted-out bit
/// The legacy quirk shifts Vy into Vx instead
pub fn shr(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let src = if state.quirks.shift_reads_vy {
        state.v[op.y() as usize]
    } else {
        state.v[op.x() as usize]
    };
    let mut v = state.v;
    v[0xF] = src & 0x1;
    v[op.x() as usize] = src >> 1;
    Ok(State { v, ..*state })
}

/// Vx = Vy - Vx; VF = no-borrow (1 iff Vy > Vx before the wraparound)
pub fn subn(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    v[0xF] = if v[op.y() as usize] > v[op.x() as usize] {
        0x1
    } else {
        0x0
    };
    v[op.x() as usize] = v[op.y() as usize].wrapping_sub(v[op.x() as usize]);
    Ok(State { v, ..*state })
}

/// Vx <<= 1; VF = the shifted-out bit
/// The legacy quirk shifts Vy into Vx instead
pub fn shl(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let src = if state.quirks.shift_reads_vy {
        state.v[op.y() as usize]
    } else {
        state.v[op.x() as usize]
    };
    let mut v = state.v;
    v[0xF] = (src & 0x80) >> 7;
    v[op.x() as usize] = src << 1;
    Ok(State { v, ..*state })
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let pc = if state.v[op.x() as usize] != state.v[op.y() as usize] {
        state.pc + 0x2
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// I = addr
pub fn loadi(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    Ok(State {
        i: op.addr(),
        ..*state
    })
}

/// PC = V0 + addr
pub fn jumpi(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    Ok(State {
        pc: op.addr().wrapping_add(u16::from(state.v[0x0])),
        ..*state
    })
}

/// Vx = rand_byte & kk
pub fn rand(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let rand_byte: u8 = rand::random();
    let mut v = state.v;
    v[op.x() as usize] = rand_byte & op.kk();
    Ok(State { v, ..*state })
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs an n-row sprite read from memory at I onto the frame buffer at
/// position Vx, Vy. Every pixel wraps around both display axes
/// independently. Sets VF iff the draw unsets any lit pixel.
pub fn draw(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    let mut frame_buffer = state.frame_buffer;

    // Reset the collision flag
    v[0xF] = 0x0;

    for row in 0..op.n() as usize {
        let y = (state.v[op.y() as usize] as usize + row) % DISPLAY_HEIGHT;
        let sprite_byte = state.memory[(state.i as usize + row) & ADDRESS_MASK];
        for bit in 0..8 {
            let x = (state.v[op.x() as usize] as usize + bit) % DISPLAY_WIDTH;
            let pixel = (sprite_byte >> (7 - bit)) & 0x1;
            v[0xF] |= pixel & frame_buffer[y][x];
            frame_buffer[y][x] ^= pixel;
        }
    }

    Ok(State {
        draw_flag: true,
        v,
        frame_buffer,
        ..*state
    })
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: Opcode, state: &State, pressed_keys: [bool; 16]) -> Result<State, Error> {
    let key = state.v[op.x() as usize];
    if key > 0xF {
        return Err(Error::InvalidKey(key));
    }
    let pc = if pressed_keys[key as usize] {
        state.pc + 0x2
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: Opcode, state: &State, pressed_keys: [bool; 16]) -> Result<State, Error> {
    let key = state.v[op.x() as usize];
    if key > 0xF {
        return Err(Error::InvalidKey(key));
    }
    let pc = if pressed_keys[key as usize] {
        state.pc
    } else {
        state.pc + 0x2
    };
    Ok(State { pc, ..*state })
}

/// Vx = DT
pub fn moved(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] = state.delay_timer;
    Ok(State { v, ..*state })
}

/// Vx = the lowest pressed key, or retry next cycle
///
/// With no key down the pc is stepped back over this instruction so that it
/// re-executes on the next cycle; the machine busy-waits without ever
/// blocking the host.
pub fn keyd(op: Opcode, state: &State, pressed_keys: [bool; 16]) -> Result<State, Error> {
    match pressed_keys.iter().position(|&pressed| pressed) {
        Some(key) => {
            let mut v = state.v;
            v[op.x() as usize] = key as u8;
            Ok(State { v, ..*state })
        }
        None => Ok(State {
            pc: state.pc - 0x2,
            ..*state
        }),
    }
}

/// DT = Vx
pub fn loads(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    Ok(State {
        delay_timer: state.v[op.x() as usize],
        ..*state
    })
}

/// ST = Vx
pub fn ld(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    Ok(State {
        sound_timer: state.v[op.x() as usize],
        ..*state
    })
}

/// I += Vx
/// No overflow flag is defined for this instruction
pub fn addi(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    Ok(State {
        i: state.i.wrapping_add(u16::from(state.v[op.x() as usize])),
        ..*state
    })
}

/// I = the font table address of the glyph for Vx
pub fn ldspr(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    Ok(State {
        i: FONT_START + u16::from(state.v[op.x() as usize]) * FONT_GLYPH_LEN,
        ..*state
    })
}

/// mem[I..I+3] = bcd(Vx)
/// Stores the hundreds, tens, and ones digits of Vx at I, I+1, I+2
pub fn bcd(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let value = state.v[op.x() as usize];
    let mut memory = state.memory;
    memory[state.i as usize & ADDRESS_MASK] = value / 100 % 10;
    memory[(state.i as usize + 1) & ADDRESS_MASK] = value / 10 % 10;
    memory[(state.i as usize + 2) & ADDRESS_MASK] = value % 10;
    Ok(State { memory, ..*state })
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut memory = state.memory;
    for offset in 0..=op.x() as usize {
        memory[(state.i as usize + offset) & ADDRESS_MASK] = state.v[offset];
    }
    Ok(State { memory, ..*state })
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: Opcode, state: &State, _pressed_keys: [bool; 16]) -> Result<State, Error> {
    let mut v = state.v;
    for offset in 0..=op.x() as usize {
        v[offset] = state.memory[(state.i as usize + offset) & ADDRESS_MASK];
    }
    Ok(State { v, ..*state })
}
