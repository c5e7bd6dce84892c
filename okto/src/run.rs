use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use okto_core::{Chip8, CLOCK_SPEED, CYCLES_PER_TIMER_TICK};
use okto_display::Display;

use crate::keymap::keymap;

/// Drives the machine: renders changed frames, feeds key events into the
/// core, steps the CPU at the configured clock speed, and ticks the timers
/// at their own fixed rate. The core never blocks, so input stays responsive
/// even while a program waits on a keypress.
pub fn run(rom: PathBuf) {
    let mut chip8: Chip8 = Chip8::new();

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().unwrap();
    let mut display: Display = Display::new(&sdl);
    let mut events = sdl.event_pump().unwrap();

    // Load ROM
    let file = File::open(rom).expect("unable to open file");
    let mut reader = BufReader::new(file);
    match chip8.load_rom(&mut reader) {
        Ok(size) => println!("loaded {} byte ROM", size),
        Err(e) => {
            eprintln!("failed to load ROM: {}", e);
            return;
        }
    };

    // Set initial timing
    let cycle_time: Duration = Duration::new(0, CLOCK_SPEED as u32);
    let mut last_cycle: Instant = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward: bool = false;
    // Counts CPU cycles towards the next 60Hz timer tick
    let mut cycles_since_tick: u8 = 0;

    'event: loop {
        // If the core produced a new frame, render it
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame);
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state; a fatal condition ends emulation but not the process
        if let Err(e) = chip8.step() {
            eprintln!("emulation halted: {}", e);
            break 'event;
        }

        cycles_since_tick += 1;
        if cycles_since_tick == CYCLES_PER_TIMER_TICK {
            chip8.tick_timers();
            cycles_since_tick = 0;
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = current_time;
    }
}
