use std::path::PathBuf;

mod keymap;
mod run;

fn main() {
    let rom: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .expect("expected ROM file path but got no arguments");
    run::run(rom);
}
