use std::{env::args, fs, process::exit};

use log::LevelFilter;
use simple_logger::SimpleLogger;

use golgrid::{patterns, BoolMatrix, GameGrid, Sim, View};

const DEFAULT_SIZE: usize = 32;

pub fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let source = args().nth(1).unwrap_or_else(|| {
        eprintln!("[error] must provide a pattern name or file path");
        eprintln!("usage: golgrid <pattern|path> [size] [offset_row] [offset_col]");
        exit(1);
    });
    let size = arg_or(2, DEFAULT_SIZE);
    let offset_row = arg_or(3, 0);
    let offset_col = arg_or(4, 0);

    let pattern = load_pattern(&source);
    let mut grid = GameGrid::new(size).unwrap_or_else(|err| {
        eprintln!("[error] {err}");
        exit(1);
    });
    if let Err(err) = grid.initialize(&pattern, offset_row, offset_col) {
        eprintln!("[error] {err}");
        exit(1);
    }

    let simulation = Sim::spawn(grid);
    let view = View::spawn(simulation.handle());

    simulation.join();
    view.join();
}

fn arg_or(index: usize, default: usize) -> usize {
    match args().nth(index) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("[error] argument {index} must be a non-negative number");
            exit(1);
        }),
        None => default,
    }
}

/// A built-in pattern name, or a path to a plaintext glyph file.
fn load_pattern(source: &str) -> BoolMatrix {
    if let Some(builtin) = patterns::find(source) {
        return builtin.matrix();
    }
    let content = fs::read_to_string(source).unwrap_or_else(|_| {
        eprintln!("[error] no builtin pattern or readable file named {source:?}");
        exit(1);
    });
    BoolMatrix::from_text(&content).unwrap_or_else(|err| {
        eprintln!("[error] {err}");
        exit(1);
    })
}
