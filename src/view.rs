use std::{
    io::{stdin, stdout, Write},
    process::exit,
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use termion::{event::Key, input::TermRead, raw::IntoRawMode};

use crate::{pos, BoolMatrix, Pos, SimHandle};

pub struct View {
    thread: JoinHandle<()>,
}

impl View {
    pub fn spawn(handle: SimHandle) -> Self {
        let thread = thread::spawn(|| view_loop(handle));
        Self { thread }
    }

    pub fn join(self) {
        self.thread.join().unwrap();
    }
}

#[derive(Debug)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug)]
pub enum InputCmd {
    Exit,
    Move(Dir),
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    let stdout = stdout().into_raw_mode().unwrap();
    for c in stdin().keys() {
        let command = match c.unwrap() {
            Key::Char('q') => InputCmd::Exit,
            Key::Up => InputCmd::Move(Dir::Up),
            Key::Down => InputCmd::Move(Dir::Down),
            Key::Left => InputCmd::Move(Dir::Left),
            Key::Right => InputCmd::Move(Dir::Right),
            _ => continue,
        };

        sender.send(command).unwrap();
    }
    drop(stdout);
}

const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

fn view_loop(handle: SimHandle) {
    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(|| input_loop(sender));

    let mut view_origin = pos!(0, 0);
    loop {
        handle_inputs(&receiver, &mut view_origin);
        let state = handle.snapshot();
        display_state(view_origin, &state);
        thread::sleep(VIEW_REFRESH_INTERVAL);
    }
}

fn handle_inputs(receiver: &mpsc::Receiver<InputCmd>, view_origin: &mut Pos) {
    if let Ok(cmd) = receiver.try_recv() {
        match cmd {
            InputCmd::Exit => exit(0),
            InputCmd::Move(direction) => {
                *view_origin = *view_origin
                    + match direction {
                        Dir::Up => pos!(-4, 0),
                        Dir::Down => pos!(4, 0),
                        Dir::Left => pos!(0, -4),
                        Dir::Right => pos!(0, 4),
                    }
            }
        }
    }
}

fn display_state(view_origin: Pos, state: &BoolMatrix) {
    let (width, height) = termion::terminal_size().unwrap();
    let mut result = String::new();

    for local_row in 0..height {
        let next_line = termion::cursor::Goto(1, local_row + 1);
        result += &format!("{next_line}");
        for local_col in 0..width {
            let pos = view_origin + pos!(local_row as i32, local_col as i32);
            let in_bounds = pos.row >= 0
                && pos.col >= 0
                && (pos.row as usize) < state.rows()
                && (pos.col as usize) < state.cols();
            let alive = in_bounds && state.get(pos.row as usize, pos.col as usize).is_active();
            result += if alive { "#" } else { " " };
        }
    }
    let clear = termion::clear::All;
    print!("{clear}{result}");
    stdout().flush().unwrap();
}
