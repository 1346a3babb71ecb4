use std::{
    hash::{Hash, Hasher},
    sync::mpsc,
    thread::{self, JoinHandle},
    time::{Duration, SystemTime},
};

use log::{debug, info};
use metrohash::MetroHash64;

use crate::{BoolMatrix, GameGrid};

/// How many recent generation hashes to keep for cycle detection.
const HISTORY_LEN: usize = 10;

/// Rolling window of recent generation hashes.
struct History {
    hashes: Vec<u64>,
}

impl History {
    fn new() -> Self {
        Self {
            hashes: Vec::with_capacity(HISTORY_LEN),
        }
    }

    /// Records `hash`, reporting whether it was already in the window. A
    /// repeat means the population is a still life or an oscillator.
    fn record(&mut self, hash: u64) -> bool {
        let seen = self.hashes.contains(&hash);
        if self.hashes.len() == HISTORY_LEN {
            self.hashes.remove(0);
        }
        self.hashes.push(hash);
        seen
    }
}

fn state_hash(grid: &GameGrid) -> u64 {
    let mut hasher = MetroHash64::default();
    grid.grid().hash(&mut hasher);
    hasher.finish()
}

pub enum SimCmd {
    Snapshot(mpsc::Sender<BoolMatrix>),
}

pub struct SimHandle {
    sender: mpsc::Sender<SimCmd>,
}

impl SimHandle {
    pub fn new(sender: mpsc::Sender<SimCmd>) -> Self {
        Self { sender }
    }

    /// The current logical state, border stripped.
    pub fn snapshot(&self) -> BoolMatrix {
        let (sender, receiver) = mpsc::channel();
        self.sender.send(SimCmd::Snapshot(sender)).unwrap();
        receiver.recv().unwrap()
    }
}

pub struct Sim {
    thread: JoinHandle<()>,
    sender: mpsc::Sender<SimCmd>,
}

impl Sim {
    pub fn spawn(grid: GameGrid) -> Self {
        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || sim_loop(receiver, grid));
        Self { thread, sender }
    }

    pub fn handle(&self) -> SimHandle {
        let sender = self.sender.clone();
        SimHandle { sender }
    }

    pub fn join(self) {
        self.thread.join().unwrap();
    }
}

const EVT_CHECK_TIMEOUT: Duration = Duration::from_millis(10);
const SIM_TICK_INTERVAL: Duration = Duration::from_millis(200);

fn sim_loop(receiver: mpsc::Receiver<SimCmd>, mut grid: GameGrid) {
    let mut history = History::new();
    let mut settled = false;
    let mut last_update = SystemTime::now();

    loop {
        if let Ok(cmd) = receiver.try_recv() {
            match cmd {
                SimCmd::Snapshot(sender) => sender.send(grid.grid()).unwrap(),
            }
        }

        let due = SystemTime::now().duration_since(last_update).unwrap() > SIM_TICK_INTERVAL;
        if !settled && due {
            grid.step();
            debug!(
                "generation {}: {} cells alive",
                grid.generation(),
                grid.grid().population()
            );
            if history.record(state_hash(&grid)) {
                info!(
                    "population settled into a cycle at generation {}",
                    grid.generation()
                );
                settled = true;
            }
            last_update = SystemTime::now();
        }

        thread::sleep(EVT_CHECK_TIMEOUT);
    }
}
