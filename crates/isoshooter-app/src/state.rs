//! State shared between the runner and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use isoshooter_core::commands::FrameInput;
use isoshooter_core::config::ConfigError;
use isoshooter_core::state::GameStateSnapshot;

/// Commands sent from the input side to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Replace the held input. A lockstep loop runs one tick per input; a
    /// paced loop keeps movement until the next input and spends a fire
    /// request on the next tick.
    Input(FrameInput),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// How the game loop runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
    /// Pace ticks to wall-clock time instead of ticking once per input.
    pub realtime: bool,
}

/// Errors that stop the runner before or while starting a session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    /// Channel sender to forward commands to the game loop thread.
    pub commands: mpsc::Sender<GameLoopCommand>,
    /// Snapshots in tick order, up to a bounded backlog; a paced loop drops
    /// new ones while the backlog is full. Disconnects when the loop exits.
    pub snapshots: mpsc::Receiver<GameStateSnapshot>,
    /// Latest snapshot for synchronous polling.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub(crate) thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Queue a new input. Returns false once the loop has stopped.
    pub fn send_input(&self, input: FrameInput) -> bool {
        self.commands.send(GameLoopCommand::Input(input)).is_ok()
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        self.join();
    }

    /// Close the command channel and wait for the loop to finish.
    ///
    /// A lockstep loop waiting for input stops once the channel closes.
    pub fn join(self) {
        let GameLoopHandle {
            commands, thread, ..
        } = self;
        drop(commands);
        if thread.join().is_err() {
            log::error!("Game loop thread panicked");
        }
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}
