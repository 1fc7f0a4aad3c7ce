//! Game loop thread: runs the simulation engine and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Inputs arrive via `mpsc` channel. Snapshots go out on a bounded channel
//! and are stored in shared state for synchronous polling.
//!
//! Unpaced loops run in lockstep: each `Input` command advances exactly one
//! tick, so the driver always sees the snapshot its next input answers.
//! Paced loops tick at TICK_RATE on whatever input was last received.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{debug, info, trace};

use isoshooter_core::commands::FrameInput;
use isoshooter_core::constants::{DT, TICK_RATE};
use isoshooter_core::state::GameStateSnapshot;
use isoshooter_sim::engine::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::state::{AppError, GameLoopCommand, GameLoopHandle, LoopOptions};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Snapshots buffered for a slow reader before new ones are dropped.
pub const SNAPSHOT_BACKLOG: usize = 8;

/// Validates `config`, then spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: SimConfig,
    options: LoopOptions,
) -> Result<GameLoopHandle, AppError> {
    let engine = SimulationEngine::try_new(config)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snapshot_tx, snapshot_rx) = mpsc::sync_channel::<GameStateSnapshot>(SNAPSHOT_BACKLOG);
    let latest_snapshot = Arc::new(Mutex::new(None));
    let latest = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("isoshooter-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, snapshot_tx, &latest, options);
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        snapshots: snapshot_rx,
        latest_snapshot,
        thread,
    })
}

/// Feed `pilot` every published snapshot until the loop stops, then join
/// it. Returns the last snapshot seen.
pub fn drive(handle: GameLoopHandle, pilot: &Autopilot) -> Option<GameStateSnapshot> {
    let mut last = None;
    // A lockstep loop waits for this before its first tick.
    handle.send_input(FrameInput::idle());
    for snapshot in handle.snapshots.iter() {
        handle.send_input(pilot.decide(&snapshot));
        last = Some(snapshot);
    }
    handle.join();
    last
}

/// The game loop. Runs until Shutdown, channel disconnect, or the tick
/// limit.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::SyncSender<GameStateSnapshot>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    options: LoopOptions,
) {
    let mut input = FrameInput::idle();
    let mut next_tick_time = Instant::now();

    loop {
        if options.max_ticks.is_some_and(|max| engine.time().tick >= max) {
            info!("Tick limit reached at {}", engine.time().tick);
            return;
        }

        // 1. Take input: one command per tick in lockstep, else drain
        if options.realtime {
            loop {
                match cmd_rx.try_recv() {
                    Ok(GameLoopCommand::Input(next)) => input = next,
                    Ok(GameLoopCommand::Shutdown) => {
                        debug!("Game loop shut down at tick {}", engine.time().tick);
                        return;
                    }
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => return,
                }
            }
        } else {
            match cmd_rx.recv() {
                Ok(GameLoopCommand::Input(next)) => input = next,
                Ok(GameLoopCommand::Shutdown) => {
                    debug!("Game loop shut down at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::RecvError) => return,
            }
        }

        // 2. Advance one tick; a fire request is spent either way
        let snapshot = engine.tick(DT, &input);
        input.fire_at = None;

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 4. Publish. A full backlog or nobody listening is fine.
        if let Err(mpsc::TrySendError::Full(dropped)) = snapshot_tx.try_send(snapshot) {
            trace!("Snapshot backlog full, dropped tick {}", dropped.time.tick);
        }

        if !options.realtime {
            continue;
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use isoshooter_core::config::GameConfig;
    use isoshooter_core::events::SimEvent;

    fn quiet_config() -> SimConfig {
        let mut game = GameConfig::default();
        game.world.enemy_count = 0;
        SimConfig { seed: 5, game }
    }

    fn lockstep(max_ticks: u64) -> LoopOptions {
        LoopOptions {
            max_ticks: Some(max_ticks),
            realtime: false,
        }
    }

    fn run_inline(commands: Vec<GameLoopCommand>, options: LoopOptions) -> Vec<GameStateSnapshot> {
        let engine = SimulationEngine::new(quiet_config());
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (snapshot_tx, snapshot_rx) = mpsc::sync_channel(64);
        let latest = Mutex::new(None);
        for command in commands {
            cmd_tx.send(command).unwrap();
        }
        // A paced loop stops on a closed channel; a lockstep loop needs it
        // closed to stop waiting once the queue runs dry.
        let _held = options.realtime.then_some(cmd_tx);

        run_game_loop(engine, cmd_rx, snapshot_tx, &latest, options);
        snapshot_rx.try_iter().collect()
    }

    fn idle_inputs(count: usize) -> Vec<GameLoopCommand> {
        (0..count)
            .map(|_| GameLoopCommand::Input(FrameInput::idle()))
            .collect()
    }

    fn count_fired(snapshots: &[GameStateSnapshot]) -> usize {
        snapshots
            .iter()
            .flat_map(|s| &s.events)
            .filter(|e| matches!(e, SimEvent::PlayerFired { .. }))
            .count()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(FrameInput::moving(Vec3::X)))
            .unwrap();
        tx.send(GameLoopCommand::Input(FrameInput::idle()))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Input(FrameInput { move_intent, .. }) if move_intent == Vec3::X
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_tick_limit() {
        let snapshots = run_inline(idle_inputs(8), lockstep(5));
        assert_eq!(snapshots.len(), 5);
        assert_eq!(snapshots[4].time.tick, 5);
    }

    #[test]
    fn test_lockstep_ticks_once_per_input() {
        let snapshots = run_inline(idle_inputs(2), lockstep(5));
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[1].time.tick, 2);
    }

    #[test]
    fn test_shutdown_before_first_tick() {
        let snapshots = run_inline(vec![GameLoopCommand::Shutdown], lockstep(5));
        assert!(snapshots.is_empty());
    }

    #[test]
    fn test_lockstep_applies_each_input_to_its_tick() {
        let first = FrameInput::moving(Vec3::Z).with_fire_at(Vec3::new(0.0, 0.0, 9.0));
        let commands = vec![
            GameLoopCommand::Input(first),
            GameLoopCommand::Input(FrameInput::moving(Vec3::Z)),
            GameLoopCommand::Input(FrameInput::moving(Vec3::Z)),
        ];
        let snapshots = run_inline(commands, lockstep(3));

        assert_eq!(snapshots.len(), 3);
        assert!((snapshots[2].player.position.z - 0.6).abs() < 1e-5);
        assert_eq!(count_fired(&snapshots), 1);
        assert!(snapshots
            .iter()
            .flat_map(|s| &s.events)
            .all(|e| !matches!(e, SimEvent::FireBlocked { .. })));
    }

    #[test]
    fn test_paced_loop_holds_movement_and_spends_fire() {
        let input = FrameInput::moving(Vec3::Z).with_fire_at(Vec3::new(0.0, 0.0, 9.0));
        let options = LoopOptions {
            max_ticks: Some(3),
            realtime: true,
        };
        let snapshots = run_inline(vec![GameLoopCommand::Input(input)], options);

        assert_eq!(snapshots.len(), 3);
        assert!((snapshots[2].player.position.z - 0.6).abs() < 1e-5);
        assert_eq!(count_fired(&snapshots), 1);
    }

    #[test]
    fn test_full_backlog_drops_snapshots_without_stalling() {
        let engine = SimulationEngine::new(quiet_config());
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (snapshot_tx, snapshot_rx) = mpsc::sync_channel(SNAPSHOT_BACKLOG);
        let latest = Mutex::new(None);
        for command in idle_inputs(20) {
            cmd_tx.send(command).unwrap();
        }
        drop(cmd_tx);

        run_game_loop(engine, cmd_rx, snapshot_tx, &latest, lockstep(20));

        let buffered: Vec<_> = snapshot_rx.try_iter().collect();
        assert_eq!(buffered.len(), SNAPSHOT_BACKLOG);
        assert_eq!(buffered[0].time.tick, 1);
        let latest = latest.lock().unwrap().clone().unwrap();
        assert_eq!(latest.time.tick, 20);
    }

    #[test]
    fn test_spawned_loop_publishes_latest() {
        let handle = spawn_game_loop(quiet_config(), lockstep(10)).unwrap();
        for _ in 0..10 {
            handle.send_input(FrameInput::idle());
        }

        let received: Vec<_> = handle.snapshots.iter().collect();
        assert_eq!(received.len(), 10);
        assert_eq!(handle.latest().unwrap().time.tick, 10);
        handle.join();
    }

    #[test]
    fn test_join_releases_a_waiting_loop() {
        let handle = spawn_game_loop(quiet_config(), LoopOptions::default()).unwrap();
        handle.send_input(FrameInput::idle());
        let first = handle.snapshots.recv().unwrap();
        assert_eq!(first.time.tick, 1);
        // Unbounded and waiting for input: only a closed channel ends it.
        handle.join();
    }

    #[test]
    fn test_driven_sessions_replay_identically() {
        let run = || {
            let config = SimConfig {
                seed: 11,
                game: GameConfig::default(),
            };
            let handle = spawn_game_loop(config, lockstep(300)).unwrap();
            drive(handle, &Autopilot::default()).unwrap()
        };

        let a = run();
        let b = run();

        assert_eq!(a.time.tick, 300);
        assert!(a.score.shots_fired > 0, "Autopilot should have fired");
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_spawn_rejects_invalid_config() {
        let mut config = quiet_config();
        config.game.player.speed = -1.0;
        let result = spawn_game_loop(config, LoopOptions::default());
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
