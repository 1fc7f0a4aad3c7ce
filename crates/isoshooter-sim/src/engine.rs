//! Simulation engine: the frame orchestrator.
//!
//! `SimulationEngine` owns the player, the enemy population, and the
//! projectile pool, runs all systems in order once per frame, and produces
//! `GameStateSnapshot`s. Completely headless, so a seeded engine replays
//! identically in tests.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use isoshooter_core::commands::FrameInput;
use isoshooter_core::components::Character;
use isoshooter_core::config::{ConfigError, GameConfig};
use isoshooter_core::events::SimEvent;
use isoshooter_core::state::GameStateSnapshot;
use isoshooter_core::types::SimTime;

use crate::score::ScoreState;
use crate::systems;
use crate::systems::enemies::EnemyPopulation;
use crate::systems::player::FireOutcome;
use crate::systems::projectiles::ProjectilePool;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns all session state.
pub struct SimulationEngine {
    config: GameConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    player: Character,
    enemies: EnemyPopulation,
    projectiles: ProjectilePool,
    events: Vec<SimEvent>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create the player, place the enemies, and allocate the pool.
    ///
    /// The config is trusted as given; see [`SimulationEngine::try_new`].
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let game = config.game;

        let player = systems::player::init_character(&game.player);
        let enemies = EnemyPopulation::init(
            game.world.enemy_count,
            &player,
            &game.enemy,
            &game.world,
            &mut rng,
        );
        let projectiles = ProjectilePool::new(&game.projectile);

        info!(
            "Session initialised: {} enemies, {} projectile slots, seed {}",
            enemies.len(),
            projectiles.capacity(),
            config.seed
        );

        Self {
            config: game,
            time: SimTime::default(),
            rng,
            player,
            enemies,
            projectiles,
            events: Vec::new(),
            score: ScoreState::default(),
        }
    }

    /// Validate the config, then build the engine.
    pub fn try_new(config: SimConfig) -> Result<Self, ConfigError> {
        config.game.validate()?;
        Ok(Self::new(config))
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot.
    ///
    /// Order matters: a projectile fired this frame is moved and
    /// hit-tested in the same frame.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) -> GameStateSnapshot {
        // 1. Player cooldown
        systems::player::tick(&mut self.player, dt);

        // 2. Player movement
        self.player.position = systems::player::apply_movement_intent(
            &self.player,
            input.move_intent,
            self.enemies.enemies(),
        );

        // 3. Player fire
        if let Some(aim) = input.fire_at {
            match systems::player::fire_at(&mut self.player, &mut self.projectiles, aim) {
                FireOutcome::Fired { slot } => {
                    let direction = self
                        .projectiles
                        .get(slot)
                        .map(|p| p.direction)
                        .unwrap_or_default();
                    self.events.push(SimEvent::PlayerFired { slot, direction });
                }
                FireOutcome::CoolingDown { remaining_secs } => {
                    self.events.push(SimEvent::FireBlocked { remaining_secs });
                }
                FireOutcome::Rejected => {}
            }
        }

        // 4. Enemy steering, movement, fire
        self.enemies.advance(
            &self.player,
            &mut self.projectiles,
            dt,
            &mut self.rng,
            &mut self.events,
        );

        // 5. Projectile movement and expiry
        self.projectiles.advance(dt);

        // 6. Enemy projectiles vs player
        systems::hits::enemy_projectiles_vs_player(
            &mut self.projectiles,
            &self.player,
            &self.config.world,
            &mut self.events,
        );

        // 7. Player projectiles vs enemies
        systems::hits::player_projectiles_vs_enemies(
            &mut self.projectiles,
            &mut self.enemies,
            &self.player,
            self.config.projectile.player_damage,
            &self.config.world,
            &mut self.rng,
            &mut self.events,
        );

        self.time.advance(dt);

        for event in &self.events {
            self.score.record(event);
        }
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.time,
            &self.player,
            &self.enemies,
            &self.projectiles,
            events,
            &self.score,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the session's tuning.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn enemies(&self) -> &EnemyPopulation {
        &self.enemies
    }

    pub fn projectiles(&self) -> &ProjectilePool {
        &self.projectiles
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Mutable player access for scripted scenarios.
    pub fn player_mut(&mut self) -> &mut Character {
        &mut self.player
    }

    /// Mutable enemy access for scripted scenarios.
    pub fn enemies_mut(&mut self) -> &mut EnemyPopulation {
        &mut self.enemies
    }

    /// Mutable pool access for scripted scenarios.
    pub fn projectiles_mut(&mut self) -> &mut ProjectilePool {
        &mut self.projectiles
    }
}
