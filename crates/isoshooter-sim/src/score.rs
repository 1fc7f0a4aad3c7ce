//! Running score, tallied from the events each tick raises.

use isoshooter_core::events::SimEvent;
use isoshooter_core::state::ScoreView;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub shots_fired: u32,
    pub enemy_shots_fired: u32,
    pub enemies_killed: u32,
    pub hits_taken: u32,
}

impl ScoreState {
    pub fn record(&mut self, event: &SimEvent) {
        match event {
            SimEvent::PlayerFired { .. } => self.shots_fired += 1,
            SimEvent::EnemyFired { .. } => self.enemy_shots_fired += 1,
            SimEvent::EnemyRespawned { .. } => self.enemies_killed += 1,
            SimEvent::PlayerHit { .. } => self.hits_taken += 1,
            SimEvent::FireBlocked { .. } | SimEvent::EnemyHit { .. } => {}
        }
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            shots_fired: self.shots_fired,
            enemy_shots_fired: self.enemy_shots_fired,
            enemies_killed: self.enemies_killed,
            hits_taken: self.hits_taken,
        }
    }
}
