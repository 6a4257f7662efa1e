//! Turn and floor controller.
//!
//! [`GameEngine`] is the only place a player action turns into a full game
//! turn: the action runs, the enemy sweep runs, visibility is refreshed. A
//! failed action stops before the sweep and costs nothing. Descending the
//! stairs regenerates the floor through the [`LayoutGenerator`] collaborator.

mod errors;

pub use errors::TurnError;

use crate::action::{Action, ActionError, ActionOutcome, ActionTransition};
use crate::ai;
use crate::config::GameConfig;
use crate::env::LayoutGenerator;
use crate::palette;
use crate::state::{AiState, EntityId, GameState};

/// Result of one successful player turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    /// True when the player went down the stairs this turn.
    pub descended: bool,
    /// AI failures swallowed by the sweep. Each actor simply lost its turn.
    pub forfeited: Vec<(EntityId, ActionError)>,
}

pub struct GameEngine<'a, G: LayoutGenerator + ?Sized> {
    state: &'a mut GameState,
    config: &'a GameConfig,
    generator: &'a G,
}

impl<'a, G: LayoutGenerator + ?Sized> GameEngine<'a, G> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig, generator: &'a G) -> Self {
        Self {
            state,
            config,
            generator,
        }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Runs a player action and, if it succeeded, the rest of the turn.
    pub fn play_turn(&mut self, action: &Action) -> Result<TurnOutcome, TurnError> {
        if !action.actor().is_player() {
            return Err(TurnError::NotPlayerAction(action.actor()));
        }

        let outcome = action.perform(self.state, self.config)?;
        self.state.turn.next_nonce();

        let descended = outcome == ActionOutcome::Descend;
        if descended {
            self.generate_floor()?;
        }

        let forfeited = self.handle_enemy_turns();
        self.update_fov();
        self.state.turn.turn += 1;

        Ok(TurnOutcome {
            descended,
            forfeited,
        })
    }

    /// Gives every living actor that is not intent-driven one turn, in map
    /// order.
    pub fn handle_enemy_turns(&mut self) -> Vec<(EntityId, ActionError)> {
        let mut forfeited = Vec::new();
        for id in self.state.map.living_actor_ids() {
            let ai = self
                .state
                .map
                .entity(id)
                .and_then(|entity| entity.as_actor())
                .and_then(|actor| actor.ai.as_ref());
            // Killed earlier in this sweep, or driven by intents.
            if ai.is_none_or(AiState::is_controlled) {
                continue;
            }
            if let Err(error) = ai::take_turn(self.state, self.config, id) {
                forfeited.push((id, error));
            }
        }
        forfeited
    }

    /// Recomputes the visible set around the player and folds it into explored.
    pub fn update_fov(&mut self) {
        let Some((origin, radius)) = self
            .state
            .player()
            .map(|player| (player.position, player.light_radius))
        else {
            return;
        };
        self.state.map.update_fov(origin, radius);
        if self.state.world.reveal_map {
            self.state.map.reveal();
        }
    }

    /// Builds the next floor and moves the player onto it.
    ///
    /// The player keeps everything it carries. Visibility starts from scratch.
    pub fn generate_floor(&mut self) -> Result<(), TurnError> {
        let plan = self
            .state
            .world
            .plan_next_floor(self.config, self.state.game_seed);
        let generated = self.generator.generate(&plan.params, &mut self.state.ids)?;

        let mut player = self
            .state
            .map
            .remove(EntityId::PLAYER)
            .ok_or(TurnError::PlayerMissing)?;
        player.position = generated.player_start;
        if let Some(radius) = plan.light_radius {
            player.light_radius = radius;
        }

        let mut map = generated.map;
        map.add(player);
        self.state.map = map;
        self.state.world.current_floor = plan.params.floor;
        self.state.world.reveal_map = plan.reveal_map;

        if plan.reveal_map {
            self.state
                .message("You are BLESSED with divine sight", palette::YELLOW);
        }
        self.update_fov();
        Ok(())
    }
}
