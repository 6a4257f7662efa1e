//! Turn/world controller session.
//!
//! A [`Session`] owns the game state, the immutable configuration and the
//! floor generator. The UI boundary feeds it decoded [`Intent`]s one at a
//! time and gets a [`TurnReport`] back. Input routing depends on the current
//! [`Mode`]; targeting and level-up are plain mode transitions, not
//! suspended control flow.

use game_core::palette;
use game_core::progression;
use game_core::{
    Action, ActionError, Entity, EntityId, GameConfig, GameEngine, GameError, GameMap, GameState,
    LayoutGenerator, Message, Position, TargetShape, TargetingMode, TurnError,
};
use game_content::{Catalog, welcome_message};

use crate::error::{Result, RuntimeError, SessionError};
use crate::intent::{Intent, Mode};
use crate::repository::SaveRepository;

/// What the UI needs to redraw after one intent.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    /// True when the intent resolved into a successful turn (enemies moved).
    pub consumed_turn: bool,
    pub hp: u32,
    pub max_hp: u32,
    pub floor: u32,
    pub mode: Mode,
    /// Log entries added or stacked while handling the intent.
    pub new_messages: Vec<Message>,
}

pub struct Session {
    state: GameState,
    config: GameConfig,
    generator: Box<dyn LayoutGenerator>,
    mode: Mode,
}

impl Session {
    /// Starts a fresh game: spawns the player, builds floor 1 and greets.
    pub fn new_game(
        seed: u64,
        config: GameConfig,
        catalog: &Catalog,
        generator: Box<dyn LayoutGenerator>,
    ) -> Result<Self> {
        let mut state = GameState::new(seed, GameMap::new(1, 1));
        let player = catalog.spawn_player(&mut state.ids, &config);
        state.map.add(player);

        GameEngine::new(&mut state, &config, generator.as_ref())
            .generate_floor()
            .map_err(RuntimeError::Setup)?;
        state.message(welcome_message(seed), palette::WELCOME_TEXT);

        tracing::info!(
            seed,
            width = state.map.width(),
            height = state.map.height(),
            "new game started"
        );

        Ok(Self::resume(state, config, generator))
    }

    /// Wraps a restored snapshot. The mode is derived from the state.
    pub fn resume(
        state: GameState,
        config: GameConfig,
        generator: Box<dyn LayoutGenerator>,
    ) -> Self {
        let mut session = Self {
            state,
            config,
            generator,
            mode: Mode::Normal,
        };
        session.refresh_mode();
        session
    }

    pub fn load(
        repository: &dyn SaveRepository,
        slot: &str,
        config: GameConfig,
        generator: Box<dyn LayoutGenerator>,
    ) -> Result<Option<Self>> {
        let Some(state) = repository.load(slot)? else {
            return Ok(None);
        };
        tracing::info!(
            slot,
            floor = state.world.current_floor,
            turn = state.turn.turn,
            "session restored"
        );
        Ok(Some(Self::resume(state, config, generator)))
    }

    pub fn save(&self, repository: &dyn SaveRepository, slot: &str) -> Result<()> {
        repository.save(slot, &self.state)?;
        tracing::info!(slot, turn = self.state.turn.turn, "session saved");
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn visible(&self) -> &[bool] {
        self.state.map.visible()
    }

    pub fn explored(&self) -> &[bool] {
        self.state.map.explored()
    }

    /// Names of whatever the player can see at `position`.
    pub fn look(&self, position: Position) -> String {
        self.state.map.names_at(position)
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Routes one intent through the current mode.
    ///
    /// Impossible actions are not errors here: they land in the message log
    /// and the report says no turn was consumed.
    pub fn handle(&mut self, intent: Intent) -> std::result::Result<TurnReport, SessionError> {
        if let Intent::Quit { save } = intent {
            tracing::info!(save, "player quit");
            return Err(SessionError::Quit { save });
        }

        let mark = self.state.log.revision();
        let consumed_turn = match self.mode {
            Mode::GameOver => false,
            Mode::AwaitingLevelUp => self.choose_level_up(intent),
            Mode::AwaitingTile { item, cursor, .. } => self.select_tile(intent, item, cursor)?,
            Mode::Normal => self.normal(intent)?,
        };
        Ok(self.report(consumed_turn, mark))
    }

    fn normal(&mut self, intent: Intent) -> std::result::Result<bool, SessionError> {
        let action = match intent {
            Intent::Move(direction) => Action::bump(EntityId::PLAYER, direction),
            Intent::Wait => Action::wait(EntityId::PLAYER),
            Intent::Pickup => Action::pickup(EntityId::PLAYER),
            Intent::Descend => Action::take_stairs(EntityId::PLAYER),
            Intent::Drop(slot) => match self.pack_item(slot) {
                Some(item) => Action::drop_item(EntityId::PLAYER, item),
                None => return Ok(self.invalid_entry()),
            },
            Intent::Equip(slot) => match self.pack_item(slot) {
                Some(item) => Action::equip(EntityId::PLAYER, item),
                None => return Ok(self.invalid_entry()),
            },
            Intent::Use(slot) => {
                let Some(item) = self.pack_item(slot) else {
                    return Ok(self.invalid_entry());
                };
                if let Some(shape) = self.tile_shape(item) {
                    self.begin_targeting(item, shape);
                    return Ok(false);
                }
                Action::use_item(EntityId::PLAYER, item, None)
            }
            Intent::MoveCursor(_)
            | Intent::SelectTile(_)
            | Intent::ConfirmTile
            | Intent::Cancel
            | Intent::LevelUp(_)
            | Intent::Quit { .. } => return Ok(false),
        };
        self.play(action)
    }

    fn select_tile(
        &mut self,
        intent: Intent,
        item: EntityId,
        cursor: Position,
    ) -> std::result::Result<bool, SessionError> {
        match intent {
            Intent::MoveCursor(direction) => {
                let (dx, dy) = direction.delta();
                let next = cursor.offset(dx, dy);
                if let Mode::AwaitingTile { cursor, .. } = &mut self.mode {
                    if self.state.map.in_bounds(next) {
                        *cursor = next;
                    }
                }
                Ok(false)
            }
            Intent::SelectTile(target) if self.state.map.in_bounds(target) => {
                self.mode = Mode::Normal;
                self.play(Action::use_item(EntityId::PLAYER, item, Some(target)))
            }
            Intent::ConfirmTile => {
                self.mode = Mode::Normal;
                self.play(Action::use_item(EntityId::PLAYER, item, Some(cursor)))
            }
            Intent::Cancel => {
                tracing::debug!(%item, "targeting cancelled");
                self.mode = Mode::Normal;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn choose_level_up(&mut self, intent: Intent) -> bool {
        let Intent::LevelUp(choice) = intent else {
            return false;
        };
        if let Err(error) = progression::level_up(&mut self.state, choice) {
            self.impossible(&error);
        } else {
            tracing::debug!(%choice, "level up");
        }
        self.refresh_mode();
        false
    }

    fn begin_targeting(&mut self, item: EntityId, shape: TargetShape) {
        let cursor = self
            .state
            .player()
            .map_or(Position::ORIGIN, |player| player.position);
        self.mode = Mode::AwaitingTile {
            item,
            cursor,
            shape,
        };
        self.state
            .message("Select a target location", palette::NEEDS_TARGET);
    }

    fn play(&mut self, action: Action) -> std::result::Result<bool, SessionError> {
        let result = GameEngine::new(&mut self.state, &self.config, self.generator.as_ref())
            .play_turn(&action);

        match result {
            Ok(outcome) => {
                for (actor, error) in &outcome.forfeited {
                    tracing::warn!(
                        %actor,
                        code = error.error_code(),
                        "enemy forfeited its turn: {error}"
                    );
                }
                if outcome.descended {
                    tracing::info!(floor = self.state.world.current_floor, "descended");
                }
                tracing::debug!(?action, turn = self.state.turn.turn, "turn resolved");
                self.refresh_mode();
                Ok(true)
            }
            Err(TurnError::Action(error)) => {
                tracing::debug!(?action, code = error.error_code(), "impossible action");
                self.impossible(&error);
                Ok(false)
            }
            Err(error) => {
                tracing::warn!(?action, code = error.error_code(), "turn failed: {error}");
                self.refresh_mode();
                Err(SessionError::Engine(error))
            }
        }
    }

    fn impossible(&mut self, error: &ActionError) {
        self.state.message(error.to_string(), palette::IMPOSSIBLE);
    }

    fn invalid_entry(&mut self) -> bool {
        self.state.message("Invalid entry.", palette::INVALID);
        false
    }

    fn pack_item(&self, slot: usize) -> Option<EntityId> {
        self.state
            .player()
            .and_then(Entity::as_actor)
            .and_then(|actor| actor.inventory.as_ref())
            .and_then(|inventory| inventory.slot(slot))
            .map(|item| item.id)
    }

    /// Shape to preview when the item at `item` needs a tile, else `None`.
    fn tile_shape(&self, item: EntityId) -> Option<TargetShape> {
        let inventory = self.state.player()?.as_actor()?.inventory.as_ref()?;
        let effect = inventory.get(item)?.as_item()?.consumable?;
        match effect.targeting() {
            TargetingMode::SelectTile(shape) => Some(shape),
            TargetingMode::Immediate => None,
        }
    }

    fn refresh_mode(&mut self) {
        self.mode = if !self.state.player_alive() {
            Mode::GameOver
        } else if progression::level_up_pending(&self.state) {
            Mode::AwaitingLevelUp
        } else {
            match self.mode {
                Mode::AwaitingTile { .. } => self.mode,
                _ => Mode::Normal,
            }
        };
    }

    fn report(&self, consumed_turn: bool, mark: u64) -> TurnReport {
        let (hp, max_hp) = self
            .state
            .player()
            .and_then(Entity::fighter)
            .map_or((0, 0), |fighter| (fighter.hp(), fighter.max_hp()));

        TurnReport {
            consumed_turn,
            hp,
            max_hp,
            floor: self.state.world.current_floor,
            mode: self.mode,
            new_messages: self.state.log.since(mark).cloned().collect(),
        }
    }
}

