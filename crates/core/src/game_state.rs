//! Game state module - ties the board, move engine, spawn policy and animation
//! clock together.
//!
//! Per input step at most one move is applied; after a valid move the spawn
//! policy may add a tile. Every rendered frame calls [`GameState::tick`] with
//! the frame delta, independent of whether a move happened.

use log::{debug, info};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::moves::{apply_move, select_direction};
use crate::rng::{CoinSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::spawn::{maybe_spawn, seed_initial_tiles};
use crate::types::{Direction, GameAction, Position, BOARD_SIZE};

/// The reference game: 4x4 board driven by the LCG.
pub type Game = GameState<BOARD_SIZE, SimpleRng>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<const N: usize, R> {
    board: Board<N>,
    rng: R,
    config: GameConfig,
    /// Seed the game was created with, 0 when the source is not seeded.
    seed: u32,
    /// Valid moves applied since the last restart.
    moves: u32,
    /// Tiles spawned after moves since the last restart.
    spawns: u32,
    last_spawn: Option<Position>,
    /// Frame time accumulated since the last spawn attempt.
    cooldown_ms: f32,
}

impl Game {
    /// Reference game with default rules and an LCG seeded with `seed`.
    pub fn with_seed(seed: u32) -> Self {
        // The default rules always fit the reference board.
        let mut game = Self::build(GameConfig::default(), SimpleRng::new(seed));
        game.seed = seed;
        info!("new game, seed {}", seed);
        game
    }

    /// Reference board with custom rules.
    pub fn from_seed(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate::<BOARD_SIZE>()?;
        let mut game = Self::build(config, SimpleRng::new(seed));
        game.seed = seed;
        info!("new game, seed {}", seed);
        Ok(game)
    }
}

impl<const N: usize, R: CoinSource> GameState<N, R> {
    /// Validate `config`, then create a board seeded with the initial tiles.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate::<N>()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: GameConfig, rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            rng,
            config,
            seed: 0,
            moves: 0,
            spawns: 0,
            last_spawn: None,
            cooldown_ms: 0.0,
        };
        state.seed_board();
        state
    }

    fn seed_board(&mut self) {
        let placed = seed_initial_tiles(
            &mut self.board,
            &mut self.rng,
            self.config.initial_tiles,
            self.config.min_exponent,
        );
        debug!("seeded {} initial tile(s)", placed);
    }

    /// Clear the board and the counters, then place fresh starting tiles.
    ///
    /// The random source continues rather than being reseeded.
    pub fn restart(&mut self) {
        self.board.clear();
        self.moves = 0;
        self.spawns = 0;
        self.last_spawn = None;
        self.cooldown_ms = 0.0;
        self.seed_board();
        info!("restart");
    }

    /// Apply one move, then give the spawn policy a chance.
    ///
    /// Returns true if the move changed the board. A move that changes
    /// nothing never spawns.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let outcome = apply_move(&mut self.board, direction);
        if !outcome.valid {
            return false;
        }
        self.moves += 1;

        if self.cooldown_elapsed() {
            if let Some(pos) =
                maybe_spawn(&mut self.board, &mut self.rng, self.config.min_exponent)
            {
                self.spawns += 1;
                self.last_spawn = Some(pos);
            }
            // Every attempt restarts the cooldown, even one that placed nothing.
            self.cooldown_ms = 0.0;
        }
        true
    }

    fn cooldown_elapsed(&self) -> bool {
        self.config.spawn_cooldown_ms == 0
            || self.cooldown_ms > self.config.spawn_cooldown_ms as f32
    }

    /// Apply a game action. Returns true if the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// One input step: apply the highest-precedence pressed direction, if any.
    pub fn step(&mut self, pressed: &[Direction]) -> bool {
        match select_direction(pressed) {
            Some(direction) => self.apply_move(direction),
            None => false,
        }
    }

    /// Advance animation clocks and the spawn cooldown by one frame.
    pub fn tick(&mut self, delta_secs: f32) {
        self.board
            .advance_animations(delta_secs, self.config.animation_rate);
        if delta_secs > 0.0 {
            self.cooldown_ms += delta_secs * 1000.0;
        }
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<N> {
        &mut self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn spawns(&self) -> u32 {
        self.spawns
    }

    pub fn last_spawn(&self) -> Option<Position> {
        self.last_spawn
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot<N>) {
        out.fill_board(&self.board);
        out.seed = self.seed;
        out.moves = self.moves;
        out.spawns = self.spawns;
        out.last_spawn = self.last_spawn;
    }

    pub fn snapshot(&self) -> GameSnapshot<N> {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
