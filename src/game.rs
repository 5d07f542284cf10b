//! Game orchestration: board generation for both sides and the alternating
//! turn loop.

use alloc::boxed::Box;
use core::fmt;

use crate::{
    board::Board,
    common::ConfigError,
    config::GameConfig,
    fleet::generate_random_board,
    player::{AiPlayer, Player},
    random::RandomSource,
    render::Renderer,
};

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum Role {
    Human,
    Computer,
}

impl Role {
    pub fn opponent(self) -> Role {
        match self {
            Role::Human => Role::Computer,
            Role::Computer => Role::Human,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Human => f.write_str("human"),
            Role::Computer => f.write_str("computer"),
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameOutcome {
    pub winner: Role,
    /// Accepted shots by both sides. Refused targets are not counted.
    pub moves: usize,
    /// Ships sunk on the human board.
    pub human_sunk: usize,
    /// Ships sunk on the computer board.
    pub computer_sunk: usize,
}

fn check_ready(board: &Board, side: Role) -> Result<(), ConfigError> {
    if !board.is_finalized() {
        Err(ConfigError::BoardNotFinalized(side))
    } else if board.ships().is_empty() {
        Err(ConfigError::EmptyFleet(side))
    } else {
        Ok(())
    }
}

/// A board together with the player who shoots from it.
struct Side {
    board: Board,
    player: Box<dyn Player>,
}

/// Human vs. computer game. The human side always moves first; a hit or a
/// sinking keeps the move with the shooter.
pub struct Game<R, D> {
    human: Side,
    computer: Side,
    rng: R,
    renderer: D,
    to_move: Role,
    moves: usize,
    outcome: Option<GameOutcome>,
}

impl<R: RandomSource, D: Renderer> Game<R, D> {
    /// Generate both boards from `rng` and seat an [`AiPlayer`] against
    /// `human_player`. The computer board is hidden unless the config asks
    /// to reveal it.
    pub fn new(
        config: &GameConfig,
        mut rng: R,
        human_player: Box<dyn Player>,
        renderer: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let human_board = generate_random_board(config.board_size, &mut rng)?;
        let mut computer_board = generate_random_board(config.board_size, &mut rng)?;
        computer_board.set_visible(config.reveal_computer_ships);
        Self::from_parts(
            human_board,
            computer_board,
            human_player,
            Box::new(AiPlayer::new()),
            rng,
            renderer,
        )
    }

    /// Assemble a game from prepared boards and players. Both boards must be
    /// finalized and carry at least one ship, otherwise the game could never
    /// end.
    pub fn from_parts(
        human_board: Board,
        computer_board: Board,
        human_player: Box<dyn Player>,
        computer_player: Box<dyn Player>,
        rng: R,
        renderer: D,
    ) -> Result<Self, ConfigError> {
        check_ready(&human_board, Role::Human)?;
        check_ready(&computer_board, Role::Computer)?;
        Ok(Self {
            human: Side {
                board: human_board,
                player: human_player,
            },
            computer: Side {
                board: computer_board,
                player: computer_player,
            },
            rng,
            renderer,
            to_move: Role::Human,
            moves: 0,
            outcome: None,
        })
    }

    /// Board the human's fleet sits on (the computer shoots at it).
    pub fn human_board(&self) -> &Board {
        &self.human.board
    }

    /// Board the computer's fleet sits on (the human shoots at it).
    pub fn computer_board(&self) -> &Board {
        &self.computer.board
    }

    pub fn to_move(&self) -> Role {
        self.to_move
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    /// Play a single move. Returns the outcome once a side has won; further
    /// calls keep returning it without shooting.
    pub fn step(&mut self) -> Option<GameOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        self.renderer.show_boards(&self.human.board, &self.computer.board);
        let role = self.to_move;
        self.renderer.turn_started(role);

        let (shooter, target) = match role {
            Role::Human => (&mut self.human, &mut self.computer),
            Role::Computer => (&mut self.computer, &mut self.human),
        };
        let extra_turn = shooter
            .player
            .take_turn(&mut target.board, &mut self.rng, &mut self.renderer);
        self.moves += 1;
        if !extra_turn {
            self.to_move = role.opponent();
        }

        let winner = if self.computer.board.all_sunk() {
            Role::Human
        } else if self.human.board.all_sunk() {
            Role::Computer
        } else {
            return None;
        };
        let outcome = GameOutcome {
            winner,
            moves: self.moves,
            human_sunk: self.human.board.sunk_count(),
            computer_sunk: self.computer.board.sunk_count(),
        };
        log::info!("{} wins after {} moves", winner, self.moves);
        self.renderer.show_boards(&self.human.board, &self.computer.board);
        self.renderer.game_over(&outcome);
        self.outcome = Some(outcome);
        Some(outcome)
    }

    /// Alternate moves until one fleet is destroyed.
    pub fn run_loop(&mut self) -> GameOutcome {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }
}
