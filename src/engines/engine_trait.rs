//! Engine abstraction used by drivers.
//!
//! A driver owns the live `Board`; an engine only looks at it and proposes a
//! move, which the driver then applies with `Board::make_move`.

use crate::game_state::{board::Board, chess_types::*};

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board, side: Color) -> Result<EngineOutput, String>;
}
