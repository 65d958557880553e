//! Input resolver - applies one command to the game state
//!
//! | Command | Action | On collision |
//! |---------|--------|--------------|
//! | `RotateCw` / `RotateCcw` | rotate | rotate back, no render |
//! | `MoveLeft` / `MoveRight` | shift one column | shift back, no render |
//! | `SoftDrop` | one advance | on landing: merge, collapse, spawn |
//! | `HardDrop` | advance until landed | merge, collapse, spawn |
//! | `Quit` | flag quit | - |
//! | `None` | nothing | - |

use std::ops::BitOrAssign;

use log::debug;

use crate::core::{GameState, RandomSource};
use crate::types::{Command, RotateDir};

/// What happened while resolving a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFlags {
    pub needs_render: bool,
    pub spawned: bool,
    pub quit_requested: bool,
}

impl InputFlags {
    pub const NONE: InputFlags = InputFlags {
        needs_render: false,
        spawned: false,
        quit_requested: false,
    };

    pub const RENDER: InputFlags = InputFlags {
        needs_render: true,
        spawned: false,
        quit_requested: false,
    };

    pub const SPAWN: InputFlags = InputFlags {
        needs_render: true,
        spawned: true,
        quit_requested: false,
    };

    pub const QUIT: InputFlags = InputFlags {
        needs_render: false,
        spawned: false,
        quit_requested: true,
    };
}

impl BitOrAssign for InputFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.needs_render |= rhs.needs_render;
        self.spawned |= rhs.spawned;
        self.quit_requested |= rhs.quit_requested;
    }
}

/// Resolve exactly one command against the state.
pub fn resolve<R: RandomSource>(state: &mut GameState<R>, command: Command) -> InputFlags {
    match command {
        Command::None => InputFlags::NONE,
        Command::RotateCw => rotate(state, RotateDir::Cw),
        Command::RotateCcw => rotate(state, RotateDir::Ccw),
        Command::MoveLeft => shift(state, -1),
        Command::MoveRight => shift(state, 1),
        Command::SoftDrop => {
            if state.advance() {
                state.land();
                InputFlags::SPAWN
            } else {
                InputFlags::RENDER
            }
        }
        Command::HardDrop => {
            state.drop_to_floor();
            state.land();
            InputFlags::SPAWN
        }
        Command::Quit => InputFlags::QUIT,
    }
}

fn rotate<R: RandomSource>(state: &mut GameState<R>, dir: RotateDir) -> InputFlags {
    if state.try_rotate(dir) {
        InputFlags::RENDER
    } else {
        debug!("rotation {:?} blocked", dir);
        InputFlags::NONE
    }
}

fn shift<R: RandomSource>(state: &mut GameState<R>, dx: i8) -> InputFlags {
    if state.try_shift(dx) {
        InputFlags::RENDER
    } else {
        debug!("shift {} blocked", dx);
        InputFlags::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActivePiece, SimpleRng};
    use crate::types::PieceKind;

    fn state_with(piece: ActivePiece) -> GameState<SimpleRng> {
        let mut state = GameState::new(9);
        state.set_active(piece);
        state
    }

    #[test]
    fn test_none_does_nothing() {
        let mut state = GameState::new(1);
        let before = *state.active();
        assert_eq!(resolve(&mut state, Command::None), InputFlags::NONE);
        assert_eq!(*state.active(), before);
    }

    #[test]
    fn test_move_left_at_wall_is_rolled_back() {
        let mut state = state_with(ActivePiece::at(PieceKind::T, 0, 5));
        let flags = resolve(&mut state, Command::MoveLeft);
        assert!(!flags.needs_render);
        assert_eq!(state.active().x(), 0);

        let flags = resolve(&mut state, Command::MoveRight);
        assert_eq!(flags, InputFlags::RENDER);
        assert_eq!(state.active().x(), 1);
    }

    #[test]
    fn test_blocked_rotation_is_rolled_back() {
        let mut state = state_with(ActivePiece::at(PieceKind::I, 3, -2));
        let before = *state.active();
        assert_eq!(resolve(&mut state, Command::RotateCcw), InputFlags::NONE);
        assert_eq!(*state.active(), before);
    }

    #[test]
    fn test_rotation_renders() {
        let mut state = state_with(ActivePiece::at(PieceKind::T, 3, 5));
        let flags = resolve(&mut state, Command::RotateCw);
        assert_eq!(flags, InputFlags::RENDER);
        assert_eq!(state.active().bits(), [0b010, 0b110, 0b010, 0]);
    }

    #[test]
    fn test_soft_drop_moves_then_lands() {
        let mut state = state_with(ActivePiece::at(PieceKind::O, 4, 1));
        assert_eq!(resolve(&mut state, Command::SoftDrop), InputFlags::RENDER);
        assert_eq!(state.active().y(), 0);

        let flags = resolve(&mut state, Command::SoftDrop);
        assert_eq!(flags, InputFlags::SPAWN);
        assert_eq!(state.board().occupied_count(), 4);
    }

    #[test]
    fn test_hard_drop_always_spawns() {
        let mut state = GameState::new(4);
        let flags = resolve(&mut state, Command::HardDrop);
        assert!(flags.needs_render);
        assert!(flags.spawned);
        assert!(!flags.quit_requested);
        assert_eq!(state.board().occupied_count(), 4);
    }

    #[test]
    fn test_quit_sets_only_quit() {
        let mut state = GameState::new(1);
        assert_eq!(resolve(&mut state, Command::Quit), InputFlags::QUIT);
    }

    #[test]
    fn test_flags_compose() {
        let mut flags = InputFlags::NONE;
        flags |= InputFlags::RENDER;
        flags |= InputFlags::QUIT;
        assert!(flags.needs_render);
        assert!(flags.quit_requested);
        assert!(!flags.spawned);
    }
}
