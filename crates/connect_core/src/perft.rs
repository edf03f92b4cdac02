use crate::state::{GameState, MoveGuard};

/// Counts the positions reachable in exactly `depth` plies.
///
/// Finished games are leaves: no moves are generated past a win or a full
/// board. Used to cross-check `can_play`, `play` and `undo`.
pub fn perft<P: GameState>(pos: &mut P, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for col in 0..pos.width() {
        if !pos.can_play(col) {
            continue;
        }
        let mut child = MoveGuard::new(pos, col);
        nodes += perft(&mut *child, depth - 1);
    }
    nodes
}
