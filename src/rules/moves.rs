//! Move and jump-chain generation
//!
//! A turn is either a step to an adjacent empty cell or a chain of jumps.
//! A jump goes over the occupied neighbour in one direction and lands on the
//! empty cell right behind it; nothing is captured. Chains are explored depth
//! first and only chains that cannot be extended are reported as paths.
//!
//! A piece resting inside its destination triangle may only finish its move
//! inside that triangle. The rule looks at the final cell only, so a chain
//! may pass through any cell on the way.

use crate::board::{Board, CellId, Direction, Path, Side, CELL_COUNT};
use crate::error::{EngineError, EngineResult};

use super::filter::{HeuristicKind, MoveFilter};

/// Landing cell of a jump from `cell` in `dir`, if the jump is possible
#[inline]
fn jump_landing(board: &Board, cell: CellId, dir: Direction) -> Option<CellId> {
    let over = board.neighbour(cell, dir)?;
    if board.is_empty(over) {
        return None;
    }
    let landing = board.neighbour(over, dir)?;
    board.is_empty(landing).then_some(landing)
}

/// True if a piece of `side` sitting on `from` may not finish on `to`
#[inline]
fn leaves_home(board: &Board, side: Side, from: CellId, to: CellId) -> bool {
    board.in_destination(side, from) && !board.in_destination(side, to)
}

/// Empty neighbours of `cell`, in direction order
pub fn step_destinations(board: &Board, cell: CellId) -> Vec<CellId> {
    board
        .topology()
        .neighbours(cell)
        .map(|(_, n)| n)
        .filter(|&n| board.is_empty(n))
        .collect()
}

/// Cells reachable from `cell` with a single jump
pub fn jump_destinations(board: &Board, cell: CellId) -> Vec<CellId> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| jump_landing(board, cell, dir))
        .collect()
}

/// Whether `to` is one jump away from `from`
pub fn is_valid_jump(board: &Board, from: CellId, to: CellId) -> bool {
    Direction::ALL
        .into_iter()
        .any(|dir| jump_landing(board, from, dir) == Some(to))
}

/// Whether `to` is an empty neighbour of `from` or one jump away
pub fn is_valid_step_or_jump(board: &Board, from: CellId, to: CellId) -> bool {
    let adjacent = board.topology().neighbours(from).any(|(_, n)| n == to);
    (adjacent && board.is_empty(to)) || is_valid_jump(board, from, to)
}

/// Every maximal jump chain starting at `origin`.
///
/// Each path is `[origin, landing1, ..., landingN]` with `N >= 1`. A cell is
/// never landed on twice within one chain. The moving piece is still on
/// `origin` while chains are explored. Returns nothing for an empty origin.
pub fn jump_paths(board: &Board, origin: CellId) -> Vec<Path> {
    let mut paths = Vec::new();
    if board.is_empty(origin) {
        return paths;
    }

    let mut visited = [false; CELL_COUNT];
    visited[origin.index()] = true;
    let mut chain = vec![origin];
    extend_chain(board, &mut chain, &mut visited, &mut paths);
    paths
}

fn extend_chain(
    board: &Board,
    chain: &mut Vec<CellId>,
    visited: &mut [bool; CELL_COUNT],
    paths: &mut Vec<Path>,
) {
    let Some(&current) = chain.last() else {
        return;
    };

    let mut extended = false;
    for dir in Direction::ALL {
        let Some(landing) = jump_landing(board, current, dir) else {
            continue;
        };
        if visited[landing.index()] {
            continue;
        }

        extended = true;
        visited[landing.index()] = true;
        chain.push(landing);
        extend_chain(board, chain, visited, paths);
        chain.pop();
        visited[landing.index()] = false;
    }

    if !extended && chain.len() > 1 {
        paths.push(Path::new(chain.clone()));
    }
}

/// All paths the piece on `origin` may take this turn.
///
/// Steps come first (in direction order), then jump chains (in discovery
/// order). Paths breaking the home-triangle rule or rejected by `filter`
/// on their endpoints are dropped.
pub fn valid_paths<F>(board: &Board, origin: CellId, filter: &F) -> Vec<Path>
where
    F: MoveFilter + ?Sized,
{
    let Some(side) = board.owner(origin) else {
        return Vec::new();
    };
    let allowed =
        |to: CellId| !leaves_home(board, side, origin, to) && filter.accept(side, origin, to);

    let mut paths: Vec<Path> = step_destinations(board, origin)
        .into_iter()
        .filter(|&to| allowed(to))
        .map(|to| Path::new(vec![origin, to]))
        .collect();

    paths.extend(
        jump_paths(board, origin)
            .into_iter()
            .filter(|path| path.destination().is_some_and(|to| allowed(to))),
    );
    paths
}

/// All paths for every piece of `side`, pieces taken in flat order
pub fn legal_paths<F>(board: &Board, side: Side, filter: &F) -> Vec<Path>
where
    F: MoveFilter + ?Sized,
{
    board
        .occupied_by(side)
        .flat_map(|origin| valid_paths(board, origin, filter))
        .collect()
}

/// Whether `side` has at least one legal path
pub fn can_move(board: &Board, side: Side) -> bool {
    board
        .occupied_by(side)
        .any(|origin| !valid_paths(board, origin, &HeuristicKind::AcceptAll).is_empty())
}

/// Every cell the piece on `origin` may finish on, each listed once.
///
/// Unlike [`valid_paths`] this includes cells passed through in the middle
/// of a jump chain, since the player may stop there.
pub fn valid_destinations(board: &Board, origin: CellId) -> Vec<CellId> {
    let Some(side) = board.owner(origin) else {
        return Vec::new();
    };

    let mut seen = [false; CELL_COUNT];
    let mut destinations = Vec::new();
    let landings = jump_paths(board, origin);
    let reached = step_destinations(board, origin)
        .into_iter()
        .chain(landings.iter().flat_map(|path| path[1..].iter().copied()));

    for cell in reached {
        if seen[cell.index()] || leaves_home(board, side, origin, cell) {
            continue;
        }
        seen[cell.index()] = true;
        destinations.push(cell);
    }
    destinations
}

/// A legal path from `from` to `to`: the step if `to` is adjacent,
/// otherwise the first jump chain that lands on it.
pub fn route_to(board: &Board, from: CellId, to: CellId) -> Option<Path> {
    let side = board.owner(from)?;
    if !board.is_empty(to) || leaves_home(board, side, from, to) {
        return None;
    }
    if board.topology().neighbours(from).any(|(_, n)| n == to) {
        return Some(Path::new(vec![from, to]));
    }
    jump_paths(board, from).into_iter().find_map(|path| {
        let end = path.iter().position(|&cell| cell == to)?;
        Some(Path::new(path[..=end].to_vec()))
    })
}

/// One path per cell each piece of `side` may finish on, including stops
/// in the middle of a jump chain. Pieces in flat order, destinations in
/// [`valid_destinations`] order.
pub fn playable_paths(board: &Board, side: Side) -> Vec<Path> {
    board
        .occupied_by(side)
        .flat_map(|origin| {
            valid_destinations(board, origin)
                .into_iter()
                .filter_map(move |to| route_to(board, origin, to))
        })
        .collect()
}

/// Move the piece on `from` to `to` if the rules allow it.
///
/// Returns the path that was applied. The board is untouched on error.
pub fn try_move(board: &mut Board, from: CellId, to: CellId) -> EngineResult<Path> {
    if board.is_empty(from) {
        return Err(EngineError::EmptyOrigin { cell: from });
    }
    if !board.is_empty(to) {
        return Err(EngineError::OccupiedDestination { cell: to });
    }
    let path = route_to(board, from, to).ok_or(EngineError::IllegalMove { from, to })?;
    board.apply_path(&path)?;
    Ok(path)
}

/// Check an externally supplied path against the current position.
///
/// A two-cell path may be a step or a jump; longer paths must be jumps all
/// the way, never landing twice on the same cell. The home-triangle rule
/// applies to the final cell.
pub fn validate_path(board: &Board, path: &Path) -> EngineResult<()> {
    if path.len() < 2 {
        return Err(EngineError::PathTooShort { len: path.len() });
    }
    let origin = path[0];
    let Some(side) = board.owner(origin) else {
        return Err(EngineError::EmptyOrigin { cell: origin });
    };

    let mut visited = [false; CELL_COUNT];
    visited[origin.index()] = true;
    for hop in path.windows(2) {
        let (from, to) = (hop[0], hop[1]);
        if !board.is_empty(to) {
            return Err(EngineError::OccupiedDestination { cell: to });
        }
        let legal = if path.len() == 2 {
            is_valid_step_or_jump(board, from, to)
        } else {
            is_valid_jump(board, from, to)
        };
        if !legal || visited[to.index()] {
            return Err(EngineError::IllegalMove { from, to });
        }
        visited[to.index()] = true;
    }

    let destination = path[path.len() - 1];
    if leaves_home(board, side, origin, destination) {
        return Err(EngineError::IllegalMove {
            from: origin,
            to: destination,
        });
    }
    Ok(())
}
