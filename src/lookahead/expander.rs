//! Multi-ply lookahead.
//!
//! A line is the sequence of boards reached by alternating moves from a root
//! position, one board per ply. Every board in a line is shown from the root
//! player's point of view, so the first board of a line is exactly the
//! proposal `Position::apply` expects for that root move.
//!
//! Only the root prunes moves that leave the mover's king capturable. Every
//! level (root included) restricts itself to king captures when one exists.
//! A line that reaches a terminal position early repeats its last board up to
//! the requested depth.

use log::trace;

use crate::board_codec::board::Board;
use crate::lookahead::check_oracle::{forced_moves, leaves_king_exposed};
use crate::transition::mutation::successor_boards;

/// Depth above which expansion is refused outright.
pub const HARD_MAX_LOOKAHEAD: u8 = 6;

/// Lines per cursor page in pruned mode.
pub const PRUNED_PAGE_SIZE: usize = 450;

/// Boards per cursor page in complete mode; divided by the depth for lines.
pub const COMPLETE_PAGE_BOARDS: usize = 900;

pub type Line = Vec<Board>;

/// One-ply successors of the player to move, in the mover's orientation,
/// without exposure pruning.
pub fn one_ply_boards(board: &Board) -> Vec<Board> {
    if !board.has_kings() {
        return Vec::new();
    }
    forced_moves(board)
        .into_iter()
        .flat_map(|mv| successor_boards(board, mv.piece.value, mv.piece.x, mv.piece.y, mv.offset))
        .collect()
}

/// Root successors: one-ply boards that do not hand the opponent the king.
pub fn successors(board: &Board) -> Vec<Board> {
    one_ply_boards(board)
        .into_iter()
        .filter(|proposal| !leaves_king_exposed(proposal))
        .collect()
}

/// Every line of exactly `depth` boards from `board`. Depth 0 is a single
/// empty line; a root without moves yields no lines.
pub fn expand(board: &Board, depth: u8) -> Vec<Line> {
    if depth == 0 {
        return vec![Vec::new()];
    }

    let mut lines = Vec::new();
    for proposal in successors(board) {
        let mut line = Vec::with_capacity(depth as usize);
        line.push(proposal);
        extend_line(&proposal.canonicalize(), depth - 1, false, &mut line, &mut lines);
    }
    trace!("expanded depth {depth} into {} lines", lines.len());
    lines
}

/// Lines starting with `proposal`, a root successor already chosen by the
/// caller. The returned lines include `proposal` as their first board.
pub fn continuation_lines(proposal: &Board, depth: u8) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = Vec::with_capacity(depth.max(1) as usize);
    line.push(*proposal);
    extend_line(
        &proposal.canonicalize(),
        depth.saturating_sub(1),
        false,
        &mut line,
        &mut lines,
    );
    lines
}

/// Pairs of (root successor, leaf) for every line of `depth` boards.
pub fn expand_pruned(board: &Board, depth: u8) -> Vec<Line> {
    expand(board, depth)
        .into_iter()
        .filter_map(|line| match (line.first(), line.last()) {
            (Some(&root), Some(&leaf)) => Some(vec![root, leaf]),
            _ => None,
        })
        .collect()
}

/// `state` is canonical for the player to move. `root_to_move` tells whether
/// that player is the root player, which decides how boards are shown.
fn extend_line(state: &Board, remaining: u8, root_to_move: bool, line: &mut Line, out: &mut Vec<Line>) {
    if remaining == 0 {
        out.push(line.clone());
        return;
    }

    let proposals = one_ply_boards(state);
    if proposals.is_empty() {
        let Some(&last) = line.last() else {
            return;
        };
        let mut padded = line.clone();
        padded.extend(std::iter::repeat(last).take(remaining as usize));
        out.push(padded);
        return;
    }

    for proposal in proposals {
        let shown = if root_to_move {
            proposal
        } else {
            proposal.canonicalize()
        };
        line.push(shown);
        extend_line(&proposal.canonicalize(), remaining - 1, !root_to_move, line, out);
        line.pop();
    }
}

/// `Complete` pages full lines, `Pruned` pages (root successor, leaf) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    Complete,
    Pruned,
}

/// Pages through an expansion for callers that cannot take it in one piece.
#[derive(Debug)]
pub struct LookaheadCursor {
    lines: std::vec::IntoIter<Line>,
    page_size: usize,
}

impl LookaheadCursor {
    pub fn new(board: &Board, depth: u8, mode: CursorMode) -> Self {
        let (lines, page_size) = match mode {
            CursorMode::Complete => (
                expand(board, depth),
                (COMPLETE_PAGE_BOARDS / depth.max(1) as usize).max(1),
            ),
            CursorMode::Pruned => (expand_pruned(board, depth), PRUNED_PAGE_SIZE),
        };
        Self {
            lines: lines.into_iter(),
            page_size,
        }
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Lines not yet handed out.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Iterator for LookaheadCursor {
    type Item = Vec<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<Line> = self.lines.by_ref().take(self.page_size).collect();
        (!page.is_empty()).then_some(page)
    }
}
