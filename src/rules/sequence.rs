//! Sequence detection along the four board axes
//!
//! Two views of the same stones are provided:
//! - [`detect_rows`] slides a fixed-length window over the board, so a run of
//!   seven stones satisfies a length-5 query at three offsets. This is what
//!   win and threat checks use.
//! - [`maximal_runs`] reports each run once with its real length. Scoring and
//!   the open/semi-open tallies ([`count_rows`], [`count_line`]) build on it.

use crate::board::{Board, Direction, Pos, Stone};

use super::boundary::{classify, Boundary};

/// A run of same-colored stones along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceRecord {
    /// First stone (lowest step along `direction`)
    pub start: Pos,
    pub direction: Direction,
    /// Number of stones
    pub length: usize,
    pub boundary: Boundary,
}

impl SequenceRecord {
    /// Last stone of the sequence
    pub fn end(&self) -> Pos {
        let (dr, dc) = self.direction.delta();
        let (r, c) = self.start.offset_signed(dr, dc, self.length as i64 - 1);
        Pos::new(r as usize, c as usize)
    }
}

/// Number of open and semi-open runs found by a tally. Closed runs are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowCounts {
    pub open: usize,
    pub semi_open: usize,
}

impl RowCounts {
    #[inline]
    pub fn new(open: usize, semi_open: usize) -> Self {
        Self { open, semi_open }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.open + self.semi_open
    }

    #[inline]
    fn record(&mut self, boundary: Boundary) {
        match boundary {
            Boundary::Open => self.open += 1,
            Boundary::SemiOpen => self.semi_open += 1,
            Boundary::Closed => {}
        }
    }
}

/// Check whether the `length` cells from `start` along `(dr, dc)` are all on
/// the board and all `color`.
///
/// This is an exact window test: it says nothing about the cells on either
/// side, so a longer run still matches at every offset.
pub fn detect_row(
    board: &Board,
    color: Stone,
    start: Pos,
    length: usize,
    dr: i32,
    dc: i32,
) -> bool {
    if length == 0 || color == Stone::Empty {
        return false;
    }
    if (dr, dc) == (0, 0) {
        return board.get(start) == color;
    }
    let size = board.size();
    (0i64..).take(length).all(|step| {
        start
            .offset(dr, dc, step, size)
            .is_some_and(|p| board.get(p) == color)
    })
}

/// Every window of `length` stones of `color`, over every start cell
/// (row-major) and every axis in [`Direction::ALL`] order.
pub fn detect_rows(board: &Board, color: Stone, length: usize) -> Vec<SequenceRecord> {
    let mut found = Vec::new();
    let Some(stones) = board.stones(color) else {
        return found;
    };
    if length == 0 || length > board.size() {
        return found;
    }
    let size = board.size();

    for start in stones.iter_ones(size) {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            if !detect_row(board, color, start, length, dr, dc) {
                continue;
            }
            let before = start.offset(dr, dc, -1, size);
            let after = start.offset(dr, dc, length as i64, size);
            found.push(SequenceRecord {
                start,
                direction,
                length,
                boundary: classify(board, before, after),
            });
        }
    }
    found
}

/// Each maximal run of at least `min_length` stones of `color`, once.
///
/// A stone only starts a run if the cell behind it (along the axis) is not
/// the same color, so no run is counted twice.
pub fn maximal_runs(board: &Board, color: Stone, min_length: usize) -> Vec<SequenceRecord> {
    let mut runs = Vec::new();
    let Some(stones) = board.stones(color) else {
        return runs;
    };
    let size = board.size();
    let min_length = min_length.max(1);

    for start in stones.iter_ones(size) {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            let before = start.offset(dr, dc, -1, size);
            if before.is_some_and(|p| board.get(p) == color) {
                continue; // Not the start of this run
            }

            let mut length = 1i64;
            while start
                .offset(dr, dc, length, size)
                .is_some_and(|p| board.get(p) == color)
            {
                length += 1;
            }

            let length = length as usize;
            if length >= min_length {
                let after = start.offset(dr, dc, length as i64, size);
                runs.push(SequenceRecord {
                    start,
                    direction,
                    length,
                    boundary: classify(board, before, after),
                });
            }
        }
    }
    runs
}

/// Tally runs of exactly `length` stones of `color` on the segment of the
/// line that starts at `start` and runs along `(dr, dc)` to the board edge.
///
/// Run ends are classified against the whole board, so a run cut by `start`
/// sees its same-colored predecessor as a blocker.
pub fn count_line(
    board: &Board,
    color: Stone,
    start: Pos,
    length: usize,
    dr: i32,
    dc: i32,
) -> RowCounts {
    let mut counts = RowCounts::default();
    if length == 0 || color == Stone::Empty || (dr, dc) == (0, 0) {
        return counts;
    }
    let size = board.size();
    let at = |step: i64| start.offset(dr, dc, step, size);

    let mut step = 0i64;
    while let Some(pos) = at(step) {
        if board.get(pos) != color {
            step += 1;
            continue;
        }
        let run_start = step;
        while at(step).is_some_and(|p| board.get(p) == color) {
            step += 1;
        }
        if (step - run_start) as usize == length {
            counts.record(classify(board, at(run_start - 1), at(step)));
        }
    }
    counts
}

/// Tally open and semi-open runs of exactly `length` stones of `color` on the
/// whole board. Longer runs do not count toward shorter lengths.
pub fn count_rows(board: &Board, color: Stone, length: usize) -> RowCounts {
    let mut counts = RowCounts::default();
    for run in maximal_runs(board, color, length) {
        if run.length == length {
            counts.record(run.boundary);
        }
    }
    counts
}
