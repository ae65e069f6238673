//! Hotel-wide search for the room set with the lowest travel time.
//!
//! Candidates are the available rooms ascending by id. Subsets are visited in
//! canonical order: every subset containing the first remaining room comes
//! before every subset without it, recursively. A subset replaces the best one
//! only on strictly lower cost, so among equal-cost subsets the earliest wins.
//!
//! A partial subset whose span already costs at least the best found is
//! abandoned. Adding rooms never shrinks a span, so nothing it could complete
//! to would win, and the result matches the full enumeration.

use tracing::debug;

use crate::booking::layout::RoomId;
use crate::booking::travel_time::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub rooms: Vec<RoomId>,
    pub travel_time: u32,
}

/// Counters from one search, for diagnostics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    pub evaluated: u64,
    pub pruned: u64,
}

/// Cheapest `required`-room subset of `candidates`, or `None` when fewer than
/// `required` candidates exist. `candidates` must be ascending by id.
pub fn cheapest_combination(required: usize, candidates: &[RoomId]) -> Option<Combination> {
    search(required, candidates).0
}

pub fn search(required: usize, candidates: &[RoomId]) -> (Option<Combination>, SearchStats) {
    if required == 0 || candidates.len() < required {
        return (None, SearchStats::default());
    }

    let mut search = Search {
        candidates,
        required,
        chosen: Vec::with_capacity(required),
        best: None,
        stats: SearchStats::default(),
    };
    search.visit(0, None);

    debug!(
        "Hotel-wide search over {} candidates for {}: {} evaluated, {} pruned",
        candidates.len(),
        required,
        search.stats.evaluated,
        search.stats.pruned
    );

    (search.best, search.stats)
}

struct Search<'a> {
    candidates: &'a [RoomId],
    required: usize,
    chosen: Vec<RoomId>,
    best: Option<Combination>,
    stats: SearchStats,
}

impl Search<'_> {
    fn visit(&mut self, start: usize, span: Option<Span>) {
        if self.chosen.len() == self.required {
            let cost = span.map_or(0, |s| s.cost());
            self.stats.evaluated += 1;
            if self.best.as_ref().map_or(true, |best| cost < best.travel_time) {
                self.best = Some(Combination {
                    rooms: self.chosen.clone(),
                    travel_time: cost,
                });
            }
            return;
        }

        let needed = self.required - self.chosen.len();
        let last_start = self.candidates.len() - needed;
        for index in start..=last_start {
            let room = self.candidates[index];
            let next = span.map_or_else(|| Span::of(room), |s| s.extend(room));
            if let Some(best) = &self.best {
                if next.cost() >= best.travel_time {
                    self.stats.pruned += 1;
                    continue;
                }
            }
            self.chosen.push(room);
            self.visit(index + 1, Some(next));
            self.chosen.pop();
        }
    }
}
