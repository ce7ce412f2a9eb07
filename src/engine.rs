// src/engine.rs

// Cascade engine
// ================================================
// One pass per tip direction. A pass visits the occupied positions against
// the tip (right-to-left for a right cascade) and keeps a stack of cluster
// leaders: dominoes already resolved that no later-visited domino has yet
// struck. A new domino pops every leader lying inside its reach and absorbs
// their final reach; it then becomes the top leader itself. Each domino is
// pushed once and popped at most once.
// ================================================

use crate::config::EngineConfig;
use crate::domino::Direction;
use crate::store::DominoLine;
use serde::{Deserialize, Serialize};

// -------------------------------------------------
// Results
// -------------------------------------------------
/// Cascade distance per position, `0` where there is no domino.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CascadeDistances {
    pub right: Vec<u64>,
    pub left: Vec<u64>,
}

impl CascadeDistances {
    pub fn get(&self, direction: Direction) -> &[u64] {
        match direction {
            Direction::Right => &self.right,
            Direction::Left => &self.left,
        }
    }

    pub fn len(&self) -> usize {
        self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.right.is_empty()
    }
}

/// Work counters for one pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PassStats {
    pub examined: u64, // occupied positions visited
    pub pushes: u64,
    pub pops: u64,
    pub max_depth: u64, // deepest leader stack
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CascadeStats {
    pub right: PassStats,
    pub left: PassStats,
}

impl CascadeStats {
    /// Stack operations across both passes.
    pub fn total_operations(&self) -> u64 {
        self.right.pushes + self.right.pops + self.left.pushes + self.left.pops
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CascadeOutcome {
    pub distances: CascadeDistances,
    pub stats: CascadeStats,
}

// -------------------------------------------------
// Single pass
// -------------------------------------------------
#[derive(Clone, Copy, Debug)]
struct Leader {
    position: i64,
    final_reach: i64,
}

/// `true` when `candidate` lies strictly past `reach` in `direction`.
#[inline]
fn beyond(candidate: i64, reach: i64, direction: Direction) -> bool {
    (candidate - reach) * direction.step() > 0
}

/// Cascade distances for every position when each domino is tipped
/// toward `direction`.
pub fn cascade_pass(line: &DominoLine, direction: Direction) -> (Vec<u64>, PassStats) {
    let mut distances = vec![0u64; line.len()];
    let mut stats = PassStats::default();
    let mut leaders: Vec<Leader> = Vec::new();

    for domino in line.store().scan_against(direction) {
        stats.examined += 1;
        let position = i64::from(domino.position());
        let mut reach = domino.reach(direction);

        // abutting counts as touching
        while let Some(top) = leaders.last().copied() {
            if beyond(top.position, reach, direction) {
                break;
            }
            if beyond(top.final_reach, reach, direction) {
                reach = top.final_reach;
            }
            leaders.pop();
            stats.pops += 1;
        }

        leaders.push(Leader {
            position,
            final_reach: reach,
        });
        stats.pushes += 1;
        stats.max_depth = stats.max_depth.max(leaders.len() as u64);

        distances[domino.position() as usize] = (reach - position).unsigned_abs();
    }

    (distances, stats)
}

// -------------------------------------------------
// Engine
// -------------------------------------------------
#[derive(Clone, Copy, Debug, Default)]
pub struct CascadeEngine {
    config: EngineConfig,
}

impl CascadeEngine {
    pub fn new(config: EngineConfig) -> Self {
        CascadeEngine { config }
    }

    /// Both passes over `line`. Never fails for a constructed line.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(length = line.len(), occupied = line.store().len(), parallel = self.config.parallel)
    )]
    pub fn run(&self, line: &DominoLine) -> CascadeOutcome {
        let ((right, right_stats), (left, left_stats)) = if self.config.parallel {
            rayon::join(
                || cascade_pass(line, Direction::Right),
                || cascade_pass(line, Direction::Left),
            )
        } else {
            (
                cascade_pass(line, Direction::Right),
                cascade_pass(line, Direction::Left),
            )
        };

        tracing::debug!(
            right_pushes = right_stats.pushes,
            right_pops = right_stats.pops,
            left_pushes = left_stats.pushes,
            left_pops = left_stats.pops,
            "cascade passes complete"
        );

        CascadeOutcome {
            distances: CascadeDistances { right, left },
            stats: CascadeStats {
                right: right_stats,
                left: left_stats,
            },
        }
    }
}
