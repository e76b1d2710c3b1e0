//! Agent State Machine
//!
//! One agent per occupied cell. The skepticism tier is fixed at creation;
//! everything else is the mutable diffusion state: the belief accumulator,
//! the pending-rumor flag, the announced flag, and the cooldown timer.

use serde::{Deserialize, Serialize};

/// Skepticism tier, fixed per agent for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Believes everything it hears.
    One,
    Two,
    Three,
    /// Never re-broadcasts on its own conviction.
    Four,
}

impl Tier {
    /// All tiers, in bucketing order.
    pub const ALL: [Tier; 4] = [Tier::One, Tier::Two, Tier::Three, Tier::Four];

    /// Suspicion coefficient added to a listener's belief per heard rumor.
    /// The exact rational values matter: threshold checks downstream compare
    /// against accumulations of these.
    pub fn coefficient(self) -> f64 {
        match self {
            Tier::One => 1.0,
            Tier::Two => 2.0 / 3.0,
            Tier::Three => 1.0 / 3.0,
            Tier::Four => 0.0,
        }
    }

    /// 1-based tier number, as reported in snapshots.
    pub fn number(self) -> u8 {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
            Tier::Four => 4,
        }
    }

    /// 0-based index into per-tier membership lists.
    pub fn index(self) -> usize {
        self.number() as usize - 1
    }
}

/// Per-cell state machine. Created during seeding, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    /// Fixed lattice position.
    pub row: usize,
    pub col: usize,
    /// Skepticism tier; immutable after creation.
    pub tier: Tier,
    /// The tier's coefficient, cached at creation.
    pub suspicion: f64,
    /// Simulation-wide cooldown length L.
    pub cooldown_len: u32,
    /// Accumulated belief in [0, 1]; drives the broadcast probability.
    pub belief: f64,
    /// Holds an unconsumed incoming rumor pending this tick's decision.
    pub heard: bool,
    /// In the post-broadcast announced state.
    pub announced: bool,
    /// Remaining silent ticks after a broadcast.
    pub cooldown: u32,
    /// Sticky: set on the first broadcast, never cleared. Feeds the
    /// outcome tracker's reach count.
    pub has_broadcast: bool,
}

impl Agent {
    pub fn new(row: usize, col: usize, tier: Tier, cooldown_len: u32) -> Self {
        Self {
            row,
            col,
            tier,
            suspicion: tier.coefficient(),
            cooldown_len,
            belief: 0.0,
            heard: false,
            announced: false,
            cooldown: 0,
            has_broadcast: false,
        }
    }

    pub fn location(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Mark this agent as an initial spreader: full conviction, rumor
    /// pending. It announces on its first tick like any other activation.
    pub fn make_spreader(&mut self) {
        self.belief = 1.0;
        self.heard = true;
    }

    /// A neighbor's broadcast reaches this agent. Belief grows by the
    /// *receiver's* own coefficient, clipped to 1 - growth is intrinsic to
    /// the listener's skepticism, not the broadcaster's conviction.
    pub fn receive_rumor(&mut self) {
        self.heard = true;
        self.belief = (self.belief + self.suspicion).min(1.0);
    }
}
