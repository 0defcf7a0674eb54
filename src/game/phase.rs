use crate::game::TeamId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Roll,
    Move,
    Finished(TeamId),
}

/// Countdown started by a roll. Input stays locked while frames remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollAnimation {
    remaining: u32,
}

impl RollAnimation {
    pub fn new(frames: u32) -> Self {
        RollAnimation { remaining: frames }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Advances one frame. Returns `true` once the countdown has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_done()
    }
}
