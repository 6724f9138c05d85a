//! Experience points and levels

use serde::Serialize;

pub const XP_PER_REP: u32 = 10;
pub const FORM_BONUS_PER_REP: u32 = 5;
/// Form accuracy that earns the per-rep bonus
pub const FORM_BONUS_THRESHOLD: f32 = 90.0;
pub const XP_PER_LEVEL: u32 = 200;

/// XP earned by one session
pub fn xp_for_session(reps: u32, form_accuracy: f32) -> u32 {
    let bonus = if form_accuracy >= FORM_BONUS_THRESHOLD {
        reps * FORM_BONUS_PER_REP
    } else {
        0
    };
    reps * XP_PER_REP + bonus
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub xp: u32,
    pub level: u32,
    /// Fraction of the way to the next level, [0, 1)
    pub progress: f32,
}

pub fn level_for(xp: u32) -> LevelProgress {
    LevelProgress {
        xp,
        level: xp / XP_PER_LEVEL + 1,
        progress: (xp % XP_PER_LEVEL) as f32 / XP_PER_LEVEL as f32,
    }
}

/// Running XP total across sessions
#[derive(Clone, Debug, Default)]
pub struct Progression {
    total_xp: u32,
    sessions: u32,
}

impl Progression {
    pub fn new(total_xp: u32) -> Self {
        Self {
            total_xp,
            sessions: 0,
        }
    }

    pub fn current(&self) -> LevelProgress {
        level_for(self.total_xp)
    }

    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Bank a session's XP and return the new standing
    pub fn add_session(&mut self, xp: u32) -> LevelProgress {
        let before = self.current().level;
        self.total_xp = self.total_xp.saturating_add(xp);
        self.sessions += 1;
        let after = self.current();
        if after.level > before {
            log::info!("level up: {} -> {}", before, after.level);
        }
        after
    }
}
