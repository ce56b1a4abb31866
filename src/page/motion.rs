//! Scroll easing and scroll-triggered animations
//!
//! The page scrolls smoothly instead of jumping, sections fade in the first
//! time they enter the viewport, skill bars grow once their section is mostly
//! visible, hero decorations drift with the scroll offset, and the advance
//! control flashes briefly when pressed. All of it is driven by the tick
//! clock; nothing here spawns timers of its own.

use std::time::{Duration, Instant};

/// How long a section's fade-in takes once triggered.
pub const REVEAL_DURATION: Duration = Duration::from_millis(800);
/// Rows of a section that must be visible before its reveal triggers.
pub const REVEAL_LEAD_ROWS: u16 = 2;
/// Pause before skill bars start growing, once their section is in view.
pub const SKILL_START_DELAY: Duration = Duration::from_millis(100);
/// How long skill bars take to reach their configured level.
pub const SKILL_GROW_DURATION: Duration = Duration::from_millis(1500);
/// Fraction of the skills section that must be visible to start the bars.
pub const SKILL_VISIBLE_RATIO: f32 = 0.7;
/// How long the advance control stays highlighted after activation.
pub const PRESS_FLASH_DURATION: Duration = Duration::from_millis(600);
/// Scrolled past this many rows, the nav bar switches to its solid style.
pub const NAV_EMPHASIS_ROWS: f32 = 3.0;

/// Eases the scroll offset toward a target a fraction at a time.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    current: f32,
    target: f32,
}

impl SmoothScroll {
    /// Fraction of the remaining distance covered per tick.
    const EASE: f32 = 0.3;
    /// Close enough to snap.
    const SNAP: f32 = 0.5;

    pub fn new() -> Self {
        Self {
            current: 0.0,
            target: 0.0,
        }
    }

    /// Current offset in whole rows, for rendering.
    pub fn offset_rows(&self) -> u16 {
        self.current.max(0.0).round() as u16
    }

    pub fn offset(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Glide toward `target` over the next ticks.
    pub fn scroll_to(&mut self, target: f32) {
        self.target = target.max(0.0);
    }

    /// Nudge the target by `delta` rows, clamped to `max`.
    pub fn scroll_by(&mut self, delta: f32, max: f32) {
        self.target = (self.target + delta).clamp(0.0, max.max(0.0));
    }

    /// Clamp both ends; used when the page shrinks under the viewport.
    pub fn clamp_to(&mut self, max: f32) {
        let max = max.max(0.0);
        self.target = self.target.min(max);
        self.current = self.current.min(max);
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.current).abs() < Self::SNAP
    }

    /// One easing step.
    pub fn tick(&mut self) {
        let distance = self.target - self.current;
        if distance.abs() < Self::SNAP {
            self.current = self.target;
        } else {
            self.current += distance * Self::EASE;
        }
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot fade-in for a section entering the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Revealing {
        since: Instant,
    },
    Shown,
}

impl Reveal {
    /// Start the fade. Does nothing once triggered; sections never hide again.
    pub fn trigger(&mut self, now: Instant) {
        if matches!(self, Reveal::Hidden) {
            *self = Reveal::Revealing { since: now };
        }
    }

    /// Promote a finished fade so progress stops consulting the clock.
    pub fn tick(&mut self, now: Instant) {
        if let Reveal::Revealing { since } = *self {
            if now.saturating_duration_since(since) >= REVEAL_DURATION {
                *self = Reveal::Shown;
            }
        }
    }

    /// Fade progress, 0.0 (hidden) to 1.0 (fully shown).
    pub fn progress(&self, now: Instant) -> f32 {
        match *self {
            Reveal::Hidden => 0.0,
            Reveal::Shown => 1.0,
            Reveal::Revealing { since } => {
                let elapsed = now.saturating_duration_since(since);
                (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).min(1.0)
            }
        }
    }
}

/// Grows the skill bars from zero once the skills section is seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillAnimation {
    started: Option<Instant>,
}

impl SkillAnimation {
    /// Arm the animation; bars start growing after a short delay. One-shot.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now + SKILL_START_DELAY);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Growth progress, 0.0 to 1.0.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started {
            None => 0.0,
            Some(start) => {
                if now < start {
                    0.0
                } else {
                    let elapsed = now.saturating_duration_since(start);
                    (elapsed.as_secs_f32() / SKILL_GROW_DURATION.as_secs_f32()).min(1.0)
                }
            }
        }
    }

    /// The bar level to draw right now for a configured `level`.
    pub fn level_now(&self, now: Instant, level: u8) -> u8 {
        (f32::from(level) * self.progress(now)).round() as u8
    }
}

/// Brief highlight on the advance control after activation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressFlash {
    until: Option<Instant>,
}

impl PressFlash {
    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + PRESS_FLASH_DURATION);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        matches!(self.until, Some(until) if now < until)
    }
}

/// Horizontal drift of a hero decoration at `index` for a scroll offset.
///
/// Deeper cards drift faster, which reads as depth when the page scrolls.
pub fn parallax_shift(scroll_rows: f32, index: usize) -> u16 {
    let speed = 0.5 + index as f32 * 0.1;
    (scroll_rows * speed).round().max(0.0) as u16
}
