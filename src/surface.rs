//! Render target abstraction for the carousel.
//!
//! The state machine never touches a page directly; it issues slot-addressed
//! styling writes through [`Surface`]. The binary plugs in [`LogSurface`],
//! tests plug in [`RecordingSurface`].

use std::time::Duration;

use tracing::{debug, info};

/// Easing applied to an animated translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    EaseInOut,
}

/// A timed, eased transform transition. `None` at the call site means the
/// write takes effect instantly (a silent reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub const fn ease_in_out(duration: Duration) -> Self {
        Self {
            duration,
            easing: Easing::EaseInOut,
        }
    }
}

/// Slot-addressed styling writes. Slots index the extended track, clones
/// included, in order.
pub trait Surface {
    fn set_transition(&mut self, slot: usize, transition: Option<Transition>);
    fn set_translation(&mut self, slot: usize, offset_percent: f64);
    fn clear_active(&mut self, slot: usize);
    fn mark_active(&mut self, slot: usize);
}

/// One recorded styling write.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Transition {
        slot: usize,
        transition: Option<Transition>,
    },
    Translation {
        slot: usize,
        offset_percent: f64,
    },
    ClearActive {
        slot: usize,
    },
    MarkActive {
        slot: usize,
    },
}

/// Surface that records every write for later inspection.
///
/// Exposed for integration tests to assert on the exact render sequence
/// without a real rendering target.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full op log, in call order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Writes issued after the first `len` recorded ops.
    pub fn ops_since(&self, len: usize) -> &[SurfaceOp] {
        &self.ops[len..]
    }

    /// Latest translation written to `slot`, if any.
    pub fn translation_of(&self, slot: usize) -> Option<f64> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Translation {
                slot: s,
                offset_percent,
            } if *s == slot => Some(*offset_percent),
            _ => None,
        })
    }

    /// Latest transition written to `slot`: `None` if never written,
    /// `Some(None)` if last cleared.
    pub fn transition_of(&self, slot: usize) -> Option<Option<Transition>> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Transition {
                slot: s,
                transition,
            } if *s == slot => Some(*transition),
            _ => None,
        })
    }

    /// Slots currently carrying the active designation, replayed from the log.
    pub fn active_slots(&self) -> Vec<usize> {
        let max_slot = self.ops.iter().map(Self::op_slot).max();
        let Some(max_slot) = max_slot else {
            return Vec::new();
        };
        let mut active = vec![false; max_slot + 1];
        for op in &self.ops {
            match op {
                SurfaceOp::ClearActive { slot } => active[*slot] = false,
                SurfaceOp::MarkActive { slot } => active[*slot] = true,
                _ => {}
            }
        }
        active
            .iter()
            .enumerate()
            .filter_map(|(slot, on)| on.then_some(slot))
            .collect()
    }

    fn op_slot(op: &SurfaceOp) -> usize {
        match op {
            SurfaceOp::Transition { slot, .. }
            | SurfaceOp::Translation { slot, .. }
            | SurfaceOp::ClearActive { slot }
            | SurfaceOp::MarkActive { slot } => *slot,
        }
    }
}

impl Surface for RecordingSurface {
    fn set_transition(&mut self, slot: usize, transition: Option<Transition>) {
        self.ops.push(SurfaceOp::Transition { slot, transition });
    }

    fn set_translation(&mut self, slot: usize, offset_percent: f64) {
        self.ops.push(SurfaceOp::Translation {
            slot,
            offset_percent,
        });
    }

    fn clear_active(&mut self, slot: usize) {
        self.ops.push(SurfaceOp::ClearActive { slot });
    }

    fn mark_active(&mut self, slot: usize) {
        self.ops.push(SurfaceOp::MarkActive { slot });
    }
}

/// Surface that reports writes through `tracing` instead of drawing.
#[derive(Debug)]
pub struct LogSurface {
    labels: Vec<String>,
}

impl LogSurface {
    /// `labels` must cover the extended track, one per slot.
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    fn label(&self, slot: usize) -> &str {
        self.labels.get(slot).map_or("?", String::as_str)
    }
}

impl Surface for LogSurface {
    fn set_transition(&mut self, slot: usize, transition: Option<Transition>) {
        debug!(slot, ?transition, "transition");
    }

    fn set_translation(&mut self, slot: usize, offset_percent: f64) {
        debug!(slot, offset_percent, "translate");
    }

    fn clear_active(&mut self, slot: usize) {
        debug!(slot, "clear active");
    }

    fn mark_active(&mut self, slot: usize) {
        info!(slot, slide = %self.label(slot), "active slide");
    }
}
