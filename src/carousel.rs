//! Infinite-loop carousel over a fixed slide deck.
//!
//! The track holds the deck plus one cloned sentinel at each end:
//! `[clone(last), slide 1, .., slide N, clone(first)]`. Animated advances walk
//! the cursor across the seam onto a clone; the tick after that snaps the
//! cursor back into the real range without a transition, which is invisible
//! because the clone is identical to the slide it stands in for.

use std::time::Duration;

use crate::config::Slide;
use crate::error::Error;
use crate::surface::{Surface, Transition};

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Cursor moved forward one slot with an animated transition.
    Stepped { cursor: usize },
    /// Cursor was past the trailing clone and snapped back to the first
    /// real slide without animation.
    Wrapped,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    track: Vec<Slide>,
    slide_count: usize,
    cursor: usize,
    transition: Duration,
}

impl Carousel {
    /// Build the extended track from a deck of N slides.
    ///
    /// The cursor starts at 1 (the first real slide; slot 0 is the prepended
    /// clone) regardless of the caller's notion of "first".
    ///
    /// # Errors
    /// Returns [`Error::EmptyTrack`] for an empty deck. Callers treat that as
    /// "carousel disabled", not as a fault.
    pub fn from_slides(slides: &[Slide], transition: Duration) -> Result<Self, Error> {
        let Some((first, last)) = slides.first().zip(slides.last()) else {
            return Err(Error::EmptyTrack);
        };
        let mut track = Vec::with_capacity(slides.len() + 2);
        track.push(last.clone());
        track.extend(slides.iter().cloned());
        track.push(first.clone());
        Ok(Self {
            track,
            slide_count: slides.len(),
            cursor: 1,
            transition,
        })
    }

    /// Number of real slides (N).
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Number of slots in the extended track (N + 2).
    #[must_use]
    pub const fn track_len(&self) -> usize {
        self.track.len()
    }

    /// Current cursor position into the extended track, in `[0, N + 1]`.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Labels of the extended track, one per slot, clones included.
    #[must_use]
    pub fn track_labels(&self) -> Vec<String> {
        self.track.iter().map(|s| s.label.clone()).collect()
    }

    /// Slot that carries the active designation for the current cursor.
    ///
    /// Clone positions map back onto the real range `[1, N]`: the trailing
    /// clone stands for the first slide, the leading clone for the last.
    #[must_use]
    pub const fn active_slot(&self) -> usize {
        if self.cursor == self.slide_count + 1 {
            1
        } else if self.cursor == 0 {
            self.slide_count
        } else {
            self.cursor
        }
    }

    /// First render after construction: no transition, so the page does not
    /// flash an animation on load.
    pub fn initial_render<S: Surface>(&self, surface: &mut S) {
        self.render(surface, false);
    }

    /// Advance one tick and render the outcome.
    pub fn advance<S: Surface>(&mut self, surface: &mut S) -> Advance {
        if self.cursor == self.slide_count + 1 {
            self.cursor = 1;
            self.render(surface, false);
            Advance::Wrapped
        } else {
            self.cursor += 1;
            self.render(surface, true);
            Advance::Stepped {
                cursor: self.cursor,
            }
        }
    }

    /// Write the full styling state for the current cursor to `surface`.
    ///
    /// Every slot gets the same transition mode and the same translation;
    /// the active designation is cleared everywhere and then set on exactly
    /// one slot.
    pub fn render<S: Surface>(&self, surface: &mut S, animated: bool) {
        let transition = animated.then(|| Transition::ease_in_out(self.transition));
        for slot in 0..self.track.len() {
            surface.set_transition(slot, transition);
        }
        let offset_percent = (self.cursor as f64 - 1.0) * -100.0;
        for slot in 0..self.track.len() {
            surface.set_translation(slot, offset_percent);
        }
        for slot in 0..self.track.len() {
            surface.clear_active(slot);
        }
        surface.mark_active(self.active_slot());
    }
}
