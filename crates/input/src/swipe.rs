//! Mouse-drag swipe detection.
//!
//! A gesture starts on a left-button press and resolves on release. The
//! displacement along the dominant axis must strictly exceed the configured
//! minimum for the gesture to count as a swipe; shorter gestures are taps.

use crate::types::{Direction, DEFAULT_MIN_SWIPE};

/// Terminal rows are roughly twice as tall as columns are wide.
const ROW_ASPECT: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Release without a matching press.
    None,
    Tap { column: u16, row: u16 },
    Swipe(Direction),
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    min_distance: u16,
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new(min_distance: u16) -> Self {
        Self {
            min_distance,
            start: None,
        }
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn release(&mut self, column: u16, row: u16) -> Gesture {
        let Some((start_col, start_row)) = self.start.take() else {
            return Gesture::None;
        };

        let dx = column as i32 - start_col as i32;
        let dy = row as i32 - start_row as i32;
        let min = self.min_distance as i32;

        // Compare axes in column units; the threshold applies to the raw distance.
        if dx.abs() > dy.abs() * ROW_ASPECT {
            if dx.abs() > min {
                return Gesture::Swipe(if dx > 0 {
                    Direction::Right
                } else {
                    Direction::Left
                });
            }
        } else if dy.abs() > min {
            return Gesture::Swipe(if dy > 0 {
                Direction::Down
            } else {
                Direction::Up
            });
        }

        Gesture::Tap { column, row }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SWIPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(from: (u16, u16), to: (u16, u16)) -> Gesture {
        let mut tracker = SwipeTracker::new(3);
        tracker.press(from.0, from.1);
        tracker.release(to.0, to.1)
    }

    #[test]
    fn horizontal_swipes() {
        assert_eq!(gesture((10, 10), (20, 10)), Gesture::Swipe(Direction::Right));
        assert_eq!(gesture((20, 10), (10, 11)), Gesture::Swipe(Direction::Left));
    }

    #[test]
    fn vertical_swipes() {
        assert_eq!(gesture((10, 2), (10, 8)), Gesture::Swipe(Direction::Down));
        assert_eq!(gesture((10, 8), (11, 2)), Gesture::Swipe(Direction::Up));
    }

    #[test]
    fn distance_must_exceed_threshold() {
        assert_eq!(
            gesture((10, 10), (13, 10)),
            Gesture::Tap { column: 13, row: 10 }
        );
        assert_eq!(gesture((10, 10), (14, 10)), Gesture::Swipe(Direction::Right));
        assert_eq!(
            gesture((10, 10), (10, 13)),
            Gesture::Tap { column: 10, row: 13 }
        );
    }

    #[test]
    fn rows_weigh_double_when_picking_the_axis() {
        // 6 columns vs 4 rows: rows win once scaled.
        assert_eq!(gesture((10, 10), (16, 14)), Gesture::Swipe(Direction::Down));
        // 9 columns vs 4 rows: columns win.
        assert_eq!(gesture((10, 10), (19, 14)), Gesture::Swipe(Direction::Right));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.release(5, 5), Gesture::None);

        tracker.press(1, 1);
        tracker.cancel();
        assert_eq!(tracker.release(30, 1), Gesture::None);
    }

    #[test]
    fn press_is_consumed_by_release() {
        let mut tracker = SwipeTracker::new(3);
        tracker.press(0, 0);
        assert_eq!(tracker.release(10, 0), Gesture::Swipe(Direction::Right));
        assert_eq!(tracker.release(20, 0), Gesture::None);
    }
}
