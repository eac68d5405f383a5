//! Input snapshot
//!
//! Polls macroquad once per frame and exposes the result to entities as a
//! one-frame-lived snapshot on the engine context. The snapshot is built
//! before the pass and cleared at the end of it, so no input survives a
//! frame.

use macroquad::prelude::*;

/// A movement direction in screen space (north is -y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step in screen coordinates.
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::North => vec2(0.0, -1.0),
            Direction::East => vec2(1.0, 0.0),
            Direction::South => vec2(0.0, 1.0),
            Direction::West => vec2(-1.0, 0.0),
        }
    }

    fn keys(self) -> [KeyCode; 2] {
        match self {
            Direction::North => [KeyCode::Up, KeyCode::W],
            Direction::East => [KeyCode::Right, KeyCode::D],
            Direction::South => [KeyCode::Down, KeyCode::S],
            Direction::West => [KeyCode::Left, KeyCode::A],
        }
    }
}

/// Per-frame input snapshot handed to entities through the context.
///
/// At most one direction is active per frame; the `Option` makes the
/// exclusivity structural rather than a convention over four booleans.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Position of a left click this frame, if any.
    pub click: Option<Vec2>,
    /// Current pointer position.
    pub mouse: Vec2,
    /// Vertical wheel movement this frame.
    pub wheel: f32,
    /// Requested run-mode transitions (Enter starts, Escape stops).
    pub start_requested: bool,
    pub stop_requested: bool,
    direction: Option<Direction>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this frame's snapshot from macroquad. Call once per frame,
    /// before the engine pass.
    pub fn poll(&mut self) {
        let (mx, my) = mouse_position();
        self.mouse = vec2(mx, my);
        self.click = is_mouse_button_pressed(MouseButton::Left).then_some(self.mouse);
        self.wheel = mouse_wheel().1;
        self.start_requested = is_key_pressed(KeyCode::Enter);
        self.stop_requested = is_key_pressed(KeyCode::Escape);

        // A key pressed this frame wins over one that is merely held, so
        // tapping a new arrow while holding another changes course.
        self.direction = None;
        for dir in Direction::ALL {
            if dir.keys().iter().any(|&k| is_key_down(k)) {
                self.set_direction(dir);
            }
        }
        for dir in Direction::ALL {
            if dir.keys().iter().any(|&k| is_key_pressed(k)) {
                self.set_direction(dir);
            }
        }
    }

    /// Record a direction, replacing any earlier one (last wins).
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    /// The active direction, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Consume the active direction so it is not reapplied this frame.
    pub fn take_direction(&mut self) -> Option<Direction> {
        self.direction.take()
    }

    /// Drop the whole snapshot. Called by the engine at end of pass.
    pub fn clear(&mut self) {
        *self = Self {
            mouse: self.mouse,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_direction_wins() {
        let mut input = InputFrame::new();
        input.set_direction(Direction::North);
        input.set_direction(Direction::East);
        assert_eq!(input.direction(), Some(Direction::East));
    }

    #[test]
    fn test_take_direction_consumes() {
        let mut input = InputFrame::new();
        input.set_direction(Direction::South);
        assert_eq!(input.take_direction(), Some(Direction::South));
        assert_eq!(input.direction(), None);
    }

    #[test]
    fn test_clear_drops_frame_state() {
        let mut input = InputFrame::new();
        input.set_direction(Direction::West);
        input.click = Some(vec2(3.0, 4.0));
        input.wheel = 1.0;
        input.start_requested = true;
        input.clear();
        assert_eq!(input.direction(), None);
        assert!(input.click.is_none());
        assert_eq!(input.wheel, 0.0);
        assert!(!input.start_requested);
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        assert_eq!(Direction::North.delta(), vec2(0.0, -1.0));
        assert_eq!(Direction::South.delta(), vec2(0.0, 1.0));
        assert_eq!(Direction::East.delta(), vec2(1.0, 0.0));
        assert_eq!(Direction::West.delta(), vec2(-1.0, 0.0));
    }
}
