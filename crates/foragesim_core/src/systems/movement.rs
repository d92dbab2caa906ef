//! Movement integration from a gated action vector.

use foragesim_data::{Action, Agent, Position};

/// Wraps any angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_heading(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Boolean view of an [`Action`]. Gates are independent and may all fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementGates {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl MovementGates {
    #[must_use]
    pub fn from_action(action: &Action, threshold: f64) -> Self {
        Self {
            forward: action.forward > threshold,
            backward: action.backward > threshold,
            turn_left: action.turn_left > threshold,
            turn_right: action.turn_right > threshold,
        }
    }
}

pub struct MovementContext<'a> {
    pub position: &'a mut Position,
    pub heading: &'a mut f64,
    pub speed: f64,
    pub rotation_speed: f64,
}

/// Unit displacement for a heading: `(cos h, -sin h)`.
#[must_use]
pub fn heading_vector(heading: f64) -> (f64, f64) {
    let rad = heading.to_radians();
    (rad.cos(), -rad.sin())
}

pub fn handle_movement_components(ctx: MovementContext, gates: MovementGates) {
    if gates.turn_left {
        *ctx.heading += ctx.rotation_speed;
    }
    if gates.turn_right {
        *ctx.heading -= ctx.rotation_speed;
    }
    *ctx.heading = normalize_heading(*ctx.heading);

    let (dx, dy) = heading_vector(*ctx.heading);
    if gates.forward {
        ctx.position.x += ctx.speed * dx;
        ctx.position.y += ctx.speed * dy;
    }
    if gates.backward {
        ctx.position.x -= ctx.speed * dx;
        ctx.position.y -= ctx.speed * dy;
    }
}

/// Turns and translates `agent` for one tick.
pub fn movement_system(agent: &mut Agent, action: &Action, threshold: f64) {
    let gates = MovementGates::from_action(action, threshold);
    handle_movement_components(
        MovementContext {
            position: &mut agent.position,
            heading: &mut agent.heading,
            speed: agent.speed,
            rotation_speed: agent.rotation_speed,
        },
        gates,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(position: &mut Position, heading: &mut f64, action: Action) {
        handle_movement_components(
            MovementContext {
                position,
                heading,
                speed: 1.0,
                rotation_speed: 1.0,
            },
            MovementGates::from_action(&action, 0.5),
        );
    }

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-1.0), 359.0);
        assert_eq!(normalize_heading(721.0), 1.0);
        assert!(normalize_heading(-1e-18) < 360.0);
    }

    #[test]
    fn test_gate_threshold_is_strict() {
        let gates = MovementGates::from_action(&Action::new(0.5, 0.51, 1.0, -3.0), 0.5);
        assert!(!gates.forward);
        assert!(gates.backward);
        assert!(gates.turn_left);
        assert!(!gates.turn_right);
    }

    #[test]
    fn test_forward_at_zero_heading_moves_along_x() {
        let mut pos = Position::new(500.0, 500.0);
        let mut heading = 0.0;
        step(&mut pos, &mut heading, Action::FORWARD);
        assert!((pos.x - 501.0).abs() < 1e-12);
        assert!((pos.y - 500.0).abs() < 1e-12);
    }

    #[test]
    fn test_forward_at_ninety_moves_up() {
        let mut pos = Position::new(500.0, 500.0);
        let mut heading = 90.0;
        step(&mut pos, &mut heading, Action::FORWARD);
        assert!((pos.x - 500.0).abs() < 1e-9);
        assert!((pos.y - 499.0).abs() < 1e-9);
    }

    #[test]
    fn test_forward_and_backward_cancel() {
        let mut pos = Position::new(10.0, 20.0);
        let mut heading = 33.0;
        step(&mut pos, &mut heading, Action::new(1.0, 1.0, 0.0, 0.0));
        assert!((pos.x - 10.0).abs() < 1e-12);
        assert!((pos.y - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_both_turns_cancel() {
        let mut pos = Position::new(0.0, 0.0);
        let mut heading = 0.0;
        step(&mut pos, &mut heading, Action::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(heading, 0.0);
    }

    #[test]
    fn test_turn_right_wraps_below_zero() {
        let mut pos = Position::new(0.0, 0.0);
        let mut heading = 0.0;
        step(&mut pos, &mut heading, Action::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(heading, 359.0);
    }

    #[test]
    fn test_turn_applies_before_translation() {
        let mut pos = Position::new(0.0, 0.0);
        let mut heading = 89.0;
        step(&mut pos, &mut heading, Action::new(1.0, 0.0, 1.0, 0.0));
        assert_eq!(heading, 90.0);
        assert!(pos.x.abs() < 1e-9);
        assert!((pos.y + 1.0).abs() < 1e-9);
    }
}
