// Contact classification and in-place overlap resolution
//
// Each overlapping obstacle is classified by which of the actor's eight
// sample points fall inside it. Mid-edge points win over corners; only one
// resolution is applied per obstacle.

use crate::core::Rect;

use super::body::KinematicBody;
use super::obstacle::Obstacle;

/// Which of the actor's sample points lie inside an obstacle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactPoints {
    pub top_left: bool,
    pub mid_top: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub mid_bottom: bool,
    pub bottom_right: bool,
    pub mid_left: bool,
    pub mid_right: bool,
}

impl ContactPoints {
    /// Test the actor's sample points against the obstacle (inclusive)
    pub fn sample(actor: &Rect, obstacle: &Rect) -> Self {
        Self {
            top_left: obstacle.contains_point(actor.top_left()),
            mid_top: obstacle.contains_point(actor.mid_top()),
            top_right: obstacle.contains_point(actor.top_right()),
            bottom_left: obstacle.contains_point(actor.bottom_left()),
            mid_bottom: obstacle.contains_point(actor.mid_bottom()),
            bottom_right: obstacle.contains_point(actor.bottom_right()),
            mid_left: obstacle.contains_point(actor.mid_left()),
            mid_right: obstacle.contains_point(actor.mid_right()),
        }
    }

    /// Any of the three bottom points is inside the obstacle
    pub fn touches_bottom(&self) -> bool {
        self.bottom_left || self.mid_bottom || self.bottom_right
    }

    /// Pick the single contact to resolve, mid-edges first, then corners
    pub fn classify(&self) -> Option<Contact> {
        if self.mid_right {
            Some(Contact::Right)
        } else if self.mid_left {
            Some(Contact::Left)
        } else if self.mid_top {
            Some(Contact::Top)
        } else if self.mid_bottom {
            Some(Contact::Bottom)
        } else if self.bottom_right {
            Some(Contact::Corner(Corner::BottomRight))
        } else if self.bottom_left {
            Some(Contact::Corner(Corner::BottomLeft))
        } else if self.top_right {
            Some(Contact::Corner(Corner::TopRight))
        } else if self.top_left {
            Some(Contact::Corner(Corner::TopLeft))
        } else {
            None
        }
    }
}

/// Classified contact between the actor and one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Actor's right side ran into the obstacle
    Right,
    /// Actor's left side ran into the obstacle
    Left,
    /// Actor hit the obstacle from below
    Top,
    /// Actor landed on the obstacle
    Bottom,
    /// Only a corner is inside; direction of travel decides the axis
    Corner(Corner),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

/// Resolve the body against every overlapping obstacle, in order
///
/// Returns true when any overlapping obstacle contains one of the body's
/// bottom sample points, i.e. the body is standing on something.
pub fn resolve_contacts(body: &mut KinematicBody, obstacles: &[Obstacle]) -> bool {
    // Broad phase runs against the integrated position, before any correction
    let hits: Vec<&Obstacle> = obstacles
        .iter()
        .filter(|obstacle| body.rect.intersects(&obstacle.rect))
        .collect();

    let mut grounded = false;
    for obstacle in hits {
        let points = ContactPoints::sample(&body.rect, &obstacle.rect);
        if points.touches_bottom() {
            grounded = true;
        }

        match points.classify() {
            Some(contact) => resolve(contact, body, obstacle),
            None => log::trace!("overlap with {:?} matched no sample point", obstacle.rect),
        }
    }

    grounded
}

/// Apply the landing rule for a bottom-type contact
///
/// Bouncy obstacles send the body back up at their bounce strength,
/// anything else stops vertical motion.
pub fn apply_bounce(body: &mut KinematicBody, obstacle: &Obstacle) {
    match obstacle.bounce_strength() {
        Some(strength) => {
            log::debug!("bounced off {:?} at {strength}", obstacle.rect);
            body.velocity.y = -strength;
        }
        None => body.velocity.y = 0.0,
    }
}

fn resolve(contact: Contact, body: &mut KinematicBody, obstacle: &Obstacle) {
    match contact {
        Contact::Right => push_left_of(body, obstacle),
        Contact::Left => push_right_of(body, obstacle),
        Contact::Top => push_below(body, obstacle),
        Contact::Bottom => {
            body.rect.set_bottom(obstacle.rect.top());
            apply_bounce(body, obstacle);
        }
        Contact::Corner(corner) => resolve_corner(corner, body, obstacle),
    }
}

/// Corner-only contacts
///
/// When the body moves diagonally into the corner, the axis with the smaller
/// penetration is corrected (ties go to the horizontal axis). The four
/// handlers are not symmetric:
/// - bottom-right skips the bounce rule when only falling
/// - bottom-left never touches velocity on its diagonal branch
/// - top-right snaps to the underside when falling and pushes left when
///   moving left
/// - top-left repeats the upward test in its second branch, so falling onto
///   a top-left corner alone resolves nothing
pub fn resolve_corner(corner: Corner, body: &mut KinematicBody, obstacle: &Obstacle) {
    let vx = body.velocity.x;
    let vy = body.velocity.y;
    let actor = body.rect;
    let block = obstacle.rect;

    match corner {
        Corner::BottomRight => {
            if vy > 0.0 && vx > 0.0 {
                let vertical = (actor.bottom() - block.top()).abs();
                let horizontal = (actor.right() - block.left()).abs();
                if vertical < horizontal {
                    body.rect.set_bottom(block.top());
                    apply_bounce(body, obstacle);
                } else {
                    push_left_of(body, obstacle);
                }
            } else if vy > 0.0 {
                body.rect.set_bottom(block.top());
                body.velocity.y = 0.0;
            } else if vx > 0.0 {
                push_left_of(body, obstacle);
            }
        }
        Corner::BottomLeft => {
            if vy > 0.0 && vx < 0.0 {
                let vertical = (actor.bottom() - block.top()).abs();
                let horizontal = (actor.left() - block.right()).abs();
                if vertical < horizontal {
                    body.rect.set_bottom(block.top());
                } else {
                    body.rect.set_left(block.right());
                }
            } else if vy > 0.0 {
                body.rect.set_bottom(block.top());
                apply_bounce(body, obstacle);
            } else if vx < 0.0 {
                push_right_of(body, obstacle);
            }
        }
        Corner::TopRight => {
            if vy < 0.0 && vx > 0.0 {
                let vertical = (actor.top() - block.bottom()).abs();
                let horizontal = (actor.right() - block.left()).abs();
                if vertical < horizontal {
                    push_below(body, obstacle);
                } else {
                    push_left_of(body, obstacle);
                }
            } else if vy > 0.0 {
                push_below(body, obstacle);
            } else if vx < 0.0 {
                push_left_of(body, obstacle);
            }
        }
        Corner::TopLeft => {
            if vy < 0.0 && vx < 0.0 {
                let vertical = (actor.top() - block.bottom()).abs();
                let horizontal = (actor.left() - block.right()).abs();
                if vertical < horizontal {
                    push_below(body, obstacle);
                } else {
                    push_right_of(body, obstacle);
                }
            } else if vy < 0.0 {
                push_below(body, obstacle);
            } else if vx < 0.0 {
                push_right_of(body, obstacle);
            }
        }
    }
}

fn push_left_of(body: &mut KinematicBody, obstacle: &Obstacle) {
    body.rect.set_right(obstacle.rect.left());
    body.velocity.x = 0.0;
}

fn push_right_of(body: &mut KinematicBody, obstacle: &Obstacle) {
    body.rect.set_left(obstacle.rect.right());
    body.velocity.x = 0.0;
}

fn push_below(body: &mut KinematicBody, obstacle: &Obstacle) {
    body.rect.set_top(obstacle.rect.bottom());
    body.velocity.y = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// 100x100 block spanning (100, 100) to (200, 200)
    fn block() -> Obstacle {
        Obstacle::new(100.0, 100.0, 100.0, 100.0)
    }

    fn actor_at(x: f32, y: f32, vx: f32, vy: f32) -> KinematicBody {
        KinematicBody::new(Rect::new(x, y, 30.0, 60.0)).with_velocity(vx, vy)
    }

    #[test]
    fn test_classify_prefers_mid_right_over_corners() {
        let points = ContactPoints {
            mid_right: true,
            top_right: true,
            bottom_right: true,
            mid_bottom: true,
            ..Default::default()
        };
        assert_eq!(points.classify(), Some(Contact::Right));
    }

    #[test]
    fn test_classify_order() {
        let left = ContactPoints {
            mid_left: true,
            mid_top: true,
            ..Default::default()
        };
        assert_eq!(left.classify(), Some(Contact::Left));

        let top = ContactPoints {
            mid_top: true,
            mid_bottom: true,
            ..Default::default()
        };
        assert_eq!(top.classify(), Some(Contact::Top));

        let corners = ContactPoints {
            bottom_left: true,
            top_right: true,
            top_left: true,
            ..Default::default()
        };
        assert_eq!(corners.classify(), Some(Contact::Corner(Corner::BottomLeft)));

        assert_eq!(ContactPoints::default().classify(), None);
    }

    #[test]
    fn test_no_overlap_leaves_body_alone() {
        let mut body = actor_at(0.0, 0.0, 50.0, 50.0);
        let before = body;

        assert!(!resolve_contacts(&mut body, &[block()]));
        assert_eq!(body, before);
    }

    #[test]
    fn test_landing_snaps_to_top_and_grounds() {
        // Bottom at 102, mid-bottom (125, 102) inside the block
        let mut body = actor_at(110.0, 42.0, 0.0, 190.0);

        assert!(resolve_contacts(&mut body, &[block()]));
        assert_eq!(body.rect.bottom(), 100.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_landing_on_bouncy_obstacle_rebounds() {
        let mut body = actor_at(110.0, 42.0, 0.0, 190.0);

        assert!(resolve_contacts(&mut body, &[block().with_bounce(500.0)]));
        assert_eq!(body.rect.bottom(), 100.0);
        assert_eq!(body.velocity.y, -500.0);
    }

    #[test]
    fn test_mid_left_snaps_to_right_edge() {
        // Left edge at 197, vertically inside the block
        let mut body = actor_at(197.0, 120.0, -200.0, 0.0);

        resolve_contacts(&mut body, &[block()]);
        assert_eq!(body.rect.left(), 200.0);
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_mid_right_snaps_to_left_edge() {
        let mut body = actor_at(73.0, 120.0, 200.0, -40.0);

        resolve_contacts(&mut body, &[block()]);
        assert_eq!(body.rect.right(), 100.0);
        assert_eq!(body.velocity, Vec2::new(0.0, -40.0));
    }

    #[test]
    fn test_head_bump_snaps_below() {
        let mut body = actor_at(110.0, 195.0, 0.0, -300.0);

        assert!(!resolve_contacts(&mut body, &[block()]));
        assert_eq!(body.rect.top(), 200.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_bottom_right_diagonal_prefers_shallow_vertical() {
        // right 108, bottom 102: vertical 2 < horizontal 8
        let mut body = actor_at(78.0, 42.0, 50.0, 50.0);

        assert!(resolve_contacts(&mut body, &[block().with_bounce(300.0)]));
        assert_eq!(body.rect.bottom(), 100.0);
        assert_eq!(body.velocity, Vec2::new(50.0, -300.0));
    }

    #[test]
    fn test_bottom_right_diagonal_tie_goes_horizontal() {
        // right 105, bottom 105
        let mut body = actor_at(75.0, 45.0, 50.0, 50.0);

        resolve_contacts(&mut body, &[block()]);
        assert_eq!(body.rect.right(), 100.0);
        assert_eq!(body.rect.top(), 45.0);
        assert_eq!(body.velocity, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn test_bottom_right_falling_ignores_bounce() {
        let mut body = actor_at(78.0, 42.0, 0.0, 50.0);

        resolve_contacts(&mut body, &[block().with_bounce(300.0)]);
        assert_eq!(body.rect.bottom(), 100.0);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_bottom_left_diagonal_keeps_velocity() {
        // left 192, bottom 102: vertical 2 < horizontal 8
        let mut body = actor_at(192.0, 42.0, -50.0, 50.0);
        resolve_contacts(&mut body, &[block()]);
        assert_eq!(body.rect.bottom(), 100.0);
        assert_eq!(body.velocity, Vec2::new(-50.0, 50.0));

        // left 198, bottom 105: horizontal 2 < vertical 5
        let mut body = actor_at(198.0, 45.0, -50.0, 50.0);
        resolve_contacts(&mut body, &[block()]);
        assert_eq!(body.rect.left(), 200.0);
        assert_eq!(body.velocity, Vec2::new(-50.0, 50.0));
    }

    #[test]
    fn test_bottom_left_falling_bounces() {
        let mut body = actor_at(192.0, 42.0, 0.0, 50.0);

        resolve_contacts(&mut body, &[block().with_bounce(250.0)]);
        assert_eq!(body.rect.bottom(), 100.0);
        assert_eq!(body.velocity.y, -250.0);
    }

    #[test]
    fn test_top_right_diagonal() {
        // right 108, top 198: vertical 2 < horizontal 8
        let mut body = actor_at(78.0, 198.0, 50.0, -50.0);

        assert!(!resolve_contacts(&mut body, &[block()]));
        assert_eq!(body.rect.top(), 200.0);
        assert_eq!(body.velocity, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_top_right_branches() {
        let mut falling = actor_at(78.0, 198.0, 0.0, 30.0);
        resolve_contacts(&mut falling, &[block()]);
        assert_eq!(falling.rect.top(), 200.0);
        assert_eq!(falling.velocity.y, 0.0);

        let mut moving_left = actor_at(78.0, 198.0, -40.0, 0.0);
        resolve_contacts(&mut moving_left, &[block()]);
        assert_eq!(moving_left.rect.right(), 100.0);
        assert_eq!(moving_left.velocity.x, 0.0);

        let mut moving_right = actor_at(78.0, 198.0, 40.0, 0.0);
        let before = moving_right;
        resolve_contacts(&mut moving_right, &[block()]);
        assert_eq!(moving_right, before);
    }

    #[test]
    fn test_top_left_branches() {
        let mut diagonal = actor_at(192.0, 198.0, -50.0, -50.0);
        resolve_contacts(&mut diagonal, &[block()]);
        assert_eq!(diagonal.rect.top(), 200.0);
        assert_eq!(diagonal.velocity, Vec2::new(-50.0, 0.0));

        let mut rising = actor_at(192.0, 198.0, 0.0, -50.0);
        resolve_contacts(&mut rising, &[block()]);
        assert_eq!(rising.rect.top(), 200.0);
        assert_eq!(rising.velocity.y, 0.0);

        let mut moving_left = actor_at(192.0, 198.0, -40.0, 0.0);
        resolve_contacts(&mut moving_left, &[block()]);
        assert_eq!(moving_left.rect.left(), 200.0);
        assert_eq!(moving_left.velocity.x, 0.0);
    }

    #[test]
    fn test_top_left_falling_is_unresolved() {
        let mut body = actor_at(192.0, 198.0, 0.0, 30.0);
        let before = body;

        resolve_contacts(&mut body, &[block()]);
        assert_eq!(body, before);
    }

    #[test]
    fn test_any_bottom_point_grounds() {
        // Mid-left and bottom-left inside: resolved as a side hit, still grounded
        let mut body = actor_at(197.0, 130.0, -200.0, 0.0);

        assert!(resolve_contacts(&mut body, &[block()]));
        assert_eq!(body.rect.left(), 200.0);
    }

    #[test]
    fn test_resolves_each_overlapping_obstacle() {
        let floor = Obstacle::new(0.0, 100.0, 300.0, 20.0);
        let wall = Obstacle::new(140.0, 0.0, 20.0, 100.0);
        // Standing slightly in the floor and pushing into the wall from the left
        let mut body = actor_at(112.0, 42.0, 100.0, 20.0);

        assert!(resolve_contacts(&mut body, &[floor, wall]));
        assert_eq!(body.rect.bottom(), 100.0);
        assert_eq!(body.rect.right(), 140.0);
        assert_eq!(body.velocity, Vec2::ZERO);
    }
}
