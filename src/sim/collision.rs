//! Collision detection and response for the maze
//!
//! Two different probes are in play and must stay that way:
//! - walls block on the player's *center point*
//! - the cherry and the ghosts hit the player's *full bounding box*

use glam::IVec2;

use super::actor::{Ghost, Player};
use super::rect::Rect;

/// True iff `point` lies within the half-open bounds of `rect`
#[inline]
pub fn contains(rect: &Rect, point: IVec2) -> bool {
    rect.contains(point)
}

/// True iff the two rectangles overlap with non-zero area
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Undo the player's last step once for every wall that holds its center.
///
/// Walls are checked in list order against the current position, so a revert
/// caused by one wall is visible to the walls after it. Returns the number of
/// reverts applied.
pub fn resolve_wall_collisions(player: &mut Player, walls: &[Rect]) -> u32 {
    let mut reverts = 0;
    for wall in walls {
        if contains(wall, player.center()) {
            player.revert_step();
            reverts += 1;
        }
    }
    reverts
}

/// Index of the first ghost whose box overlaps the player's box
pub fn find_capture(player: &Player, ghosts: &[Ghost]) -> Option<usize> {
    let bounds = player.bounds();
    ghosts
        .iter()
        .position(|ghost| intersects(&ghost.bounds(), &bounds))
}

/// Whether the player's box overlaps the cherry (if there is one)
pub fn touches_cherry(player: &Player, cherry: Option<&Rect>) -> bool {
    cherry.is_some_and(|cherry| intersects(&player.bounds(), cherry))
}
