//! Syncs `LogicalPosition` → `Transform` with pixel rounding and y-sort z.
//! Runs in `PostUpdate`, after all movement systems.
//!
//! `LogicalPosition` is the top-left corner of the entity's footprint in
//! y-down logical space; sprites are centered, so the translation is the
//! footprint center converted to render space.

use bevy::prelude::*;

use crate::shared::*;

pub fn sync_position_and_ysort(
    mut with_ysort: Query<(&LogicalPosition, &YSorted, &mut Transform)>,
    mut without_ysort: Query<(&LogicalPosition, &mut Transform), Without<YSorted>>,
) {
    for (logical_pos, ysorted, mut transform) in &mut with_ysort {
        let render = logical_to_render(logical_pos.0 + ysorted.size / 2.0);
        transform.translation.x = render.x.round();
        transform.translation.y = render.y.round();
        // Depth anchor is the footprint's bottom edge.
        transform.translation.z = depth_to_z(logical_pos.0.y + ysorted.size.y);
    }

    for (logical_pos, mut transform) in &mut without_ysort {
        let render = logical_to_render(logical_pos.0);
        transform.translation.x = render.x.round();
        transform.translation.y = render.y.round();
    }
}
