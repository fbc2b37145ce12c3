use crate::core::math::Rect;

/// Find the first surface the body lands on this tick
///
/// A body lands when its bottom edge has reached the surface top but is
/// no further below it than `velocity + tolerance`, and the two overlap
/// horizontally. Surfaces are checked in iteration order and the first
/// match wins, so overlapping fragments resolve to the earlier one.
///
/// `tolerance` absorbs one integration step of penetration; it is tied to
/// the gravity and tick rate it was tuned with.
pub fn find_landing<'a, I>(body: &Rect, velocity: f32, tolerance: f32, surfaces: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    let bottom = body.bottom();
    surfaces.into_iter().position(|surface| {
        bottom >= surface.top()
            && bottom <= surface.top() + velocity + tolerance
            && body.overlaps_x(surface)
    })
}
