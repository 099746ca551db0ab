use bevy::prelude::*;
use constants::page::ORBIT_LIST_PARALLAX_PX;

/// Pixel offset of the hero orbit list, following the pointer inside the
/// hero section.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct HeroOrbitList {
    pub offset: Vec2,
}

impl HeroOrbitList {
    /// `relative` is the pointer position inside the hero rect, centred so
    /// each axis spans [-0.5, 0.5].
    pub fn follow(&mut self, relative: Vec2) {
        self.offset = relative.clamp(Vec2::splat(-0.5), Vec2::splat(0.5)) * ORBIT_LIST_PARALLAX_PX;
    }

    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0)",
            self.offset.x, self.offset.y
        )
    }
}

/// Centred position of a client point inside a rect.
pub fn relative_in_rect(client: Vec2, origin: Vec2, size: Vec2) -> Option<Vec2> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    Some((client - origin) / size - Vec2::splat(0.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_position_is_centred() {
        let origin = Vec2::new(100.0, 50.0);
        let size = Vec2::new(800.0, 400.0);

        assert_eq!(
            relative_in_rect(Vec2::new(500.0, 250.0), origin, size),
            Some(Vec2::ZERO)
        );
        assert_eq!(
            relative_in_rect(Vec2::new(100.0, 450.0), origin, size),
            Some(Vec2::new(-0.5, 0.5))
        );
        assert_eq!(relative_in_rect(Vec2::ONE, origin, Vec2::ZERO), None);
    }

    #[test]
    fn test_follow_and_reset() {
        let mut list = HeroOrbitList::default();
        list.follow(Vec2::new(0.5, -0.25));
        assert_eq!(list.offset, Vec2::new(10.0, -5.0));
        assert_eq!(list.css_transform(), "translate3d(10.00px, -5.00px, 0)");

        list.reset();
        assert_eq!(list.css_transform(), "translate3d(0.00px, 0.00px, 0)");
    }
}
