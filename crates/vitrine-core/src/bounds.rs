//! Axis-aligned bounding boxes.

use glam::DVec3;

use crate::pose::Pose;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| match acc {
            None => Some(Self { min: p, max: p }),
            Some(b) => Some(Self { min: b.min.min(p), max: b.max.max(p) }),
        })
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// The eight corner points.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// Merge with another bounding box.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Bounds of this box after mapping it through a pose.
    ///
    /// Rotated boxes grow to stay axis-aligned.
    pub fn transformed(&self, pose: &Pose) -> BoundingBox {
        let corners = self.corners().map(|c| pose.transform_point(c));
        let mut min = corners[0];
        let mut max = corners[0];
        for c in &corners[1..] {
            min = min.min(*c);
            max = max.max(*c);
        }
        BoundingBox { min, max }
    }

    /// Check if a point is inside the bounding box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Check if two bounding boxes intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;

    #[test]
    fn test_from_points() {
        let b = BoundingBox::from_points([DVec3::new(1.0, -2.0, 0.0), DVec3::new(-1.0, 2.0, 3.0)])
            .unwrap();
        assert_eq!(b.min, DVec3::new(-1.0, -2.0, 0.0));
        assert_eq!(b.max, DVec3::new(1.0, 2.0, 3.0));
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_intersects() {
        let a = BoundingBox::new(DVec3::ZERO, DVec3::splat(2.0));
        let b = BoundingBox::new(DVec3::splat(1.0), DVec3::splat(3.0));
        let c = BoundingBox::new(DVec3::splat(5.0), DVec3::splat(6.0));

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.contains(DVec3::splat(2.0)));
        assert!(!a.contains(DVec3::splat(2.5)));
    }

    #[test]
    fn test_transformed_by_rotation() {
        let b = BoundingBox::new(DVec3::ZERO, DVec3::new(2.0, 1.0, 1.0));
        let quarter_turn = DQuat::from_rotation_z(std::f64::consts::FRAC_PI_2);
        let pose = Pose::from_rotation_translation(quarter_turn, DVec3::ZERO).unwrap();

        let rotated = b.transformed(&pose);
        assert!((rotated.size() - DVec3::new(1.0, 2.0, 1.0)).length() < 1e-12);
        assert!((rotated.min - DVec3::new(-1.0, 0.0, 0.0)).length() < 1e-12);
    }
}
