//! A linear-scan point set, used as a reference for checking the kd-tree.

use crate::error::Result;
use crate::point::Point;
use crate::r#trait::PointSet;
use crate::rect::Rect;

/// A point set that answers every query by scanning all of its points.
///
/// Points are kept in insertion order. Every operation is `O(n)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BruteForcePointSet {
    points: Vec<Point>,
}

impl BruteForcePointSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl PointSet for BruteForcePointSet {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn insert(&mut self, p: Point) -> Result<bool> {
        let p = p.check_domain()?;
        if self.points.contains(&p) {
            return Ok(false);
        }
        self.points.push(p);
        Ok(true)
    }

    fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    fn range(&self, rect: &Rect) -> Result<Vec<Point>> {
        let rect = rect.check_domain()?;
        Ok(self
            .points
            .iter()
            .filter(|p| rect.contains(p))
            .copied()
            .collect())
    }

    /// Ties are broken in favour of the earliest inserted point.
    fn nearest(&self, q: Point) -> Result<Option<Point>> {
        let q = q.check_domain()?;
        let mut champion: Option<(Point, f64)> = None;
        for p in self.points.iter() {
            let dist = p.distance_squared_to(&q);
            if champion.map_or(true, |(_, best)| dist < best) {
                champion = Some((*p, dist));
            }
        }
        Ok(champion.map(|(p, _)| p))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::KdTreeError;

    #[test]
    fn empty_set() {
        let set = BruteForcePointSet::new();
        assert!(set.is_empty());
        assert_eq!(set.size(), 0);
        assert!(!set.contains(Point::new(0.5, 0.5)));
        assert_eq!(set.nearest(Point::new(0.5, 0.5)).unwrap(), None);
        assert!(set.range(&Rect::unit()).unwrap().is_empty());
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut set = BruteForcePointSet::new();
        assert!(set.insert(Point::new(0.1, 0.2)).unwrap());
        assert!(!set.insert(Point::new(0.1, 0.2)).unwrap());
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn rejects_out_of_domain() {
        let mut set = BruteForcePointSet::new();
        assert_eq!(
            set.insert(Point::new(1.1, 0.0)),
            Err(KdTreeError::PointOutOfDomain { x: 1.1, y: 0.0 })
        );
        assert!(set.is_empty());
        assert!(set.nearest(Point::new(0.0, -1.0)).is_err());
    }

    #[test]
    fn nearest_tie_prefers_first_inserted() {
        let mut set = BruteForcePointSet::new();
        set.insert(Point::new(0.25, 0.5)).unwrap();
        set.insert(Point::new(0.75, 0.5)).unwrap();
        assert_eq!(
            set.nearest(Point::new(0.5, 0.5)).unwrap(),
            Some(Point::new(0.25, 0.5))
        );
    }
}
