//! Randomized checks of [`KdTree`] against [`BruteForcePointSet`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{BruteForcePointSet, KdTree, Point, PointSet, Rect};

/// A random point snapped to a grid with `cells` cells per side, edges included.
///
/// Coarse grids produce many duplicate inserts and exact distance ties.
fn grid_point(rng: &mut StdRng, cells: u32) -> Point {
    let x = rng.gen_range(0..=cells) as f64 / cells as f64;
    let y = rng.gen_range(0..=cells) as f64 / cells as f64;
    Point::new(x, y)
}

fn random_point(rng: &mut StdRng) -> Point {
    Point::new(rng.gen::<f64>(), rng.gen::<f64>())
}

fn random_rect(rng: &mut StdRng) -> Rect {
    let (x0, x1) = (rng.gen::<f64>(), rng.gen::<f64>());
    let (y0, y1) = (rng.gen::<f64>(), rng.gen::<f64>());
    Rect::try_new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)).unwrap()
}

fn sorted(mut points: Vec<Point>) -> Vec<(f64, f64)> {
    points.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));
    points.into_iter().map(|p| (p.x(), p.y())).collect()
}

/// Drive both sets with the same inserts and check every query agrees.
fn cross_check(seed: u64, num_points: usize, sample: impl Fn(&mut StdRng) -> Point) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = KdTree::new();
    let mut brute = BruteForcePointSet::new();

    for _ in 0..num_points {
        let p = sample(&mut rng);
        assert_eq!(tree.insert(p).unwrap(), brute.insert(p).unwrap());
        assert_eq!(tree.size(), brute.size());
    }

    for p in brute.points() {
        assert!(tree.contains(*p), "inserted point {p:?} is found");
    }
    for _ in 0..200 {
        let p = sample(&mut rng);
        assert_eq!(tree.contains(p), brute.contains(p));
    }

    for _ in 0..200 {
        let rect = random_rect(&mut rng);
        let got = tree.range(&rect).unwrap();
        let expected = brute.range(&rect).unwrap();
        assert_eq!(got.len(), expected.len(), "no duplicates in {rect:?}");
        assert_eq!(sorted(got), sorted(expected));
    }

    for _ in 0..200 {
        let q = if rng.gen_bool(0.5) {
            sample(&mut rng)
        } else {
            random_point(&mut rng)
        };
        let got = tree.nearest(q).unwrap().unwrap();
        let expected = brute.nearest(q).unwrap().unwrap();
        // Ties may resolve to different points; the distance must match exactly
        assert_eq!(got.distance_squared_to(&q), expected.distance_squared_to(&q));
        assert!(brute.contains(got));
    }
}

#[test]
fn matches_brute_force_on_uniform_points() {
    cross_check(1, 1_000, random_point);
}

#[test]
fn matches_brute_force_with_duplicates_and_ties() {
    cross_check(2, 1_000, |rng| grid_point(rng, 10));
}

#[test]
fn matches_brute_force_on_small_sets() {
    for seed in 0..20 {
        cross_check(100 + seed, 8, |rng| grid_point(rng, 4));
    }
}

#[test]
fn matches_brute_force_on_sorted_input() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut points: Vec<Point> = (0..500).map(|_| random_point(&mut rng)).collect();
    points.sort_by(|a, b| a.x().total_cmp(&b.x()));

    let tree = KdTree::try_from_points(points.iter().copied()).unwrap();
    let mut brute = BruteForcePointSet::new();
    for p in points.iter() {
        brute.insert(*p).unwrap();
    }
    assert_eq!(tree.size(), brute.size());

    for _ in 0..100 {
        let q = random_point(&mut rng);
        let got = tree.nearest(q).unwrap().unwrap();
        let expected = brute.nearest(q).unwrap().unwrap();
        assert_eq!(got.distance_squared_to(&q), expected.distance_squared_to(&q));

        let rect = random_rect(&mut rng);
        assert_eq!(
            sorted(tree.range(&rect).unwrap()),
            sorted(brute.range(&rect).unwrap())
        );
    }
}

#[test]
fn nearest_is_reproducible() {
    let mut rng = StdRng::seed_from_u64(4);
    let points: Vec<Point> = (0..300).map(|_| grid_point(&mut rng, 6)).collect();
    let a = KdTree::try_from_points(points.iter().copied()).unwrap();
    let b = KdTree::try_from_points(points.iter().copied()).unwrap();
    for _ in 0..100 {
        let q = grid_point(&mut rng, 12);
        assert_eq!(a.nearest(q).unwrap(), b.nearest(q).unwrap());
    }
}

#[test]
fn reinserting_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(5);
    let points: Vec<Point> = (0..200).map(|_| random_point(&mut rng)).collect();
    let mut tree = KdTree::try_from_points(points.iter().copied()).unwrap();
    let before = tree.clone();
    for p in points.iter().rev() {
        assert!(!tree.insert(*p).unwrap());
    }
    assert_eq!(tree, before);
}
