use tinyvec::TinyVec;

use crate::error::Result;
use crate::kdtree::index::{Descent, KdTree};
use crate::kdtree::node::Node;
use crate::point::Point;
use crate::r#trait::PointSet;
use crate::rect::Rect;

impl PointSet for KdTree {
    fn size(&self) -> usize {
        // One node per distinct point
        self.nodes.len()
    }

    fn insert(&mut self, p: Point) -> Result<bool> {
        let p = p.check_domain()?;
        let at = self.locate(&p);
        Ok(self.attach(p, at))
    }

    fn contains(&self, p: Point) -> bool {
        p.is_in_unit_square() && matches!(self.locate(&p), Descent::Found(_))
    }

    fn range(&self, rect: &Rect) -> Result<Vec<Point>> {
        let rect = rect.check_domain()?;
        Ok(self.range_visits(&rect).0)
    }

    /// Branch-and-bound search seeded with the root's point.
    ///
    /// A subtree is skipped when its region is no closer to `q` than the current champion. At
    /// each node the child whose region contains `q` is searched first, preferring the
    /// right/top child when both regions contain it on their shared edge.
    ///
    /// A visited point replaces the champion only when strictly closer, so among exact ties the
    /// first one met in that visiting order wins. The root is met first, and for a fixed
    /// insertion order the result is always the same.
    fn nearest(&self, q: Point) -> Result<Option<Point>> {
        let q = q.check_domain()?;
        Ok(self.nearest_visits(q, true).0)
    }
}

impl KdTree {
    /// Range search over a validated rectangle, also returning how many nodes were visited.
    ///
    /// A node counts as visited when its region intersects `rect`; subtrees under any other
    /// node are never touched.
    pub(crate) fn range_visits(&self, rect: &Rect) -> (Vec<Point>, usize) {
        let mut result: Vec<Point> = vec![];
        let mut visits = 0;
        if self.nodes.is_empty() {
            return (result, visits);
        }

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[usize; 33]> = TinyVec::new();
        stack.push(0);

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];

            // every point below this node lies in its region
            if !rect.intersects(&node.region) {
                continue;
            }
            visits += 1;

            if rect.contains(&node.point) {
                result.push(node.point);
            }

            // Note: these are pushed in backwards order to what gets popped
            if let Some(right) = node.right {
                stack.push(right);
            }
            if let Some(left) = node.left {
                stack.push(left);
            }
        }

        (result, visits)
    }

    /// Nearest search over a validated query, also returning how many nodes were visited.
    ///
    /// With `containing_first` the child whose region holds `q` is searched before its sibling;
    /// otherwise the order is reversed. Both orders find a nearest point.
    pub(crate) fn nearest_visits(
        &self,
        q: Point,
        containing_first: bool,
    ) -> (Option<Point>, usize) {
        let Some(root) = self.nodes.first() else {
            return (None, 0);
        };

        let mut champion = root.point;
        let mut champion_dist = champion.distance_squared_to(&q);
        let mut visits = 0;

        let mut stack: TinyVec<[usize; 33]> = TinyVec::new();
        stack.push(0);

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];

            // Nothing in this subtree can beat the champion
            if node.region.distance_squared_to(&q) >= champion_dist {
                continue;
            }
            visits += 1;

            let dist = node.point.distance_squared_to(&q);
            if dist < champion_dist {
                champion = node.point;
                champion_dist = dist;
            }

            let (mut first, mut second) = self.search_order(node, &q);
            if !containing_first {
                std::mem::swap(&mut first, &mut second);
            }

            // Note: these are pushed in backwards order to what gets popped
            if let Some(second) = second {
                stack.push(second);
            }
            if let Some(first) = first {
                stack.push(first);
            }
        }

        (Some(champion), visits)
    }

    /// The children of `node` in the order a nearest search for `q` visits them.
    ///
    /// The right/top child goes first when its region contains `q`, else the left/bottom one.
    pub(crate) fn search_order(&self, node: &Node, q: &Point) -> (Option<usize>, Option<usize>) {
        match node.right {
            Some(right) if self.nodes[right].region.contains(q) => (node.right, node.left),
            _ => (node.left, node.right),
        }
    }
}
