use std::collections::VecDeque;

use glam::DVec2;

/// Points reserved up front; longer trails grow on demand.
const MAX_PREALLOC: usize = 64;

/// Bounded history of recently visited positions, oldest first.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<DVec2>,
    max_len: usize,
}

impl Trail {
    pub fn new(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len.saturating_add(1).min(MAX_PREALLOC)),
            max_len,
        }
    }

    /// Append a point, evicting the oldest once the bound is exceeded.
    pub fn push(&mut self, point: DVec2) {
        self.points.push_back(point);
        while self.points.len() > self.max_len {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Most recent point, if any.
    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVec2> {
        self.points.iter()
    }

    /// Consecutive point pairs `(i, from, to)`, oldest segment first.
    pub fn segments(&self) -> impl Iterator<Item = (usize, DVec2, DVec2)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .enumerate()
            .map(|(i, (a, b))| (i, *a, *b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_past_bound() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.push(DVec2::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.latest(), Some(DVec2::new(4.0, 0.0)));
    }

    #[test]
    fn segments_pair_neighbours() {
        let mut trail = Trail::new(20);
        trail.push(DVec2::new(0.0, 0.0));
        assert_eq!(trail.segments().count(), 0);
        trail.push(DVec2::new(1.0, 0.0));
        trail.push(DVec2::new(2.0, 0.0));
        let segs: Vec<_> = trail.segments().collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1], (1, DVec2::new(1.0, 0.0), DVec2::new(2.0, 0.0)));
    }

    #[test]
    fn huge_bound_allocates_lazily() {
        let mut trail = Trail::new(usize::MAX);
        for i in 0..100 {
            trail.push(DVec2::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 100);
        assert_eq!(trail.max_len(), usize::MAX);
    }

    #[test]
    fn clear_empties() {
        let mut trail = Trail::new(4);
        trail.push(DVec2::ONE);
        trail.clear();
        assert!(trail.is_empty());
    }
}
