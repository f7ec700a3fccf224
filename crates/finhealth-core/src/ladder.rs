//! Ordered threshold tables evaluated first-match-wins.

/// Inclusive threshold a value must satisfy to land on a rung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    AtLeast(f64),
    AtMost(f64),
}

impl Bound {
    pub fn admits(self, value: f64) -> bool {
        match self {
            Bound::AtLeast(threshold) => value >= threshold,
            Bound::AtMost(threshold) => value <= threshold,
        }
    }
}

/// Outcome when no rung admits the value.
#[derive(Debug, Clone, Copy)]
pub enum Floor<T> {
    Fixed(T),
    /// Partial credit computed from the value itself.
    Scaled(fn(f64) -> T),
}

impl<T: Copy> Floor<T> {
    fn resolve(&self, value: f64) -> T {
        match self {
            Floor::Fixed(outcome) => *outcome,
            Floor::Scaled(scale) => scale(value),
        }
    }
}

/// Rungs are checked top-down; NaN never satisfies a bound and falls to the floor.
#[derive(Debug, Clone, Copy)]
pub struct Ladder<'a, T> {
    rungs: &'a [(Bound, T)],
    floor: Floor<T>,
}

impl<'a, T: Copy> Ladder<'a, T> {
    pub const fn new(rungs: &'a [(Bound, T)], floor: Floor<T>) -> Self {
        Self { rungs, floor }
    }

    pub fn evaluate(&self, value: f64) -> T {
        self.rungs
            .iter()
            .find(|(bound, _)| bound.admits(value))
            .map(|(_, outcome)| *outcome)
            .unwrap_or_else(|| self.floor.resolve(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNGS: &[(Bound, u32)] = &[(Bound::AtLeast(10.0), 3), (Bound::AtLeast(5.0), 2)];

    #[test]
    fn first_matching_rung_wins() {
        let ladder = Ladder::new(RUNGS, Floor::Fixed(1));
        assert_eq!(ladder.evaluate(12.0), 3);
        assert_eq!(ladder.evaluate(10.0), 3);
        assert_eq!(ladder.evaluate(9.99), 2);
        assert_eq!(ladder.evaluate(5.0), 2);
        assert_eq!(ladder.evaluate(4.0), 1);
    }

    #[test]
    fn scaled_floor_uses_value() {
        fn halve(value: f64) -> f64 {
            value / 2.0
        }
        let rungs = [(Bound::AtMost(1.0), 100.0)];
        let ladder = Ladder::new(&rungs, Floor::Scaled(halve));
        assert_eq!(ladder.evaluate(0.5), 100.0);
        assert_eq!(ladder.evaluate(8.0), 4.0);
    }

    #[test]
    fn nan_falls_through_to_floor() {
        let ladder = Ladder::new(RUNGS, Floor::Fixed(0));
        assert_eq!(ladder.evaluate(f64::NAN), 0);
    }
}
