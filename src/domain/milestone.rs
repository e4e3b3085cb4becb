//! Reflection-count milestones shown to members as they journal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    FirstReflection,
    ThreeReflections,
    SevenReflections,
    ThirtyReflections,
    HundredReflections,
}

impl Milestone {
    /// All milestones, ordered by threshold.
    pub const ALL: [Milestone; 5] = [
        Milestone::FirstReflection,
        Milestone::ThreeReflections,
        Milestone::SevenReflections,
        Milestone::ThirtyReflections,
        Milestone::HundredReflections,
    ];

    pub fn threshold(&self) -> u32 {
        match self {
            Milestone::FirstReflection => 1,
            Milestone::ThreeReflections => 3,
            Milestone::SevenReflections => 7,
            Milestone::ThirtyReflections => 30,
            Milestone::HundredReflections => 100,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Milestone::FirstReflection => "Your first reflection",
            Milestone::ThreeReflections => "Three reflections in",
            Milestone::SevenReflections => "A full week of reflections",
            Milestone::ThirtyReflections => "Thirty reflections",
            Milestone::HundredReflections => "One hundred reflections",
        }
    }

    pub fn reached(&self, reflection_count: u32) -> bool {
        reflection_count >= self.threshold()
    }

    /// Highest milestone reached with `reflection_count` reflections.
    pub fn current(reflection_count: u32) -> Option<Milestone> {
        Self::ALL
            .into_iter()
            .rev()
            .find(|m| m.reached(reflection_count))
    }

    /// Next milestone still ahead, if any.
    pub fn next(reflection_count: u32) -> Option<Milestone> {
        Self::ALL.into_iter().find(|m| !m.reached(reflection_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_strictly_increasing() {
        let thresholds: Vec<u32> = Milestone::ALL.iter().map(|m| m.threshold()).collect();
        assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_current_and_next() {
        assert_eq!(Milestone::current(0), None);
        assert_eq!(Milestone::next(0), Some(Milestone::FirstReflection));

        assert_eq!(Milestone::current(7), Some(Milestone::SevenReflections));
        assert_eq!(Milestone::next(7), Some(Milestone::ThirtyReflections));

        assert_eq!(Milestone::current(250), Some(Milestone::HundredReflections));
        assert_eq!(Milestone::next(250), None);
    }
}
