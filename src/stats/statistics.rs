//! Aggregate outcome counts of one pattern over many reference samples.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Raw outcome counts of evaluating one pattern, summed over N reference
/// samples. Immutable once built; derived metrics are computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Ore blocks discovered (dug directly or taken by vein-following).
    pub found_ore: u64,
    /// Total blocks removed, ore included.
    pub dug_blocks: u64,
    /// Ore blocks that existed in the reference samples.
    pub total_ore: u64,
}

impl Statistics {
    pub fn new(found_ore: u64, dug_blocks: u64, total_ore: u64) -> Self {
        Self { found_ore, dug_blocks, total_ore }
    }

    /// Found ore per removed block, in percent.
    ///
    /// Defined as 100 when nothing was removed: no attempt means no waste,
    /// and a division fault here would poison every comparison.
    pub fn efficiency(&self) -> f64 {
        proportion(self.found_ore, self.dug_blocks)
    }

    /// Found ore per available ore, in percent. 100 when no ore existed.
    pub fn thoroughness(&self) -> f64 {
        proportion(self.found_ore, self.total_ore)
    }

    /// Canonical dominance rule: `self` dominates `other` iff it is at
    /// least as good on both metrics and strictly better on at least one.
    ///
    /// The project history wavered between boundary conditions; this rule
    /// (weak on both, strict on one) is the one fixed here, because it makes
    /// the retained frontier an antichain while still evicting ties that
    /// are worse on one axis.
    pub fn dominates(&self, other: &Statistics) -> bool {
        let eff = self.efficiency();
        let tho = self.thoroughness();
        let other_eff = other.efficiency();
        let other_tho = other.thoroughness();
        eff >= other_eff && tho >= other_tho && (eff > other_eff || tho > other_tho)
    }

    /// Multi-line report with per-sample averages, for final display.
    pub fn full_report(&self, nb_samples: usize) -> String {
        let nb = nb_samples as f64;
        let mut out = String::new();
        out.push_str(&format!("            {:>10}  {:>12}\n", "Avg/sample", "Total"));
        out.push_str(&format!(
            "Total ores: {:>10.2}  {:>12}\n",
            self.total_ore as f64 / nb,
            self.total_ore
        ));
        out.push_str(&format!(
            "Found ores: {:>10.2}  {:>12}\n",
            self.found_ore as f64 / nb,
            self.found_ore
        ));
        out.push_str(&format!(
            "Dug blocks: {:>10.2}  {:>12}\n",
            self.dug_blocks as f64 / nb,
            self.dug_blocks
        ));
        out.push('\n');
        if self.dug_blocks == 0 {
            out.push_str("/!\\ The pattern didn't dig anything!\n");
        } else {
            out.push_str(&format!("Efficiency:    {:6.2}%\n", self.efficiency()));
            out.push_str(&format!("Thoroughness:  {:6.2}%\n", self.thoroughness()));
        }
        out
    }
}

fn proportion(quantity: u64, total: u64) -> f64 {
    if total == 0 {
        100.0
    } else {
        quantity as f64 * 100.0 / total as f64
    }
}

impl Add for Statistics {
    type Output = Statistics;

    fn add(self, other: Statistics) -> Statistics {
        Statistics {
            found_ore: self.found_ore + other.found_ore,
            dug_blocks: self.dug_blocks + other.dug_blocks,
            total_ore: self.total_ore + other.total_ore,
        }
    }
}

impl AddAssign for Statistics {
    fn add_assign(&mut self, other: Statistics) {
        *self = *self + other;
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e={:.2}% t={:.2}%", self.efficiency(), self.thoroughness())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EFF50_THO50: Statistics = Statistics { found_ore: 5, dug_blocks: 10, total_ore: 10 };
    const EFF50_THO100: Statistics = Statistics { found_ore: 5, dug_blocks: 10, total_ore: 5 };
    const EFF100_THO50: Statistics = Statistics { found_ore: 5, dug_blocks: 5, total_ore: 10 };
    const EFF100_THO100: Statistics = Statistics { found_ore: 5, dug_blocks: 5, total_ore: 5 };

    #[test]
    fn test_metrics() {
        assert_eq!(50.0, EFF50_THO50.efficiency());
        assert_eq!(50.0, EFF50_THO50.thoroughness());
        assert_eq!(100.0, EFF100_THO100.efficiency());
        assert_eq!(100.0, EFF100_THO100.thoroughness());
    }

    #[test]
    fn test_zero_guard() {
        let empty = Statistics::new(0, 0, 0);
        assert_eq!(100.0, empty.efficiency());
        assert_eq!(100.0, empty.thoroughness());
    }

    #[test]
    fn test_no_self_domination() {
        for stats in [EFF50_THO50, EFF50_THO100, EFF100_THO50, EFF100_THO100] {
            assert!(!stats.dominates(&stats));
        }
    }

    #[test]
    fn test_dominates_when_better_on_both() {
        assert!(EFF100_THO100.dominates(&EFF50_THO50));
        assert!(!EFF50_THO50.dominates(&EFF100_THO100));
    }

    #[test]
    fn test_dominates_when_better_on_one_equal_on_other() {
        assert!(EFF100_THO50.dominates(&EFF50_THO50));
        assert!(EFF100_THO100.dominates(&EFF50_THO100));
        assert!(EFF50_THO100.dominates(&EFF50_THO50));
        assert!(EFF100_THO100.dominates(&EFF100_THO50));
    }

    #[test]
    fn test_incomparable_when_each_wins_one_metric() {
        assert!(!EFF50_THO100.dominates(&EFF100_THO50));
        assert!(!EFF100_THO50.dominates(&EFF50_THO100));
    }

    #[test]
    fn test_additivity() {
        let s1 = Statistics::new(3, 8, 12);
        let s2 = Statistics::new(4, 2, 9);
        assert_eq!(Statistics::new(7, 10, 21), s1 + s2);
    }
}
