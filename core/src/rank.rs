//! The rank ladder.
//!
//! Tiers are half-open point intervals `[min, max)` that tile the
//! non-negative integers: every points value lands in exactly one tier, and
//! a value sitting exactly on a boundary belongs to the upper tier. The
//! last tier is unbounded.

use serde::Serialize;

/// Points awarded for a completed mission.
pub const MISSION_COMPLETED_POINTS: u64 = 100;

/// Points awarded for a submitted report.
pub const REPORT_SUBMITTED_POINTS: u64 = 10;

/// One rung of the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankTier {
    /// Display name of the tier.
    pub name: &'static str,
    /// Theme color token for the tier name.
    pub color: &'static str,
    /// Inclusive lower bound.
    pub min: u64,
    /// Exclusive upper bound. `None` for the final tier.
    pub max: Option<u64>,
}

/// The ladder, lowest tier first.
pub const TIERS: [RankTier; 6] = [
    RankTier { name: "NOVATO", color: "text-muted-foreground", min: 0, max: Some(100) },
    RankTier { name: "APRENDIZ", color: "text-primary", min: 100, max: Some(500) },
    RankTier { name: "OPERADOR", color: "text-secondary", min: 500, max: Some(1000) },
    RankTier { name: "ESPECIALISTA", color: "text-cyber-orange", min: 1000, max: Some(2500) },
    RankTier { name: "VETERANO", color: "text-destructive", min: 2500, max: Some(5000) },
    RankTier { name: "LENDA", color: "text-accent", min: 5000, max: None },
];

impl RankTier {
    pub fn contains(&self, points: u64) -> bool {
        points >= self.min && self.max.map_or(true, |max| points < max)
    }
}

/// Where a points total sits on the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankProgress {
    /// The tier the points fall into.
    pub tier: &'static RankTier,
    /// The tier above, if any.
    pub next: Option<&'static RankTier>,
    /// Progress through the current tier, 0–100. Always 100 on the final
    /// tier.
    pub progress_percent: f64,
    /// Points still needed to reach the next tier. `None` on the final
    /// tier.
    pub points_to_next: Option<u64>,
}

/// Maps a points total to its tier and progress toward the next one.
pub fn progression(points: u64) -> RankProgress {
    // The ladder tiles the non-negative integers (asserted in tests), so
    // the lookup cannot miss; the final tier is a safe fallback.
    let index = TIERS.iter().position(|tier| tier.contains(points)).unwrap_or(TIERS.len() - 1);
    let tier = &TIERS[index];
    let next = TIERS.get(index + 1);

    match next {
        Some(next) => {
            let span = next.min - tier.min;
            RankProgress {
                tier,
                next: Some(next),
                progress_percent: (points - tier.min) as f64 * 100.0 / span as f64,
                points_to_next: Some(next.min - points),
            }
        }
        None => RankProgress {
            tier,
            next: None,
            progress_percent: 100.0,
            points_to_next: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_tile_the_non_negative_integers() {
        assert_eq!(TIERS[0].min, 0);
        for pair in TIERS.windows(2) {
            assert_eq!(pair[0].max, Some(pair[1].min), "gap or overlap between {} and {}", pair[0].name, pair[1].name);
        }
        assert_eq!(TIERS[TIERS.len() - 1].max, None);
    }

    #[test]
    fn every_points_value_has_exactly_one_tier() {
        for points in [0, 1, 99, 100, 101, 499, 500, 999, 1000, 2499, 2500, 4999, 5000, 1_000_000] {
            assert_eq!(TIERS.iter().filter(|tier| tier.contains(points)).count(), 1, "{points}");
        }
    }

    #[test]
    fn boundaries_belong_to_the_upper_tier() {
        assert_eq!(progression(99).tier.name, "NOVATO");
        assert_eq!(progression(100).tier.name, "APRENDIZ");
        assert_eq!(progression(499).tier.name, "APRENDIZ");
        assert_eq!(progression(500).tier.name, "OPERADOR");
        assert_eq!(progression(2500).tier.name, "VETERANO");
        assert_eq!(progression(5000).tier.name, "LENDA");
    }

    #[test]
    fn progress_within_a_tier() {
        let progress = progression(300);
        assert_eq!(progress.tier.name, "APRENDIZ");
        assert_eq!(progress.next.unwrap().name, "OPERADOR");
        assert_eq!(progress.progress_percent, 50.0);
        assert_eq!(progress.points_to_next, Some(200));
    }

    #[test]
    fn zero_points_is_a_fresh_novato() {
        let progress = progression(0);
        assert_eq!(progress.tier.name, "NOVATO");
        assert_eq!(progress.progress_percent, 0.0);
        assert_eq!(progress.points_to_next, Some(100));
    }

    #[test]
    fn final_tier_is_pegged_at_full_progress() {
        for points in [5000, 5001, u64::MAX] {
            let progress = progression(points);
            assert_eq!(progress.tier.name, "LENDA");
            assert_eq!(progress.progress_percent, 100.0);
            assert_eq!(progress.points_to_next, None);
            assert!(progress.next.is_none());
        }
    }

    #[test]
    fn progression_is_monotonic() {
        let mut last_tier = 0;
        let mut last_percent = -1.0;
        for points in 0..6000 {
            let progress = progression(points);
            let tier_index = TIERS.iter().position(|t| t.name == progress.tier.name).unwrap();
            assert!(tier_index >= last_tier, "tier regressed at {points}");
            if tier_index == last_tier {
                assert!(progress.progress_percent >= last_percent, "progress regressed at {points}");
            }
            last_tier = tier_index;
            last_percent = progress.progress_percent;
        }
    }
}
