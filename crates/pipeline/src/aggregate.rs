//! Library-wide aggregation.
//!
//! Once every listener has a profile, this module computes the element-wise
//! arithmetic mean of the six profile fields across all listeners. It is the
//! only full barrier in the pipeline: it needs the complete profile set.

use crate::error::{ProfileError, Result};
use crate::profile::UserProfile;
use serde::Serialize;

/// Mean of each `UserProfile` field across the whole library.
///
/// Field order mirrors `UserProfile` so the serialized `agg_table.csv` row
/// lines up column-for-column with the per-listener rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateProfile {
    pub mean_unique_track_count: f64,
    pub mean_morning_count: f64,
    pub mean_afternoon_count: f64,
    pub mean_evening_count: f64,
    pub mean_night_count: f64,
    pub mean_mobile_count: f64,
}

impl AggregateProfile {
    /// Compute the per-field means over a non-empty profile set.
    ///
    /// No weighting, no outlier removal; sums accumulate as `f64` even
    /// though every input is an integer count.
    pub fn from_profiles(profiles: &[UserProfile]) -> Result<Self> {
        if profiles.is_empty() {
            return Err(ProfileError::EmptyDataset);
        }

        let mut sums = [0.0f64; 6];
        for p in profiles {
            sums[0] += f64::from(p.unique_track_count);
            sums[1] += f64::from(p.morning_count);
            sums[2] += f64::from(p.afternoon_count);
            sums[3] += f64::from(p.evening_count);
            sums[4] += f64::from(p.night_count);
            sums[5] += f64::from(p.mobile_count);
        }

        let n = profiles.len() as f64;
        Ok(Self {
            mean_unique_track_count: sums[0] / n,
            mean_morning_count: sums[1] / n,
            mean_afternoon_count: sums[2] / n,
            mean_evening_count: sums[3] / n,
            mean_night_count: sums[4] / n,
            mean_mobile_count: sums[5] / n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(unique: u32, morning: u32, afternoon: u32, evening: u32, night: u32, mobile: u32) -> UserProfile {
        UserProfile {
            unique_track_count: unique,
            morning_count: morning,
            afternoon_count: afternoon,
            evening_count: evening,
            night_count: night,
            mobile_count: mobile,
        }
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let err = AggregateProfile::from_profiles(&[]).unwrap_err();
        assert!(matches!(err, ProfileError::EmptyDataset));
    }

    #[test]
    fn test_single_profile_mean_is_itself() {
        let agg = AggregateProfile::from_profiles(&[profile(2, 1, 0, 0, 2, 1)]).unwrap();
        assert_eq!(agg.mean_unique_track_count, 2.0);
        assert_eq!(agg.mean_morning_count, 1.0);
        assert_eq!(agg.mean_night_count, 2.0);
        assert_eq!(agg.mean_mobile_count, 1.0);
    }

    #[test]
    fn test_identical_profiles_mean_equals_each() {
        let p = profile(2, 1, 0, 0, 2, 1);
        let agg = AggregateProfile::from_profiles(&[p, p]).unwrap();

        assert_eq!(agg.mean_unique_track_count, 2.0);
        assert_eq!(agg.mean_morning_count, 1.0);
        assert_eq!(agg.mean_afternoon_count, 0.0);
        assert_eq!(agg.mean_evening_count, 0.0);
        assert_eq!(agg.mean_night_count, 2.0);
        assert_eq!(agg.mean_mobile_count, 1.0);
    }

    #[test]
    fn test_mean_of_two_profiles() {
        let a = profile(4, 2, 0, 0, 0, 3);
        let b = profile(2, 0, 2, 0, 0, 1);
        let agg = AggregateProfile::from_profiles(&[a, b]).unwrap();

        assert_eq!(agg.mean_unique_track_count, 3.0);
        assert_eq!(agg.mean_morning_count, 1.0);
        assert_eq!(agg.mean_afternoon_count, 1.0);
        assert_eq!(agg.mean_mobile_count, 2.0);
    }

    #[test]
    fn test_means_are_bounded_by_min_and_max() {
        let profiles = vec![
            profile(1, 0, 1, 2, 3, 0),
            profile(5, 4, 0, 1, 0, 2),
            profile(3, 2, 2, 2, 2, 1),
        ];
        let agg = AggregateProfile::from_profiles(&profiles).unwrap();

        let uniques: Vec<f64> = profiles.iter().map(|p| f64::from(p.unique_track_count)).collect();
        let min = uniques.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = uniques.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(agg.mean_unique_track_count >= min && agg.mean_unique_track_count <= max);

        let mornings: Vec<f64> = profiles.iter().map(|p| f64::from(p.morning_count)).collect();
        let min = mornings.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = mornings.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(agg.mean_morning_count >= min && agg.mean_morning_count <= max);
    }
}
