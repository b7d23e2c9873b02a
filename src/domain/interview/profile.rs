//! The interviewee's profile, collected at onboarding.

use crate::domain::foundation::{Timestamp, ValidationError};

/// Maximum number of interests a profile may carry.
pub const MAX_INTERESTS: usize = 10;

/// What the persona knows about the person it is speaking to.
///
/// Read-only for the whole conversation; the engine never modifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub occupation: String,
    /// Ordered, unique, at most [`MAX_INTERESTS`].
    pub interests: Vec<String>,
    pub life_goals: String,
    pub financial_literacy: String,
    pub has_baby: bool,
    pub waiting_for_baby: bool,
    pub baby_info: String,
}

impl UserProfile {
    /// Checks the onboarding rules the engine relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        if self.interests.len() > MAX_INTERESTS {
            return Err(ValidationError::out_of_range(
                "interests",
                0,
                MAX_INTERESTS as i64,
                self.interests.len() as i64,
            ));
        }

        for (i, interest) in self.interests.iter().enumerate() {
            if interest.trim().is_empty() {
                return Err(ValidationError::empty_field("interests"));
            }
            if self.interests[..i].contains(interest) {
                return Err(ValidationError::invalid_format(
                    "interests",
                    format!("duplicate interest '{}'", interest),
                ));
            }
        }

        Ok(())
    }

    /// Interests as a single comma-separated line.
    pub fn interests_line(&self) -> String {
        self.interests.join(", ")
    }

    /// Birth year implied by the current age at `now`.
    pub fn birth_year(&self, now: Timestamp) -> i32 {
        now.year() - self.age as i32
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::ana;
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn valid_profile_passes() {
        assert!(ana().validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let profile = UserProfile {
            name: "   ".to_string(),
            ..ana()
        };
        assert_eq!(
            profile.validate(),
            Err(ValidationError::empty_field("name"))
        );
    }

    #[test]
    fn more_than_ten_interests_is_rejected() {
        let profile = UserProfile {
            interests: (0..11).map(|i| format!("interest-{}", i)).collect(),
            ..ana()
        };
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { actual: 11, .. }));
    }

    #[test]
    fn exactly_ten_interests_is_accepted() {
        let profile = UserProfile {
            interests: (0..10).map(|i| format!("interest-{}", i)).collect(),
            ..ana()
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn duplicate_interest_is_rejected() {
        let profile = UserProfile {
            interests: vec!["Art".to_string(), "Music".to_string(), "Art".to_string()],
            ..ana()
        };
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate interest 'Art'"));
    }

    #[test]
    fn no_interests_is_fine() {
        let profile = UserProfile {
            interests: vec![],
            ..ana()
        };
        assert!(profile.validate().is_ok());
        assert_eq!(profile.interests_line(), "");
    }

    #[test]
    fn interests_line_preserves_order() {
        assert_eq!(ana().interests_line(), "Gym, Startups, Travel");
    }

    #[test]
    fn birth_year_subtracts_age() {
        let now = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap());
        assert_eq!(ana().birth_year(now), 1996);
    }
}
