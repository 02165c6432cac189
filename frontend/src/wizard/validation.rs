//! Per-step validation predicates.
//!
//! Each predicate only looks at the fields its step owns. Earlier steps are
//! never re-checked when a later step is validated.

use thiserror::Error;

use crate::config::{MIN_DESCRIPTION_AR_CHARS, MIN_IMAGES, MIN_TITLE_AR_CHARS};
use crate::models::PropertyDraft;

use super::WizardStep;

/// Why the wizard refused to move forward.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("Arabic title is required")]
    TitleArMissing,

    #[error("Arabic title must be at least {min} characters")]
    TitleArTooShort { min: usize },

    #[error("Arabic description is required")]
    DescriptionArMissing,

    #[error("Arabic description must be at least {min} characters")]
    DescriptionArTooShort { min: usize },

    #[error("Please select a property type")]
    PropertyTypeMissing,

    #[error("Please select a governorate")]
    GovernorateMissing,

    #[error("City is required")]
    CityMissing,

    #[error("Nightly price must be greater than zero")]
    PriceNotPositive,

    #[error("Please add at least {min} photos ({staged} selected)")]
    NotEnoughImages { min: usize, staged: usize },

    #[error("There is no step after this one")]
    NoNextStep,

    #[error("A submission is already in progress")]
    SubmissionInProgress,
}

/// Validate the fields owned by `step`.
pub fn validate_step(
    step: WizardStep,
    draft: &PropertyDraft,
    staged_images: usize,
) -> Result<(), StepError> {
    match step {
        WizardStep::BasicInfo => validate_basic_info(draft),
        WizardStep::Location => validate_location(draft),
        WizardStep::DetailsPricing => validate_details_pricing(draft),
        WizardStep::Photos => validate_photos(staged_images),
        WizardStep::Submitting => Err(StepError::SubmissionInProgress),
    }
}

/// Step 1. English title and description are optional.
pub fn validate_basic_info(draft: &PropertyDraft) -> Result<(), StepError> {
    if draft.title_ar.is_empty() {
        return Err(StepError::TitleArMissing);
    }
    if draft.title_ar.chars().count() < MIN_TITLE_AR_CHARS {
        return Err(StepError::TitleArTooShort {
            min: MIN_TITLE_AR_CHARS,
        });
    }
    if draft.description_ar.is_empty() {
        return Err(StepError::DescriptionArMissing);
    }
    if draft.description_ar.chars().count() < MIN_DESCRIPTION_AR_CHARS {
        return Err(StepError::DescriptionArTooShort {
            min: MIN_DESCRIPTION_AR_CHARS,
        });
    }
    if draft.property_type.is_none() {
        return Err(StepError::PropertyTypeMissing);
    }
    Ok(())
}

/// Step 2. Neighborhood is optional.
pub fn validate_location(draft: &PropertyDraft) -> Result<(), StepError> {
    if draft.governorate.is_empty() {
        return Err(StepError::GovernorateMissing);
    }
    if draft.city.is_empty() {
        return Err(StepError::CityMissing);
    }
    Ok(())
}

/// Step 3. Only the nightly price gates advancement; room counts, area,
/// cleaning fee and minimum stay are accepted as entered.
pub fn validate_details_pricing(draft: &PropertyDraft) -> Result<(), StepError> {
    // NaN fails this comparison too
    if !(draft.price_per_night > 0.0) {
        return Err(StepError::PriceNotPositive);
    }
    Ok(())
}

/// Step 4.
pub fn validate_photos(staged_images: usize) -> Result<(), StepError> {
    if staged_images < MIN_IMAGES {
        return Err(StepError::NotEnoughImages {
            min: MIN_IMAGES,
            staged: staged_images,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;

    fn basic_draft() -> PropertyDraft {
        PropertyDraft {
            title_ar: "شقة فاخرة جدا".into(),
            description_ar: "و".repeat(60),
            property_type: Some(PropertyType::Villa),
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_info_counts_characters_not_bytes() {
        let draft = basic_draft();
        assert_eq!(draft.title_ar.chars().count(), 13);
        assert!(validate_basic_info(&draft).is_ok());

        // 9 Arabic letters are 18 bytes but still too short
        let draft = PropertyDraft {
            title_ar: "ببببببببب".into(),
            ..basic_draft()
        };
        assert_eq!(
            validate_basic_info(&draft),
            Err(StepError::TitleArTooShort { min: 10 })
        );
    }

    #[test]
    fn test_basic_info_boundaries() {
        let exact = PropertyDraft {
            title_ar: "a".repeat(10),
            description_ar: "b".repeat(50),
            ..basic_draft()
        };
        assert!(validate_basic_info(&exact).is_ok());

        let short_desc = PropertyDraft {
            description_ar: "b".repeat(49),
            ..basic_draft()
        };
        assert_eq!(
            validate_basic_info(&short_desc),
            Err(StepError::DescriptionArTooShort { min: 50 })
        );

        let empty_title = PropertyDraft {
            title_ar: String::new(),
            ..basic_draft()
        };
        assert_eq!(validate_basic_info(&empty_title), Err(StepError::TitleArMissing));

        let no_type = PropertyDraft {
            property_type: None,
            ..basic_draft()
        };
        assert_eq!(validate_basic_info(&no_type), Err(StepError::PropertyTypeMissing));
    }

    #[test]
    fn test_english_fields_are_optional() {
        let draft = basic_draft();
        assert!(draft.title_en.is_empty() && draft.description_en.is_empty());
        assert!(validate_basic_info(&draft).is_ok());
    }

    #[test]
    fn test_location_requires_governorate_and_city() {
        let mut draft = PropertyDraft::default();
        assert_eq!(validate_location(&draft), Err(StepError::GovernorateMissing));

        draft.governorate = "Alexandria".into();
        assert_eq!(validate_location(&draft), Err(StepError::CityMissing));

        draft.city = "Marina".into();
        assert!(validate_location(&draft).is_ok());
    }

    #[test]
    fn test_pricing_only_checks_price() {
        let mut draft = PropertyDraft {
            bedrooms: 0,
            bathrooms: 0,
            max_guests: 0,
            area_sqm: 0.0,
            min_stay_nights: 0,
            ..Default::default()
        };

        for price in [0.0, -1.0, f64::NAN] {
            draft.price_per_night = price;
            assert_eq!(
                validate_details_pricing(&draft),
                Err(StepError::PriceNotPositive)
            );
        }

        draft.price_per_night = 0.01;
        assert!(validate_details_pricing(&draft).is_ok());
    }

    #[test]
    fn test_photos_need_minimum_count() {
        assert_eq!(
            validate_photos(4),
            Err(StepError::NotEnoughImages { min: 5, staged: 4 })
        );
        assert!(validate_photos(5).is_ok());
        assert!(validate_photos(12).is_ok());
    }

    #[test]
    fn test_validate_step_dispatch() {
        let draft = basic_draft();
        assert!(validate_step(WizardStep::BasicInfo, &draft, 0).is_ok());
        assert_eq!(
            validate_step(WizardStep::Location, &draft, 0),
            Err(StepError::GovernorateMissing)
        );
        assert_eq!(
            validate_step(WizardStep::Submitting, &draft, 10),
            Err(StepError::SubmissionInProgress)
        );
    }
}
