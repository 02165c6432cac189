//! Property submission wizard.
//!
//! Framework-independent core of the "add property" flow. The Leptos
//! component in [`crate::components`] only binds inputs to
//! [`PropertyWizard`] and drives [`submit_property`].
//!
//! # States
//!
//! ```text
//! BasicInfo ──next──▶ Location ──next──▶ DetailsPricing ──next──▶ Photos
//!     ◀──previous──        ◀──previous──          ◀──previous──     │
//!                                                     begin_submit │
//!                                                                  ▼
//!                                     finish_submit(Err) ◀── Submitting
//!                                     finish_submit(Ok)  ──▶ fresh BasicInfo
//! ```
//!
//! `next` only fires when the current step validates. There is no way to
//! jump to an arbitrary step.

pub mod staging;
pub mod submit;
pub mod validation;

use std::rc::Rc;

use crate::models::PropertyDraft;

pub use staging::{ImageFile, ImageStaging, PreviewUrl, PreviewUrls, StageReport, StagedImage};
pub use submit::{submit_property, SubmissionRequest, SubmitError, SubmitOutcome, SubmitResult};
pub use validation::{validate_step, StepError};

/// Position in the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    BasicInfo,
    Location,
    DetailsPricing,
    Photos,
    Submitting,
}

impl WizardStep {
    /// The four editable steps, in order.
    pub const EDITABLE: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::Location,
        WizardStep::DetailsPricing,
        WizardStep::Photos,
    ];

    /// 1-based step number; `Submitting` shares the last step's number.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Location => 2,
            WizardStep::DetailsPricing => 3,
            WizardStep::Photos | WizardStep::Submitting => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic info",
            WizardStep::Location => "Location",
            WizardStep::DetailsPricing => "Details & pricing",
            WizardStep::Photos => "Photos",
            WizardStep::Submitting => "Submitting",
        }
    }

    fn following(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::DetailsPricing),
            WizardStep::DetailsPricing => Some(WizardStep::Photos),
            WizardStep::Photos | WizardStep::Submitting => None,
        }
    }

    fn preceding(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo | WizardStep::Submitting => None,
            WizardStep::Location => Some(WizardStep::BasicInfo),
            WizardStep::DetailsPricing => Some(WizardStep::Location),
            WizardStep::Photos => Some(WizardStep::DetailsPricing),
        }
    }
}

/// Wizard state: current step, the draft, staged images and the inline error.
pub struct PropertyWizard<P: PreviewUrls> {
    step: WizardStep,
    draft: PropertyDraft,
    staging: ImageStaging<P>,
    error: Option<StepError>,
}

impl<P: PreviewUrls> PropertyWizard<P> {
    pub fn new(previews: Rc<P>) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft: PropertyDraft::default(),
            staging: ImageStaging::new(previews),
            error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &PropertyDraft {
        &self.draft
    }

    /// Field edits. Never re-validates confirmed steps.
    pub fn draft_mut(&mut self) -> &mut PropertyDraft {
        &mut self.draft
    }

    pub fn error(&self) -> Option<&StepError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.step == WizardStep::Submitting
    }

    pub fn images(&self) -> &[StagedImage<P>] {
        self.staging.images()
    }

    /// Validate the current step and advance on success.
    pub fn next(&mut self) -> Result<WizardStep, StepError> {
        let result = validate_step(self.step, &self.draft, self.staging.len()).and_then(|()| {
            self.step.following().ok_or(StepError::NoNextStep)
        });

        match result {
            Ok(step) => {
                self.step = step;
                self.error = None;
                Ok(step)
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Go back one step, clearing any displayed error.
    ///
    /// Returns `false` on the first step and while submitting.
    pub fn previous(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.error = None;
        match self.step.preceding() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Stage a selection batch; locked while submitting.
    pub fn stage_images<I>(&mut self, batch: I) -> StageReport
    where
        I: IntoIterator<Item = P::File>,
    {
        if self.is_submitting() {
            return StageReport::default();
        }
        let report = self.staging.stage(batch);
        if report.accepted > 0 && matches!(self.error, Some(StepError::NotEnoughImages { .. })) {
            self.error = None;
        }
        report
    }

    pub fn remove_image(&mut self, index: usize) -> Option<P::File> {
        if self.is_submitting() {
            return None;
        }
        self.staging.remove(index)
    }

    /// Validate the photos step and enter `Submitting`.
    ///
    /// The returned request holds clones; the wizard keeps its draft and
    /// images until [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<SubmissionRequest<P::File>, StepError> {
        let checked = match self.step {
            WizardStep::Submitting => Err(StepError::SubmissionInProgress),
            WizardStep::Photos => validate_step(WizardStep::Photos, &self.draft, self.staging.len()),
            _ => Err(StepError::NoNextStep),
        };

        if let Err(e) = checked {
            if e != StepError::SubmissionInProgress {
                self.error = Some(e.clone());
            }
            return Err(e);
        }

        self.error = None;
        self.step = WizardStep::Submitting;
        Ok(SubmissionRequest {
            draft: self.draft.clone(),
            files: self.staging.files(),
        })
    }

    /// Leave `Submitting`.
    ///
    /// On success the draft and images are discarded and the wizard starts
    /// over; on failure it returns to the photos step untouched so the
    /// owner can retry.
    pub fn finish_submit(&mut self, result: &SubmitResult) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(_) => self.reset(),
            Err(_) => self.step = WizardStep::Photos,
        }
    }

    /// Discard the draft and release every preview.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.staging.clear();
        self.draft = PropertyDraft::default();
        self.error = None;
        self.step = WizardStep::BasicInfo;
    }
}

#[cfg(test)]
mod tests {
    use super::staging::testing::{five_photos, FakeFile, FakePreviews};
    use super::*;
    use crate::models::PropertyType;
    use crate::types::AppError;

    fn wizard() -> (PropertyWizard<FakePreviews>, Rc<FakePreviews>) {
        let previews = Rc::new(FakePreviews::default());
        (PropertyWizard::new(Rc::clone(&previews)), previews)
    }

    fn fill_basic(w: &mut PropertyWizard<FakePreviews>) {
        let d = w.draft_mut();
        d.title_ar = "شقة فاخرة جدا".into();
        d.description_ar = "ش".repeat(60);
        d.property_type = Some(PropertyType::Villa);
    }

    fn advance_to_photos(w: &mut PropertyWizard<FakePreviews>) {
        fill_basic(w);
        w.next().unwrap();
        w.draft_mut().governorate = "Alexandria".into();
        w.draft_mut().city = "Marina".into();
        w.next().unwrap();
        w.draft_mut().price_per_night = 2000.0;
        w.next().unwrap();
        assert_eq!(w.step(), WizardStep::Photos);
    }

    #[test]
    fn test_next_blocked_until_step_valid() {
        let (mut w, _) = wizard();

        assert_eq!(w.next(), Err(StepError::TitleArMissing));
        assert_eq!(w.step(), WizardStep::BasicInfo);
        assert_eq!(w.error(), Some(&StepError::TitleArMissing));

        fill_basic(&mut w);
        assert_eq!(w.next(), Ok(WizardStep::Location));
        assert!(w.error().is_none());
    }

    #[test]
    fn test_previous_clears_error() {
        let (mut w, _) = wizard();
        fill_basic(&mut w);
        w.next().unwrap();

        assert!(w.next().is_err());
        assert!(w.error().is_some());

        assert!(w.previous());
        assert_eq!(w.step(), WizardStep::BasicInfo);
        assert!(w.error().is_none());
        assert!(!w.previous());
    }

    #[test]
    fn test_earlier_steps_not_revalidated() {
        let (mut w, _) = wizard();
        fill_basic(&mut w);
        w.next().unwrap();

        // Breaking step 1 after confirming it does not block step 2
        w.draft_mut().title_ar.clear();
        w.draft_mut().governorate = "Cairo".into();
        w.draft_mut().city = "Zamalek".into();
        assert_eq!(w.next(), Ok(WizardStep::DetailsPricing));
    }

    #[test]
    fn test_price_gate_ignores_other_numbers() {
        let (mut w, _) = wizard();
        fill_basic(&mut w);
        w.next().unwrap();
        w.draft_mut().governorate = "Giza".into();
        w.draft_mut().city = "Dokki".into();
        w.next().unwrap();

        w.draft_mut().bedrooms = 0;
        w.draft_mut().max_guests = 0;
        assert_eq!(w.next(), Err(StepError::PriceNotPositive));

        w.draft_mut().price_per_night = 1.0;
        assert_eq!(w.next(), Ok(WizardStep::Photos));
    }

    #[test]
    fn test_photos_step_has_no_next() {
        let (mut w, _) = wizard();
        advance_to_photos(&mut w);
        w.stage_images(five_photos());
        assert_eq!(w.next(), Err(StepError::NoNextStep));
        assert_eq!(w.step(), WizardStep::Photos);
    }

    #[test]
    fn test_begin_submit_requires_five_images() {
        let (mut w, _) = wizard();
        advance_to_photos(&mut w);

        w.stage_images(five_photos().into_iter().take(4));
        assert_eq!(
            w.begin_submit().unwrap_err(),
            StepError::NotEnoughImages { min: 5, staged: 4 }
        );
        assert_eq!(w.step(), WizardStep::Photos);

        w.stage_images(vec![FakeFile::image("extra.jpg", 1024)]);
        assert!(w.error().is_none());
        let request = w.begin_submit().unwrap();
        assert_eq!(request.files.len(), 5);
        assert_eq!(request.draft.city, "Marina");
        assert!(w.is_submitting());
    }

    #[test]
    fn test_begin_submit_only_from_photos() {
        let (mut w, _) = wizard();
        fill_basic(&mut w);
        assert_eq!(w.begin_submit().unwrap_err(), StepError::NoNextStep);
        assert_eq!(w.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_submitting_locks_wizard() {
        let (mut w, previews) = wizard();
        advance_to_photos(&mut w);
        w.stage_images(five_photos());
        w.begin_submit().unwrap();

        assert_eq!(w.begin_submit().unwrap_err(), StepError::SubmissionInProgress);
        assert!(!w.previous());
        assert!(w.remove_image(0).is_none());
        assert_eq!(w.stage_images(five_photos()), StageReport::default());
        assert!(previews.revoked.borrow().is_empty());
    }

    #[test]
    fn test_failed_submit_preserves_draft() {
        let (mut w, previews) = wizard();
        advance_to_photos(&mut w);
        w.stage_images(five_photos());
        w.begin_submit().unwrap();

        w.finish_submit(&Err(SubmitError::CreateFailed(AppError::Network("offline".into()))));

        assert_eq!(w.step(), WizardStep::Photos);
        assert_eq!(w.draft().city, "Marina");
        assert_eq!(w.images().len(), 5);
        assert!(previews.revoked.borrow().is_empty());
        // Retry is allowed without re-entering anything
        assert!(w.begin_submit().is_ok());
    }

    #[test]
    fn test_successful_submit_discards_everything() {
        let (mut w, previews) = wizard();
        advance_to_photos(&mut w);
        w.stage_images(five_photos());
        w.begin_submit().unwrap();

        w.finish_submit(&Ok(SubmitOutcome {
            property_id: "prop-1".into(),
            images_uploaded: 5,
        }));

        assert_eq!(w.step(), WizardStep::BasicInfo);
        assert_eq!(w.draft(), &PropertyDraft::default());
        assert!(w.images().is_empty());
        assert_eq!(previews.revoked.borrow().len(), 5);
        assert!(previews.live().is_empty());
    }

    #[test]
    fn test_cancel_and_teardown_release_previews_once() {
        let (mut w, previews) = wizard();
        advance_to_photos(&mut w);
        w.stage_images(five_photos());
        w.remove_image(2);

        w.cancel();
        assert_eq!(w.step(), WizardStep::BasicInfo);
        drop(w);

        assert_eq!(previews.revoked.borrow().len(), 5);
        assert!(previews.live().is_empty());
    }

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<usize> = WizardStep::EDITABLE.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(WizardStep::Submitting.number(), 4);
    }
}
