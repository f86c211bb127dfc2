//! Wizard step table and per-step validation.
//!
//! Steps are a fixed ordered table; each one carries a kind tag selecting
//! which field group it edits. Render and validation logic dispatch on the
//! tag, so adding a step is a data change rather than a code change.

use std::fmt;

use thiserror::Error;

use crate::application::ApplicationForm;

/// Which field group a step edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    VisaType,
    Personal,
    Travel,
    Passport,
    /// Informational, no fields.
    Review,
    /// Informational, no fields.
    Confirmation,
}

impl StepKind {
    /// Informational steps collect no input and are always valid.
    pub fn is_informational(&self) -> bool {
        matches!(self, StepKind::Review | StepKind::Confirmation)
    }

    /// Check the fields this step requires, reporting every missing one.
    pub fn validate(&self, form: &ApplicationForm) -> Result<(), Vec<FormField>> {
        let mut missing = Vec::new();
        match self {
            StepKind::VisaType => {
                if form.visa_type.is_none() {
                    missing.push(FormField::VisaType);
                }
            }
            StepKind::Personal => {
                if form.personal.full_name.trim().is_empty() {
                    missing.push(FormField::FullName);
                }
                if form.personal.email.trim().is_empty() {
                    missing.push(FormField::Email);
                }
                if form.personal.citizenship.trim().is_empty() {
                    missing.push(FormField::Citizenship);
                }
            }
            StepKind::Travel => {
                if form.travel.purpose.trim().is_empty() {
                    missing.push(FormField::TravelPurpose);
                }
                if form.travel.arrival_date.trim().is_empty() {
                    missing.push(FormField::ArrivalDate);
                }
            }
            StepKind::Passport => {
                if form.passport.number.trim().is_empty() {
                    missing.push(FormField::PassportNumber);
                }
                if form.passport.expiry_date.trim().is_empty() {
                    missing.push(FormField::PassportExpiry);
                }
            }
            StepKind::Review | StepKind::Confirmation => {}
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

/// A required field a validation pass found empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    VisaType,
    FullName,
    Email,
    Citizenship,
    TravelPurpose,
    ArrivalDate,
    PassportNumber,
    PassportExpiry,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::VisaType => "visa type",
            FormField::FullName => "full name",
            FormField::Email => "email",
            FormField::Citizenship => "citizenship",
            FormField::TravelPurpose => "purpose of travel",
            FormField::ArrivalDate => "arrival date",
            FormField::PassportNumber => "passport number",
            FormField::PassportExpiry => "passport expiry date",
        };
        f.write_str(label)
    }
}

/// One entry in the wizard's ordered step table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based position, contiguous
    pub order: u32,
    pub kind: StepKind,
    pub title: &'static str,
    pub description: &'static str,
}

static STEPS: [Step; 6] = [
    Step {
        order: 1,
        kind: StepKind::VisaType,
        title: "Select Visa Type",
        description: "Choose the visa category that matches your trip",
    },
    Step {
        order: 2,
        kind: StepKind::Personal,
        title: "Personal Information",
        description: "Tell us who is applying",
    },
    Step {
        order: 3,
        kind: StepKind::Travel,
        title: "Travel Details",
        description: "Describe the purpose and dates of your visit",
    },
    Step {
        order: 4,
        kind: StepKind::Passport,
        title: "Passport Information",
        description: "Enter the passport you will travel on",
    },
    Step {
        order: 5,
        kind: StepKind::Review,
        title: "Review Application",
        description: "Check your details before submission",
    },
    Step {
        order: 6,
        kind: StepKind::Confirmation,
        title: "Ready for Submission",
        description: "Your application is complete and ready to submit",
    },
];

/// The full ordered step table.
pub fn steps() -> &'static [Step] {
    &STEPS
}

/// Total number of steps.
pub fn step_count() -> u32 {
    STEPS.len() as u32
}

/// Look up a step by its 1-based order.
pub fn step_at(order: u32) -> Result<&'static Step, StepError> {
    if order == 0 || order > step_count() {
        return Err(StepError::OutOfRange {
            order,
            count: step_count(),
        });
    }
    Ok(&STEPS[(order - 1) as usize])
}

/// Requesting a step outside the table is a programming error, not a user-facing
/// condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("step {order} is outside the table (1..={count})")]
    OutOfRange { order: u32, count: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::VisaTypeId;

    fn filled_personal_form() -> ApplicationForm {
        let mut form = ApplicationForm::default();
        form.personal.full_name = "Jane Doe".to_string();
        form.personal.email = "jane@x.com".to_string();
        form.personal.citizenship = "US".to_string();
        form
    }

    #[test]
    fn step_table_is_contiguous_from_one() {
        for (i, step) in steps().iter().enumerate() {
            assert_eq!(step.order, i as u32 + 1);
        }
        assert_eq!(step_count(), 6);
    }

    #[test]
    fn step_at_zero_and_past_end_are_out_of_range() {
        assert!(matches!(step_at(0), Err(StepError::OutOfRange { .. })));
        assert!(matches!(step_at(7), Err(StepError::OutOfRange { .. })));
        assert_eq!(step_at(6).unwrap().kind, StepKind::Confirmation);
    }

    #[test]
    fn visa_type_step_requires_a_selection() {
        let mut form = ApplicationForm::default();
        assert_eq!(
            StepKind::VisaType.validate(&form),
            Err(vec![FormField::VisaType])
        );

        form.visa_type = Some(VisaTypeId::Tourist.offering());
        assert_eq!(StepKind::VisaType.validate(&form), Ok(()));
    }

    #[test]
    fn personal_step_reports_every_missing_field() {
        let form = ApplicationForm::default();
        assert_eq!(
            StepKind::Personal.validate(&form),
            Err(vec![
                FormField::FullName,
                FormField::Email,
                FormField::Citizenship
            ])
        );
    }

    #[test]
    fn personal_step_passes_with_required_fields_only() {
        let form = filled_personal_form();
        assert_eq!(StepKind::Personal.validate(&form), Ok(()));
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut form = filled_personal_form();
        form.personal.email = "   ".to_string();
        assert_eq!(
            StepKind::Personal.validate(&form),
            Err(vec![FormField::Email])
        );
    }

    #[test]
    fn travel_step_requires_purpose_and_arrival() {
        let mut form = ApplicationForm::default();
        form.travel.purpose = "Visiting family".to_string();
        assert_eq!(
            StepKind::Travel.validate(&form),
            Err(vec![FormField::ArrivalDate])
        );

        form.travel.arrival_date = "2026-09-01".to_string();
        assert_eq!(StepKind::Travel.validate(&form), Ok(()));
    }

    #[test]
    fn passport_step_requires_number_and_expiry() {
        let mut form = ApplicationForm::default();
        form.passport.number = "X1234567".to_string();
        form.passport.expiry_date = "2030-01-01".to_string();
        assert_eq!(StepKind::Passport.validate(&form), Ok(()));
    }

    #[test]
    fn informational_steps_are_always_valid() {
        let blank = ApplicationForm::default();
        assert_eq!(StepKind::Review.validate(&blank), Ok(()));
        assert_eq!(StepKind::Confirmation.validate(&blank), Ok(()));
        assert!(StepKind::Review.is_informational());
        assert!(!StepKind::Passport.is_informational());
    }
}
