use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::Datelike;

/// Reference data for the selectable program list. Fetched once per form
/// session and immutable within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: i64,
    pub program: String,
    pub qualification: String,
}

/// The authoritative, typed representation of a persisted student, as
/// returned by the backend. Numeric fields are true numbers; optional
/// references are null when unassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: i64,
    pub roll_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub photograph_path: Option<String>,
    pub cgpa: Option<f64>,
    pub total_credits: Option<i64>,
    pub graduation_year: Option<i32>,
    pub specialisation_id: Option<i64>,
    pub placement_id: Option<i64>,
    pub domain_id: Option<i64>,
    pub domain_program: Option<String>,
    pub domain_batch: Option<String>,
}

impl StudentRecord {
    /// Full name assembled from the non-empty name parts.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .iter()
            .flatten()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Which of the two form flows a draft belongs to. Create starts from an
/// empty template; edit starts from a reconciled record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// One editable field of a student draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    FirstName,
    LastName,
    Email,
    Cgpa,
    TotalCredits,
    GraduationYear,
    DomainId,
    SpecialisationId,
    PlacementId,
    RollNumber,
}

impl StudentField {
    /// Numeric-text fields are clamped by the normalizer; everything else
    /// passes through as typed.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            StudentField::Cgpa
                | StudentField::TotalCredits
                | StudentField::GraduationYear
                | StudentField::DomainId
                | StudentField::SpecialisationId
                | StudentField::PlacementId
        )
    }
}

/// The mutable, text-valued, form-resident representation of a student
/// being created or edited. Every scalar field is text because form
/// controls emit text; the normalizer keeps the numeric ones parseable.
///
/// The photograph attachment is held next to the draft by the form
/// binding, not inside it: the pipeline only needs its presence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub cgpa: String,
    pub total_credits: String,
    pub graduation_year: String,
    pub domain_id: String,
    pub specialisation_id: String,
    pub placement_id: String,
    /// Display-only in edit mode, never submitted.
    pub roll_number: String,
}

impl StudentDraft {
    /// Reconciles a fetched record into an editable draft: numbers become
    /// their shortest decimal text, absent optional references become
    /// empty text (never "0" or "null").
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            first_name: record.first_name.clone().unwrap_or_default(),
            last_name: record.last_name.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            cgpa: record.cgpa.map(|v| v.to_string()).unwrap_or_default(),
            total_credits: record
                .total_credits
                .map(|v| v.to_string())
                .unwrap_or_default(),
            graduation_year: record
                .graduation_year
                .map(|v| v.to_string())
                .unwrap_or_default(),
            domain_id: record.domain_id.map(|v| v.to_string()).unwrap_or_default(),
            specialisation_id: record
                .specialisation_id
                .map(|v| v.to_string())
                .unwrap_or_default(),
            placement_id: record
                .placement_id
                .map(|v| v.to_string())
                .unwrap_or_default(),
            roll_number: record.roll_number.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::FirstName => &self.first_name,
            StudentField::LastName => &self.last_name,
            StudentField::Email => &self.email,
            StudentField::Cgpa => &self.cgpa,
            StudentField::TotalCredits => &self.total_credits,
            StudentField::GraduationYear => &self.graduation_year,
            StudentField::DomainId => &self.domain_id,
            StudentField::SpecialisationId => &self.specialisation_id,
            StudentField::PlacementId => &self.placement_id,
            StudentField::RollNumber => &self.roll_number,
        }
    }

    pub fn set(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::FirstName => self.first_name = value,
            StudentField::LastName => self.last_name = value,
            StudentField::Email => self.email = value,
            StudentField::Cgpa => self.cgpa = value,
            StudentField::TotalCredits => self.total_credits = value,
            StudentField::GraduationYear => self.graduation_year = value,
            StudentField::DomainId => self.domain_id = value,
            StudentField::SpecialisationId => self.specialisation_id = value,
            StudentField::PlacementId => self.placement_id = value,
            StudentField::RollNumber => self.roll_number = value,
        }
    }

    /// Applies one field edit through the normalizer. Returns false when
    /// the edit is rejected, in which case the draft keeps its previous
    /// value. Edits to the domain are ignored entirely in edit mode: the
    /// domain is fixed at load time there.
    pub fn apply_edit(&mut self, field: StudentField, raw: &str, mode: FormMode) -> bool {
        if field == StudentField::DomainId && mode == FormMode::Edit {
            return false;
        }
        match normalize(field, raw) {
            Some(value) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }
}

/// Normalizes raw user input for one field.
///
/// Empty input always clears the field. Text fields pass through as typed
/// (trimming is deferred to submission). Numeric fields must parse to a
/// finite number or the edit is rejected (`None`) and the caller keeps
/// the previous value; accepted values are clamped to the field's closed
/// interval and re-rendered as decimal text, so applying `normalize` to
/// its own output is a fixed point.
pub fn normalize(field: StudentField, raw: &str) -> Option<String> {
    if !field.is_numeric() {
        return Some(raw.to_string());
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(String::new());
    }
    let value = trimmed.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let clamped = match field {
        StudentField::DomainId | StudentField::SpecialisationId | StudentField::PlacementId => {
            value.max(1.0)
        }
        StudentField::TotalCredits => value.max(0.0),
        StudentField::Cgpa => value.clamp(0.0, 10.0),
        // Upper bound is enforced only at submit time, against the
        // current calendar year.
        StudentField::GraduationYear => value.max(2000.0),
        _ => value,
    };
    Some(clamped.to_string())
}

/// A pre-submission rule violation. `Display` is the user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    MissingFirstName,
    MissingLastName,
    MissingEmail,
    MissingCgpa,
    MissingTotalCredits,
    MissingGraduationYear,
    /// Carries the current calendar year for the message.
    GraduationYearOutOfRange(i32),
    MissingDomain,
    MissingPhotograph,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingFirstName => write!(f, "First name is required"),
            DraftError::MissingLastName => write!(f, "Last name is required"),
            DraftError::MissingEmail => write!(f, "Email is required"),
            DraftError::MissingCgpa => write!(f, "CGPA is required"),
            DraftError::MissingTotalCredits => write!(f, "Total credits is required"),
            DraftError::MissingGraduationYear => write!(f, "Graduation year is required"),
            DraftError::GraduationYearOutOfRange(year) => {
                write!(f, "Graduation year must be between 2000 and {}", year)
            }
            DraftError::MissingDomain => write!(f, "Please select a domain"),
            DraftError::MissingPhotograph => {
                write!(f, "Photograph is required. Please upload a photo.")
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Validates a draft once at submission, short-circuiting on the first
/// failing rule in a fixed order so the user-facing error sequence is
/// deterministic. Create mode additionally requires a selected domain and
/// an attached photograph; in edit mode the domain is inherited and a
/// missing photograph means "keep the existing photo". Optional
/// references have no presence rule: when present they were already
/// range-clamped by the normalizer.
pub fn validate(
    draft: &StudentDraft,
    mode: FormMode,
    has_photograph: bool,
    current_year: i32,
) -> Result<(), DraftError> {
    if draft.first_name.trim().is_empty() {
        return Err(DraftError::MissingFirstName);
    }
    if draft.last_name.trim().is_empty() {
        return Err(DraftError::MissingLastName);
    }
    if draft.email.trim().is_empty() {
        return Err(DraftError::MissingEmail);
    }
    if draft.cgpa.is_empty() {
        return Err(DraftError::MissingCgpa);
    }
    if draft.total_credits.is_empty() {
        return Err(DraftError::MissingTotalCredits);
    }
    if draft.graduation_year.is_empty() {
        return Err(DraftError::MissingGraduationYear);
    }
    let graduation_year = draft.graduation_year.trim().parse::<f64>().unwrap_or(0.0);
    if graduation_year < 2000.0 || graduation_year > current_year as f64 {
        return Err(DraftError::GraduationYearOutOfRange(current_year));
    }
    if mode == FormMode::Create && draft.domain_id.is_empty() {
        return Err(DraftError::MissingDomain);
    }
    if mode == FormMode::Create && !has_photograph {
        return Err(DraftError::MissingPhotograph);
    }
    Ok(())
}

/// The structured sub-part of a submission: trimmed text plus true
/// numbers, with absent optional references serialized as explicit null.
/// The domain is always included, even in edit mode where the field is
/// read-only in the UI: the backend treats it as required on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub cgpa: f64,
    pub domain_id: i64,
    pub total_credits: i64,
    pub graduation_year: i32,
    pub specialisation_id: Option<i64>,
    pub placement_id: Option<i64>,
}

impl StudentPayload {
    /// Serializes a validated draft. Numeric text is coerced through a
    /// float parse so that integer-typed fields accept whatever decimal
    /// text the normalizer stored.
    pub fn from_draft(draft: &StudentDraft) -> Self {
        Self {
            first_name: draft.first_name.trim().to_string(),
            last_name: draft.last_name.trim().to_string(),
            email: draft.email.trim().to_string(),
            cgpa: parse_number(&draft.cgpa),
            domain_id: parse_number(&draft.domain_id) as i64,
            total_credits: parse_number(&draft.total_credits) as i64,
            graduation_year: parse_number(&draft.graduation_year) as i32,
            specialisation_id: parse_optional_id(&draft.specialisation_id),
            placement_id: parse_optional_id(&draft.placement_id),
        }
    }
}

fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

fn parse_optional_id(text: &str) -> Option<i64> {
    if text.trim().is_empty() {
        None
    } else {
        Some(parse_number(text) as i64)
    }
}

/// The current calendar year, used as the upper bound for graduation
/// years both in the selectable list and at validation.
pub fn current_calendar_year() -> i32 {
    chrono::Local::now().year()
}

/// Selectable graduation years, newest first, back to 2000.
pub fn graduation_years(current_year: i32) -> Vec<i32> {
    (2000..=current_year).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> StudentRecord {
        StudentRecord {
            id: 7,
            roll_number: Some("CS2021-014".to_string()),
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
            email: Some("a@b.com".to_string()),
            photograph_path: Some("/photos/7.png".to_string()),
            cgpa: Some(7.25),
            total_credits: Some(110),
            graduation_year: Some(2021),
            specialisation_id: Some(5),
            placement_id: None,
            domain_id: Some(2),
            domain_program: Some("Computer Science".to_string()),
            domain_batch: None,
        }
    }

    fn valid_create_draft() -> StudentDraft {
        StudentDraft {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "a@b.com".to_string(),
            cgpa: "8.5".to_string(),
            total_credits: "90".to_string(),
            graduation_year: "2024".to_string(),
            domain_id: "3".to_string(),
            ..StudentDraft::default()
        }
    }

    #[test]
    fn test_normalize_empty_input_clears_numeric_fields() {
        for field in [
            StudentField::Cgpa,
            StudentField::TotalCredits,
            StudentField::GraduationYear,
            StudentField::DomainId,
            StudentField::SpecialisationId,
            StudentField::PlacementId,
        ] {
            assert_eq!(normalize(field, ""), Some(String::new()));
            assert_eq!(normalize(field, "   "), Some(String::new()));
        }
    }

    #[test]
    fn test_normalize_rejects_non_numeric_input() {
        assert_eq!(normalize(StudentField::Cgpa, "abc"), None);
        assert_eq!(normalize(StudentField::TotalCredits, "12x"), None);
        assert_eq!(normalize(StudentField::DomainId, "one"), None);
        // Infinity parses as a float but is not a finite number.
        assert_eq!(normalize(StudentField::Cgpa, "inf"), None);
        assert_eq!(normalize(StudentField::TotalCredits, "NaN"), None);
    }

    #[test]
    fn test_normalize_clamps_cgpa_into_closed_interval() {
        assert_eq!(normalize(StudentField::Cgpa, "15"), Some("10".to_string()));
        assert_eq!(normalize(StudentField::Cgpa, "-2"), Some("0".to_string()));
        assert_eq!(normalize(StudentField::Cgpa, "8.5"), Some("8.5".to_string()));
        assert_eq!(normalize(StudentField::Cgpa, "0"), Some("0".to_string()));
        assert_eq!(normalize(StudentField::Cgpa, "10"), Some("10".to_string()));
    }

    #[test]
    fn test_normalize_clamps_references_to_at_least_one() {
        for field in [
            StudentField::DomainId,
            StudentField::SpecialisationId,
            StudentField::PlacementId,
        ] {
            assert_eq!(normalize(field, "0"), Some("1".to_string()));
            assert_eq!(normalize(field, "-5"), Some("1".to_string()));
            assert_eq!(normalize(field, "3"), Some("3".to_string()));
        }
    }

    #[test]
    fn test_normalize_clamps_credits_to_non_negative() {
        assert_eq!(
            normalize(StudentField::TotalCredits, "-10"),
            Some("0".to_string())
        );
        assert_eq!(
            normalize(StudentField::TotalCredits, "90"),
            Some("90".to_string())
        );
    }

    #[test]
    fn test_normalize_clamps_graduation_year_lower_bound_only() {
        assert_eq!(
            normalize(StudentField::GraduationYear, "1999"),
            Some("2000".to_string())
        );
        // The upper bound is a submit-time rule, not a keystroke rule.
        assert_eq!(
            normalize(StudentField::GraduationYear, "2150"),
            Some("2150".to_string())
        );
    }

    #[test]
    fn test_normalize_is_idempotent_for_numeric_fields() {
        let samples = ["15", "-2", "8.5", "0", "3", "90", "1999", "2150", ""];
        for field in [
            StudentField::Cgpa,
            StudentField::TotalCredits,
            StudentField::GraduationYear,
            StudentField::DomainId,
            StudentField::SpecialisationId,
            StudentField::PlacementId,
        ] {
            for raw in samples {
                let once = normalize(field, raw).unwrap();
                assert_eq!(normalize(field, &once), Some(once.clone()));
            }
        }
    }

    #[test]
    fn test_normalize_passes_text_fields_through_untrimmed() {
        // A transient leading space is legal mid-edit; trimming happens
        // at submission.
        assert_eq!(
            normalize(StudentField::FirstName, " Ann"),
            Some(" Ann".to_string())
        );
        assert_eq!(
            normalize(StudentField::Email, "a@b.com "),
            Some("a@b.com ".to_string())
        );
    }

    #[test]
    fn test_apply_edit_keeps_previous_value_on_rejection() {
        let mut draft = StudentDraft::default();
        assert!(draft.apply_edit(StudentField::Cgpa, "8.5", FormMode::Create));
        assert_eq!(draft.cgpa, "8.5");

        assert!(!draft.apply_edit(StudentField::Cgpa, "abc", FormMode::Create));
        assert_eq!(draft.get(StudentField::Cgpa), "8.5");
    }

    #[test]
    fn test_apply_edit_ignores_domain_in_edit_mode() {
        let mut draft = StudentDraft::from_record(&sample_record());
        assert!(!draft.apply_edit(StudentField::DomainId, "9", FormMode::Edit));
        assert_eq!(draft.domain_id, "2");

        let mut create_draft = StudentDraft::default();
        assert!(create_draft.apply_edit(StudentField::DomainId, "9", FormMode::Create));
        assert_eq!(create_draft.domain_id, "9");
    }

    #[test]
    fn test_validation_order_is_deterministic() {
        // Missing both first name and email: the first name rule wins.
        let draft = StudentDraft {
            last_name: "Lee".to_string(),
            ..StudentDraft::default()
        };
        assert_eq!(
            validate(&draft, FormMode::Create, true, 2024),
            Err(DraftError::MissingFirstName)
        );
    }

    #[test]
    fn test_validate_reports_each_missing_field_in_order() {
        let mut draft = StudentDraft::default();
        let year = 2024;

        let expected = [
            (StudentField::FirstName, DraftError::MissingFirstName),
            (StudentField::LastName, DraftError::MissingLastName),
            (StudentField::Email, DraftError::MissingEmail),
            (StudentField::Cgpa, DraftError::MissingCgpa),
            (StudentField::TotalCredits, DraftError::MissingTotalCredits),
            (
                StudentField::GraduationYear,
                DraftError::MissingGraduationYear,
            ),
            (StudentField::DomainId, DraftError::MissingDomain),
        ];
        let fill = [
            (StudentField::FirstName, "Ann"),
            (StudentField::LastName, "Lee"),
            (StudentField::Email, "a@b.com"),
            (StudentField::Cgpa, "8.5"),
            (StudentField::TotalCredits, "90"),
            (StudentField::GraduationYear, "2024"),
            (StudentField::DomainId, "3"),
        ];

        for (i, (_, error)) in expected.iter().enumerate() {
            assert_eq!(
                validate(&draft, FormMode::Create, false, year),
                Err(error.clone())
            );
            let (field, value) = fill[i];
            assert!(draft.apply_edit(field, value, FormMode::Create));
        }

        // Everything present except the photograph.
        assert_eq!(
            validate(&draft, FormMode::Create, false, year),
            Err(DraftError::MissingPhotograph)
        );
        assert_eq!(validate(&draft, FormMode::Create, true, year), Ok(()));
    }

    #[test]
    fn test_validate_checks_graduation_year_range_at_submit() {
        let mut draft = valid_create_draft();
        draft.graduation_year = "2150".to_string();
        assert_eq!(
            validate(&draft, FormMode::Create, true, 2024),
            Err(DraftError::GraduationYearOutOfRange(2024))
        );

        draft.graduation_year = "1999".to_string();
        assert_eq!(
            validate(&draft, FormMode::Create, true, 2024),
            Err(DraftError::GraduationYearOutOfRange(2024))
        );

        draft.graduation_year = "2000".to_string();
        assert_eq!(validate(&draft, FormMode::Create, true, 2024), Ok(()));
        draft.graduation_year = "2024".to_string();
        assert_eq!(validate(&draft, FormMode::Create, true, 2024), Ok(()));
    }

    #[test]
    fn test_validate_embeds_current_year_in_range_message() {
        assert_eq!(
            DraftError::GraduationYearOutOfRange(2024).to_string(),
            "Graduation year must be between 2000 and 2024"
        );
    }

    #[test]
    fn test_validate_create_requires_photograph() {
        // The scenario draft from the rule set: complete except for the
        // photograph.
        let draft = valid_create_draft();
        assert_eq!(
            validate(&draft, FormMode::Create, false, 2024),
            Err(DraftError::MissingPhotograph)
        );
        assert_eq!(validate(&draft, FormMode::Create, true, 2024), Ok(()));
    }

    #[test]
    fn test_validate_edit_skips_photograph_and_domain() {
        let mut draft = valid_create_draft();
        draft.domain_id = String::new();
        // No photograph means "keep the existing photo"; the domain is
        // inherited and immutable, so neither rule applies in edit mode.
        assert_eq!(validate(&draft, FormMode::Edit, false, 2024), Ok(()));
    }

    #[test]
    fn test_serialize_scenario_payload() {
        let payload = StudentPayload::from_draft(&valid_create_draft());
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "firstName": "Ann",
                "lastName": "Lee",
                "email": "a@b.com",
                "cgpa": 8.5,
                "domainId": 3,
                "totalCredits": 90,
                "graduationYear": 2024,
                "specialisationId": null,
                "placementId": null,
            })
        );
    }

    #[test]
    fn test_serialize_trims_text_fields() {
        let mut draft = valid_create_draft();
        draft.first_name = " Ann ".to_string();
        draft.email = "a@b.com ".to_string();
        let payload = StudentPayload::from_draft(&draft);
        assert_eq!(payload.first_name, "Ann");
        assert_eq!(payload.email, "a@b.com");
    }

    #[test]
    fn test_serialize_maps_empty_optional_references_to_null() {
        let mut draft = valid_create_draft();
        let payload = StudentPayload::from_draft(&draft);
        assert_eq!(payload.specialisation_id, None);
        assert_eq!(payload.placement_id, None);

        draft.specialisation_id = "4".to_string();
        draft.placement_id = "12".to_string();
        let payload = StudentPayload::from_draft(&draft);
        assert_eq!(payload.specialisation_id, Some(4));
        assert_eq!(payload.placement_id, Some(12));
    }

    #[test]
    fn test_reconcile_record_into_draft() {
        let draft = StudentDraft::from_record(&sample_record());
        assert_eq!(draft.first_name, "Ann");
        assert_eq!(draft.last_name, "Lee");
        assert_eq!(draft.email, "a@b.com");
        assert_eq!(draft.cgpa, "7.25");
        assert_eq!(draft.total_credits, "110");
        assert_eq!(draft.graduation_year, "2021");
        assert_eq!(draft.domain_id, "2");
        assert_eq!(draft.specialisation_id, "5");
        // Absent optional references become empty text, not "0" or "null".
        assert_eq!(draft.placement_id, "");
        assert_eq!(draft.roll_number, "CS2021-014");
    }

    #[test]
    fn test_reconcile_then_serialize_round_trips_numeric_fields() {
        let record = sample_record();
        let payload = StudentPayload::from_draft(&StudentDraft::from_record(&record));
        assert_eq!(Some(payload.cgpa), record.cgpa);
        assert_eq!(Some(payload.total_credits), record.total_credits);
        assert_eq!(Some(payload.graduation_year), record.graduation_year);
        assert_eq!(Some(payload.domain_id), record.domain_id);
        assert_eq!(payload.specialisation_id, record.specialisation_id);
        assert_eq!(payload.placement_id, record.placement_id);
    }

    #[test]
    fn test_record_parses_backend_json() {
        let record: StudentRecord = serde_json::from_str(
            r#"{
                "id": 3,
                "rollNumber": "CS2022-001",
                "firstName": "Ben",
                "lastName": "Ray",
                "email": "ben@example.com",
                "photographPath": null,
                "cgpa": 9.0,
                "totalCredits": 120,
                "graduationYear": 2022,
                "specialisationId": null,
                "placementId": null,
                "domainId": 1,
                "domainProgram": "Computer Science",
                "domainBatch": "2022"
            }"#,
        )
        .unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.cgpa, Some(9.0));
        assert_eq!(record.specialisation_id, None);
        assert_eq!(record.domain_program.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_record_full_name_skips_empty_parts() {
        let mut record = sample_record();
        assert_eq!(record.full_name(), "Ann Lee");

        record.last_name = None;
        assert_eq!(record.full_name(), "Ann");

        record.first_name = Some("  ".to_string());
        assert_eq!(record.full_name(), "");
    }

    #[test]
    fn test_graduation_years_run_newest_first_back_to_2000() {
        let years = graduation_years(2024);
        assert_eq!(years.first(), Some(&2024));
        assert_eq!(years.last(), Some(&2000));
        assert_eq!(years.len(), 25);
    }

    #[test]
    fn test_draft_error_messages() {
        assert_eq!(DraftError::MissingFirstName.to_string(), "First name is required");
        assert_eq!(DraftError::MissingCgpa.to_string(), "CGPA is required");
        assert_eq!(
            DraftError::MissingPhotograph.to_string(),
            "Photograph is required. Please upload a photo."
        );
        assert_eq!(
            DraftError::MissingDomain.to_string(),
            "Please select a domain"
        );
    }
}
