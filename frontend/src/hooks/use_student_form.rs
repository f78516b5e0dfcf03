use gloo::dialogs::alert;
use shared::{validate, Domain, FormMode, StudentDraft, StudentField, StudentPayload};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::services::api::{ApiClient, ApiError};

/// What the form markup renders: the draft, its reference data, and the
/// per-field error state. None of it outlives the form session; the
/// transient photograph attachment stays inside the hook.
#[derive(Clone, PartialEq)]
pub struct StudentFormState {
    pub draft: StudentDraft,
    pub domains: Vec<Domain>,
    pub loading: bool,
    pub submitting: bool,
    pub email_error: Option<String>,
}

#[derive(Clone)]
pub struct StudentFormActions {
    pub edit_field: Callback<(StudentField, String)>,
    pub attach_photograph: Callback<Option<File>>,
    pub submit: Callback<()>,
}

pub struct UseStudentFormResult {
    pub state: StudentFormState,
    pub actions: StudentFormActions,
}

/// Binds the draft pipeline to one form instance. Create mode starts
/// from an empty template; edit mode reconciles the fetched record into
/// the draft. `on_done` leaves the form and returns to the list.
#[hook]
pub fn use_student_form(
    api_client: &ApiClient,
    mode: FormMode,
    student_id: Option<i64>,
    on_done: Callback<()>,
) -> UseStudentFormResult {
    let draft = use_state(StudentDraft::default);
    let domains = use_state(Vec::<Domain>::new);
    let photograph = use_state(|| Option::<File>::None);
    let loading = use_state(|| mode == FormMode::Edit);
    let submitting = use_state(|| false);
    let email_error = use_state(|| Option::<String>::None);

    // One fetch per form session: the selectable domains, plus the record
    // itself in edit mode. A failed record fetch is fatal for the edit
    // flow and returns to the list; a failed domain fetch only empties
    // the selectable list.
    {
        let api_client = api_client.clone();
        let draft = draft.clone();
        let domains = domains.clone();
        let loading = loading.clone();
        let on_done = on_done.clone();

        use_effect_with(student_id, move |student_id| {
            let student_id = *student_id;
            spawn_local(async move {
                match api_client.get_domains().await {
                    Ok(list) => domains.set(list),
                    Err(e) => {
                        gloo::console::error!("Unable to load domains:", e.to_string());
                        alert("Unable to load domains. Please check that the backend is running.");
                        domains.set(Vec::new());
                    }
                }

                if let Some(id) = student_id {
                    match api_client.get_student(id).await {
                        Ok(record) => {
                            draft.set(StudentDraft::from_record(&record));
                            loading.set(false);
                        }
                        Err(e) => {
                            gloo::console::error!(
                                "Unable to load student details:",
                                e.to_string()
                            );
                            alert("Unable to load student details.");
                            on_done.emit(());
                        }
                    }
                }
            });
            || ()
        });
    }

    let edit_field = {
        let draft = draft.clone();
        let email_error = email_error.clone();

        Callback::from(move |(field, raw): (StudentField, String)| {
            // The user is actively correcting the address, so drop any
            // surfaced duplicate-email error.
            if field == StudentField::Email {
                email_error.set(None);
            }
            let mut next = (*draft).clone();
            if next.apply_edit(field, &raw, mode) {
                draft.set(next);
            }
        })
    };

    let attach_photograph = {
        let photograph = photograph.clone();
        Callback::from(move |file: Option<File>| photograph.set(file))
    };

    let submit = {
        let api_client = api_client.clone();
        let draft = draft.clone();
        let photograph = photograph.clone();
        let submitting = submitting.clone();
        let email_error = email_error.clone();
        let on_done = on_done.clone();

        Callback::from(move |_| {
            if *submitting {
                return;
            }

            let current_year = shared::current_calendar_year();
            if let Err(rule) = validate(&draft, mode, photograph.is_some(), current_year) {
                alert(&rule.to_string());
                return;
            }

            let payload = StudentPayload::from_draft(&draft);
            let file = (*photograph).clone();

            let api_client = api_client.clone();
            let submitting = submitting.clone();
            let email_error = email_error.clone();
            let on_done = on_done.clone();

            spawn_local(async move {
                submitting.set(true);
                email_error.set(None);

                let result = match student_id {
                    Some(id) => api_client.update_student(id, &payload, file.as_ref()).await,
                    None => api_client.create_student(&payload, file.as_ref()).await,
                };

                match result {
                    Ok(()) => on_done.emit(()),
                    Err(ApiError::EmailTaken) => {
                        email_error.set(Some(ApiError::EmailTaken.to_string()));
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to submit student:", e.to_string());
                        alert(match mode {
                            FormMode::Create => "Unable to register student. Please try again.",
                            FormMode::Edit => "Unable to update student. Please try again.",
                        });
                    }
                }

                submitting.set(false);
            });
        })
    };

    UseStudentFormResult {
        state: StudentFormState {
            draft: (*draft).clone(),
            domains: (*domains).clone(),
            loading: *loading,
            submitting: *submitting,
            email_error: (*email_error).clone(),
        },
        actions: StudentFormActions {
            edit_field,
            attach_photograph,
            submit,
        },
    }
}
