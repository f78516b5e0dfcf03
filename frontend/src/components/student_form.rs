use shared::{FormMode, StudentField};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_student_form::use_student_form;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct StudentFormPageProps {
    pub mode: FormMode,
    #[prop_or_default]
    pub student_id: Option<i64>,
    /// Leaves the form and returns to the list (save, cancel, or a fatal
    /// edit-load failure).
    pub on_done: Callback<()>,
}

fn input_callback(
    edit_field: &Callback<(StudentField, String)>,
    field: StudentField,
) -> Callback<Event> {
    let edit_field = edit_field.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        edit_field.emit((field, input.value()));
    })
}

fn select_callback(
    edit_field: &Callback<(StudentField, String)>,
    field: StudentField,
) -> Callback<Event> {
    let edit_field = edit_field.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        edit_field.emit((field, select.value()));
    })
}

/// The one form, shared by the create and edit flows; everything
/// mode-specific comes out of the draft pipeline and the props.
#[function_component(StudentFormPage)]
pub fn student_form_page(props: &StudentFormPageProps) -> Html {
    let api_client = ApiClient::new();
    let form = use_student_form(
        &api_client,
        props.mode,
        props.student_id,
        props.on_done.clone(),
    );
    let editing = props.mode == FormMode::Edit;
    let current_year = shared::current_calendar_year();

    if form.state.loading {
        return html! {
            <div class="container">
                <div class="banner info">{"Loading student details..."}</div>
            </div>
        };
    }

    let draft = &form.state.draft;

    let on_first_name_change = input_callback(&form.actions.edit_field, StudentField::FirstName);
    let on_last_name_change = input_callback(&form.actions.edit_field, StudentField::LastName);
    let on_email_change = input_callback(&form.actions.edit_field, StudentField::Email);
    let on_cgpa_change = input_callback(&form.actions.edit_field, StudentField::Cgpa);
    let on_credits_change = input_callback(&form.actions.edit_field, StudentField::TotalCredits);
    let on_specialisation_change =
        input_callback(&form.actions.edit_field, StudentField::SpecialisationId);
    let on_placement_change = input_callback(&form.actions.edit_field, StudentField::PlacementId);
    let on_domain_change = select_callback(&form.actions.edit_field, StudentField::DomainId);
    let on_year_change = select_callback(&form.actions.edit_field, StudentField::GraduationYear);

    let on_photo_change = {
        let attach_photograph = form.actions.attach_photograph.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            attach_photograph.emit(input.files().and_then(|files| files.get(0)));
        })
    };

    let on_submit = {
        let submit = form.actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_cancel = {
        let on_done = props.on_done.clone();
        Callback::from(move |_: MouseEvent| on_done.emit(()))
    };

    let email_class = if form.state.email_error.is_some() {
        "form-control invalid"
    } else {
        "form-control"
    };

    html! {
        <div class="container">
            <div class="form-card">
                <div class="form-card-header">
                    <h2>{if editing { "Edit Student" } else { "Register Student" }}</h2>
                    <p class="muted">
                        {if editing { "Update student details below" } else { "Enter student details below" }}
                    </p>
                    {if editing {
                        html! {
                            <div class="current-photo">
                                {if let Some(id) = props.student_id {
                                    html! { <img class="student-photo large" src={api_client.photo_url(id)} alt="Current" /> }
                                } else { html! {} }}
                                {if !draft.roll_number.is_empty() {
                                    html! { <span class="badge">{draft.roll_number.clone()}</span> }
                                } else { html! {} }}
                            </div>
                        }
                    } else { html! {} }}
                </div>

                <form onsubmit={on_submit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="first-name">{"First Name *"}</label>
                            <input
                                type="text"
                                id="first-name"
                                class="form-control"
                                placeholder="Enter first name"
                                value={draft.first_name.clone()}
                                onchange={on_first_name_change}
                            />
                        </div>
                        <div class="form-group">
                            <label for="last-name">{"Last Name *"}</label>
                            <input
                                type="text"
                                id="last-name"
                                class="form-control"
                                placeholder="Enter last name"
                                value={draft.last_name.clone()}
                                onchange={on_last_name_change}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email *"}</label>
                        <input
                            type="email"
                            id="email"
                            class={email_class}
                            placeholder="name@example.com"
                            value={draft.email.clone()}
                            onchange={on_email_change}
                        />
                        {if let Some(error) = form.state.email_error.as_ref() {
                            html! { <div class="field-error">{error}</div> }
                        } else { html! {} }}
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="cgpa">{"CGPA *"}</label>
                            <input
                                type="number"
                                id="cgpa"
                                class="form-control"
                                placeholder="e.g. 8.5"
                                step="0.01"
                                min="0"
                                max="10"
                                value={draft.cgpa.clone()}
                                onchange={on_cgpa_change}
                            />
                        </div>
                        <div class="form-group">
                            <label for="total-credits">{"Total Credits *"}</label>
                            <input
                                type="number"
                                id="total-credits"
                                class="form-control"
                                placeholder="e.g. 80"
                                min="0"
                                value={draft.total_credits.clone()}
                                onchange={on_credits_change}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="domain">{"Domain / Program *"}</label>
                        <select
                            id="domain"
                            class="form-control"
                            disabled={editing}
                            onchange={on_domain_change}
                        >
                            <option value="" selected={draft.domain_id.is_empty()}>
                                {"Select Domain"}
                            </option>
                            {for form.state.domains.iter().map(|domain| {
                                let value = domain.id.to_string();
                                let selected = draft.domain_id == value;
                                html! {
                                    <option value={value} selected={selected}>
                                        {&domain.program}
                                    </option>
                                }
                            })}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="graduation-year">{"Graduation Year *"}</label>
                        <select
                            id="graduation-year"
                            class="form-control"
                            onchange={on_year_change}
                        >
                            <option value="" selected={draft.graduation_year.is_empty()}>
                                {"Select Graduation Year"}
                            </option>
                            {for shared::graduation_years(current_year).into_iter().map(|year| {
                                let value = year.to_string();
                                let selected = draft.graduation_year == value;
                                html! {
                                    <option value={value.clone()} selected={selected}>
                                        {value}
                                    </option>
                                }
                            })}
                        </select>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="specialisation">{"Specialisation ID (optional)"}</label>
                            <input
                                type="number"
                                id="specialisation"
                                class="form-control"
                                min="1"
                                value={draft.specialisation_id.clone()}
                                onchange={on_specialisation_change}
                            />
                        </div>
                        <div class="form-group">
                            <label for="placement">{"Placement ID (optional)"}</label>
                            <input
                                type="number"
                                id="placement"
                                class="form-control"
                                min="1"
                                value={draft.placement_id.clone()}
                                onchange={on_placement_change}
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="photograph">
                            {if editing { "Update Photograph" } else { "Photograph *" }}
                        </label>
                        <input
                            type="file"
                            id="photograph"
                            class="form-control"
                            accept="image/*"
                            onchange={on_photo_change}
                        />
                        {if editing {
                            html! { <small class="muted">{"Leave blank to keep the current photo."}</small> }
                        } else { html! {} }}
                    </div>

                    <div class="form-buttons">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={form.state.submitting}
                        >
                            {match (editing, form.state.submitting) {
                                (true, true) => "Updating...",
                                (true, false) => "Update Student",
                                (false, true) => "Submitting...",
                                (false, false) => "Register Student",
                            }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
