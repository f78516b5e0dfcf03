use shared::StudentRecord;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct StudentViewPageProps {
    pub student_id: i64,
    pub on_back: Callback<()>,
}

#[function_component(StudentViewPage)]
pub fn student_view_page(props: &StudentViewPageProps) -> Html {
    let api_client = ApiClient::new();
    let record = use_state(|| Option::<StudentRecord>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let api_client = api_client.clone();
        let record = record.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.student_id, move |student_id| {
            let student_id = *student_id;
            spawn_local(async move {
                loading.set(true);
                match api_client.get_student(student_id).await {
                    Ok(fetched) => {
                        record.set(Some(fetched));
                        error.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!("Unable to fetch student:", e.to_string());
                        error.set(Some(
                            "Unable to fetch student details. Please try again later."
                                .to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let details = if *loading {
        html! { <div class="banner info">{"Loading student details..."}</div> }
    } else if let Some(error) = error.as_ref() {
        html! { <div class="banner error">{error}</div> }
    } else if let Some(record) = record.as_ref() {
        let photo = if record.photograph_path.is_some() {
            let alt = format!(
                "Photograph of {}",
                record.first_name.as_deref().unwrap_or("student")
            );
            html! {
                <img class="student-photo large" src={api_client.photo_url(record.id)} alt={alt} />
            }
        } else {
            html! { <div class="photo-placeholder large"></div> }
        };

        html! {
            <>
                <div class="view-identity">
                    {photo}
                    <h3>{record.full_name()}</h3>
                    <span class="badge">
                        {record.roll_number.clone().unwrap_or_else(|| "No Roll Number".to_string())}
                    </span>
                </div>

                <div class="view-details">
                    <div class="detail">
                        <span class="detail-label">{"Email"}</span>
                        <span>{record.email.clone().unwrap_or_default()}</span>
                    </div>
                    <div class="detail">
                        <span class="detail-label">{"CGPA"}</span>
                        <span>{record.cgpa.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())}</span>
                    </div>
                    <div class="detail">
                        <span class="detail-label">{"Total Credits"}</span>
                        <span>{record.total_credits.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())}</span>
                    </div>
                    <div class="detail">
                        <span class="detail-label">{"Graduation Year"}</span>
                        <span>{record.graduation_year.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())}</span>
                    </div>
                    <div class="detail">
                        <span class="detail-label">{"Domain / Program"}</span>
                        <span>{record.domain_program.clone().unwrap_or_else(|| "N/A".to_string())}</span>
                    </div>
                    <div class="detail">
                        <span class="detail-label">{"Specialisation ID"}</span>
                        <span>{record.specialisation_id.map(|v| v.to_string()).unwrap_or_else(|| "Not Assigned".to_string())}</span>
                    </div>
                    <div class="detail">
                        <span class="detail-label">{"Placement ID"}</span>
                        <span>{record.placement_id.map(|v| v.to_string()).unwrap_or_else(|| "Not Assigned".to_string())}</span>
                    </div>
                </div>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="container">
            <div class="form-card">
                <div class="form-card-header">
                    <h2>{"Student Details"}</h2>
                    <p class="muted">{"View student information"}</p>
                </div>
                {details}
                <div class="form-buttons">
                    <button class="btn btn-primary" onclick={on_back}>{"Back to Home"}</button>
                </div>
            </div>
        </div>
    }
}
