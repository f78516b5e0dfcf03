use yew::prelude::*;

use crate::hooks::use_student_list::use_student_list;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct StudentListPageProps {
    pub on_view: Callback<i64>,
    pub on_edit: Callback<i64>,
}

#[function_component(StudentListPage)]
pub fn student_list_page(props: &StudentListPageProps) -> Html {
    let api_client = ApiClient::new();
    let list = use_student_list(&api_client);
    let current_year = shared::current_calendar_year();

    let body = if list.state.loading {
        html! { <div class="banner info">{"Loading students..."}</div> }
    } else if let Some(error) = list.state.error.as_ref() {
        html! { <div class="banner error">{error}</div> }
    } else {
        html! {
            <div class="table-container">
                <table class="students-table">
                    <thead>
                        <tr>
                            <th>{"#"}</th>
                            <th>{"Roll Number"}</th>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Program"}</th>
                            <th>{"Photograph"}</th>
                            <th class="actions">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {if list.state.students.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="7" class="empty-state">
                                        {"No students registered yet."}
                                    </td>
                                </tr>
                            }
                        } else { html! {} }}
                        {for list.state.students.iter().enumerate().map(|(index, record)| {
                            let on_view = {
                                let on_view = props.on_view.clone();
                                let id = record.id;
                                Callback::from(move |_: MouseEvent| on_view.emit(id))
                            };
                            let on_edit = {
                                let on_edit = props.on_edit.clone();
                                let id = record.id;
                                Callback::from(move |_: MouseEvent| on_edit.emit(id))
                            };
                            let on_delete = {
                                let delete_student = list.actions.delete_student.clone();
                                let id = record.id;
                                Callback::from(move |_: MouseEvent| delete_student.emit(id))
                            };

                            let name = record.full_name();
                            let photo = if record.photograph_path.is_some() {
                                let alt = format!(
                                    "Photograph of {}",
                                    record.first_name.as_deref().unwrap_or("student")
                                );
                                html! {
                                    <img
                                        class="student-photo"
                                        src={api_client.photo_url(record.id)}
                                        alt={alt}
                                    />
                                }
                            } else {
                                html! { <div class="photo-placeholder"></div> }
                            };

                            html! {
                                <tr key={record.id}>
                                    <th>{index + 1}</th>
                                    <td>{record.roll_number.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{if name.is_empty() { "-".to_string() } else { name }}</td>
                                    <td>{record.email.clone().unwrap_or_default()}</td>
                                    <td>
                                        {match record.domain_program.as_ref() {
                                            Some(program) => html! {
                                                <span class="badge">
                                                    {format!("{} ({})", program, current_year)}
                                                </span>
                                            },
                                            None => html! { {"N/A"} },
                                        }}
                                    </td>
                                    <td class="photo-cell">{photo}</td>
                                    <td class="actions">
                                        <button class="btn btn-small" onclick={on_view}>{"View"}</button>
                                        <button class="btn btn-small" onclick={on_edit}>{"Edit"}</button>
                                        <button class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="container">
            <div class="page-header">
                <h2>{"Registered Students"}</h2>
            </div>
            {body}
        </div>
    }
}
