use gloo::dialogs::{alert, confirm};
use shared::StudentRecord;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// The last successfully fetched collection plus its fetch status. A
/// fetch failure is a distinct state from an empty list.
#[derive(Clone, PartialEq)]
pub struct StudentListState {
    pub students: Vec<StudentRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct StudentListActions {
    pub delete_student: Callback<i64>,
}

pub struct UseStudentListResult {
    pub state: StudentListState,
    pub actions: StudentListActions,
}

#[hook]
pub fn use_student_list(api_client: &ApiClient) -> UseStudentListResult {
    let students = use_state(Vec::<StudentRecord>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let reload = {
        let api_client = api_client.clone();
        let students = students.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let students = students.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.get_students().await {
                    Ok(list) => {
                        students.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!("Unable to fetch students:", e.to_string());
                        error.set(Some(
                            "Unable to fetch students right now. Please try again.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Confirmation comes first: declining issues no request at all. A
    // confirmed delete removes the record locally by id with no
    // re-fetch; on failure the collection is left untouched.
    let delete_student = {
        let api_client = api_client.clone();
        let students = students.clone();

        Callback::from(move |student_id: i64| {
            if !confirm("Are you sure you want to delete this student?") {
                return;
            }
            let api_client = api_client.clone();
            let students = students.clone();

            spawn_local(async move {
                match api_client.delete_student(student_id).await {
                    Ok(()) => {
                        let remaining = students
                            .iter()
                            .filter(|record| record.id != student_id)
                            .cloned()
                            .collect::<Vec<_>>();
                        students.set(remaining);
                    }
                    Err(e) => {
                        gloo::console::error!("Unable to delete student:", e.to_string());
                        alert("Unable to delete student. Please try again.");
                    }
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    UseStudentListResult {
        state: StudentListState {
            students: (*students).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        actions: StudentListActions { delete_student },
    }
}
