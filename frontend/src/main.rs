mod components;
mod hooks;
mod services;

use shared::FormMode;
use yew::prelude::*;

use components::navbar::Navbar;
use components::student_form::StudentFormPage;
use components::student_table::StudentListPage;
use components::student_view::StudentViewPage;

/// Which screen the app is showing. Navigation is state-driven; every
/// completed or abandoned form lands back on the list, which re-fetches
/// on entry.
#[derive(Debug, Clone, Copy, PartialEq)]
enum AppView {
    List,
    Create,
    Edit(i64),
    View(i64),
}

#[function_component(App)]
fn app() -> Html {
    let view = use_state(|| AppView::List);

    let go_home = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(AppView::List))
    };
    let go_create = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(AppView::Create))
    };
    let go_edit = {
        let view = view.clone();
        Callback::from(move |student_id: i64| view.set(AppView::Edit(student_id)))
    };
    let go_view = {
        let view = view.clone();
        Callback::from(move |student_id: i64| view.set(AppView::View(student_id)))
    };

    html! {
        <>
            <Navbar on_home={go_home.clone()} on_add={go_create} />
            {match *view {
                AppView::List => html! {
                    <StudentListPage on_view={go_view} on_edit={go_edit} />
                },
                AppView::Create => html! {
                    <StudentFormPage mode={FormMode::Create} on_done={go_home.clone()} />
                },
                AppView::Edit(student_id) => html! {
                    <StudentFormPage
                        mode={FormMode::Edit}
                        student_id={Some(student_id)}
                        on_done={go_home.clone()}
                    />
                },
                AppView::View(student_id) => html! {
                    <StudentViewPage {student_id} on_back={go_home.clone()} />
                },
            }}
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
