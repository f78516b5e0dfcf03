use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_home: Callback<()>,
    pub on_add: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_home = {
        let on_home = props.on_home.clone();
        Callback::from(move |_: MouseEvent| on_home.emit(()))
    };

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <nav class="navbar">
            <button class="navbar-brand" onclick={on_home}>
                {"Student Admission Portal"}
            </button>
            <button class="btn btn-primary navbar-action" onclick={on_add}>
                {"+ Add Student"}
            </button>
        </nav>
    }
}
