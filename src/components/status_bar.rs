use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBarProps {
    pub message: String,
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    html! {<div id="instruction" style="font-size:18px; margin:12px 0; min-height:24px; text-align:center;">
        { props.message.clone() }
    </div>}
}
