use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |e: MouseEvent| {
            // Keep Enter for the board cursor instead of re-pressing Reset.
            if let Some(button) = e.target_dyn_into::<HtmlElement>() {
                let _ = button.blur();
            }
            cb.emit(())
        })
    };
    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:6px; margin-top:12px;">
        <button id="reset" onclick={reset_cb}>{"Reset"}</button>
        <div style="font-size:11px; opacity:0.7;">{"Arrow keys move the cursor, Enter places your mark"}</div>
    </div>}
}
