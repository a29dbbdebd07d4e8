use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultModalProps {
    pub show: bool,
    pub message: String,
    pub play_again: Callback<()>,
}

/// Shown only once the game has been won or drawn.
#[function_component]
pub fn ResultModal(props: &ResultModalProps) -> Html {
    if !props.show {
        return html! {};
    }
    let play_again_btn = {
        let cb = props.play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div id="result-modal" style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #DB7093; padding:24px 32px; border-radius:12px; text-align:center; min-width:240px; color:#fff;">
            <h2 style="margin:0 0 12px 0; color:#DB7093;">{ props.message.clone() }</h2>
            <button onclick={play_again_btn}>{"Play again"}</button>
        </div>
    }
}
