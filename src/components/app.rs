use super::{
    board_canvas::BoardCanvas, controls_panel::ControlsPanel, result_modal::ResultModal,
    status_bar::StatusBar,
};
use crate::config::GameConfig;
use crate::error::AppError;
use crate::model::{ComputerTicket, Game, GameAction};
use crate::util::random_seed;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: GameConfig,
}

type ArmedTimer = (web_sys::Window, i32, Closure<dyn FnMut()>);

/// Arms a one-shot timer that hands `ticket` back to the reducer after `delay_ms`.
fn arm_computer_move(
    ticket: ComputerTicket,
    delay_ms: i32,
    dispatcher: UseReducerDispatcher<Game>,
) -> Result<ArmedTimer, AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::Dom("no window".into()))?;
    let tick = Closure::wrap(Box::new(move || {
        dispatcher.dispatch(GameAction::ComputerMove {
            ticket,
            seed: random_seed(),
        });
    }) as Box<dyn FnMut()>);
    let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    Ok((window, id, tick))
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let game = use_reducer(Game::new);

    // One timer per pending ticket; a new ticket or unmount cancels the old one.
    {
        let dispatcher = game.dispatcher();
        let delay_ms = props.config.computer_delay_ms;
        use_effect_with(game.pending_computer_move(), move |pending| {
            let armed = (*pending).and_then(|ticket| {
                arm_computer_move(ticket, delay_ms, dispatcher)
                    .map_err(|e| tracing::warn!(error = %e, "computer move not scheduled"))
                    .ok()
            });
            move || {
                if let Some((window, id, tick)) = armed {
                    window.clear_timeout_with_handle(id);
                    drop(tick);
                }
            }
        });
    }

    let restart = {
        let dispatcher = game.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(GameAction::Start { seed: random_seed() }))
    };

    let message = game.message().to_string();
    html! {
        <div id="root" style="position:relative; display:flex; flex-direction:column; align-items:center;">
            <StatusBar message={message.clone()} />
            <BoardCanvas game={game.clone()} config={props.config.clone()} />
            <ControlsPanel on_reset={restart.clone()} />
            <ResultModal show={game.is_over()} {message} play_again={restart} />
        </div>
    }
}
