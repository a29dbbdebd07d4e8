use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::GameConfig;
use crate::error::AppError;
use crate::input::{KeyCommand, cell_index};
use crate::model::{Game, GameAction};
use crate::render::{self, CanvasSurface};

#[derive(Properties, PartialEq, Clone)]
pub struct BoardCanvasProps {
    pub game: UseReducerHandle<Game>,
    pub config: GameConfig,
}

fn draw(canvas_ref: &NodeRef, game: &Game, config: &GameConfig) -> Result<(), AppError> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| AppError::Canvas("canvas not mounted".into()))?;
    let mut surface = CanvasSurface::new(&canvas, config)?;
    render::redraw(&mut surface, game);
    Ok(())
}

/// Action for a `keydown` key. Every key that maps to an action is claimed:
/// its default is suppressed so Enter cannot also activate a focused button.
fn keydown_action(key: &str) -> Option<GameAction> {
    KeyCommand::from_key(key).map(|cmd| match cmd {
        KeyCommand::Move(direction) => GameAction::MoveCursor(direction),
        KeyCommand::Confirm => GameAction::Confirm,
    })
}

#[function_component(BoardCanvas)]
pub fn board_canvas(props: &BoardCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    // Full redraw whenever the game or the look changes.
    {
        let canvas_ref = canvas_ref.clone();
        let deps = ((*props.game).clone(), props.config.clone());
        use_effect_with(deps, move |(game, config)| {
            if let Err(e) = draw(&canvas_ref, game, config) {
                tracing::warn!(error = %e, "redraw skipped");
            }
            || ()
        });
    }

    // Keyboard: arrows move the cursor, Enter confirms.
    {
        let dispatcher = props.game.dispatcher();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                let Some(action) = keydown_action(&e.key()) else {
                    return;
                };
                e.prevent_default();
                dispatcher.dispatch(action);
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                if let Err(e) = win
                    .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .map_err(AppError::from)
                {
                    tracing::warn!(error = %e, "keyboard input unavailable");
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(keydown_cb);
            }
        });
    }

    let onclick = {
        let dispatcher = props.game.dispatcher();
        let cell_size = props.config.cell_size;
        Callback::from(move |e: MouseEvent| {
            match cell_index(e.offset_x() as f64, e.offset_y() as f64, cell_size) {
                Some(index) => dispatcher.dispatch(GameAction::Click { index }),
                None => tracing::debug!(x = e.offset_x(), y = e.offset_y(), "click outside grid"),
            }
        })
    };

    let px = props.config.board_px().to_string();
    html! {
        <canvas ref={canvas_ref} id="gameCanvas" width={px.clone()} height={px} {onclick}
            style="display:block; margin:0 auto; cursor:pointer;"></canvas>
    }
}
