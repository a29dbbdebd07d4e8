//! Board drawing. [`redraw`] talks to a [`Surface`]; the canvas
//! implementation lives in [`CanvasSurface`].

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::GameConfig;
use crate::error::AppError;
use crate::model::{CELL_COUNT, Game, GameStatus, Mark};

pub trait Surface {
    fn clear(&mut self);
    fn draw_grid_lines(&mut self);
    fn draw_mark(&mut self, index: usize, mark: Mark);
    fn draw_highlight(&mut self, index: usize);
}

/// Full redraw: background, grid, every mark, then the cursor highlight
/// once a game has been started.
pub fn redraw<S: Surface + ?Sized>(surface: &mut S, game: &Game) {
    surface.clear();
    surface.draw_grid_lines();
    let show_cursor = game.status() != GameStatus::NotStarted;
    for index in 0..CELL_COUNT {
        if let Some(mark) = game.board().get(index) {
            surface.draw_mark(index, mark);
        }
        if show_cursor && index == game.cursor() {
            surface.draw_highlight(index);
        }
    }
}

pub struct CanvasSurface<'a> {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    config: &'a GameConfig,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(canvas: &HtmlCanvasElement, config: &'a GameConfig) -> Result<Self, AppError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| AppError::Canvas("no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Canvas("context is not 2d".into()))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            config,
        })
    }

    fn cell_origin(&self, index: usize) -> (f64, f64) {
        let size = self.config.cell_size;
        ((index % 3) as f64 * size, (index / 3) as f64 * size)
    }
}

impl Surface for CanvasSurface<'_> {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_grid_lines(&mut self) {
        let size = self.config.cell_size;
        self.ctx.set_stroke_style_str(&self.config.line_color);
        self.ctx.set_line_width(1.0);
        for i in 1..3 {
            let at = i as f64 * size;
            self.ctx.begin_path();
            self.ctx.move_to(at, 0.0);
            self.ctx.line_to(at, self.height);
            self.ctx.move_to(0.0, at);
            self.ctx.line_to(self.width, at);
            self.ctx.stroke();
        }
    }

    fn draw_mark(&mut self, index: usize, mark: Mark) {
        let size = self.config.cell_size;
        let (x, y) = self.cell_origin(index);
        self.ctx.set_font(&self.config.font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&self.config.mark_color);
        self.ctx
            .fill_text(&mark.to_string(), x + size / 2.0, y + size / 2.0)
            .ok();
    }

    fn draw_highlight(&mut self, index: usize) {
        let size = self.config.cell_size;
        let (x, y) = self.cell_origin(index);
        self.ctx.set_stroke_style_str(&self.config.highlight_color);
        self.ctx.set_line_width(3.0);
        self.ctx.stroke_rect(x + 2.0, y + 2.0, size - 4.0, size - 4.0);
        self.ctx.set_line_width(1.0);
    }
}
