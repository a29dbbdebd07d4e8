pub mod app;
pub mod board_canvas;
pub mod controls_panel;
pub mod result_modal;
pub mod status_bar;
