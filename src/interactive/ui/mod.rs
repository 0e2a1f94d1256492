pub mod app_state;
pub mod commands;
pub mod components;
pub mod events;
pub mod outside_click;
pub mod panel_view;
pub mod renderer;
