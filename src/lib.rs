pub mod app;
pub mod game;
pub mod games;
pub mod input;
pub mod logging;
pub mod ui;
