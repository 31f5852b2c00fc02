pub mod app;
pub mod canvas;
pub mod indicator;
pub mod theme;
