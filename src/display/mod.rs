pub mod canvas;
pub mod graphics;
pub mod renderer;
