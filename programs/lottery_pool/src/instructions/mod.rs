pub mod draw;
pub mod enter;
pub mod initialize;
pub mod view;
