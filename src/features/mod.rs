pub mod idle_click;
pub mod shutdown;
