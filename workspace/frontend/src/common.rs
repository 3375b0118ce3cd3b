pub mod error;
pub mod fetch_render;
pub mod loading;
pub mod toast;
