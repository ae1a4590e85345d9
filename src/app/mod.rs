pub mod app;
#[cfg(test)]
mod app_tests;
pub mod buffer;
pub mod event;
pub mod mode;
pub mod render_state;

pub use app::App;
pub use buffer::InputBuffer;
pub use event::AppEvent;
pub use mode::AppMode;
pub use render_state::RenderState;
