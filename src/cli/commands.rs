pub mod render_reports;
pub mod user_payload;

pub use render_reports::render_reports;
pub use user_payload::user_payload;
