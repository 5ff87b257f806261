//! Sections of the main window

pub mod about;
pub mod activity_log;
pub mod feed_form;
pub mod manual_form;

pub use about::render_about;
pub use activity_log::render_activity_log;
pub use feed_form::render_feed_section;
pub use manual_form::render_manual_section;
