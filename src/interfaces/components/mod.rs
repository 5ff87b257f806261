pub mod card;
pub mod metrics;

pub use card::Card;
pub use metrics::{render_metric, render_notice, render_status_pill, render_verdict};
