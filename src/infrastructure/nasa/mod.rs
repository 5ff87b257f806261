pub mod feed_client;

pub use feed_client::{FEED_DATE_FORMAT, NasaNeoFeedClient, parse_feed_body};
