pub mod id;
pub mod lenient;
pub mod name;
pub mod parse;
pub mod throttle;
