pub mod solve;

pub use solve::{run_session, TITLE};
