mod time;
pub use time::*;

mod redis;
pub use self::redis::*;
