mod http;
mod logs;

pub use self::http::{build_http_client, ensure_success};
pub use self::logs::init_logger;
