mod remote;
mod session;

pub use self::remote::RemoteState;
pub use self::session::{Role, SessionContext};
