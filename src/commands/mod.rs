pub mod exec;
pub mod expand;
pub mod init;
pub mod intro;
pub mod status;
pub mod version;

pub use exec::*;
pub use expand::*;
pub use init::*;
pub use intro::*;
pub use status::*;
pub use version::*;
