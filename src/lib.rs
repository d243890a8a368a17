pub use updraft_core::*;

#[cfg(feature = "server")]
pub mod server {
    pub use updraft_server::*;
}

#[cfg(feature = "fs")]
pub mod fs {
    pub use updraft_fs::*;
}

pub mod prelude {
    pub use updraft_core::prelude::*;

    #[cfg(feature = "server")]
    pub use updraft_server::prelude::*;

    #[cfg(feature = "fs")]
    pub use updraft_fs::FileSystemStore;
}
