use crate::UpdraftServerConfig;
use updraft_core::traits::UpdateStore;

#[derive(Clone)]
pub struct AppState<S: UpdateStore> {
    pub store: S,
    pub config: UpdraftServerConfig,
}
