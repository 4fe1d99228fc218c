use crate::{
    abstract_trait::{DynFileStorage, DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
    storage::ImageStorage,
};
use anyhow::Result;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub image_storage: DynFileStorage,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config: DynJwtService = Arc::new(JwtConfig::new(&config.jwt_secret));
        let hash: DynHashing = Arc::new(Hashing::new());
        let image_storage: DynFileStorage = Arc::new(ImageStorage::new(
            &config.upload_dir,
            &config.public_base_url,
        ));

        let deps = DependenciesInjectDeps {
            pool,
            hash,
            jwt_config: jwt_config.clone(),
            storage: image_storage.clone(),
        };

        let di_container = DependenciesInject::new(deps);

        Ok(Self {
            di_container,
            jwt_config,
            image_storage,
        })
    }
}
