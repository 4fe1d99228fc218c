use crate::{
    abstract_trait::{
        DynFileStorage, DynProductCommandRepository, DynProductQueryRepository,
        ProductCommandServiceTrait,
    },
    domain::{
        requests::{AuthContext, CreateProductRequest, ImageUpload, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::ServiceError,
    service::access::require_catalog_admin,
    utils::slugify,
};
use async_trait::async_trait;
use tracing::{error, info};

/// Admin-gated catalog mutations.
///
/// Every write re-derives `product_url` from the submitted name, and image
/// files are cleaned up after the database write succeeds: the update path
/// reads the record first and removes the image it *previously* pointed at,
/// never the one just assigned.
pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    storage: DynFileStorage,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        storage: DynFileStorage,
    ) -> Self {
        Self {
            query,
            command,
            storage,
        }
    }

    async fn store_upload(&self, upload: Option<ImageUpload>) -> Result<String, ServiceError> {
        match upload {
            Some(upload) => {
                let stored = self.storage.save(&upload).await?;
                Ok(stored.public_url)
            }
            None => Ok(String::new()),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        identity: Option<&AuthContext>,
        req: &CreateProductRequest,
        upload: Option<ImageUpload>,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        require_catalog_admin(identity)?;

        info!("🏗️ Creating new product: {}", req.name);

        let image_url = self.store_upload(upload).await?;
        let product_url = slugify(&req.name);

        let product = self
            .command
            .create_product(req, &product_url, &image_url)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product: {err:?}");
                ServiceError::Repo(err)
            })?;

        let response = ProductResponse::from(product);

        info!(
            "✅ Product created successfully: {} (ID: {})",
            response.name, response.id,
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: response,
        })
    }

    async fn update_product(
        &self,
        identity: Option<&AuthContext>,
        req: &UpdateProductRequest,
        upload: Option<ImageUpload>,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        require_catalog_admin(identity)?;

        let id = req
            .id
            .ok_or_else(|| ServiceError::Custom("Product ID is required".to_string()))?;

        info!("✏️ Updating product with ID: {id}");

        // read-before-write: the image to clean up is the one the record
        // pointed at before this update
        let previous = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {id} not found")))?;

        // no new file clears the image, matching the public API
        let image_url = self.store_upload(upload).await?;
        let product_url = slugify(&req.name);

        let updated = self
            .command
            .update_product(id, req, &product_url, &image_url)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product: {err:?}");
                ServiceError::Repo(err)
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {id} not found")))?;

        if !previous.image_url.is_empty() && previous.image_url != updated.image_url {
            self.storage.remove_by_url(&previous.image_url).await;
        }

        let response = ProductResponse::from(updated);

        info!(
            "✅ Product updated successfully: {} (ID: {})",
            response.name, response.id,
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: response,
        })
    }

    async fn delete_product(
        &self,
        identity: Option<&AuthContext>,
        id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        require_catalog_admin(identity)?;

        info!("🗑️ Deleting product with ID: {id}");

        let deleted = self
            .command
            .delete_product(id)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product {id}: {err:?}");
                ServiceError::Repo(err)
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {id} not found")))?;

        if !deleted.image_url.is_empty() {
            self.storage.remove_by_url(&deleted.image_url).await;
        }

        info!("✅ Product deleted: ID {id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: ProductResponse::from(deleted),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            FileStorageTrait, ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
            StoredImage,
        },
        errors::RepositoryError,
        model::{Product, ProductWithCategory},
        service::access::MSG_NOT_ADMIN,
    };
    use std::{
        path::PathBuf,
        sync::{Arc, Mutex},
    };

    fn product(id: i32, name: &str, image_url: &str) -> Product {
        Product {
            product_id: id,
            name: name.to_string(),
            brand: "Bio Farm".to_string(),
            price: 1200,
            category_id: 1,
            description: String::new(),
            product_url: slugify(name),
            image_url: image_url.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    struct FakeQueryRepo {
        existing: Option<Product>,
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for FakeQueryRepo {
        async fn find_all(&self) -> Result<Vec<ProductWithCategory>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(self.existing.clone())
        }

        async fn find_by_url(&self, _url: &str) -> Result<Option<Product>, RepositoryError> {
            Ok(self.existing.clone())
        }
    }

    /// Records what the service asked it to persist and answers with a row
    /// echoing the derived fields.
    #[derive(Default)]
    struct FakeCommandRepo {
        last_write: Mutex<Option<(String, String)>>,
        delete_result: Mutex<Option<Product>>,
    }

    #[async_trait]
    impl ProductCommandRepositoryTrait for FakeCommandRepo {
        async fn create_product(
            &self,
            req: &CreateProductRequest,
            product_url: &str,
            image_url: &str,
        ) -> Result<Product, RepositoryError> {
            *self.last_write.lock().unwrap() =
                Some((product_url.to_string(), image_url.to_string()));
            let mut p = product(1, &req.name, image_url);
            p.product_url = product_url.to_string();
            Ok(p)
        }

        async fn update_product(
            &self,
            id: i32,
            req: &UpdateProductRequest,
            product_url: &str,
            image_url: &str,
        ) -> Result<Option<Product>, RepositoryError> {
            *self.last_write.lock().unwrap() =
                Some((product_url.to_string(), image_url.to_string()));
            let mut p = product(id, &req.name, image_url);
            p.product_url = product_url.to_string();
            Ok(Some(p))
        }

        async fn delete_product(&self, _id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(self.delete_result.lock().unwrap().clone())
        }
    }

    #[derive(Default)]
    struct FakeStorage {
        removed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl FileStorageTrait for FakeStorage {
        async fn save(&self, upload: &ImageUpload) -> Result<StoredImage, ServiceError> {
            Ok(StoredImage {
                file_name: upload.file_name.clone(),
                public_url: format!("http://localhost:8080/uploads/{}", upload.file_name),
            })
        }

        async fn remove_by_url(&self, url: &str) {
            self.removed.lock().unwrap().push(url.to_string());
        }

        fn path_for_url(&self, _url: &str) -> Option<PathBuf> {
            None
        }
    }

    fn admin() -> AuthContext {
        AuthContext {
            user_id: 1,
            is_admin: true,
        }
    }

    fn service(
        existing: Option<Product>,
        deleted: Option<Product>,
    ) -> (ProductCommandService, Arc<FakeCommandRepo>, Arc<FakeStorage>) {
        let command = Arc::new(FakeCommandRepo {
            delete_result: Mutex::new(deleted),
            ..FakeCommandRepo::default()
        });
        let storage = Arc::new(FakeStorage::default());
        let svc = ProductCommandService::new(
            Arc::new(FakeQueryRepo { existing }),
            command.clone(),
            storage.clone(),
        );
        (svc, command, storage)
    }

    fn create_req(name: &str) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            brand: "Bio Farm".to_string(),
            price: 1200,
            category_id: 1,
            description: String::new(),
        }
    }

    fn update_req(id: i32, name: &str) -> UpdateProductRequest {
        UpdateProductRequest {
            id: Some(id),
            name: name.to_string(),
            brand: "Bio Farm".to_string(),
            price: 1200,
            category_id: 1,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn create_derives_slug_and_leaves_image_empty_without_upload() {
        let (svc, command, _storage) = service(None, None);

        let response = svc
            .create_product(Some(&admin()), &create_req("Görögdinnye Tál"), None)
            .await
            .unwrap();

        assert_eq!(response.data.product_url, "gorogdinnye-tal");
        assert_eq!(response.data.image_url, "");

        let (slug, image) = command.last_write.lock().unwrap().clone().unwrap();
        assert_eq!(slug, "gorogdinnye-tal");
        assert_eq!(image, "");
    }

    #[tokio::test]
    async fn create_with_upload_sets_public_url() {
        let (svc, _command, _storage) = service(None, None);

        let upload = ImageUpload {
            file_name: "dinnye.jpg".to_string(),
            bytes: vec![0],
        };
        let response = svc
            .create_product(Some(&admin()), &create_req("Dinnye"), Some(upload))
            .await
            .unwrap();

        assert_eq!(
            response.data.image_url,
            "http://localhost:8080/uploads/dinnye.jpg"
        );
    }

    #[tokio::test]
    async fn create_denies_non_admin_and_anonymous() {
        let (svc, command, _storage) = service(None, None);

        let customer = AuthContext {
            user_id: 2,
            is_admin: false,
        };

        match svc
            .create_product(Some(&customer), &create_req("Alma"), None)
            .await
        {
            Err(ServiceError::Forbidden(msg)) => assert_eq!(msg, MSG_NOT_ADMIN),
            other => panic!("unexpected: {other:?}"),
        }

        match svc.create_product(None, &create_req("Alma"), None).await {
            Err(ServiceError::Unauthenticated(msg)) => assert_eq!(msg, MSG_NOT_ADMIN),
            other => panic!("unexpected: {other:?}"),
        }

        assert!(command.last_write.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn update_removes_previous_image_not_the_new_one() {
        let old_url = "http://localhost:8080/uploads/old.jpg";
        let (svc, _command, storage) = service(Some(product(1, "Alma", old_url)), None);

        let upload = ImageUpload {
            file_name: "new.jpg".to_string(),
            bytes: vec![0],
        };
        let response = svc
            .update_product(Some(&admin()), &update_req(1, "Alma"), Some(upload))
            .await
            .unwrap();

        assert_eq!(
            response.data.image_url,
            "http://localhost:8080/uploads/new.jpg"
        );
        assert_eq!(*storage.removed.lock().unwrap(), vec![old_url.to_string()]);
    }

    #[tokio::test]
    async fn update_without_upload_clears_image_and_removes_old_file() {
        let old_url = "http://localhost:8080/uploads/old.jpg";
        let (svc, _command, storage) = service(Some(product(1, "Alma", old_url)), None);

        let response = svc
            .update_product(Some(&admin()), &update_req(1, "Alma"), None)
            .await
            .unwrap();

        assert_eq!(response.data.image_url, "");
        assert_eq!(*storage.removed.lock().unwrap(), vec![old_url.to_string()]);
    }

    #[tokio::test]
    async fn update_without_previous_image_removes_nothing() {
        let (svc, _command, storage) = service(Some(product(1, "Alma", "")), None);

        svc.update_product(Some(&admin()), &update_req(1, "Alma"), None)
            .await
            .unwrap();

        assert!(storage.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_product_is_not_found() {
        let (svc, _command, _storage) = service(None, None);

        assert!(matches!(
            svc.update_product(Some(&admin()), &update_req(9, "Alma"), None)
                .await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_cleans_up_image_when_present() {
        let url = "http://localhost:8080/uploads/kep.jpg";
        let (svc, _command, storage) = service(None, Some(product(3, "Dinnye", url)));

        let response = svc.delete_product(Some(&admin()), 3).await.unwrap();

        assert_eq!(response.data.id, 3);
        assert_eq!(*storage.removed.lock().unwrap(), vec![url.to_string()]);
    }

    #[tokio::test]
    async fn delete_with_empty_image_performs_no_file_operation() {
        let (svc, _command, storage) = service(None, Some(product(3, "Dinnye", "")));

        svc.delete_product(Some(&admin()), 3).await.unwrap();

        assert!(storage.removed.lock().unwrap().is_empty());
    }
}
