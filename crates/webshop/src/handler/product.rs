use crate::middleware::{identity_middleware, validate::format_validation_errors};
use axum::{
    Json,
    extract::{Extension, Multipart, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{AuthContext, CreateProductRequest, ImageUpload, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use validator::Validate;

/// Form fields of a multipart product submission. Everything is optional
/// while parsing; validation runs on the assembled request afterwards.
#[derive(Default)]
struct ProductForm {
    name: String,
    brand: String,
    price: i64,
    category_id: i32,
    description: String,
    image: Option<ImageUpload>,
}

async fn parse_product_form(mut multipart: Multipart) -> Result<ProductForm, HttpError> {
    let mut form = ProductForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::BadRequest(format!("Invalid multipart body: {err}")))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| HttpError::BadRequest(format!("Invalid upload: {err}")))?;
                // an empty file part means "no image"
                if !bytes.is_empty() {
                    form.image = Some(ImageUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            other => {
                let value = field
                    .text()
                    .await
                    .map_err(|err| HttpError::BadRequest(format!("Invalid field: {err}")))?;
                match other {
                    "name" => form.name = value,
                    "brand" => form.brand = value,
                    "price" => {
                        form.price = value.parse().map_err(|_| {
                            HttpError::BadRequest("price must be an integer".to_string())
                        })?;
                    }
                    "category_id" => {
                        form.category_id = value.parse().map_err(|_| {
                            HttpError::BadRequest("category_id must be an integer".to_string())
                        })?;
                    }
                    "description" => form.description = value,
                    _ => {}
                }
            }
        }
    }

    Ok(form)
}

#[utoipa::path(
    get,
    path = "/product",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/url/{product_url}",
    tag = "Product",
    params(("product_url" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product_by_url(
    Extension(service): Extension<DynProductQueryService>,
    Path(product_url): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_url(&product_url).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/product",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Extension(identity): Extension<Option<AuthContext>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let form = parse_product_form(multipart).await?;

    let body = CreateProductRequest {
        name: form.name,
        brand: form.brand,
        price: form.price,
        category_id: form.category_id,
        description: form.description,
    };
    body.validate()
        .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;

    let response = service
        .create_product(identity.as_ref(), &body, form.image)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Extension(identity): Extension<Option<AuthContext>>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let form = parse_product_form(multipart).await?;

    let body = UpdateProductRequest {
        id: Some(id),
        name: form.name,
        brand: form.brand,
        price: form.price,
        category_id: form.category_id,
        description: form.description,
    };
    body.validate()
        .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;

    let response = service
        .update_product(identity.as_ref(), &body, form.image)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<ProductResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Extension(identity): Extension<Option<AuthContext>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_product(identity.as_ref(), id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/product", get(get_products))
        .route("/product/{id}", get(get_product))
        .route("/product/url/{product_url}", get(get_product_by_url))
        .route("/product", post(create_product))
        .route("/product/{id}", put(update_product))
        .route("/product/{id}", delete(delete_product))
        .route_layer(middleware::from_fn(identity_middleware))
        .layer(Extension(app_state.di_container.product_query_service.clone()))
        .layer(Extension(app_state.di_container.product_command_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
