//! # Product Endpoints
//!
//! Catalog listing and product create/update/delete.
//!
//! Create and update pick their body encoding from the payload: JSON when no
//! binary image is attached, multipart otherwise.

use reqwest::Method;
use shared::{
    Acknowledgement, DeleteProductRequest, NewProduct, Product, ProductListResponse, ProductPatch,
    ProductResponse, UpdateProductResponse,
};

use super::client::{decode, rejected, ApiClient, Attachment, MultipartBody, RequestBody};
use crate::core::error::TransportError;

/// Fetch the full catalog.
#[tracing::instrument(skip(client))]
pub async fn list_products(client: &ApiClient) -> Result<Vec<Product>, TransportError> {
    let start = std::time::Instant::now();
    let response = client
        .request(Method::GET, "/product/getAll-products", RequestBody::Empty)
        .await?;
    let status = response.status();

    let body = decode::<ProductListResponse>(response).await?;
    if !body.success {
        return Err(rejected(status, body.message, "Failed to load products"));
    }

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        product_count = body.product.len(),
        "Products fetched successfully"
    );
    Ok(body.product)
}

/// Create a product, uploading `attachments` as `images` parts when present.
#[tracing::instrument(skip(client, product, attachments), fields(name = %product.name, attachments = attachments.len()))]
pub async fn create_product(
    client: &ApiClient,
    product: NewProduct,
    attachments: Vec<Attachment>,
) -> Result<Product, TransportError> {
    let body = if attachments.is_empty() {
        RequestBody::json(&product)?
    } else {
        RequestBody::Multipart(new_product_form(&product, attachments))
    };

    let response = client
        .request(Method::POST, "/product/create-product", body)
        .await?;
    let status = response.status();

    let body = decode::<ProductResponse>(response).await?;
    match (body.success, body.product) {
        (true, Some(product)) => {
            tracing::info!(product_id = %product.id, "Product created");
            Ok(product)
        }
        (_, _) => Err(rejected(status, body.message, "Failed to create product")),
    }
}

/// Send a partial update. `image`, when present, replaces the product images.
#[tracing::instrument(skip(client, patch, image), fields(product_id = %patch.product_id, with_image = image.is_some()))]
pub async fn update_product(
    client: &ApiClient,
    patch: ProductPatch,
    image: Option<Attachment>,
) -> Result<Product, TransportError> {
    let body = match image {
        Some(image) => RequestBody::Multipart(patch_form(&patch).file("images", image)),
        None => RequestBody::json(&patch)?,
    };

    let response = client
        .request(Method::PUT, "/product/update-products", body)
        .await?;
    let status = response.status();

    let body = decode::<UpdateProductResponse>(response).await?;
    match (body.success, body.updated_product) {
        (true, Some(product)) => {
            tracing::info!(product_id = %product.id, "Product updated");
            Ok(product)
        }
        (_, _) => Err(rejected(status, body.message, "Update failed")),
    }
}

/// Delete a product by id.
#[tracing::instrument(skip(client))]
pub async fn delete_product(client: &ApiClient, product_id: String) -> Result<(), TransportError> {
    let body = RequestBody::json(&DeleteProductRequest { product_id })?;
    let response = client
        .request(Method::DELETE, "/product/delete-products", body)
        .await?;
    let status = response.status();

    let ack = decode::<Acknowledgement>(response).await?;
    if ack.success {
        tracing::info!("Product deleted");
        Ok(())
    } else {
        Err(rejected(status, ack.message, "Failed to delete product"))
    }
}

/// Multipart encoding of a create payload. List fields repeat their key.
pub(crate) fn new_product_form(product: &NewProduct, attachments: Vec<Attachment>) -> MultipartBody {
    let mut form = MultipartBody::new()
        .text("name", &product.name)
        .text("description", &product.description)
        .text("price", product.price)
        .text("category", product.category)
        .text("brand", &product.brand)
        .text("stock", product.stock);

    if let Some(discount) = product.discount_price {
        form = form.text("discountPrice", discount);
    }
    for size in &product.sizes {
        form = form.text("sizes", size);
    }
    for color in &product.colors {
        form = form.text("colors", color);
    }
    for url in &product.images {
        form = form.text("images", url);
    }
    for attachment in attachments {
        form = form.file("images", attachment);
    }
    form
}

/// Multipart encoding of a patch. Absent fields are not sent.
pub(crate) fn patch_form(patch: &ProductPatch) -> MultipartBody {
    let mut form = MultipartBody::new().text("productId", &patch.product_id);
    if let Some(name) = &patch.name {
        form = form.text("name", name);
    }
    if let Some(description) = &patch.description {
        form = form.text("description", description);
    }
    if let Some(price) = patch.price {
        form = form.text("price", price);
    }
    if let Some(category) = patch.category {
        form = form.text("category", category);
    }
    if let Some(stock) = patch.stock {
        form = form.text("stock", stock);
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Linen Shirt".to_string(),
            description: "Breathable".to_string(),
            price: 1299.0,
            discount_price: None,
            category: Category::Men,
            brand: "Culture's".to_string(),
            stock: 10,
            sizes: vec!["M".to_string(), "L".to_string()],
            colors: vec!["White".to_string()],
            images: vec![],
        }
    }

    #[test]
    fn create_form_repeats_list_fields_and_appends_files() {
        let form = new_product_form(
            &new_product(),
            vec![Attachment::new("front.jpg", "image/jpeg", vec![0xff, 0xd8])],
        );
        // name, description, price, category, brand, stock, 2 sizes, 1 color
        assert_eq!(form.field_count(), 9);
        assert_eq!(form.file_count(), 1);
    }

    #[test]
    fn patch_form_only_carries_present_fields() {
        let patch = ProductPatch {
            product_id: "p1".to_string(),
            stock: Some(3),
            ..Default::default()
        };
        let form = patch_form(&patch);
        assert_eq!(form.field_count(), 2);
        assert_eq!(form.file_count(), 0);
    }
}
