//! # Product Workflow State
//!
//! Drafts, submission phases and image previews for the create, edit and
//! delete flows.
//!
//! A selected image file lives as a [`PendingImage`]: the bytes to upload
//! plus a [`PreviewHandle`] registered in the [`PreviewRegistry`]. Handles
//! are revoked when the submission resolves or the draft is torn down, so
//! `PreviewRegistry::live_count` returns to zero once nothing is pending.

use std::collections::HashSet;

use shared::{split_list, NewProduct, Product, ProductPatch};
use uuid::Uuid;

use crate::services::api::Attachment;
use crate::utils::validation::{
    parse_amount, parse_category, parse_count, parse_optional_amount, require_text,
    ValidationErrors,
};

/// Brand prefilled on a fresh create form
pub const DEFAULT_BRAND: &str = "Culture's";

/// Local handle for an image preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(Uuid);

impl PreviewHandle {
    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Tracks preview handles that have been issued and not yet revoked.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    live: HashSet<PreviewHandle>,
}

impl PreviewRegistry {
    pub fn issue(&mut self) -> PreviewHandle {
        let handle = PreviewHandle(Uuid::new_v4());
        self.live.insert(handle);
        handle
    }

    /// Returns false if the handle was already revoked.
    pub fn revoke(&mut self, handle: PreviewHandle) -> bool {
        self.live.remove(&handle)
    }

    pub fn is_live(&self, handle: PreviewHandle) -> bool {
        self.live.contains(&handle)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// A selected file waiting to be uploaded.
#[derive(Debug, Clone)]
pub struct PendingImage {
    pub handle: PreviewHandle,
    pub attachment: Attachment,
}

impl PendingImage {
    /// Register a preview for `attachment`.
    pub fn select(registry: &mut PreviewRegistry, attachment: Attachment) -> Self {
        Self {
            handle: registry.issue(),
            attachment,
        }
    }

    pub fn discard(self, registry: &mut PreviewRegistry) {
        registry.revoke(self.handle);
    }
}

/// Submission phase of one form.
///
/// Success and failure both land back on `Idle`; the outcome is reported
/// through the form's error field and the notification queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

impl Phase {
    pub fn is_submitting(self) -> bool {
        self == Phase::Submitting
    }
}

/// Raw text of the create form, as typed.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub discount_price: String,
    pub category: String,
    pub brand: String,
    pub stock: String,
    /// Comma separated
    pub sizes: String,
    /// Comma separated
    pub colors: String,
    /// Comma separated URLs of already hosted images
    pub image_urls: String,
    pub attachments: Vec<PendingImage>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            discount_price: String::new(),
            category: String::new(),
            brand: DEFAULT_BRAND.to_string(),
            stock: String::new(),
            sizes: String::new(),
            colors: String::new(),
            image_urls: String::new(),
            attachments: Vec::new(),
        }
    }
}

impl ProductDraft {
    /// Check every field and build the request body.
    pub fn validate(&self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.check(require_text("name", &self.name));
        let description = errors.check(require_text("description", &self.description));
        let price = errors.check(parse_amount("price", &self.price));
        let discount_price = errors.check(parse_optional_amount("discountPrice", &self.discount_price));
        let category = errors.check(parse_category("category", &self.category));
        let stock = errors.check(parse_count("stock", &self.stock));

        match (name, description, price, discount_price, category, stock) {
            (Some(name), Some(description), Some(price), Some(discount_price), Some(category), Some(stock))
                if errors.is_empty() =>
            {
                let brand = self.brand.trim();
                Ok(NewProduct {
                    name,
                    description,
                    price,
                    discount_price,
                    category,
                    brand: if brand.is_empty() { DEFAULT_BRAND } else { brand }.to_string(),
                    stock,
                    sizes: split_list(&self.sizes),
                    colors: split_list(&self.colors),
                    images: split_list(&self.image_urls),
                })
            }
            _ => Err(errors),
        }
    }

    /// Attachments to upload alongside the body, in selection order.
    pub fn attachment_payload(&self) -> Vec<Attachment> {
        self.attachments
            .iter()
            .map(|pending| pending.attachment.clone())
            .collect()
    }

    /// Revoke every pending preview.
    pub fn discard_attachments(&mut self, registry: &mut PreviewRegistry) {
        for pending in self.attachments.drain(..) {
            pending.discard(registry);
        }
    }
}

/// Create form: draft plus submission state.
#[derive(Debug, Default)]
pub struct CreateForm {
    pub draft: ProductDraft,
    pub phase: Phase,
    pub errors: ValidationErrors,
    pub error: Option<String>,
}

/// What the edit form shows as the product image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    None,
    Remote(String),
    Local(PreviewHandle),
}

/// Edit form seeded from a product snapshot.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub new_image: Option<PendingImage>,
    pub preview: Preview,
    remote_preview: Option<String>,
}

impl EditDraft {
    pub fn from_product(product: &Product) -> Self {
        let remote_preview = product.cover_image().map(str::to_string);
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: product.category.as_str().to_string(),
            stock: product.stock.to_string(),
            new_image: None,
            preview: remote_preview
                .clone()
                .map(Preview::Remote)
                .unwrap_or(Preview::None),
            remote_preview,
        }
    }

    /// Swap in a new image, revoking any previously selected one.
    pub fn replace_image(&mut self, registry: &mut PreviewRegistry, attachment: Attachment) {
        self.discard_image(registry);
        let pending = PendingImage::select(registry, attachment);
        self.preview = Preview::Local(pending.handle);
        self.new_image = Some(pending);
    }

    /// Drop the selected image and fall back to the product's own preview.
    pub fn discard_image(&mut self, registry: &mut PreviewRegistry) {
        if let Some(pending) = self.new_image.take() {
            pending.discard(registry);
        }
        self.preview = self
            .remote_preview
            .clone()
            .map(Preview::Remote)
            .unwrap_or(Preview::None);
    }

    /// Check the editable fields and build the patch.
    pub fn to_patch(&self) -> Result<ProductPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.check(require_text("name", &self.name));
        let description = errors.check(require_text("description", &self.description));
        let price = errors.check(parse_amount("price", &self.price));
        let category = errors.check(parse_category("category", &self.category));
        let stock = errors.check(parse_count("stock", &self.stock));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductPatch {
            product_id: self.product_id.clone(),
            name,
            description,
            price,
            category,
            stock,
        })
    }
}

/// The single edit slot.
#[derive(Debug, Clone, Default)]
pub enum EditorSlot {
    #[default]
    NoDraft,
    Editing(EditDraft),
}

impl EditorSlot {
    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditorSlot::Editing(draft) => Some(draft),
            EditorSlot::NoDraft => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match self {
            EditorSlot::Editing(draft) => Some(draft),
            EditorSlot::NoDraft => None,
        }
    }

    /// Close the slot, revoking the pending image if there is one.
    pub fn clear(&mut self, registry: &mut PreviewRegistry) {
        if let EditorSlot::Editing(mut draft) = std::mem::take(self) {
            draft.discard_image(registry);
        }
    }
}

#[derive(Debug, Default)]
pub struct Editor {
    pub slot: EditorSlot,
    pub phase: Phase,
    pub errors: ValidationErrors,
    pub error: Option<String>,
}

/// Product the admin asked to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub name: String,
}

/// Delete confirmation modal.
#[derive(Debug, Default)]
pub struct DeleteConfirm {
    pub target: Option<DeleteTarget>,
    pub phase: Phase,
}

impl DeleteConfirm {
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }
}
