//! # Product Handlers
//!
//! Create, edit and delete workflows. Each form allows one submission in
//! flight; the store is only touched once the server has answered (see the
//! event handler).

use crate::app::draft::{DeleteTarget, EditDraft, EditorSlot, PendingImage, Phase, PreviewHandle};
use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::store::{Entity, StoreError};
use crate::core::error::AppError;
use crate::services::api::Attachment;
use crate::utils::validation::ValidationErrors;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::Product;
use std::sync::Arc;

/// Attach image files to the create draft
///
/// Internal handler function - use [`crate::app::App::select_create_images`] instead.
pub(crate) fn select_create_images(
    state: Arc<RwLock<AppState>>,
    attachments: Vec<Attachment>,
) -> Vec<PreviewHandle> {
    let mut guard = state.write();
    let state = &mut *guard;
    attachments
        .into_iter()
        .map(|attachment| {
            let pending = PendingImage::select(&mut state.previews, attachment);
            let handle = pending.handle;
            state.create_form.draft.attachments.push(pending);
            handle
        })
        .collect()
}

/// Remove one selected image from the create draft
///
/// Internal handler function - use [`crate::app::App::remove_create_image`] instead.
pub(crate) fn remove_create_image(state: Arc<RwLock<AppState>>, handle: PreviewHandle) -> bool {
    let mut guard = state.write();
    let state = &mut *guard;
    let attachments = &mut state.create_form.draft.attachments;
    match attachments.iter().position(|pending| pending.handle == handle) {
        Some(index) => {
            attachments.remove(index).discard(&mut state.previews);
            true
        }
        None => false,
    }
}

/// Handle create submit
///
/// Internal handler function - use [`crate::app::App::submit_create`] instead.
pub(crate) fn submit_create(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) -> Result<(), AppError> {
    let (api_client, epoch, product, attachments) = {
        let mut state = state.write();
        let form = &mut state.create_form;
        if form.phase.is_submitting() {
            return Err(AppError::Busy("create product"));
        }

        let product = match form.draft.validate() {
            Ok(product) => product,
            Err(errors) => {
                tracing::debug!(errors = %errors, "Create draft rejected");
                form.errors = errors.clone();
                return Err(AppError::Validation(errors));
            }
        };

        form.errors = ValidationErrors::new();
        form.error = None;
        form.phase = Phase::Submitting;
        let attachments = form.draft.attachment_payload();
        (state.api_client.clone(), state.session_epoch, product, attachments)
    };

    tracing::info!(
        name = %product.name,
        attachment_count = attachments.len(),
        "Submitting new product"
    );
    tokio::spawn(async move {
        let result = api_client.create_product(product, attachments).await;
        let _ = event_tx.send(AppEvent::ProductCreated { epoch, result }).await;
    });
    Ok(())
}

/// Open the edit form for a product in the store
///
/// Internal handler function - use [`crate::app::App::begin_edit`] instead.
pub(crate) fn begin_edit(state: Arc<RwLock<AppState>>, product_id: &str) -> Result<(), AppError> {
    let mut guard = state.write();
    let state = &mut *guard;
    if state.editor.phase.is_submitting() {
        return Err(AppError::Busy("edit product"));
    }

    let draft = state
        .products
        .get(product_id)
        .map(EditDraft::from_product)
        .ok_or_else(|| StoreError::UnknownEntity {
            kind: Product::KIND,
            id: product_id.to_string(),
        })?;

    state.editor.slot.clear(&mut state.previews);
    state.editor.slot = EditorSlot::Editing(draft);
    state.editor.errors = ValidationErrors::new();
    state.editor.error = None;
    Ok(())
}

/// Apply a change to the open edit draft
///
/// Internal handler function - use [`crate::app::App::edit_draft`] instead.
pub(crate) fn edit_draft<F>(state: Arc<RwLock<AppState>>, change: F) -> Result<(), AppError>
where
    F: FnOnce(&mut EditDraft),
{
    let mut state = state.write();
    let draft = state
        .editor
        .slot
        .draft_mut()
        .ok_or_else(|| AppError::State("No product is being edited".to_string()))?;
    change(draft);
    Ok(())
}

/// Select a replacement image for the open edit draft
///
/// Internal handler function - use [`crate::app::App::select_edit_image`] instead.
pub(crate) fn select_edit_image(
    state: Arc<RwLock<AppState>>,
    attachment: Attachment,
) -> Result<PreviewHandle, AppError> {
    let mut guard = state.write();
    let state = &mut *guard;
    let draft = state
        .editor
        .slot
        .draft_mut()
        .ok_or_else(|| AppError::State("No product is being edited".to_string()))?;
    draft.replace_image(&mut state.previews, attachment);
    draft
        .new_image
        .as_ref()
        .map(|pending| pending.handle)
        .ok_or_else(|| AppError::State("Image selection was lost".to_string()))
}

/// Close the edit form, dropping its draft
///
/// Internal handler function - use [`crate::app::App::cancel_edit`] instead.
pub(crate) fn cancel_edit(state: Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    let state = &mut *guard;
    state.editor.slot.clear(&mut state.previews);
    state.editor.errors = ValidationErrors::new();
    state.editor.error = None;
}

/// Handle edit submit
///
/// Internal handler function - use [`crate::app::App::submit_edit`] instead.
pub(crate) fn submit_edit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) -> Result<(), AppError> {
    let (api_client, epoch, patch, image) = {
        let mut state = state.write();
        let editor = &mut state.editor;
        if editor.phase.is_submitting() {
            return Err(AppError::Busy("edit product"));
        }

        let draft = editor
            .slot
            .draft()
            .ok_or_else(|| AppError::State("No product is being edited".to_string()))?;

        let patch = match draft.to_patch() {
            Ok(patch) => patch,
            Err(errors) => {
                editor.errors = errors.clone();
                return Err(AppError::Validation(errors));
            }
        };
        let image = draft.new_image.as_ref().map(|pending| pending.attachment.clone());

        editor.errors = ValidationErrors::new();
        editor.error = None;
        editor.phase = Phase::Submitting;
        (state.api_client.clone(), state.session_epoch, patch, image)
    };

    let product_id = patch.product_id.clone();
    let image_sent = image.is_some();
    tracing::info!(product_id = %product_id, image_sent, "Submitting product update");
    tokio::spawn(async move {
        let result = api_client.update_product(patch, image).await;
        let _ = event_tx
            .send(AppEvent::ProductUpdated {
                epoch,
                product_id,
                image_sent,
                result,
            })
            .await;
    });
    Ok(())
}

/// Open the delete confirmation for a product
///
/// Internal handler function - use [`crate::app::App::request_delete`] instead.
pub(crate) fn request_delete(
    state: Arc<RwLock<AppState>>,
    product_id: String,
    name: String,
) -> Result<(), AppError> {
    let mut state = state.write();
    if state.delete_confirm.phase.is_submitting() {
        return Err(AppError::Busy("delete product"));
    }
    state.delete_confirm.target = Some(DeleteTarget {
        id: product_id,
        name,
    });
    Ok(())
}

/// Close the delete confirmation without deleting
///
/// Internal handler function - use [`crate::app::App::cancel_delete`] instead.
pub(crate) fn cancel_delete(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if state.delete_confirm.phase.is_submitting() {
        return;
    }
    state.delete_confirm.target = None;
}

/// Handle delete confirmation
///
/// Returns `Ok(false)` without a request when no product is targeted.
///
/// Internal handler function - use [`crate::app::App::confirm_delete`] instead.
pub(crate) fn confirm_delete(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) -> Result<bool, AppError> {
    let (api_client, epoch, product_id) = {
        let mut state = state.write();
        if state.delete_confirm.phase.is_submitting() {
            return Err(AppError::Busy("delete product"));
        }
        let Some(target) = state.delete_confirm.target.clone() else {
            return Ok(false);
        };
        state.delete_confirm.phase = Phase::Submitting;
        (state.api_client.clone(), state.session_epoch, target.id)
    };

    tracing::info!(product_id = %product_id, "Deleting product");
    tokio::spawn(async move {
        let result = api_client.delete_product(product_id.clone()).await;
        let _ = event_tx
            .send(AppEvent::ProductDeleted {
                epoch,
                product_id,
                result,
            })
            .await;
    });
    Ok(true)
}
