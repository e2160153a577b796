//! The "Upload & Validate" form.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use maskcheck_core::error::Result;
use maskcheck_core::traits::{LinkValidator, Notifier, Pinner};
use maskcheck_core::types::{Role, RoleStatus, SelectedFile, Toast, TypeFilter};
use maskcheck_ipfs::PinataClient;
use maskcheck_preview::generate_preview;
use maskcheck_validate::ValidationClient;

use crate::config::{FormConfig, PipelineMode};
use crate::messages;
use crate::state::{FormState, RoleSlot};

/// What a submit did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one file was missing; nothing was sent.
    MissingSelection,
    /// Sequential mode only: the element upload failed and the
    /// certificate was never attempted.
    Aborted,
    /// Every pipeline that was started has finished.
    Completed {
        /// Final status of the element pipeline
        element: RoleStatus,
        /// Final status of the certificate pipeline
        certificate: RoleStatus,
    },
}

/// Headless form with two file slots and the upload/validate pipeline.
///
/// All methods take `&self`; state sits behind a lock that is never held
/// across an await point.
pub struct ValidationForm {
    state: RwLock<FormState>,
    pinner: Arc<dyn Pinner>,
    validator: Arc<dyn LinkValidator>,
    notifier: Arc<dyn Notifier>,
    mode: PipelineMode,
}

impl ValidationForm {
    /// Creates a form on top of the given collaborators.
    pub fn new(
        pinner: Arc<dyn Pinner>,
        validator: Arc<dyn LinkValidator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: RwLock::new(FormState::new()),
            pinner,
            validator,
            notifier,
            mode: PipelineMode::default(),
        }
    }

    /// Creates a form backed by Pinata and the HTTP validation backend.
    pub fn from_config(config: FormConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let pinner = PinataClient::with_config(config.pinata)?;
        let validator = ValidationClient::with_config(config.validation)?;
        Ok(Self::new(Arc::new(pinner), Arc::new(validator), notifier).with_mode(config.mode))
    }

    /// Sets how the two pipelines are scheduled.
    pub fn with_mode(mut self, mode: PipelineMode) -> Self {
        self.mode = mode;
        self
    }

    /// Active pipeline mode.
    pub fn mode(&self) -> PipelineMode {
        self.mode
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // INPUT HANDLERS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Sets a role's type filter, clearing its file, preview, URL and result.
    pub fn select_type(&self, role: Role, filter: TypeFilter) {
        debug!(%role, %filter, "Type selected");
        self.state.write().select_type(role, filter);
    }

    /// Handles a file-picker event for a role.
    ///
    /// Only the first file is used; an empty pick is ignored. The preview
    /// is encoded off-lock and dropped if the selection changed meanwhile.
    #[instrument(skip(self, files), fields(count = files.len()))]
    pub async fn select_file(&self, role: Role, files: Vec<SelectedFile>) -> Result<()> {
        let Some(file) = files.into_iter().next() else {
            return Ok(());
        };

        let (filter, generation) = self.state.write().set_file(role, file.clone())?;
        let preview = generate_preview(filter, &file).await?;

        if !self.state.write().apply_preview(role, generation, preview) {
            debug!(%role, "Discarded stale preview");
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // PIPELINE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Uploads a role's file and stores the resulting gateway URL.
    ///
    /// Errors are returned to the caller; the role is marked failed.
    #[instrument(skip(self, file), fields(name = %file.name))]
    pub async fn upload_role(
        &self,
        role: Role,
        file: &SelectedFile,
        generation: u64,
    ) -> Result<String> {
        self.state.write().set_status(role, generation, RoleStatus::Uploading);

        match self.pinner.pin_file(file).await {
            Ok(pinned) => {
                self.state.write().record_upload(role, generation, &pinned.gateway_url);
                info!(%role, url = %pinned.gateway_url, "Uploaded");
                Ok(pinned.gateway_url)
            }
            Err(e) => {
                self.state.write().set_status(role, generation, RoleStatus::Failed);
                warn!(%role, error = %e, "Upload failed");
                Err(e)
            }
        }
    }

    /// Validates a role's gateway URL.
    ///
    /// Never fails: the outcome lands in the role's validation result and
    /// a toast. Nothing is reported if the selection changed meanwhile.
    #[instrument(skip(self))]
    pub async fn validate_role(&self, role: Role, url: &str, generation: u64) {
        self.state.write().set_status(role, generation, RoleStatus::Validating);

        let (status, message, toast) = match self.validator.validate_link(url).await {
            Ok(validated) => {
                info!(%role, username = %validated.username, "Validated");
                (
                    RoleStatus::Done,
                    messages::validation_success(role, &validated),
                    Toast::success(messages::validated_toast(role)),
                )
            }
            Err(e) => {
                warn!(%role, error = %e, "Validation failed");
                let text = messages::validation_error(role);
                (RoleStatus::Failed, text.clone(), Toast::error(text))
            }
        };

        if self.state.write().record_validation(role, generation, status, message) {
            self.notifier.notify(toast);
        } else {
            debug!(%role, "Discarded stale validation result");
        }
    }

    async fn run_pipeline(&self, role: Role, file: &SelectedFile, generation: u64) -> Result<()> {
        let url = self.upload_role(role, file, generation).await?;
        if !self.state.read().is_current(role, generation) {
            debug!(%role, "Selection changed during upload, skipping validation");
            return Ok(());
        }
        self.validate_role(role, &url, generation).await;
        Ok(())
    }

    /// Uploads and validates both files.
    ///
    /// Requires both roles to have a file; otherwise raises one error toast
    /// and sends nothing.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub async fn submit(&self) -> SubmitOutcome {
        let ready = self.state.read().ready_files();
        let Some([(_, element, element_gen), (_, certificate, certificate_gen)]) = ready else {
            self.notifier.notify(Toast::error(messages::MISSING_SELECTION));
            return SubmitOutcome::MissingSelection;
        };

        match self.mode {
            PipelineMode::Sequential => {
                if self.run_pipeline(Role::Element, &element, element_gen).await.is_err() {
                    self.notifier.notify(Toast::error(messages::UPLOAD_FAILED));
                    return SubmitOutcome::Aborted;
                }
                if self
                    .run_pipeline(Role::Certificate, &certificate, certificate_gen)
                    .await
                    .is_err()
                {
                    self.notifier.notify(Toast::error(messages::UPLOAD_FAILED));
                }
            }
            PipelineMode::Concurrent => {
                let (element_res, certificate_res) = tokio::join!(
                    self.run_pipeline(Role::Element, &element, element_gen),
                    self.run_pipeline(Role::Certificate, &certificate, certificate_gen),
                );
                if element_res.is_err() || certificate_res.is_err() {
                    self.notifier.notify(Toast::error(messages::UPLOAD_FAILED));
                }
            }
        }

        let state = self.state.read();
        SubmitOutcome::Completed {
            element: state.slot(Role::Element).status,
            certificate: state.slot(Role::Certificate).status,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // VIEW
    // ═══════════════════════════════════════════════════════════════════════════

    /// Copy of the whole form state.
    pub fn snapshot(&self) -> FormState {
        self.state.read().clone()
    }

    /// Copy of one role's slot.
    pub fn slot(&self, role: Role) -> RoleSlot {
        self.state.read().slot(role).clone()
    }

    /// Pipeline status of a role.
    pub fn status(&self, role: Role) -> RoleStatus {
        self.state.read().slot(role).status
    }

    /// Returns true while any upload or validation is outstanding.
    pub fn is_busy(&self) -> bool {
        self.state.read().is_busy()
    }

    /// Validation results to show, one line per role.
    pub fn banner_lines(&self) -> Vec<String> {
        self.state.read().banner_lines()
    }

    /// Renders the previews and banner as a standalone HTML page.
    pub fn render_html(&self) -> String {
        let state = self.state.read();
        maskcheck_preview::render_page(
            messages::FORM_TITLE,
            &state.preview_sections(),
            &state.banner_lines(),
        )
    }
}
