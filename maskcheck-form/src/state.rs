//! Form state: one slot per role.
//!
//! Every slot carries a generation counter. Anything that replaces the
//! slot's selection bumps it, and async results (previews, uploads,
//! validations) are only written back when they were started under the
//! current generation.

use maskcheck_core::error::{MaskcheckError, Result};
use maskcheck_core::types::{Role, RoleStatus, SelectedFile, TypeFilter};

use crate::messages;

/// Everything the form knows about one role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleSlot {
    /// Chosen type filter; no file can be picked until this is set
    pub filter: Option<TypeFilter>,
    /// Chosen file
    pub file: Option<SelectedFile>,
    /// Inline preview data URL, empty when none
    pub preview: String,
    /// Gateway URL of the pinned file, empty before upload
    pub uploaded_url: String,
    /// Latest validation message for this role, empty before validation
    pub validation_result: String,
    /// Pipeline progress
    pub status: RoleStatus,
    generation: u64,
}

impl RoleSlot {
    /// Current generation of the slot's selection.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// State of the whole form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    element: RoleSlot,
    certificate: RoleSlot,
}

impl FormState {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to a role's slot.
    pub fn slot(&self, role: Role) -> &RoleSlot {
        match role {
            Role::Element => &self.element,
            Role::Certificate => &self.certificate,
        }
    }

    fn slot_mut(&mut self, role: Role) -> &mut RoleSlot {
        match role {
            Role::Element => &mut self.element,
            Role::Certificate => &mut self.certificate,
        }
    }

    /// Sets a role's type filter and clears everything derived from the
    /// previous selection.
    pub fn select_type(&mut self, role: Role, filter: TypeFilter) {
        let slot = self.slot_mut(role);
        *slot = RoleSlot {
            filter: Some(filter),
            generation: slot.generation + 1,
            ..RoleSlot::default()
        };
    }

    /// Stores a picked file and returns the generation its preview must
    /// be applied under.
    ///
    /// A pipeline still running for the previous file can no longer write
    /// back, so the status returns to `Idle`.
    pub fn set_file(&mut self, role: Role, file: SelectedFile) -> Result<(TypeFilter, u64)> {
        let slot = self.slot_mut(role);
        let filter = slot.filter.ok_or(MaskcheckError::NoTypeFilter(role))?;
        slot.file = Some(file);
        slot.preview.clear();
        slot.status = RoleStatus::Idle;
        slot.generation += 1;
        Ok((filter, slot.generation))
    }

    /// Runs `f` on the slot if it is still at `generation`.
    ///
    /// Returns false when the result was stale and dropped.
    fn update_current<F>(&mut self, role: Role, generation: u64, f: F) -> bool
    where
        F: FnOnce(&mut RoleSlot),
    {
        let slot = self.slot_mut(role);
        if slot.generation != generation {
            return false;
        }
        f(slot);
        true
    }

    /// Installs a finished preview.
    pub fn apply_preview(&mut self, role: Role, generation: u64, preview: String) -> bool {
        self.update_current(role, generation, |slot| slot.preview = preview)
    }

    /// Moves a role to a new pipeline status.
    pub fn set_status(&mut self, role: Role, generation: u64, status: RoleStatus) -> bool {
        self.update_current(role, generation, |slot| slot.status = status)
    }

    /// Records the gateway URL of an uploaded file.
    pub fn record_upload(&mut self, role: Role, generation: u64, url: &str) -> bool {
        self.update_current(role, generation, |slot| slot.uploaded_url = url.to_string())
    }

    /// Records the end of a validation call.
    pub fn record_validation(
        &mut self,
        role: Role,
        generation: u64,
        status: RoleStatus,
        message: String,
    ) -> bool {
        self.update_current(role, generation, |slot| {
            slot.status = status;
            slot.validation_result = message;
        })
    }

    /// Returns true if `generation` is still the role's current one.
    pub fn is_current(&self, role: Role, generation: u64) -> bool {
        self.slot(role).generation == generation
    }

    /// Both files with their generations, or `None` if either is missing.
    pub fn ready_files(&self) -> Option<[(Role, SelectedFile, u64); 2]> {
        let pick = |role: Role| {
            let slot = self.slot(role);
            slot.file.clone().map(|file| (role, file, slot.generation))
        };
        Some([pick(Role::Element)?, pick(Role::Certificate)?])
    }

    /// Returns true while any role has a call outstanding.
    pub fn is_busy(&self) -> bool {
        Role::ALL.iter().any(|r| self.slot(*r).status.is_in_flight())
    }

    /// Non-empty validation results, element first.
    pub fn banner_lines(&self) -> Vec<String> {
        Role::ALL
            .iter()
            .map(|r| self.slot(*r).validation_result.clone())
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// The `accept` value of a role's file input, `None` while no type is set.
    pub fn accept_for(&self, role: Role) -> Option<&'static str> {
        self.slot(role).filter.map(|f| f.as_mime())
    }

    /// Preview blocks for every role that has one.
    pub fn preview_sections(&self) -> Vec<maskcheck_preview::PreviewSection> {
        Role::ALL
            .iter()
            .filter_map(|role| {
                let slot = self.slot(*role);
                let filter = slot.filter?;
                if slot.preview.is_empty() {
                    return None;
                }
                Some(maskcheck_preview::PreviewSection {
                    heading: messages::preview_heading(*role).to_string(),
                    filter,
                    data_url: slot.preview.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn file(name: &str) -> SelectedFile {
        SelectedFile::new(name, b"data".to_vec())
    }

    #[test]
    fn test_file_requires_type() {
        let mut state = FormState::new();
        let err = state.set_file(Role::Element, file("a.png")).unwrap_err();
        assert!(matches!(err, MaskcheckError::NoTypeFilter(Role::Element)));
        assert!(state.slot(Role::Element).file.is_none());
        assert_eq!(state.accept_for(Role::Element), None);
    }

    #[test]
    fn test_stale_preview_is_dropped() {
        let mut state = FormState::new();
        state.select_type(Role::Element, TypeFilter::Image);
        let (_, generation) = state.set_file(Role::Element, file("a.png")).unwrap();

        // Type changes while the preview is being encoded
        state.select_type(Role::Element, TypeFilter::Pdf);
        assert!(!state.apply_preview(Role::Element, generation, "data:old".into()));
        assert!(state.slot(Role::Element).preview.is_empty());
    }

    #[test]
    fn test_second_file_invalidates_first_preview() {
        let mut state = FormState::new();
        state.select_type(Role::Certificate, TypeFilter::Pdf);
        let (_, first) = state.set_file(Role::Certificate, file("a.pdf")).unwrap();
        let (_, second) = state.set_file(Role::Certificate, file("b.pdf")).unwrap();

        assert!(state.apply_preview(Role::Certificate, second, "data:b".into()));
        assert!(!state.apply_preview(Role::Certificate, first, "data:a".into()));
        assert_eq!(state.slot(Role::Certificate).preview, "data:b");
    }

    #[test]
    fn test_new_file_clears_in_flight_status() {
        let mut state = FormState::new();
        state.select_type(Role::Element, TypeFilter::Image);
        let (_, generation) = state.set_file(Role::Element, file("a.png")).unwrap();
        state.set_status(Role::Element, generation, RoleStatus::Uploading);
        state.record_upload(Role::Element, generation, "https://gw/ipfs/Qm1");
        assert!(state.is_busy());

        let (_, next) = state.set_file(Role::Element, file("b.png")).unwrap();
        assert!(!state.is_current(Role::Element, generation));
        assert!(state.is_current(Role::Element, next));
        assert_eq!(state.slot(Role::Element).status, RoleStatus::Idle);
        assert!(!state.is_busy());
        // Late writes from the old upload are dropped
        assert!(!state.set_status(Role::Element, generation, RoleStatus::Done));
        assert_eq!(state.slot(Role::Element).status, RoleStatus::Idle);
    }

    #[test]
    fn test_ready_files_needs_both() {
        let mut state = FormState::new();
        state.select_type(Role::Element, TypeFilter::Doc);
        state.set_file(Role::Element, file("a.doc")).unwrap();
        assert!(state.ready_files().is_none());

        state.select_type(Role::Certificate, TypeFilter::Doc);
        state.set_file(Role::Certificate, file("b.doc")).unwrap();
        let [(r1, f1, _), (r2, f2, _)] = state.ready_files().unwrap();
        assert_eq!((r1, f1.name.as_str()), (Role::Element, "a.doc"));
        assert_eq!((r2, f2.name.as_str()), (Role::Certificate, "b.doc"));
    }

    #[test]
    fn test_banner_lines_per_role() {
        let mut state = FormState::new();
        state.select_type(Role::Certificate, TypeFilter::Pdf);
        let generation = state.slot(Role::Certificate).generation();
        state.record_validation(Role::Certificate, generation, RoleStatus::Done, "cert ok".into());
        assert_eq!(state.banner_lines(), vec!["cert ok".to_string()]);

        state.select_type(Role::Element, TypeFilter::Pdf);
        let generation = state.slot(Role::Element).generation();
        state.record_validation(Role::Element, generation, RoleStatus::Failed, "el bad".into());
        assert_eq!(state.banner_lines(), vec!["el bad".to_string(), "cert ok".to_string()]);
    }

    #[test]
    fn test_busy_tracks_any_role() {
        let mut state = FormState::new();
        assert!(!state.is_busy());
        state.set_status(Role::Certificate, 0, RoleStatus::Validating);
        assert!(state.is_busy());
        state.set_status(Role::Certificate, 0, RoleStatus::Done);
        assert!(!state.is_busy());
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop_oneof![Just(Role::Element), Just(Role::Certificate)]
    }

    fn filter_strategy() -> impl Strategy<Value = TypeFilter> {
        (0..TypeFilter::ALL.len()).prop_map(|i| TypeFilter::ALL[i])
    }

    proptest! {
        #[test]
        fn prop_type_change_resets_role(
            role in role_strategy(),
            first in filter_strategy(),
            next in filter_strategy(),
            preview in "[a-z]{1,16}",
            url in "[a-z]{1,16}",
        ) {
            let mut state = FormState::new();
            state.select_type(role, first);
            let (_, generation) = state.set_file(role, file("x.bin")).unwrap();
            state.apply_preview(role, generation, preview);
            state.record_upload(role, generation, &url);
            state.record_validation(role, generation, RoleStatus::Done, "ok".into());

            state.select_type(role, next);

            let slot = state.slot(role);
            prop_assert_eq!(slot.filter, Some(next));
            prop_assert!(slot.file.is_none());
            prop_assert!(slot.preview.is_empty());
            prop_assert!(slot.uploaded_url.is_empty());
            prop_assert!(slot.validation_result.is_empty());
            prop_assert_eq!(slot.status, RoleStatus::Idle);
            prop_assert!(slot.generation() > generation);
        }
    }
}
