//! Form lifecycle shared by the settings and profile editors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// `Idle -> Editing -> Saving -> (Idle | Error)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Saving,
    Error,
}

impl FormPhase {
    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !matches!(self, FormPhase::Saving)
    }
}

/// Result of an operation that may be skipped or outlived by its view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Completed and applied to the controller state.
    Applied(T),
    /// Not started, another save was already in flight.
    Ignored,
    /// Completed after the view was unmounted; nothing was applied.
    Discarded,
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Ignored | Outcome::Discarded => None,
        }
    }
}

/// Liveness of the view that owns a controller. Clones share the flag, so
/// the UI can keep one and hand the other to the controller.
#[derive(Debug, Clone)]
pub struct ViewScope {
    mounted: Arc<AtomicBool>,
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Baseline (last known stored value), draft (what the inputs show) and
/// the phase of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel<T> {
    baseline: T,
    draft: T,
    phase: FormPhase,
}

impl<T: Clone + PartialEq> FormModel<T> {
    pub fn new(initial: T) -> Self {
        Self {
            baseline: initial.clone(),
            draft: initial,
            phase: FormPhase::Idle,
        }
    }

    pub fn baseline(&self) -> &T {
        &self.baseline
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    /// Replaces both copies with freshly loaded data. While saving only the
    /// baseline moves; the draft in flight and the phase stay put.
    pub fn load(&mut self, value: T) {
        if self.phase == FormPhase::Saving {
            self.baseline = value;
            return;
        }
        self.baseline = value.clone();
        self.draft = value;
        self.phase = FormPhase::Idle;
    }

    /// Applies `change` to the draft. Edits made while saving still land in
    /// the draft but leave the phase alone.
    pub fn edit(&mut self, change: impl FnOnce(&mut T)) {
        change(&mut self.draft);
        if self.phase != FormPhase::Saving {
            self.phase = FormPhase::Editing;
        }
    }

    /// Enters `Saving` and returns the draft to submit, or `None` when a
    /// save is already running.
    pub fn begin_save(&mut self) -> Option<T> {
        if !self.phase.can_submit() {
            return None;
        }
        self.phase = FormPhase::Saving;
        Some(self.draft.clone())
    }

    /// The store accepted `submitted` and answered with `saved`, which
    /// becomes the baseline. Unless the draft was edited meanwhile it takes
    /// the stored form too, so server-side normalisation does not leave the
    /// form dirty.
    pub fn finish_ok(&mut self, submitted: &T, saved: T) {
        if self.draft == *submitted {
            self.draft = saved.clone();
        }
        self.baseline = saved;
        self.phase = if self.is_dirty() {
            FormPhase::Editing
        } else {
            FormPhase::Idle
        };
    }

    pub fn finish_err(&mut self) {
        self.phase = FormPhase::Error;
    }

    /// Drops unsaved edits.
    pub fn reset(&mut self) {
        self.draft = self.baseline.clone();
        self.phase = FormPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut form = FormModel::new(1);
        assert_eq!(form.phase(), FormPhase::Idle);

        form.edit(|value| *value = 2);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.is_dirty());

        assert_eq!(form.begin_save(), Some(2));
        assert_eq!(form.phase(), FormPhase::Saving);
        assert_eq!(form.begin_save(), None);

        form.finish_ok(&2, 2);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(*form.baseline(), 2);
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_error_returns_to_editing() {
        let mut form = FormModel::new("a".to_string());
        form.edit(|value| value.push('b'));
        form.begin_save();
        form.finish_err();
        assert_eq!(form.phase(), FormPhase::Error);
        assert_eq!(form.baseline(), "a");

        form.edit(|value| value.push('c'));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft(), "abc");

        form.reset();
        assert_eq!(form.draft(), "a");
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_edit_during_save_stays_dirty() {
        let mut form = FormModel::new(0);
        form.edit(|value| *value = 1);
        form.begin_save();
        form.edit(|value| *value = 5);
        assert_eq!(form.phase(), FormPhase::Saving);

        form.finish_ok(&1, 1);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(*form.draft(), 5);
    }

    #[test]
    fn test_stored_form_replaces_untouched_draft() {
        let mut form = FormModel::new(" a ".to_string());
        form.edit(|value| *value = " b ".to_string());
        let submitted = form.begin_save().unwrap();

        form.finish_ok(&submitted, "b".to_string());
        assert_eq!(form.draft(), "b");
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_load_during_save_keeps_submit_disabled() {
        let mut form = FormModel::new(0);
        form.edit(|value| *value = 7);
        assert_eq!(form.begin_save(), Some(7));

        form.load(3);
        assert_eq!(form.phase(), FormPhase::Saving);
        assert_eq!(*form.draft(), 7);
        assert_eq!(*form.baseline(), 3);
        assert_eq!(form.begin_save(), None);

        form.finish_ok(&7, 7);
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_view_scope_shared() {
        let scope = ViewScope::new();
        let held = scope.clone();
        assert!(held.is_mounted());
        scope.unmount();
        assert!(!held.is_mounted());
    }
}
