use super::error::TargetError;

/// The text input inside the rendered header.
pub trait FocusTarget {
    fn focus(&self) -> Result<(), TargetError>;
}

/// The root container whose layout switches to inline-search mode.
pub trait PresentationTarget {
    /// `true` adds the search-active marker, `false` removes it.
    fn set_active(&self, active: bool) -> Result<(), TargetError>;
}

impl<T: FocusTarget + ?Sized> FocusTarget for &T {
    fn focus(&self) -> Result<(), TargetError> {
        (**self).focus()
    }
}

impl<T: PresentationTarget + ?Sized> PresentationTarget for &T {
    fn set_active(&self, active: bool) -> Result<(), TargetError> {
        (**self).set_active(active)
    }
}
