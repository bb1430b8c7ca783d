/// State of a specifiable attribute on a component or connection.
///
/// `NotSet` and `Unset` both leave the quantity free for the solver. They
/// differ when a design reference is available: an untouched (`NotSet`)
/// boundary value is taken from the reference, while an explicitly freed
/// (`Unset`) one stays free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attr<T> {
    /// Never specified.
    NotSet,

    /// Explicitly freed.
    Unset,

    /// Specified by the user.
    Fixed(T),
}

impl<T> Default for Attr<T> {
    fn default() -> Self {
        Self::NotSet
    }
}

impl<T> From<T> for Attr<T> {
    fn from(value: T) -> Self {
        Self::Fixed(value)
    }
}

impl<T: Copy> Attr<T> {
    /// Returns the fixed value, if any.
    #[must_use]
    pub fn fixed(&self) -> Option<T> {
        match *self {
            Self::Fixed(value) => Some(value),
            Self::NotSet | Self::Unset => None,
        }
    }

    /// Returns true if a value is fixed.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// Fills an untouched attribute from a reference value.
    ///
    /// `Unset` and `Fixed` are returned unchanged.
    #[must_use]
    pub fn or_inherit(self, reference: Option<T>) -> Self {
        match (self, reference) {
            (Self::NotSet, Some(value)) => Self::Fixed(value),
            (attr, _) => attr,
        }
    }
}
