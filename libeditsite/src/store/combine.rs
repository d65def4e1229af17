//! Reducer composition helpers
//!
//! [`with_initial_state`] supplies a slice's default on the first call.
//! [`SliceIdentity`] lets the root reducer tell whether a slice reducer
//! handed back its previous value, so an action nobody handles leaves the
//! root snapshot untouched.

use std::sync::Arc;

use super::actions::Action;
use super::state::{NavigationPanel, Preferences};
use crate::types::{DeviceType, EntityId, TemplateType};

/// Wrap `reducer` so a missing previous state starts from `initial_state`
///
/// ```
/// use libeditsite::store::combine::with_initial_state;
/// use libeditsite::Action;
///
/// let inserter = with_initial_state(false, |state: bool, action: &Action| match action {
///     Action::SetInserterOpen { is_open } => *is_open,
///     _ => state,
/// });
///
/// assert!(!inserter(None, &Action::Unknown));
/// assert!(inserter(Some(false), &Action::set_is_inserter_opened(true)));
/// ```
pub fn with_initial_state<S, R>(initial_state: S, reducer: R) -> impl Fn(Option<S>, &Action) -> S
where
    S: Clone,
    R: Fn(S, &Action) -> S,
{
    move |state, action| reducer(state.unwrap_or_else(|| initial_state.clone()), action)
}

/// Whether a reduced slice is still the value it was reduced from
pub trait SliceIdentity {
    fn is_same(&self, other: &Self) -> bool;
}

impl<T> SliceIdentity for Arc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T> SliceIdentity for Option<Arc<T>> {
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl SliceIdentity for Preferences {
    fn is_same(&self, other: &Self) -> bool {
        self.features.is_same(&other.features)
    }
}

macro_rules! value_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SliceIdentity for $ty {
                fn is_same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

value_identity!(bool, DeviceType, TemplateType, NavigationPanel, Option<EntityId>);
