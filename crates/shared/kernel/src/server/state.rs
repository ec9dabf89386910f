use axum::extract::FromRef;
use folio_domain::config::SiteConfig;
use fxhash::FxHashMap;
use std::any::{Any, TypeId, type_name};
use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

#[folio_derive::folio_error]
pub enum SiteStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("State missing slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

type Slice = Arc<dyn Any + Send + Sync>;

pub struct SiteStateInner {
    pub config: SiteConfig,
    slices: FxHashMap<TypeId, (&'static str, Slice)>,
}

impl fmt::Debug for SiteStateInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.slices.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        f.debug_struct("SiteStateInner").field("config", &self.config).field("slices", &names).finish()
    }
}

/// State shared by every request: the config plus one service per feature slice
/// (content client, image URL builder, form submitter, ...), looked up by type.
#[derive(Debug, Clone)]
pub struct SiteState {
    inner: Arc<SiteStateInner>,
}

impl SiteState {
    #[must_use]
    pub fn builder() -> SiteStateBuilder {
        SiteStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(|(_, slice)| slice.downcast_ref::<T>())
    }

    /// # Errors
    /// [`SiteStateError::MissingSlice`] when no value of type `T` was registered.
    pub fn try_get_slice<T: Any + Send + Sync>(&self) -> Result<&T, SiteStateError> {
        self.get_slice::<T>()
            .ok_or_else(|| SiteStateError::MissingSlice { message: type_name::<T>().into(), context: None })
    }

    /// Registered slice type names, sorted (diagnostics).
    pub fn slice_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.slices.values().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }
}

impl Deref for SiteState {
    type Target = SiteStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<SiteState> for SiteConfig {
    fn from_ref(state: &SiteState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Default)]
pub struct SiteStateBuilder {
    config: Option<SiteConfig>,
    slices: FxHashMap<TypeId, (&'static str, Slice)>,
}

impl fmt::Debug for SiteStateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteStateBuilder").field("config", &self.config).finish_non_exhaustive()
    }
}

impl SiteStateBuilder {
    #[must_use]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Registers a service. A second value of the same type replaces the first.
    #[must_use]
    pub fn slice<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.slices.insert(TypeId::of::<T>(), (type_name::<T>(), Arc::new(value)));
        self
    }

    pub fn build(self) -> Result<SiteState, SiteStateError> {
        let config = self.config.ok_or_else(|| SiteStateError::Validation {
            message: "SiteConfig not provided".into(),
            context: None,
        })?;

        Ok(SiteState { inner: Arc::new(SiteStateInner { config, slices: self.slices }) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Greeter(&'static str);

    #[test]
    fn slices_are_found_by_type() {
        let state = SiteState::builder().config(SiteConfig::default()).slice(Greeter("hi")).slice(42_u32).build().unwrap();

        assert_eq!(state.get_slice::<Greeter>(), Some(&Greeter("hi")));
        assert_eq!(state.try_get_slice::<u32>().unwrap(), &42);
        assert!(matches!(state.try_get_slice::<String>(), Err(SiteStateError::MissingSlice { .. })));
        assert_eq!(state.slice_names().len(), 2);
    }

    #[test]
    fn config_is_required() {
        let err = SiteState::builder().slice(Greeter("hi")).build().unwrap_err();
        assert!(matches!(err, SiteStateError::Validation { .. }));
    }

    #[test]
    fn config_is_extractable() {
        let mut config = SiteConfig::default();
        config.server.port = 8123;
        let state = SiteState::builder().config(config).build().unwrap();
        assert_eq!(SiteConfig::from_ref(&state).server.port, 8123);
    }
}
