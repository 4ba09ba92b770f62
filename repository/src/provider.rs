//! Request-scoped parameter provider.

use std::any::Any;

/// Opaque request-scoped context threaded through to repository
/// construction. This core never inspects its contents; concrete
/// repositories may downcast via `as_any`.
pub trait ParamProvider: Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// A provider carrying nothing, for tests and repositories that need no
/// request-scoped state.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyProvider;

impl ParamProvider for EmptyProvider {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
