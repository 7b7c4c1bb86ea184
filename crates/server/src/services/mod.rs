//! Application services.
//!
//! The catalog and order services are the resilient facades: primary store
//! first, mock store fallback. Auth and media wrap their external
//! collaborators.

pub mod auth;
pub mod catalog;
pub mod media;
pub mod orders;

pub use auth::{AuthError, AuthService};
pub use catalog::{CatalogError, ProductCatalog};
pub use media::{MediaClient, MediaError};
pub use orders::{OrderError, OrderService};

/// Where a facade response was served from.
///
/// Handlers attach a warning to fallback-served responses so consumers can
/// react (e.g., show a degraded-mode banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Served by the persistent store; writes are durable.
    Primary,
    /// Served by the in-process mock store; writes are lost on restart.
    Fallback,
}

impl Origin {
    /// Whether the response came from the mock store.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// A facade result tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Served<T> {
    pub data: T,
    pub origin: Origin,
}

impl<T> Served<T> {
    pub(crate) const fn primary(data: T) -> Self {
        Self {
            data,
            origin: Origin::Primary,
        }
    }

    pub(crate) const fn fallback(data: T) -> Self {
        Self {
            data,
            origin: Origin::Fallback,
        }
    }
}
