// Shared by the web client (wasm, no default features) and native callers.
pub mod config;
pub mod consultation;
pub mod error;
pub mod models;
pub mod payload;
pub mod pricing;
pub mod render;
pub mod transport;
pub mod view;

// Plain HTTP transport for native callers
#[cfg(feature = "http")]
pub mod http;

pub use config::StoreConfig;
pub use consultation::{consultation_package, with_consultation};
pub use error::{LoadError, TransportError};
pub use models::{AdPackage, PackageType, PlanQuery, PlansResponse};
pub use render::{CardView, PageView};
pub use transport::{FallbackTransport, PlanTransport};
pub use view::{
    load_packages, select_package, LoadPhase, LocalView, Navigator, PackagesState, ViewState,
};

#[cfg(feature = "http")]
pub use http::HttpTransport;
