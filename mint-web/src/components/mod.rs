//! UI Components

pub mod collection_status;
pub mod error_banner;
pub mod mint_widget;
pub mod navbar;
pub mod network_warning;
pub mod toasts;
pub mod whitelist_proof;

pub use collection_status::CollectionStatus;
pub use error_banner::ErrorBanner;
pub use mint_widget::MintWidget;
pub use navbar::Navbar;
pub use network_warning::NetworkWarning;
pub use toasts::Toasts;
pub use whitelist_proof::WhitelistProofTool;
