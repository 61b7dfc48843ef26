//! Domain-based type organization
//!
//! - device: End device record, activation modes, device classes
//! - version: LoRaWAN and PHY version reference tables
//! - repository: Device repository selection and templates
//! - form: Onboarding form values and provisioning gate

pub mod device;
pub mod form;
pub mod repository;
pub mod version;

pub use device::*;
pub use form::*;
pub use repository::*;
pub use version::*;
