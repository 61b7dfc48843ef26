use serde::{Deserialize, Serialize};

use crate::types::*;

/// Onboarding form events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SetInputMethod(InputMethod),
    SetRegistrationType(RegistrationType),
    SetFrequencyPlan(Option<String>),
    SetLorawanVersion(Option<String>),
    SetPhyVersion(Option<String>),
    /// Pick a value for one device repository step (brand_id, model_id, ...)
    SelectVersion {
        step: String,
        value: Option<String>,
    },
    /// Template resolved by the shell for the current repository selection
    TemplateLoaded(Option<DeviceTemplate>),
    /// Existing end device whose settings are displayed next to the form
    LoadDevice(EndDevice),
    /// Replace all form values with the JSON sent by the shell
    Update {
        form_data_json: String,
    },
    Submit,
    Reset,
}

/// UI events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Form(FormEvent),
    Ui(UiEvent),
}
