use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete onboarding form state
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Form state
    pub form: FormValues,
    pub template: Option<DeviceTemplate>,
    pub registration_type: RegistrationType,

    /// End device loaded for display (activation mode, versions, servers)
    pub device: Option<EndDevice>,

    /// Last request handed to the shell for registration
    pub last_provision_request: Option<ProvisionRequest>,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Model {
    /// Whether the current form values allow provisioning
    pub fn may_provision(&self) -> bool {
        may_provision_device(&self.form, self.template.as_ref())
    }

    /// Clear the form, keeping the chosen input method
    pub fn reset_form(&mut self) {
        self.form = FormValues {
            input_method: self.form.input_method,
            ..Default::default()
        };
        self.template = None;
    }

    /// Set an error message and clear any success message
    pub fn set_error(&mut self, error: String) {
        self.success_message = None;
        self.error_message = Some(error);
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
