use crux_core::Command;
use serde_valid::Validate;

use crate::events::{Event, FormEvent};
use crate::model::Model;
use crate::types::form::is_filled;
use crate::types::{
    has_selected_device_repository_other, is_other_option, DeviceTemplate, FormValues,
    InputMethod, ProvisionRequest, RegistrationType,
};
use crate::update_field;
use crate::Effect;

/// Handle onboarding form events
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::SetInputMethod(method) => handle_set_input_method(method, model),

        FormEvent::SetRegistrationType(registration_type) => {
            update_field!(model.registration_type, registration_type)
        }

        FormEvent::SetFrequencyPlan(plan) => update_field!(model.form.frequency_plan_id, plan),

        FormEvent::SetLorawanVersion(version) => {
            update_field!(model.form.lorawan_version, version)
        }

        FormEvent::SetPhyVersion(version) => {
            update_field!(model.form.lorawan_phy_version, version)
        }

        FormEvent::SelectVersion { step, value } => handle_select_version(step, value, model),

        FormEvent::TemplateLoaded(template) => handle_template_loaded(template, model),

        FormEvent::LoadDevice(device) => update_field!(model.device, Some(device)),

        FormEvent::Update { form_data_json } => handle_form_update(&form_data_json, model),

        FormEvent::Submit => handle_submit(model),

        FormEvent::Reset => {
            model.reset_form();
            model.last_provision_request = None;
            crux_core::render::render()
        }
    }
}

/// Switch input method; leaving the device repository drops its selection
fn handle_set_input_method(method: InputMethod, model: &mut Model) -> Command<Effect, Event> {
    if model.form.input_method == Some(method) {
        return Command::done();
    }

    log::debug!("input method changed to {method:?}");

    if method != InputMethod::DeviceRepository {
        model.form.version_ids = None;
        model.template = None;
    }
    model.form.input_method = Some(method);

    crux_core::render::render()
}

/// Set one repository selection step.
///
/// The loaded template belongs to the previous selection, so any change drops it.
fn handle_select_version(
    step: String,
    value: Option<String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    let selection = model.form.version_ids.get_or_insert_with(Default::default);
    if selection.get(&step) == value.as_deref() && selection.0.contains_key(&step) {
        return Command::done();
    }

    if value.as_deref().is_some_and(is_other_option) {
        log::debug!("device repository step {step} set to other");
    }
    selection.set(step, value);
    model.template = None;

    crux_core::render::render()
}

/// Store the template for the current selection and pre-fill its versions
fn handle_template_loaded(
    template: Option<DeviceTemplate>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if has_selected_device_repository_other(model.form.version_ids.as_ref()) == Some(true) {
        log::debug!("ignoring template for a selection containing other");
        return Command::done();
    }

    if let Some(template) = &template {
        let device = &template.end_device;
        if !is_filled(&model.form.lorawan_version) {
            model.form.lorawan_version = device.lorawan_version.clone();
        }
        if !is_filled(&model.form.lorawan_phy_version) {
            model.form.lorawan_phy_version = device.lorawan_phy_version.clone();
        }
    }
    model.template = template;

    crux_core::render::render()
}

/// Replace form values from shell JSON
fn handle_form_update(form_data_json: &str, model: &mut Model) -> Command<Effect, Event> {
    match serde_json::from_str::<FormValues>(form_data_json) {
        Ok(form) => {
            if form.version_ids != model.form.version_ids {
                model.template = None;
            }
            model.form = form;
            crux_core::render::render()
        }
        Err(e) => {
            log::error!("Failed to parse form data: {e}. JSON: {form_data_json}");
            model.set_error_and_render(format!("Invalid form data: {e}"))
        }
    }
}

fn handle_submit(model: &mut Model) -> Command<Effect, Event> {
    if !model.may_provision() {
        log::warn!("rejecting submit of incomplete onboarding form");
        return model.set_error_and_render(
            "Please complete the form before registering the end device".to_string(),
        );
    }

    let request = ProvisionRequest::from_form(
        &model.form,
        model.template.as_ref(),
        model.registration_type,
    );
    if let Err(e) = request.validate() {
        return model.set_error_and_render(format!("Invalid provisioning request: {e}"));
    }

    log::debug!(
        "provisioning end device ({} registration)",
        request.registration_type.as_str()
    );

    model.last_provision_request = Some(request);
    model.clear_error();
    model.success_message = Some("End device ready for registration".to_string());

    if model.registration_type == RegistrationType::Single {
        model.reset_form();
    }

    crux_core::render::render()
}
