use anyhow::Result;
use crux_core::typegen::TypeGen;
use lorawan_console_core::{
    events::{FormEvent, UiEvent},
    types::{
        ActivationMode, DeviceClass, DeviceTemplate, EndDevice, InputMethod, RegistrationType,
    },
    view::DeviceSummary,
    App,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<FormEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Enums and records only reachable through optional fields
    gen.register_type::<ActivationMode>()?;
    gen.register_type::<DeviceClass>()?;
    gen.register_type::<InputMethod>()?;
    gen.register_type::<RegistrationType>()?;
    gen.register_type::<EndDevice>()?;
    gen.register_type::<DeviceTemplate>()?;
    gen.register_type::<DeviceSummary>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
