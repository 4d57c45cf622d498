use anyhow::Result;
use clearpass_ui_core::{
    commands::timer::{TimerOperation, TimerOutput},
    types::FeedbackKind,
    App,
};
use crux_core::typegen::TypeGen;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Shell-side effect payloads are not reachable from the event tree
    gen.register_type::<TimerOperation>()?;
    gen.register_type::<TimerOutput>()?;
    gen.register_type::<FeedbackKind>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
