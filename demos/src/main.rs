// Copyright 2025 the Icecore Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plays the Icecore page headlessly and writes SVG snapshots.

use std::path::Path;

use icecore_demos::{DemoError, PageConfig, session};

fn main() -> Result<(), DemoError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Path::new(env!("CARGO_MANIFEST_DIR")).join("icecore.toml");
    let config = PageConfig::load(&settings)?;
    let written = session::run(&config)?;
    log::info!("{} snapshots in {}", written.len(), config.output_dir.display());
    Ok(())
}
