use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_REGISTRY_FILE};
use crate::error::{RegistryError, Result};

pub fn run<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<()> {
    let config_path = Config::config_path()?;
    write_config(&config_path, &mut input, out)
}

fn write_config<R: BufRead, W: Write>(config_path: &Path, input: &mut R, out: &mut W) -> Result<()> {
    if config_path.exists() {
        write!(
            out,
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        )?;
        out.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;

        if !answer.trim().eq_ignore_ascii_case("y") {
            writeln!(out, "Aborted.")?;
            return Ok(());
        }
    }

    writeln!(out, "DLG Registry Configuration")?;
    writeln!(out, "==========================\n")?;

    write!(out, "Registry file path [{DEFAULT_REGISTRY_FILE}]: ")?;
    out.flush()?;

    let mut registry_file = String::new();
    input.read_line(&mut registry_file)?;
    let registry_file = registry_file.trim();

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RegistryError::ConfigWrite {
            path: config_path.to_path_buf(),
            source: e,
        })?;
    }

    let config = Config {
        registry_file: (!registry_file.is_empty()).then(|| PathBuf::from(registry_file)),
    };
    let config_content = toml::to_string(&config)?;

    std::fs::write(config_path, config_content).map_err(|e| RegistryError::ConfigWrite {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    writeln!(out, "\nConfig saved to {}", config_path.display())?;

    Ok(())
}
