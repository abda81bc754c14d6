//! Shared helpers for working with `figment::Jail` in tests.
//!
//! A jail gives each test a private working directory and environment, so
//! configs can be loaded from a real `docnote.toml` without touching the
//! caller's files.

use anyhow::{Result, anyhow};
use camino::Utf8Path;
use docnote::{CONFIG_FILE_NAME, DocnoteConfig};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Write `toml` to `docnote.toml`, apply `env` and load a config from the
/// jail's working directory.
///
/// # Errors
///
/// Returns an error when the file cannot be written or the config fails to
/// build.
pub fn load_in_jail(toml: Option<&str>, env: &[(&str, &str)]) -> Result<DocnoteConfig> {
    with_jail(|j| {
        if let Some(contents) = toml {
            j.create_file(CONFIG_FILE_NAME, contents)?;
        }
        for (key, value) in env {
            j.set_env(key, value);
        }
        let dir = Utf8Path::from_path(j.directory())
            .ok_or_else(|| figment::Error::from("jail directory is not valid UTF-8"))?;
        DocnoteConfig::load_from_dir(dir).map_err(|err| figment_error(&err))
    })
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
pub fn figment_error<E: ToString>(err: &E) -> figment::Error {
    figment::Error::from(err.to_string())
}
