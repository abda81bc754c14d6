//! Building configs from figment providers.

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};

use super::{DocnoteConfig, DocnoteConfigParams, schema};
use crate::{DocnoteResult, DocnoteResultExt};

/// File read by [`DocnoteConfig::figment`] from the given directory.
pub const CONFIG_FILE_NAME: &str = "docnote.toml";

/// Prefix of environment variables read by [`DocnoteConfig::figment`].
pub const ENV_PREFIX: &str = "DOCNOTE_";

impl DocnoteConfig {
    /// Layer `<dir>/docnote.toml` under `DOCNOTE_*` environment variables.
    ///
    /// A missing file contributes nothing. Environment keys are lowercased
    /// after the prefix is stripped, so `DOCNOTE_MARKUP_LANG` sets
    /// `markup_lang`. Only the declared fields are read from the
    /// environment; extra fields come from the file alone, so unrelated
    /// variables such as `DOCNOTE_LOG` are ignored.
    #[must_use]
    pub fn figment(dir: &Utf8Path) -> Figment {
        Figment::new()
            .merge(Toml::file(dir.join(CONFIG_FILE_NAME)))
            .merge(Env::prefixed(ENV_PREFIX).only(&schema::DECLARED_FIELDS))
    }

    /// Extract params from `figment` and build a config from them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DocnoteError::Gathering`] when the providers fail or
    /// a value has the wrong shape, plus every error documented on
    /// [`DocnoteConfig::from_params`].
    ///
    /// ```
    /// use docnote::DocnoteConfig;
    /// use figment::{Figment, providers::{Format, Toml}};
    ///
    /// let figment = Figment::from(Toml::string("markup_lang = 'rst'"));
    /// let config = DocnoteConfig::from_figment(&figment)?;
    /// assert_eq!(config.markup_lang().map(|lang| lang.as_str()), Some("rst"));
    /// # Ok::<_, std::sync::Arc<docnote::DocnoteError>>(())
    /// ```
    pub fn from_figment(figment: &Figment) -> DocnoteResult<Self> {
        let params: DocnoteConfigParams = figment.extract().into_docnote()?;
        tracing::debug!(fields = ?params.field_names(), "extracted docnote params");
        Self::from_params(params)
    }

    /// Shorthand for [`Self::from_figment`] over [`Self::figment`].
    ///
    /// # Errors
    ///
    /// See [`Self::from_figment`].
    pub fn load_from_dir(dir: &Utf8Path) -> DocnoteResult<Self> {
        Self::from_figment(&Self::figment(dir))
    }
}
