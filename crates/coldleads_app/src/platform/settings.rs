use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use coldleads_core::present::DEFAULT_MAIL_SUBJECT;
use coldleads_engine::{ClientSettings, TransportError, DEFAULT_API_BASE};
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;
use crate::args::Args;

/// Optional on-disk settings. Every field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct FileSettings {
    pub api_base: Option<String>,
    pub mail_subject: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_destination: Option<LogDestination>,
}

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Effective configuration after merging defaults, the file and the command line.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub client: ClientSettings,
    pub mail_subject: String,
}

/// Read settings from `path`. A missing file is not an error.
pub(crate) fn load_settings(path: &Path) -> Result<Option<FileSettings>, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) fn resolve(settings: FileSettings, args: &Args) -> Result<AppConfig, TransportError> {
    let api_base = args
        .api_base
        .as_deref()
        .or(settings.api_base.as_deref())
        .unwrap_or(DEFAULT_API_BASE);

    let client = ClientSettings {
        connect_timeout: settings.connect_timeout_secs.map(Duration::from_secs),
        request_timeout: settings.request_timeout_secs.map(Duration::from_secs),
        ..ClientSettings::for_api_base(api_base)?
    };

    Ok(AppConfig {
        client,
        mail_subject: settings
            .mail_subject
            .unwrap_or_else(|| DEFAULT_MAIL_SUBJECT.to_string()),
    })
}
