use crate::config::BuilderConfig;
use crate::domain::auth::Auth;
use crate::domain::payload::Payload;
use crate::domain::ports::FileProbeBox;
use crate::domain::step::{Step, Steps, reverse_steps, steps_to_value};
use crate::error::{AssemblyError, Result};
use crate::infrastructure::local_fs::LocalFileSystem;
use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Keys that may not be used for fields or files.
pub const RESERVED_KEYS: [&str; 3] = ["params", "template_id", "notify_url"];

const FILE_KEY_PREFIX: &str = "file_";

const AUTH_PARAM: &str = "auth";
const STEPS_PARAM: &str = "steps";
const NOTIFY_URL_PARAM: &str = "notify_url";
const TEMPLATE_ID_PARAM: &str = "template_id";

pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Accumulates everything an assembly request needs and turns it into a
/// [`Payload`].
///
/// The builder owns all mutable state. [`AssemblyBuilder::build`] produces a new
/// payload on every call and never feeds back into the builder.
pub struct AssemblyBuilder {
    auth: Auth,
    steps: Steps,
    data: Payload,
    file_increment: usize,
    probe: FileProbeBox,
}

impl AssemblyBuilder {
    /// Creates a builder that checks files on the local filesystem and expires
    /// two hours from now.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self::with_probe(config, Box::new(LocalFileSystem))
    }

    /// Creates a builder with a custom file probe.
    ///
    /// # Arguments
    ///
    /// * `config` - Controls the default auth expiry.
    /// * `probe` - Decides whether a path may be attached.
    pub fn with_probe(config: BuilderConfig, probe: FileProbeBox) -> Self {
        Self {
            auth: Auth::expiring_at(Utc::now() + config.default_expiration()),
            steps: Steps::new(),
            data: Payload::new(),
            file_increment: 0,
            probe,
        }
    }

    /// Attaches a file under the next autogenerated `file_<N>` key.
    ///
    /// The counter advances before the file is checked, so a rejected file
    /// still leaves a gap in the numbering. Returns the key used.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<String> {
        let key = self.next_file_key();
        self.attach(key, path.as_ref())
    }

    /// Attaches a file under `key`.
    ///
    /// If `key` already names a field or a file, the file is attached under an
    /// autogenerated key instead and the existing entry is left alone. Returns
    /// the key actually used.
    pub fn add_file_with_key(
        &mut self,
        key: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<String> {
        self.attach(key.into(), path.as_ref())
    }

    /// Adds or replaces the step called `name`.
    ///
    /// A replaced step keeps its original position; new names are appended.
    pub fn add_step<S: Step + ?Sized>(&mut self, name: impl Into<String>, step: &S) {
        let name = name.into();
        debug!(step = %name, "Adding step");
        self.steps.insert(name, step.to_options());
    }

    /// Sets a plain field. Fields may overwrite fields but never shadow a file.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        validate_key(&key)?;

        if self.data.files().contains_key(&key) {
            return Err(AssemblyError::AlreadyDefinedKey {
                key,
                section: "files",
            });
        }

        debug!(field = %key, "Setting field");
        self.data.add_field(key, value);
        Ok(())
    }

    pub fn set_auth_expires<Tz: TimeZone>(&mut self, at: DateTime<Tz>) {
        self.auth.set_expires(at);
    }

    pub fn set_auth_key(&mut self, key: impl Into<String>) {
        self.auth.set_key(key);
    }

    pub fn set_auth_max_size(&mut self, max_size: u64) {
        self.auth.set_max_size(max_size);
    }

    /// Sets the notification URL, or removes it when `None`.
    pub fn set_notify_url(&mut self, notify_url: Option<&str>) {
        self.set_optional_param(NOTIFY_URL_PARAM, notify_url);
    }

    /// Sets the template id, or removes it when `None`.
    pub fn set_template_id(&mut self, template_id: Option<&str>) {
        self.set_optional_param(TEMPLATE_ID_PARAM, template_id);
    }

    pub fn has_notify_url(&self) -> bool {
        self.data.has_param(NOTIFY_URL_PARAM)
    }

    pub fn has_template_id(&self) -> bool {
        self.data.has_param(TEMPLATE_ID_PARAM)
    }

    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn fields(&self) -> &IndexMap<String, String> {
        self.data.fields()
    }

    pub fn files(&self) -> &IndexMap<String, PathBuf> {
        self.data.files()
    }

    /// Steps in the order they were added.
    pub fn steps(&self) -> &Steps {
        &self.steps
    }

    /// Produces the payload for the current state.
    ///
    /// `params` holds `auth` first, then `notify_url`/`template_id` in the order
    /// they were set, then `steps` in reverse insertion order. `steps` is left
    /// out entirely when no step was added.
    pub fn build(&self) -> Payload {
        let mut params = IndexMap::with_capacity(self.data.params().len() + 2);
        params.insert(AUTH_PARAM.to_string(), self.auth.to_value());
        params.extend(
            self.data
                .params()
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );

        if self.has_steps() {
            params.insert(
                STEPS_PARAM.to_string(),
                steps_to_value(&reverse_steps(&self.steps)),
            );
        }

        Payload::from_parts(params, self.fields().clone(), self.files().clone())
    }

    fn attach(&mut self, key: String, path: &Path) -> Result<String> {
        validate_key(&key)?;
        self.check_file(path)?;

        let mut key = key;
        while self.data.has_key(&key) {
            let generated = self.next_file_key();
            info!(
                key = %key,
                generated = %generated,
                file = %path.display(),
                "Key already defined, using autogenerated key"
            );
            key = generated;
        }

        debug!(key = %key, file = %path.display(), "Attaching file");
        self.data.add_file(key.clone(), path);
        Ok(key)
    }

    fn check_file(&self, path: &Path) -> Result<()> {
        if self.probe.is_openable(path) {
            Ok(())
        } else {
            Err(AssemblyError::FileNotOpenable {
                path: path.to_path_buf(),
            })
        }
    }

    fn next_file_key(&mut self) -> String {
        let key = format!("{FILE_KEY_PREFIX}{}", self.file_increment);
        self.file_increment += 1;
        key
    }

    fn set_optional_param(&mut self, param: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.data.add_param(param, value);
            }
            None => {
                self.data.remove_param(param);
            }
        }
    }
}

impl Default for AssemblyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_key(key: &str) -> Result<()> {
    if is_reserved_key(key) {
        Err(AssemblyError::InvalidFieldKey {
            key: key.to_string(),
        })
    } else {
        Ok(())
    }
}
