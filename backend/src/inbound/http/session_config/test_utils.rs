//! Fixtures for session configuration tests.

use std::collections::HashMap;
use std::path::PathBuf;

use mockable::MockEnv;
use uuid::Uuid;

/// Key file in the temp directory, removed on drop.
#[derive(Debug)]
pub(super) struct TempKeyFile {
    path: PathBuf,
}

impl TempKeyFile {
    pub(super) fn new(len: usize) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("puppies-session-key-{}", Uuid::new_v4()));
        std::fs::write(&path, vec![b'k'; len])?;
        Ok(Self { path })
    }

    pub(super) fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for TempKeyFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Environment that answers from `vars` and nothing else.
pub(super) fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}
