use crate::log_internal;
use anyhow::{anyhow, Result};
use std::{collections::HashMap, path::PathBuf};

/// Per-user tally
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserCounter {
    pub count: u64,
    /// Display name when the user was first counted.  Not refreshed afterwards.
    pub username: String,
}

/// Counters keyed by user id
pub type Counters = HashMap<String, UserCounter>;

/// Counters which persist across sessions
pub struct PersistentState {
    path: PathBuf,
    counters: Counters,
}

impl PersistentState {
    /// Load counters from `path`.
    ///
    /// A missing, unreadable or malformed file is not an error: the state starts empty and is
    /// immediately written back so the file is valid from then on.
    pub async fn load(path: PathBuf) -> Result<Self> {
        let counters = match tokio::fs::read(&path).await {
            Ok(data) => match serde_json::from_slice::<Counters>(&data) {
                Ok(counters) => Some(counters),
                Err(e) => {
                    log_internal!(
                        "Could not parse state at `{}`, starting fresh: {}",
                        path.to_string_lossy(),
                        e
                    );
                    None
                }
            },
            Err(e) => {
                log_internal!(
                    "Could not read state at `{}`, starting fresh: {}",
                    path.to_string_lossy(),
                    e
                );
                None
            }
        };

        match counters {
            Some(counters) => Ok(Self { path, counters }),
            None => {
                let pstate = Self {
                    path,
                    counters: Counters::new(),
                };
                pstate.save().await?;
                Ok(pstate)
            }
        }
    }

    /// Count one event for `user_id` and persist.  Returns the new count.
    ///
    /// If persisting fails the in-memory change is undone before the error is returned.
    pub async fn record(&mut self, user_id: &str, username: &str) -> Result<u64> {
        let created = !self.counters.contains_key(user_id);
        let counter = self
            .counters
            .entry(user_id.to_owned())
            .or_insert_with(|| UserCounter {
                count: 0,
                username: username.to_owned(),
            });
        counter.count += 1;
        let count = counter.count;

        if let Err(e) = self.save().await {
            if created {
                self.counters.remove(user_id);
            } else if let Some(counter) = self.counters.get_mut(user_id) {
                counter.count -= 1;
            }
            return Err(e);
        }

        Ok(count)
    }

    pub fn snapshot(&self) -> &Counters {
        &self.counters
    }

    pub async fn save(&self) -> Result<()> {
        let path = &self.path;
        let pstate_str = serde_json::to_string_pretty(&self.counters)
            .map_err(|e| anyhow!("Could not serialize state: {}", e))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                anyhow!(
                    "Could not create directory `{}`: {}",
                    parent.to_string_lossy(),
                    e
                )
            })?;
        }

        // Create a temporary file in the same directory.
        let tmp_path = path.with_extension("json.new");

        tokio::fs::write(&tmp_path, pstate_str).await.map_err(|e| {
            anyhow!(
                "Could not write state to temporary file `{}`: {}",
                tmp_path.to_string_lossy(),
                e
            )
        })?;

        // Rename the temporary file over the target file.
        tokio::fs::rename(&tmp_path, path).await.map_err(|e| {
            anyhow!(
                "Could not rename temporary file `{}` to `{}`: {}",
                tmp_path.to_string_lossy(),
                path.to_string_lossy(),
                e
            )
        })?;

        Ok(())
    }
}
