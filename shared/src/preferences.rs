//! Injected key/value preference storage with change notifications.
//!
//! The browser build backs this with `localStorage`; native code uses a JSON
//! file or plain memory.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    fmt,
    rc::Rc,
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub const THEME_KEY: &str = "iq:theme";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    #[error("preference io: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Called with the new value, or `None` when the key was removed.
pub type Listener = Rc<dyn Fn(Option<&str>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    fn remove(&self, key: &str) -> Result<(), PreferenceError>;

    fn subscribe(&self, key: &str, listener: Listener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

/// Listener registry shared by the store implementations.
#[derive(Default)]
pub struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, String, Listener)>>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.borrow().len())
            .finish()
    }
}

impl Listeners {
    pub fn add(&self, key: &str, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, key.to_string(), listener));
        id
    }

    pub fn remove(&self, id: SubscriptionId) {
        self.entries.borrow_mut().retain(|(entry_id, _, _)| *entry_id != id);
    }

    /// Listeners may read or write the store from inside the callback.
    pub fn notify(&self, key: &str, value: Option<&str>) {
        let matching: Vec<Listener> = self
            .entries
            .borrow()
            .iter()
            .filter(|(_, entry_key, _)| entry_key == key)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();
        for listener in matching {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<BTreeMap<String, String>>,
    listeners: Listeners,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        self.listeners.notify(key, Some(value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        let removed = self.values.borrow_mut().remove(key);
        if removed.is_some() {
            self.listeners.notify(key, None);
        }
        Ok(())
    }

    fn subscribe(&self, key: &str, listener: Listener) -> SubscriptionId {
        self.listeners.add(key, listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.remove(id);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFilePreferences;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        fs, io,
        path::{Path, PathBuf},
    };

    use super::{Listener, Listeners, PreferenceError, PreferenceStore, SubscriptionId};

    /// Preferences persisted as a flat JSON object. Every write rewrites the
    /// file through a temporary sibling.
    #[derive(Debug)]
    pub struct JsonFilePreferences {
        path: PathBuf,
        values: RefCell<BTreeMap<String, String>>,
        listeners: Listeners,
    }

    impl JsonFilePreferences {
        /// A missing file starts empty; an unreadable one is logged and ignored.
        pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
            let path = path.into();
            let values = match fs::read_to_string(&path) {
                Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                    tracing::warn!(path = %path.display(), error = %err, "corrupt preference file, starting empty");
                    BTreeMap::new()
                }),
                Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
                Err(err) => return Err(err.into()),
            };
            Ok(Self {
                path,
                values: RefCell::new(values),
                listeners: Listeners::default(),
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn persist(&self) -> Result<(), PreferenceError> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let body = serde_json::to_string_pretty(&*self.values.borrow())?;
            let tmp = self.path.with_extension("json.tmp");
            fs::write(&tmp, body)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        }

        /// Persist, putting `key` back to `previous` if the write fails.
        fn persist_or_restore(
            &self,
            key: &str,
            previous: Option<String>,
        ) -> Result<(), PreferenceError> {
            self.persist().inspect_err(|err| {
                tracing::warn!(path = %self.path.display(), key, error = %err, "preference not saved");
                let mut values = self.values.borrow_mut();
                match previous {
                    Some(value) => values.insert(key.to_string(), value),
                    None => values.remove(key),
                };
            })
        }
    }

    impl PreferenceStore for JsonFilePreferences {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            let previous = self.values.borrow_mut().insert(key.to_string(), value.to_string());
            self.persist_or_restore(key, previous)?;
            self.listeners.notify(key, Some(value));
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), PreferenceError> {
            let removed = self.values.borrow_mut().remove(key);
            if removed.is_some() {
                self.persist_or_restore(key, removed)?;
                self.listeners.notify(key, None);
            }
            Ok(())
        }

        fn subscribe(&self, key: &str, listener: Listener) -> SubscriptionId {
            self.listeners.add(key, listener)
        }

        fn unsubscribe(&self, id: SubscriptionId) {
            self.listeners.remove(id);
        }
    }
}

/// Reads a JSON-encoded preference. Undecodable values count as absent.
pub fn get_json<T: DeserializeOwned>(store: &dyn PreferenceStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "ignoring undecodable preference");
            None
        }
    }
}

pub fn set_json<T: Serialize>(
    store: &dyn PreferenceStore,
    key: &str,
    value: &T,
) -> Result<(), PreferenceError> {
    store.set(key, &serde_json::to_string(value)?)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn load(store: &dyn PreferenceStore) -> Self {
        store
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn save(self, store: &dyn PreferenceStore) -> Result<(), PreferenceError> {
        store.set(THEME_KEY, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_notifies_subscribers_of_their_key() {
        let store = MemoryPreferences::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = store.subscribe(
            THEME_KEY,
            Rc::new(move |value: Option<&str>| sink.borrow_mut().push(value.map(str::to_string))),
        );

        store.set(THEME_KEY, "dark").unwrap();
        store.set("other", "x").unwrap();
        store.remove(THEME_KEY).unwrap();
        store.unsubscribe(id);
        store.set(THEME_KEY, "light").unwrap();

        assert_eq!(*seen.borrow(), vec![Some("dark".to_string()), None]);
    }

    #[test]
    fn listener_can_read_store_reentrantly() {
        let store = Rc::new(MemoryPreferences::new());
        let reader = Rc::clone(&store);
        let observed = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&observed);
        store.subscribe(
            "k",
            Rc::new(move |_: Option<&str>| *sink.borrow_mut() = reader.get("k")),
        );
        store.set("k", "v").unwrap();
        assert_eq!(observed.borrow().as_deref(), Some("v"));
    }

    #[test]
    fn theme_defaults_to_light_and_round_trips() {
        let store = MemoryPreferences::new();
        assert_eq!(Theme::load(&store), Theme::Light);
        Theme::Dark.save(&store).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);

        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn json_helpers_skip_garbage() {
        let store = MemoryPreferences::new();
        set_json(&store, "page", &3usize).unwrap();
        assert_eq!(get_json::<usize>(&store, "page"), Some(3));
        store.set("page", "{not json").unwrap();
        assert_eq!(get_json::<usize>(&store, "page"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        {
            let store = JsonFilePreferences::open(&path).unwrap();
            Theme::Dark.save(&store).unwrap();
        }
        let reopened = JsonFilePreferences::open(&path).unwrap();
        assert_eq!(Theme::load(&reopened), Theme::Dark);
        reopened.remove(THEME_KEY).unwrap();
        let again = JsonFilePreferences::open(&path).unwrap();
        assert_eq!(again.get(THEME_KEY), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn failed_write_leaves_memory_matching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = JsonFilePreferences::open(&path).unwrap();
        store.set("page", "3").unwrap();

        // A directory in place of the file makes the final rename fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        assert!(Theme::Dark.save(&store).is_err());
        assert_eq!(store.get(THEME_KEY), None);
        assert!(store.set("page", "4").is_err());
        assert_eq!(store.get("page").as_deref(), Some("3"));
        assert!(store.remove("page").is_err());
        assert_eq!(store.get("page").as_deref(), Some("3"));

        std::fs::remove_dir(&path).unwrap();
        store.set("lang", "vi").unwrap();
        let reopened = JsonFilePreferences::open(&path).unwrap();
        assert_eq!(reopened.get(THEME_KEY), None);
        assert_eq!(reopened.get("page").as_deref(), Some("3"));
        assert_eq!(reopened.get("lang").as_deref(), Some("vi"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "][").unwrap();
        let store = JsonFilePreferences::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
    }
}
