use iqtest_shared::preferences::{
    Listener, Listeners, PreferenceError, PreferenceStore, SubscriptionId, Theme,
};
use web_sys::{window, Storage};

/// `localStorage`-backed preferences. Listeners only see writes made through
/// this store, not other tabs.
#[derive(Debug, Default)]
pub struct LocalStoragePreferences {
    listeners: Listeners,
}

impl LocalStoragePreferences {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage() -> Result<Storage, PreferenceError> {
        window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or_else(|| PreferenceError::Unavailable("localStorage".to_string()))
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PreferenceError::Unavailable(format!("{e:?}")))?;
        self.listeners.notify(key, Some(value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PreferenceError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| PreferenceError::Unavailable(format!("{e:?}")))?;
        self.listeners.notify(key, None);
        Ok(())
    }

    fn subscribe(&self, key: &str, listener: Listener) -> SubscriptionId {
        self.listeners.add(key, listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.remove(id);
    }
}

/// Mirrors the theme onto `<html data-theme>` so CSS variables switch.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}
