//! Isolation helpers for tests touching `OSGATE_*` variables.

use std::env;
use std::sync::Mutex;

/// Held by every test that reads or writes the probe's environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets or clears a variable and puts the previous value back on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    pub fn remove(key: &'static str) -> Self {
        Self::replace(key, None)
    }

    fn replace(key: &'static str, value: Option<&str>) -> Self {
        let previous = env::var(key).ok();
        write_var(key, value);
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        write_var(self.key, self.previous.as_deref());
    }
}

#[allow(unsafe_code)]
fn write_var(key: &str, value: Option<&str>) {
    // Callers hold ENV_LOCK, so no other test thread touches the environment.
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}
