use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard};

use enumstr::report::{FORMAT_ENV, ORIGIN_ENV};

// The report settings are process-global environment variables; guard access to
// avoid racy tests when reports are rendered in parallel.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARIABLES: [&str; 3] = ["NO_COLOR", ORIGIN_ENV, FORMAT_ENV];

pub struct EnvGuard {
    prev: Vec<(&'static str, Option<OsString>)>,
}

impl EnvGuard {
    fn set(values: &[(&'static str, Option<&str>)]) -> Self {
        let prev = VARIABLES
            .iter()
            .map(|&name| (name, std::env::var_os(name)))
            .collect();
        unsafe {
            for name in VARIABLES {
                std::env::remove_var(name);
            }
            for &(name, value) in values {
                if let Some(val) = value {
                    std::env::set_var(name, val);
                }
            }
        }
        Self { prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            for (name, value) in &self.prev {
                match value {
                    Some(val) => std::env::set_var(name, val),
                    None => std::env::remove_var(name),
                }
            }
        }
    }
}

pub fn with_env(values: &[(&'static str, Option<&str>)]) -> (MutexGuard<'static, ()>, EnvGuard) {
    let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let guard = EnvGuard::set(values);
    (lock, guard)
}
