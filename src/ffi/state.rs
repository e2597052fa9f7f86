//! Process-wide boundary state
//!
//! The boundary owns one shared `RecordStore`, created lazily from the
//! environment unless the host sets a path first.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::{Arc, Once};

use parking_lot::{const_rwlock, RwLock};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::error::{FormStoreError, Result};
use crate::store::RecordStore;

static STORE: RwLock<Option<Arc<RecordStore>>> = const_rwlock(None);

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber on first use, unless the host already has one
pub(crate) fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(false)
            .try_init();
    });
}

/// The shared store, created from `Config::from_env()` on first use
pub(crate) fn store() -> Result<Arc<RecordStore>> {
    if let Some(store) = STORE.read().as_ref() {
        return Ok(Arc::clone(store));
    }

    let mut slot = STORE.write();
    if let Some(store) = slot.as_ref() {
        return Ok(Arc::clone(store));
    }

    let store = Arc::new(RecordStore::open(Config::from_env()?));
    *slot = Some(Arc::clone(&store));
    Ok(store)
}

/// Point the shared store at another file
///
/// Setting the current path again keeps the existing store, so its write lock
/// keeps serializing appends. Calls already holding a replaced store finish
/// against it.
pub(crate) fn set_data_file(path: PathBuf) {
    let mut slot = STORE.write();
    if slot.as_ref().is_some_and(|store| store.data_file() == path.as_path()) {
        debug!(path = %path.display(), "Boundary data file unchanged");
        return;
    }

    debug!(path = %path.display(), "Boundary data file set");
    let config = Config::builder().data_file(path).build();
    *slot = Some(Arc::new(RecordStore::open(config)));
}

/// Run `f`, turning a panic into `FormStoreError::Panic`
pub(crate) fn guard<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(FormStoreError::Panic(panic_message(payload.as_ref())))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
