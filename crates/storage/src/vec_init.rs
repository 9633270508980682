//! sqlite-vec extension registration

use rusqlite::ffi::sqlite3_auto_extension;
use sqlite_vec::sqlite3_vec_init;
use std::sync::Once;

static INIT: Once = Once::new();

/// Register sqlite-vec for every connection opened afterwards.
/// Must be called BEFORE opening any connection; later calls are no-ops.
#[allow(clippy::missing_transmute_annotations)]
pub fn init_sqlite_vec() {
    INIT.call_once(|| {
        unsafe {
            sqlite3_auto_extension(Some(std::mem::transmute(sqlite3_vec_init as *const ())));
        }
        tracing::info!("sqlite-vec extension registered");
    });
}
