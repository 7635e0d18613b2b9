use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the test logger once per process.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
