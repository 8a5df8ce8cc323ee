mod classifier_tests;

use crate::DidUtil;

static ONCE: std::sync::Once = std::sync::Once::new();

fn get_did_util() -> DidUtil {
    // other test modules may have installed env_logger already
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
    DidUtil::new()
}
