mod destroyable;
pub mod events;
pub mod game;
pub mod model;
pub mod ui;

#[cfg(test)]
mod tests {
    use std::sync::Once;
    use test_context::TestContext;

    static INIT_LOGGER: Once = Once::new();

    pub struct UsingLogger;

    impl TestContext for UsingLogger {
        fn setup() -> UsingLogger {
            INIT_LOGGER.call_once(|| {
                let _ = env_logger::builder().is_test(true).try_init();
            });
            UsingLogger
        }

        fn teardown(self) {}
    }
}
