use log::Level;
use pubapp::{
    config::Config,
    error::LoadError,
    init_with,
    page::Fragments,
};
use test_pubrender::{
    logger::CaptureLogger,
    mock::MockSource,
};

#[async_std::test]
async fn not_found_logged_once() {
    let logger = CaptureLogger::install();
    logger.take();

    let mut source = MockSource::new();
    source.expect_fetch()
        .times(1)
        .returning(|| Err(LoadError::Status(404)));
    let config = Config::default();
    let mut page = Fragments::new([&config.journal_container, &config.working_container]);

    init_with(&source, &mut page, &config).await;

    assert!(page.is_untouched());
    let errors = logger.take_at(Level::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Error loading research data:"));
    assert!(errors[0].contains("404"));
}
