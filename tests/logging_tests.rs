use product_api::core::config::LoggingConfig;
use product_api::infrastructure::logger::init_logging;
use std::fs;

// 全局 subscriber 只能初始化一次，所以单独放在这个测试二进制里
#[test]
fn test_init_logging_writes_to_log_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        level: "info".to_string(),
        log_dir: Some(dir.path().to_string_lossy().into_owned()),
        file_prefix: "product-api-test".to_string(),
    };

    let guard = init_logging(&config).unwrap();
    assert!(guard.is_some());

    tracing::error!("logger bootstrap check");
    drop(guard);

    let contents: String = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("product-api-test"))
        })
        .map(|path| fs::read_to_string(path).unwrap())
        .collect();
    assert!(contents.contains("logger bootstrap check"));

    // 第二次初始化返回错误而不是 panic
    assert!(init_logging(&LoggingConfig::default()).is_err());
}
