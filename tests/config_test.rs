// ==========================================
// ConfigManager 集成测试
// ==========================================

mod helpers;

use helpers::api_test_helper::PortalTestEnv;

use freight_portal::config::config_keys;

#[test]
fn test_配置读写往返() {
    let env = PortalTestEnv::new().expect("无法创建测试环境");

    env.config
        .set_global_config_value(config_keys::DEFAULT_PAGE_SIZE, "50")
        .expect("写配置失败");

    let value = env
        .config
        .get_config_value(config_keys::DEFAULT_PAGE_SIZE)
        .expect("读配置失败");
    assert_eq!(value.as_deref(), Some("50"));
    assert_eq!(env.config.get_default_page_size(), 50);
}

#[test]
fn test_缺失配置回退默认值() {
    let env = PortalTestEnv::new().expect("无法创建测试环境");
    assert_eq!(env.config.get_trend_window_months(), 12);
    assert_eq!(env.config.get_default_page_size(), 20);
    assert_eq!(env.config.get_max_page_size(), 200);
}

#[test]
fn test_非法配置值回退并钳制() {
    let env = PortalTestEnv::new().expect("无法创建测试环境");

    env.config
        .set_global_config_value(config_keys::TREND_WINDOW_MONTHS, "abc")
        .expect("写配置失败");
    assert_eq!(env.config.get_trend_window_months(), 12);

    env.config
        .set_global_config_value(config_keys::TREND_WINDOW_MONTHS, "999")
        .expect("写配置失败");
    assert_eq!(env.config.get_trend_window_months(), 36, "窗口月数钳制到上限");

    env.config
        .set_global_config_value(config_keys::TREND_WINDOW_MONTHS, "0")
        .expect("写配置失败");
    assert_eq!(env.config.get_trend_window_months(), 1, "窗口月数钳制到下限");
}
