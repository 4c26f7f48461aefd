use crate::*;

#[test]
fn test_error_display() {
    let error = YourRouteError::MalformedInput("缺少字段 location".to_string());
    assert_eq!(error.to_string(), "请求数据格式错误: 缺少字段 location");

    let error = YourRouteError::UpstreamAuth("HTTP 401".to_string());
    assert_eq!(error.to_string(), "上游认证失败: HTTP 401");

    let error = YourRouteError::NotFound("profile admin".to_string());
    assert_eq!(error.to_string(), "资源未找到: profile admin");

    let error = YourRouteError::Internal("Unexpected error".to_string());
    assert_eq!(error.to_string(), "内部错误: Unexpected error");
}

#[test]
fn test_helper_constructors() {
    assert!(matches!(
        YourRouteError::malformed("x"),
        YourRouteError::MalformedInput(ref m) if m == "x"
    ));
    assert!(matches!(
        YourRouteError::upstream_auth("x"),
        YourRouteError::UpstreamAuth(_)
    ));
    assert!(matches!(
        YourRouteError::config_error("x"),
        YourRouteError::Configuration(_)
    ));
    assert!(matches!(
        YourRouteError::unauthorized("x"),
        YourRouteError::Unauthorized(_)
    ));
}
#[test]
fn test_user_message_hides_details() {
    let scenarios = vec![
        (YourRouteError::Network("refused".into()), "系统繁忙，请稍后重试"),
        (YourRouteError::Timeout("smtp".into()), "操作超时，请稍后重试"),
        (YourRouteError::MalformedInput("x".into()), "请求数据验证失败"),
        (YourRouteError::NotFound("x".into()), "请求的资源不存在"),
        (YourRouteError::UpstreamAuth("HTTP 401".into()), "第三方服务认证失败"),
        (YourRouteError::Internal("secret detail".into()), "系统繁忙，请稍后重试"),
    ];

    for (error, expected_user_msg) in scenarios {
        assert_eq!(error.user_message(), expected_user_msg);
    }
}
