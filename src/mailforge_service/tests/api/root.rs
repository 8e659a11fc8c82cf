use crate::helpers::TestApp;

#[tokio::test]
async fn root_returns_banner() {
    let app = TestApp::new().await;

    let response = app.get_root().await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("running"));
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = TestApp::new().await;

    let ok = app.get_root().await;
    let rejected = app.get_messages(&[]).await;

    assert_eq!(rejected.status().as_u16(), 400);
    for response in [ok, rejected] {
        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["referrer-policy"], "no-referrer");
        assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
        assert!(
            headers["content-security-policy"]
                .to_str()
                .unwrap()
                .starts_with("default-src 'none'")
        );
    }
}
