use routeway::{RouteError, Router};

const NO_PARAMS: &[&str] = &[];

#[test]
fn test_routes_naming() {
    let mut router = Router::new();
    router.get("/", "IndexController.index").unwrap().name("home");

    assert_eq!(router.url("home", NO_PARAMS).unwrap(), "/");
}

#[test]
fn test_alias_records_the_composed_pattern() {
    let mut router = Router::new();
    router
        .prefix("blog", |r| {
            r.get("/(s)/comments/(n)", "CommentController.show")?
                .name("comment");
            Ok(())
        })
        .unwrap();

    assert_eq!(router.url("comment", NO_PARAMS).unwrap(), "/blog/(s)/comments/(n)");
    assert_eq!(
        router.url("comment", &["rust-tips", "12"]).unwrap(),
        "/blog/rust-tips/comments/12"
    );
    assert_eq!(
        router.url("comment", &["rust-tips"]).unwrap(),
        "/blog/rust-tips/comments/(n)"
    );
}

#[test]
fn test_owned_params() {
    let mut router = Router::new();
    router.get("/user/(n)", "UserController.show").unwrap().name("user");

    let id = 42.to_string();
    assert_eq!(router.url("user", &[id]).unwrap(), "/user/42");
}

#[test]
fn test_alias_not_found() {
    let router = Router::new();
    let err = router.url("missing", NO_PARAMS).unwrap_err();

    assert!(matches!(err, RouteError::AliasNotFound(ref a) if a == "missing"));
    assert_eq!(err.to_string(), "The route alias missing not found.");
    assert_eq!(err.code(), 3);
}

#[test]
fn test_generated_auth_aliases() {
    let mut router = Router::new();
    router.auth("", "AuthController", "").unwrap();

    for (alias, url) in [
        ("login", "/login"),
        ("post.login", "/login"),
        ("register", "/register"),
        ("post.register", "/register"),
        ("logout", "/logout"),
    ] {
        assert_eq!(router.url(alias, NO_PARAMS).unwrap(), url);
    }
    assert_eq!(router.aliases().len(), 5);
}
