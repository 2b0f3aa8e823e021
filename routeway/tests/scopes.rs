mod common;

use common::{middleware_names, route, row, rows};
use routeway::{Method, RouteError, Router, Rules, engine::ScopeDepth};
use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    sync::Arc,
};

#[test]
fn test_routes_prefix() {
    let mut router = Router::new();
    router
        .prefix("my-prefix", |r| {
            r.get("/test", "TestController.test")?;
            r.prefix("done", |r| {
                r.post("/by/me", "DoneController")?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
    router.get("/hey-there", "HeyThereController.tested").unwrap();

    assert_eq!(
        rows(&router),
        vec![
            row("GET", 1, "/hey-there", "HeyThereController.tested"),
            row("GET", 2, "/my-prefix/test", "TestController.test"),
            row("POST", 4, "/my-prefix/done/by/me", "DoneController"),
        ]
    );
}

#[test]
fn test_routes_namespace() {
    let mut router = Router::new();
    router
        .namespace("Auth", |r| {
            r.post("/login", "LoginController.login")?;
            r.namespace("Other", |r| {
                r.get("/tested", "TestedCtrl")?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();

    assert_eq!(
        rows(&router),
        vec![
            row("GET", 1, "/tested", "Auth\\Other\\TestedCtrl"),
            row("POST", 1, "/login", "Auth\\LoginController.login"),
        ]
    );

    let tested = route(&router, "GET", "/tested");
    assert_eq!(tested.controller(), "Auth\\Other\\TestedCtrl");
    assert_eq!(tested.namespace(), Some("Auth\\Other"));
}

#[test]
fn test_custom_namespace_separator() {
    let mut router = Router::new();
    router.set_namespace_separator("::").unwrap();
    router
        .namespace("api", |r| {
            r.get("/ping", "health::Ping@check")?;
            Ok(())
        })
        .unwrap();

    let ping = route(&router, "GET", "/ping");
    assert_eq!(ping.controller(), "api::health::Ping");
    assert_eq!(ping.namespace(), Some("api::health"));
    assert_eq!(ping.action(), "check");
}

#[test]
fn test_namespace_skips_non_action_destinations() {
    let mut router = Router::new();
    router
        .namespace("Admin", |r| {
            r.get("/array", ["UserController", "list"])?;
            Ok(())
        })
        .unwrap();

    assert_eq!(route(&router, "GET", "/array").controller(), "UserController");
}

#[test]
fn test_rules_method() {
    let mut router = Router::new();
    router
        .rules(
            Rules::new()
                .prefix("categories")
                .namespace("Category\\Controller"),
            |r| {
                r.rest("", "TestController")?;
                r.get("/(n)/sub-categories", "TestController.subCategories")?;
                Ok(())
            },
        )
        .unwrap();

    let ns = "Category\\Controller\\TestController";
    assert_eq!(
        rows(&router),
        vec![
            row("GET", 1, "/categories", &format!("{ns}.list")),
            row("GET", 2, "/categories/(n)", &format!("{ns}.one")),
            row(
                "GET",
                3,
                "/categories/(n)/sub-categories",
                &format!("{ns}.subCategories")
            ),
            row("POST", 1, "/categories", &format!("{ns}.save")),
            row("PUT", 2, "/categories/(n)", &format!("{ns}.replace")),
            row("PATCH", 2, "/categories/(n)", &format!("{ns}.replaceFew")),
            row("DELETE", 2, "/categories/(n)", &format!("{ns}.remove")),
        ]
    );
}

#[test]
fn test_scope_is_popped_when_callback_fails() {
    let mut router = Router::new();
    let err = router
        .rules(
            Rules::new()
                .prefix("admin")
                .namespace("Admin")
                .middleware(vec![Arc::new("auth")]),
            |r| {
                r.get("/dashboard", "Dashboard")?;
                r.map("BREW", "/coffee", "Coffee")?;
                Ok(())
            },
        )
        .unwrap_err();
    assert!(matches!(err, RouteError::UnsupportedMethod(_)));

    router.get("/public", "Public").unwrap();
    let public = route(&router, "GET", "/public");
    assert_eq!(public.controller(), "Public");
    assert!(public.middleware().is_empty());
    assert_eq!(router.engine().scope_depth(), ScopeDepth::default());
}

#[test]
fn test_scope_is_popped_when_callback_panics() {
    let mut router = Router::new();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let _ = router.prefix("broken", |_| panic!("boom"));
    }));
    assert!(outcome.is_err());

    router.get("/fine", "Fine").unwrap();
    assert!(router.routes().get(&Method::Get, "/fine").is_some());
}

#[test]
fn test_middleware_scopes_nest() {
    let mut router = Router::new();
    router
        .with_middleware(["session"], |r| {
            r.get("/home", "Home")?;
            r.with_middleware(["auth", "csrf"], |r| {
                r.post("/profile", "Profile@update")?.middleware(["audit"]);
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
    router.get("/open", "Open").unwrap();

    assert_eq!(middleware_names(&route(&router, "GET", "/home")), ["session"]);
    assert_eq!(
        middleware_names(&route(&router, "POST", "/profile")),
        ["session", "auth", "csrf", "audit"]
    );
    assert!(route(&router, "GET", "/open").middleware().is_empty());
}

#[test]
fn test_middleware_persists_across_resolutions() {
    let mut router = Router::new();
    router.get("/user/(n)", "User@show").unwrap().middleware(["auth"]);

    for id in ["1", "2", "3"] {
        let user = route(&router, "GET", &format!("/user/{id}"));
        assert_eq!(middleware_names(&user), ["auth"]);
    }
}
