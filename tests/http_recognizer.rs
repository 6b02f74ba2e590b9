#![cfg(feature = "http-recognizer")]

use path_recognizer::{
    http_recognizer, params, HttpRecognizer, Method, RecognizerError, RouteConfig,
};

use http::{Request, Uri};

#[test]
fn http_recognizer_macro() {
    let recognizer: HttpRecognizer<i32> = http_recognizer! {
        GET user_post: "/u/:uid/p/:pid" => 1,
        POST user_posts: "/u/:uid/p" => 2,
        GET info: "/v1/info" => 3,
        POST info: "/v1/info" => 4,
        HEAD files: "/*path" => 5,
    };

    let cases: &[(Method, &str, i32)] = &[
        (Method::GET, "/u/asd/p/qwe", 1),
        (Method::POST, "/u/asd/p", 2),
        (Method::GET, "/v1/info", 3),
        (Method::POST, "/v1/info", 4),
        (Method::HEAD, "/home/asd", 5),
    ];

    for (method, path, handler) in cases {
        let result = recognizer.recognize(method, path).unwrap();
        assert_eq!(*result[0].handler, *handler, "{} {}", method, path);
    }

    assert!(recognizer.recognize(&Method::DELETE, "/v1/info").is_none());
    assert!(recognizer.recognize(&Method::POST, "/u/asd/p/qwe").is_none());

    let result = recognizer.recognize(&Method::GET, "/u/asd/p/qwe").unwrap();
    assert_eq!(result[0].params.get("uid"), Some("asd"));
    assert_eq!(result[0].params.get("pid"), Some("qwe"));
}

#[test]
fn routes_are_scoped_by_method() {
    let mut recognizer = HttpRecognizer::new();
    recognizer
        .add(Method::GET, RouteConfig::new("/items/:id", "show").name("item"))
        .add(Method::PUT, RouteConfig::new("/items/:id", "update").name("item"));

    assert!(recognizer.has_route(&Method::GET, "item"));
    assert!(recognizer.has_route(&Method::PUT, "item"));
    assert!(!recognizer.has_route(&Method::DELETE, "item"));

    assert_eq!(*recognizer.recognize(&Method::PUT, "/items/1").unwrap()[0].handler, "update");
    assert_eq!(recognizer.recognizer(&Method::GET).map(|r| r.len()), Some(1));
    assert!(recognizer.recognizer(&Method::PATCH).is_none());
}

#[test]
fn recognize_requests() {
    let mut recognizer = HttpRecognizer::new();
    recognizer.add(Method::GET, RouteConfig::new("/search/:scope", 1));

    let req = Request::get("/search/code?q=router&page=2")
        .body(())
        .unwrap();
    let result = recognizer.recognize_request(&req).unwrap();
    assert_eq!(result[0].params.get("scope"), Some("code"));
    assert_eq!(result.query_params["q"].as_str(), Some("router"));
    assert_eq!(result.query_params["page"].as_str(), Some("2"));

    let uri: Uri = "https://example.com/search/issues".parse().unwrap();
    let result = recognizer.recognize_uri(&Method::GET, &uri).unwrap();
    assert_eq!(result[0].params.get("scope"), Some("issues"));

    let req = Request::post("/search/code").body(()).unwrap();
    assert!(recognizer.recognize_request(&req).is_none());
}

#[test]
fn generate_paths_and_uris() {
    let mut recognizer = HttpRecognizer::new();
    recognizer
        .try_add(Method::GET, RouteConfig::new("/users/:id", ()).name("user"))
        .unwrap();

    let p = params! { "id" => 7, "tab" => "repos" };
    assert_eq!(
        recognizer.generate(&Method::GET, "user", &p).unwrap(),
        "/users/7?tab=repos"
    );

    let uri = recognizer.generate_uri(&Method::GET, "user", &p).unwrap();
    assert_eq!(uri.path(), "/users/7");
    assert_eq!(uri.query(), Some("tab=repos"));

    assert!(matches!(
        recognizer.generate(&Method::POST, "user", &p),
        Err(RecognizerError::NotFound { .. })
    ));
    assert!(matches!(
        recognizer.generate(&Method::GET, "nobody", &p),
        Err(RecognizerError::NotFound { .. })
    ));
}

#[test]
fn invalid_generated_uri() {
    let mut recognizer = HttpRecognizer::new();
    recognizer.add(Method::GET, RouteConfig::new("/x", ()).name("x").href("not a uri"));

    assert!(matches!(
        recognizer.generate_uri(&Method::GET, "x", &params! {}),
        Err(RecognizerError::InvalidUri(_))
    ));
}
