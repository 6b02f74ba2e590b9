use path_recognizer::{params, RecognizerError, RouteConfig, RouteMap, RouteRecognizer};

#[test]
fn nested_chain_yields_one_record_per_handler() {
    let mut recognizer = RouteRecognizer::new();
    recognizer
        .add_nested(vec![
            RouteConfig::new("/admin", "admin"),
            RouteConfig::new("/users/:id", "user").name("admin.user"),
        ])
        .unwrap();

    let result = recognizer.recognize("/admin/users/3").unwrap();
    assert_eq!(result.len(), 2);

    assert_eq!(*result[0].handler, "admin");
    assert!(!result[0].is_dynamic);
    assert!(result[0].params.is_empty());

    assert_eq!(*result[1].handler, "user");
    assert!(result[1].is_dynamic);
    assert_eq!(result[1].params.get("id"), Some("3"));

    assert_eq!(
        recognizer.generate("admin.user", &params! { "id" => 3 }).unwrap(),
        "/admin/users/3"
    );
    assert_eq!(recognizer.route("admin.user").unwrap().pattern(), "/admin/users/:id");

    let handlers = recognizer.handlers_for("admin.user").unwrap();
    assert_eq!(handlers.len(), 2);
    assert_eq!(handlers[1].names.len(), 1);
}

#[test]
fn captures_are_split_between_handlers() {
    let mut recognizer = RouteRecognizer::new();
    recognizer
        .add_nested(vec![
            RouteConfig::new("/orgs/:org", 1),
            RouteConfig::new("/repos/:repo/*path", 2),
        ])
        .unwrap();

    let result = recognizer.recognize("/orgs/acme/repos/router/src/lib.rs").unwrap();
    let records: Vec<_> = result
        .iter()
        .map(|r| (*r.handler, r.params.iter().collect::<Vec<_>>()))
        .collect();

    assert_eq!(
        records,
        vec![
            (1, vec![("org", Some("acme"))]),
            (2, vec![("repo", Some("router")), ("path", Some("src/lib.rs"))]),
        ]
    );
}

#[test]
fn leaf_settings_cover_the_whole_chain() {
    let mut recognizer = RouteRecognizer::new();
    let id = recognizer
        .add_nested(vec![
            RouteConfig::new("/Admin", 1).name("ignored"),
            RouteConfig::new("/Panel", 2).name("panel").case_sensitive(true),
        ])
        .unwrap();

    assert!(recognizer.has_route("panel"));
    assert!(!recognizer.has_route("ignored"));
    assert!(recognizer.recognize("/Admin/Panel").is_some());
    assert!(recognizer.recognize("/admin/Panel").is_none());
    assert_eq!(recognizer.route_id_of(&2), Some(id));
    assert_eq!(recognizer.route_id_of(&1), None);
}

#[test]
fn empty_chain_is_rejected() {
    let mut recognizer: RouteRecognizer<u8> = RouteRecognizer::new();
    let err = recognizer.add_nested(Vec::new()).unwrap_err();
    assert!(matches!(err, RecognizerError::EmptyChain));
    assert!(err.is_configuration());
}

fn handlers(recognizer: &RouteRecognizer<&'static str>, path: &str) -> Vec<&'static str> {
    recognizer
        .recognize(path)
        .map(|r| r.iter().map(|x| *x.handler).collect())
        .unwrap_or_default()
}

#[test]
fn route_map_installs_every_leaf() {
    let mut map = RouteMap::new();
    map.to(RouteConfig::new("/", "home").name("home"))
        .nest(RouteConfig::new("/posts", "posts"), |posts| {
            posts
                .to(RouteConfig::new("/", "index").name("posts.index"))
                .to(RouteConfig::new("/new", "new").name("posts.new"))
                .nest(RouteConfig::new("/:id", "post"), |post| {
                    post.to(RouteConfig::new("/", "show").name("posts.show"))
                        .to(RouteConfig::new("/edit", "edit").name("posts.edit"));
                });
        })
        .nest(RouteConfig::new("/about", "about").name("about"), |_| {});

    let mut recognizer = RouteRecognizer::new();
    let ids = map.install(&mut recognizer).unwrap();
    assert_eq!(ids.len(), 6);
    assert_eq!(recognizer.len(), 6);

    let cases: &[(&str, &[&str])] = &[
        ("/", &["home"]),
        ("/posts", &["posts", "index"]),
        ("/posts/new", &["posts", "new"]),
        ("/posts/9", &["posts", "post", "show"]),
        ("/posts/9/edit", &["posts", "post", "edit"]),
        ("/about", &["about"]),
        ("/posts/9/delete", &[]),
    ];

    for &(path, expected) in cases {
        assert_eq!(handlers(&recognizer, path), expected, "{:?}", path);
    }

    let result = recognizer.recognize("/posts/9/edit").unwrap();
    assert_eq!(result[1].params.get("id"), Some("9"));
    assert_eq!(
        recognizer.generate("posts.edit", &params! { "id" => 9 }).unwrap(),
        "/posts/9/edit"
    );
}

#[test]
fn route_map_stops_at_first_bad_chain() {
    let mut map = RouteMap::new();
    map.to(RouteConfig::new("/ok", 1))
        .to(RouteConfig::new("/bad/:x=1", 2))
        .to(RouteConfig::new("/later", 3));

    let mut recognizer = RouteRecognizer::new();
    assert!(map.install(&mut recognizer).is_err());
    assert_eq!(recognizer.len(), 1);
    assert!(recognizer.recognize("/ok").is_some());
}
