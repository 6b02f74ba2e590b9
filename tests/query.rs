use path_recognizer::{decode_query_string, encode_query_string, params, ParamValue, QueryParams};

#[test]
fn encode_cases() {
    let cases: &[(QueryParams, &str)] = &[
        (params! {}, ""),
        (params! { "a" => None::<&str> }, ""),
        (params! { "" => "a" }, "=a"),
        (params! { "a" => "b" }, "a=b"),
        (params! { "a" => "b", "c" => "d" }, "a=b&c=d"),
        (params! { "c" => "d", "a" => "b" }, "a=b&c=d"),
        (params! { "a" => "b", "c" => None::<&str> }, "a=b"),
        (params! { "a" => vec!["b", "c"] }, "a[]=b&a[]=c"),
        (params! { "&" => vec!["b", "c"] }, "%26[]=b&%26[]=c"),
        (params! { "a" => "&" }, "a=%26"),
        (params! { "&" => "a" }, "%26=a"),
        (params! { "a" => "x y/z" }, "a=x%20y%2Fz"),
        (params! { "$filter" => "x" }, "$filter=x"),
        (params! { "a" => true }, "a"),
        (params! { "a" => false }, "a=false"),
        (params! { "n" => 42 }, "n=42"),
    ];

    for (params, expected) in cases {
        assert_eq!(encode_query_string(params), *expected, "{:?}", params);
    }
}

#[test]
fn decode_cases() {
    let cases: &[(&str, QueryParams)] = &[
        ("", params! {}),
        ("=", params! {}),
        ("&", params! {}),
        ("?", params! {}),
        ("a", params! { "a" => true }),
        ("a&b", params! { "a" => true, "b" => true }),
        ("a=", params! { "a" => "" }),
        ("a=&b=", params! { "a" => "", "b" => "" }),
        ("a=b", params! { "a" => "b" }),
        ("?a=b", params! { "a" => "b" }),
        ("a=b&c=d", params! { "a" => "b", "c" => "d" }),
        ("a=b&&c=d", params! { "a" => "b", "c" => "d" }),
        ("a=b&a=c", params! { "a" => "c" }),
        ("a=%26", params! { "a" => "&" }),
        ("%26=a", params! { "&" => "a" }),
        ("%26[]=b&%26[]=c", params! { "&" => vec!["b", "c"] }),
        ("a=1=2", params! { "a" => "1=2" }),
        ("a=%zz", params! { "a" => "%zz" }),
    ];

    for (query, expected) in cases {
        assert_eq!(decode_query_string(query), *expected, "{:?}", query);
    }
}

#[test]
fn decode_inverts_encode() {
    let bags = vec![
        params! { "a" => "b" },
        params! { "a b" => "c&d", "e" => "=" },
        params! { "list" => vec!["x", "y z"], "flag" => true },
        params! { "$top" => "10", "path" => "a/b" },
    ];

    for bag in bags {
        let encoded = encode_query_string(&bag);
        assert_eq!(decode_query_string(&encoded), bag, "{:?}", encoded);
    }
}

#[test]
fn value_accessors() {
    assert_eq!(ParamValue::from("a").as_str(), Some("a"));
    assert_eq!(ParamValue::from(7_u64).as_str(), Some("7"));
    assert_eq!(ParamValue::from(vec!["a"]).as_list(), Some(&["a".to_owned()][..]));
    assert!(ParamValue::from(None::<String>).is_null());
    assert!(ParamValue::default().is_null());
    assert_eq!(ParamValue::from(Some("x")), ParamValue::from("x"));
}
