/// Builds an [`HttpRecognizer`](crate::HttpRecognizer) from
/// `METHOD name: "pattern" => handler` entries.
///
/// ```
/// use path_recognizer::{http_recognizer, HttpRecognizer, Method};
///
/// let recognizer: HttpRecognizer<u32> = http_recognizer! {
///     GET user: "/users/:id" => 1,
///     POST users: "/users" => 2,
/// };
///
/// let result = recognizer.recognize(&Method::GET, "/users/42").unwrap();
/// assert_eq!(*result[0].handler, 1);
/// assert!(recognizer.has_route(&Method::POST, "users"));
/// ```
#[macro_export]
macro_rules! http_recognizer {
    {$($method:ident $name:ident : $pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __recognizer = $crate::HttpRecognizer::new();
        $(
            __recognizer.add(
                $crate::Method::$method,
                $crate::RouteConfig::new($pattern, $handler).name(stringify!($name)),
            );
        )+
        __recognizer
    }};
}
