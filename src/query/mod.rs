mod value;

pub use self::value::ParamValue;

use std::borrow::Cow;
use std::collections::BTreeMap;

/// A flat parameter bag. Keys iterate in lexicographic order, which keeps
/// generated query strings deterministic.
pub type QueryParams = BTreeMap<String, ParamValue>;

const ARRAY_SUFFIX: &str = "[]";

const URI_RESERVED: &[u8] = b";/?:@&=+$,#";

/// Encodes `params` as `key=value&key=value` without a leading `?`.
///
/// Lists are rendered as repeated `key[]=value` pairs, `Null` values are
/// skipped and `Bool(true)` is rendered as a presence-only key.
pub fn encode_query_string(params: &QueryParams) -> String {
    let mut pairs: Vec<String> = Vec::with_capacity(params.len());

    for (key, value) in params {
        let key = encode_key(key);
        match value {
            ParamValue::Null => {}
            ParamValue::Bool(true) => pairs.push(key.into_owned()),
            ParamValue::Bool(false) => pairs.push(format!("{}=false", key)),
            ParamValue::Str(s) => pairs.push(format!("{}={}", key, urlencoding::encode(s))),
            ParamValue::List(items) => {
                for item in items {
                    pairs.push(format!(
                        "{}{}={}",
                        key,
                        ARRAY_SUFFIX,
                        urlencoding::encode(item)
                    ));
                }
            }
        }
    }

    pairs.join("&")
}

/// Decodes a query string (with or without a leading `?`).
///
/// A key without `=` decodes to `Bool(true)`. Keys ending in `[]`
/// accumulate into a list under the un-suffixed key. Repeated scalar keys
/// overwrite each other.
pub fn decode_query_string(query: &str) -> QueryParams {
    let mut params = QueryParams::new();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&') {
        let mut kv = pair.splitn(2, '=');
        let mut key = match kv.next() {
            Some(k) => percent_decode(k).into_owned(),
            None => continue,
        };
        if key.is_empty() {
            continue;
        }

        let raw_value = match kv.next() {
            Some(v) => v,
            None => {
                params.insert(key, ParamValue::Bool(true));
                continue;
            }
        };
        let value = percent_decode(raw_value).into_owned();

        if key.len() > ARRAY_SUFFIX.len() && key.ends_with(ARRAY_SUFFIX) {
            key.truncate(key.len() - ARRAY_SUFFIX.len());
            let slot = params
                .entry(key)
                .or_insert_with(|| ParamValue::List(Vec::new()));
            match slot {
                ParamValue::List(list) => list.push(value),
                other => *other = ParamValue::List(vec![value]),
            }
        } else {
            params.insert(key, ParamValue::Str(value));
        }
    }

    params
}

/// Single-pass percent decoding. Malformed input is returned untouched.
pub(crate) fn percent_decode(s: &str) -> Cow<'_, str> {
    match urlencoding::decode(s) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(s),
    }
}

/// Percent decoding for paths. Escapes of reserved characters such as
/// `%2F` are left as written so they cannot introduce new separators.
pub(crate) fn decode_uri(s: &str) -> Cow<'_, str> {
    if !s.contains('%') {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut start = 0;
    let mut i = 0;

    while i + 2 < bytes.len() {
        if bytes[i] == b'%' && is_reserved_escape(&bytes[i + 1..i + 3]) {
            match urlencoding::decode(&s[start..i]) {
                Ok(decoded) => out.push_str(&decoded),
                Err(_) => return Cow::Borrowed(s),
            }
            out.push_str(&s[i..i + 3]);
            i += 3;
            start = i;
            continue;
        }
        i += 1;
    }

    match urlencoding::decode(&s[start..]) {
        Ok(decoded) => out.push_str(&decoded),
        Err(_) => return Cow::Borrowed(s),
    }
    Cow::Owned(out)
}

fn is_reserved_escape(hex: &[u8]) -> bool {
    std::str::from_utf8(hex)
        .ok()
        .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
        .and_then(|h| u8::from_str_radix(h, 16).ok())
        .map(|byte| URI_RESERVED.contains(&byte))
        .unwrap_or(false)
}

fn encode_key(key: &str) -> Cow<'_, str> {
    let encoded = urlencoding::encode(key);
    if encoded.contains("%24") {
        Cow::Owned(encoded.replace("%24", "$"))
    } else {
        encoded
    }
}
