mod recognizer_macro;

use crate::query::QueryParams;
use crate::recognizer::{
    RecognizeResults, RecognizerError, RouteConfig, RouteId, RouteKey, RouteRecognizer,
};

use std::collections::HashMap;

pub use http::Method;
use http::{Request, Uri};

/// One [`RouteRecognizer`] per HTTP method.
#[derive(Debug)]
pub struct HttpRecognizer<H> {
    method_map: HashMap<Method, RouteRecognizer<H>>,
}

impl<H> Default for HttpRecognizer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> HttpRecognizer<H> {
    pub fn new() -> Self {
        Self {
            method_map: HashMap::new(),
        }
    }

    pub fn add(&mut self, method: Method, config: RouteConfig<H>) -> &mut Self {
        self.access_recognizer(method).add(config);
        self
    }

    pub fn try_add(
        &mut self,
        method: Method,
        config: RouteConfig<H>,
    ) -> Result<RouteId, RecognizerError> {
        self.access_recognizer(method).try_add(config)
    }

    pub fn recognizer(&self, method: &Method) -> Option<&RouteRecognizer<H>> {
        self.method_map.get(method)
    }

    pub fn recognize(&self, method: &Method, path: &str) -> Option<RecognizeResults<'_, H>> {
        self.method_map.get(method)?.recognize(path)
    }

    pub fn recognize_uri(&self, method: &Method, uri: &Uri) -> Option<RecognizeResults<'_, H>> {
        let target = match uri.path_and_query() {
            Some(pq) => pq.as_str(),
            None => uri.path(),
        };
        self.recognize(method, target)
    }

    pub fn recognize_request<B>(&self, req: &Request<B>) -> Option<RecognizeResults<'_, H>> {
        self.recognize_uri(req.method(), req.uri())
    }

    pub fn has_route<'k>(&self, method: &Method, key: impl Into<RouteKey<'k>>) -> bool {
        self.method_map
            .get(method)
            .map(|r| r.has_route(key))
            .unwrap_or(false)
    }

    pub fn generate<'k>(
        &self,
        method: &Method,
        key: impl Into<RouteKey<'k>>,
        params: &QueryParams,
    ) -> Result<String, RecognizerError> {
        let key = key.into();
        match self.method_map.get(method) {
            Some(r) => r.generate(key, params),
            None => Err(RecognizerError::NotFound {
                route: format!("{} {}", method, key).into(),
            }),
        }
    }

    pub fn generate_uri<'k>(
        &self,
        method: &Method,
        key: impl Into<RouteKey<'k>>,
        params: &QueryParams,
    ) -> Result<Uri, RecognizerError> {
        let path = self.generate(method, key, params)?;
        Ok(path.parse::<Uri>()?)
    }
}

impl<H> HttpRecognizer<H> {
    fn access_recognizer(&mut self, method: Method) -> &mut RouteRecognizer<H> {
        self.method_map
            .entry(method)
            .or_insert_with(RouteRecognizer::new)
    }
}
