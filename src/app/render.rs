use std::collections::HashMap;

/// Contract for the external template engine. The gateway never renders
/// anything itself; handlers capture a renderer and call it.
pub trait Renderer: Send + Sync {
    fn render(&self, name: &str, context: &HashMap<String, String>) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::app::api::Api;
    use crate::app::pattern::Params;
    use crate::http::{Request, Response};

    struct PlainRenderer;

    impl Renderer for PlainRenderer {
        fn render(&self, name: &str, context: &HashMap<String, String>) -> String {
            let mut keys: Vec<&str> = context.keys().map(String::as_str).collect();
            keys.sort_unstable();
            format!("{}:{}", name, keys.join(","))
        }
    }

    #[test]
    fn handlers_can_drive_a_renderer() {
        let renderer: Arc<dyn Renderer> = Arc::new(PlainRenderer);
        let mut api = Api::new();
        api.route(
            "/page/{slug}",
            move |_req: &Request, _res: &mut Response, params: &Params| {
                Ok(Some(renderer.render("page", params)))
            },
        )
        .unwrap();
        let response = api.handle(&Request::new("GET", "/page/about"));
        assert_eq!(response.body, "page:slug");
    }
}
