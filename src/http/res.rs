pub struct Response {
    pub status_code: u16,
    pub reason: String,
    headers: Vec<(String, String)>,
    pub body: String,
}

impl Default for Response {
    fn default() -> Self {
        Response {
            status_code: 200,
            reason: "OK".to_string(),
            headers: Vec::new(),
            body: String::new(),
        }
    }
}

impl Response {
    pub fn set_status(&mut self, status_code: u16, reason: &str) {
        self.status_code = status_code;
        self.reason = reason.to_string();
    }

    pub fn header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn status_line(&self) -> String {
        format!("{} {}", self.status_code, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_200_ok_with_empty_body() {
        let res = Response::default();
        assert_eq!(res.status_code, 200);
        assert_eq!(res.reason, "OK");
        assert!(res.body.is_empty());
        assert!(res.headers().is_empty());
        assert_eq!(res.status_line(), "200 OK");
    }

    #[test]
    fn set_status_updates_status_line() {
        let mut res = Response::default();
        res.set_status(404, "Not Found");
        assert_eq!(res.status_line(), "404 Not Found");
    }

    #[test]
    fn headers_keep_insertion_order() {
        let mut res = Response::default();
        res.header("X-One", "1");
        res.header("X-Two", "2");
        res.header("X-One", "3");
        let names: Vec<&str> = res.headers().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["X-One", "X-Two", "X-One"]);
    }
}
