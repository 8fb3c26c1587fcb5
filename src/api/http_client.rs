use super::*;

/// Status and decoded body of one HTTP exchange.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// Label of the call that produced this response, used in failure messages.
    pub operation: &'static str,
    pub status: StatusCode,
    /// Parsed JSON body. An empty body is `Null`; a non-JSON body is kept
    /// verbatim as a JSON string.
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Looks up a field by JSON pointer, e.g. `/data/id`.
    pub fn field(&self, pointer: &str) -> Option<&serde_json::Value> {
        self.body.pointer(pointer)
    }
}

pub(super) fn decode_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

impl ApiClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn with_auth(&self, req: RequestBuilder, auth: Auth<'_>) -> RequestBuilder {
        match auth {
            Auth::Anonymous => req,
            Auth::Bearer(token) => req
                .header(AUTHORIZATION, format!("Bearer {}", token))
                .header(CONTENT_TYPE, "application/json"),
        }
    }

    pub(super) fn with_json<B: Serialize + ?Sized>(
        &self,
        req: RequestBuilder,
        body: &B,
    ) -> RequestBuilder {
        req.json(body)
    }

    pub(super) fn execute(
        &self,
        operation: &'static str,
        req: RequestBuilder,
    ) -> Result<ApiResponse> {
        let resp = req.send().context(operation)?;
        let status = resp.status();
        let path = resp.url().path().to_string();
        let text = resp
            .text()
            .with_context(|| format!("read {} body", operation))?;
        tracing::debug!(operation, path = %path, status = status.as_u16(), "response");
        Ok(ApiResponse {
            operation,
            status,
            body: decode_body(&text),
        })
    }
}

#[cfg(test)]
#[path = "../tests/api/http_client_tests.rs"]
mod tests;
