use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};

use super::{Body, Error, Headers, HttpClient, Method, Request, RequestBuilder, Response, StatusCode};
use crate::model::post_fields::{PostFields, PostValue};

#[derive(Clone)]
pub struct ReqwestClient {
    pub client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), Method::Get, url)
    }

    fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), Method::Post, url)
    }

    #[track_caller]
    async fn send(
        &self,
        url: &str,
        body: Option<Body>,
        headers: Option<Headers>,
        method: Method,
    ) -> Result<Response, Error> {
        let request = Request {
            body: body.clone(),
            headers: headers.clone().unwrap_or_default(),
            method,
            url: url.to_string(),
        };

        let mut builder = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        if let Some(headers) = headers {
            builder = builder.headers(to_header_map(headers)?);
        }
        match body {
            Some(Body::Raw(body)) => {
                builder = builder.body(body);
            }
            Some(Body::Multipart(fields)) => {
                builder = builder.multipart(to_multipart_form(fields).await?);
            }
            None => {}
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?;

        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                let value = v.to_str().map_err(|e| Error::Other(e.to_string()))?;

                Ok((k.to_string(), value.to_string()))
            })
            .collect::<Result<Headers, Error>>()?;
        let status_code = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::HttpError(e.to_string()))?;

        Ok(Response {
            body: body.to_vec(),
            headers,
            status: StatusCode(status_code),
            request,
        })
    }
}

fn to_header_map(headers: HashMap<String, String>) -> Result<HeaderMap, Error> {
    headers
        .into_iter()
        .map(|(k, v)| {
            let name = HeaderName::from_str(k.as_str()).map_err(|e| Error::Other(e.to_string()))?;
            let value =
                HeaderValue::from_str(v.as_str()).map_err(|e| Error::Other(e.to_string()))?;

            Ok((name, value))
        })
        .collect::<Result<HeaderMap, Error>>()
}

async fn to_multipart_form(fields: PostFields) -> Result<Form, Error> {
    let mut form = Form::new();

    for (name, value) in fields {
        form = match value {
            PostValue::String(value) => form.text(name, value),
            PostValue::Boolean(value) => form.text(name, value.to_string()),
            PostValue::Integer(value) => form.text(name, value.to_string()),
            PostValue::File(path) => form.part(name, file_part(&path).await?),
        };
    }

    Ok(form)
}

async fn file_part(path: &Path) -> Result<Part, Error> {
    let attachment_error = |reason: String| Error::FileAttachment {
        path: path.display().to_string(),
        reason,
    };

    let content = tokio::fs::read(path)
        .await
        .map_err(|e| attachment_error(e.to_string()))?;

    let part = Part::bytes(content);
    Ok(match path.file_name() {
        Some(file_name) => part.file_name(file_name.to_string_lossy().into_owned()),
        None => part,
    })
}
