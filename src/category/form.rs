//! The request body for creating and updating categories.

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use serde::{Deserialize, Serialize};

use crate::{Error, upload::UploadedFile};

/// Form data for category creation and editing.
///
/// Accepts `multipart/form-data` (the only way to send an image),
/// `application/x-www-form-urlencoded` and `application/json` bodies.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    /// The raw, unvalidated name.
    pub name: Option<String>,
    /// The uploaded image, if a non-empty file was sent.
    pub image: Option<UploadedFile>,
}

/// The text fields of a category form.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CategoryFormData {
    /// The raw, unvalidated name.
    pub name: Option<String>,
}

impl<S> FromRequest<S> for CategoryForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(request, state)
                .await
                .map_err(|rejection| Error::MultipartError(rejection.body_text()))?;

            return parse_multipart(multipart).await;
        }

        let data = if content_type.starts_with("application/json") {
            Json::<CategoryFormData>::from_request(request, state)
                .await
                .map_err(|rejection| Error::MultipartError(rejection.body_text()))?
                .0
        } else {
            Form::<CategoryFormData>::from_request(request, state)
                .await
                .map_err(|rejection| Error::MultipartError(rejection.body_text()))?
                .0
        };

        Ok(Self {
            name: data.name,
            image: None,
        })
    }
}

async fn parse_multipart(mut multipart: Multipart) -> Result<CategoryForm, Error> {
    let mut form = CategoryForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| Error::MultipartError(error.body_text()))?
    {
        let field_name = field.name().map(str::to_owned);

        match field_name.as_deref() {
            Some("name") => {
                let text = field.text().await.map_err(|error| {
                    tracing::debug!("Could not read name from multipart form: {error}");
                    Error::MultipartError(error.body_text())
                })?;
                form.name = Some(text);
            }
            Some("image") => {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await.map_err(|error| {
                    tracing::debug!("Could not read image from multipart form: {error}");
                    Error::MultipartError(error.body_text())
                })?;

                let file = UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                };

                form.image = (!file.is_empty()).then_some(file);
            }
            _ => {}
        }
    }

    Ok(form)
}
