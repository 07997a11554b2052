//! Multipart form collection

use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use indexmap::IndexMap;
use log::debug;

use crate::error::{Error, Result};

/// One form part, buffered in memory
#[derive(Debug, Clone)]
pub struct FormPart {
    pub filename: Option<String>,
    pub data: Vec<u8>,
}

impl FormPart {
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.data.clone())
            .map_err(|_| Error::validation("form field is not valid UTF-8"))
    }
}

/// Buffer every named part of a multipart body; later parts win on duplicate names
pub async fn read_form(mut payload: Multipart) -> Result<IndexMap<String, FormPart>> {
    let mut parts = IndexMap::new();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| Error::validation(format!("Invalid multipart body: {}", e)))?
    {
        let (name, filename) = {
            let disposition = field.content_disposition();
            (
                disposition.get_name().map(str::to_string),
                disposition.get_filename().map(str::to_string),
            )
        };

        let mut data = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| Error::validation(format!("Invalid multipart body: {}", e)))?
        {
            data.extend_from_slice(&chunk);
        }

        match name {
            Some(name) => {
                debug!("form part '{}' ({} bytes)", name, data.len());
                parts.insert(name, FormPart { filename, data });
            }
            None => debug!("skipping unnamed form part ({} bytes)", data.len()),
        }
    }

    Ok(parts)
}
