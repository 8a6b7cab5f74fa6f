use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use super::endpoints;
use super::error::RequestError;
use super::request::RequestClient;

/// Photo attached to a booking request.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl PhotoUpload {
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());
        let mime = guess_image_mime(&file_name).map(str::to_string);
        Ok(Self {
            file_name,
            bytes,
            mime,
        })
    }

    fn into_part(self) -> Result<Part, RequestError> {
        let part = Part::bytes(self.bytes).file_name(self.file_name);
        match self.mime {
            Some(mime) => part.mime_str(&mime).map_err(|err| {
                RequestError::InvalidRequest(format!("bad photo mime type `{mime}`: {err}"))
            }),
            None => Ok(part),
        }
    }
}

fn guess_image_mime(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Input of the booking form.
#[derive(Debug, Clone, Default)]
pub struct CreateBooking {
    pub waste_type: String,
    pub address: String,
    pub pickup_time: String,
    pub notes: Option<String>,
    pub photo: Option<PhotoUpload>,
}

impl CreateBooking {
    pub fn validate(&self) -> Result<(), RequestError> {
        let missing: Vec<&str> = [
            ("wasteType", &self.waste_type),
            ("address", &self.address),
            ("pickupTime", &self.pickup_time),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RequestError::InvalidRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    fn into_form(self) -> Result<Form, RequestError> {
        let mut form = Form::new()
            .text("wasteType", self.waste_type)
            .text("address", self.address)
            .text("pickupTime", self.pickup_time);

        if let Some(notes) = self.notes.filter(|notes| !notes.is_empty()) {
            form = form.text("notes", notes);
        }
        if let Some(photo) = self.photo {
            form = form.part("photo", photo.into_part()?);
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct BookingClient {
    requests: RequestClient,
}

impl BookingClient {
    pub fn new(requests: RequestClient) -> Self {
        Self { requests }
    }

    /// Submits the booking as `multipart/form-data`.
    pub async fn create_booking(
        &self,
        booking: CreateBooking,
    ) -> Result<BookingResponse, RequestError> {
        booking.validate()?;
        log::info!(
            "Sending booking request: waste_type={}, address={}, pickup_time={}, has_notes={}, has_photo={}",
            booking.waste_type,
            booking.address,
            booking.pickup_time,
            booking.notes.as_deref().is_some_and(|notes| !notes.is_empty()),
            booking.photo.is_some()
        );

        let form = booking.into_form()?;
        match self
            .requests
            .post_multipart::<BookingResponse>(endpoints::CREATE_BOOKING, form)
            .await
        {
            Ok(response) => {
                log::info!("Booking successful: {}", response.booking_id);
                Ok(response)
            }
            Err(err) => {
                log::error!("Booking failed: {err}");
                Err(err)
            }
        }
    }
}
