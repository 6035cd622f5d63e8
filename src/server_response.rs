use {serde::Serialize, serde_json};

/// JSON envelope for every reply: a `status` tag with the payload's fields
/// flattened next to it.
///
/// `Response::ok(())` renders as `{"status":"success"}`.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response<T: Serialize, E: Serialize> {
    Success(T),
    Error(E),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl<T: Serialize> Response<T, ()> {
    pub fn ok(data: T) -> Self {
        Response::Success(data)
    }
}

impl<E: Serialize> Response<(), E> {
    pub fn error(data: E) -> Self {
        Response::Error(data)
    }
}

impl<T: Serialize, E: Serialize> Response<T, E> {
    pub fn json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self)
    }
}
