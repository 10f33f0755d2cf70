use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ContentResponse {
    pub count: usize,
    pub html: String,
}
