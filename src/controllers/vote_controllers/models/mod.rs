use serde::{Deserialize, Serialize};

use crate::workflow::ResultsView;

#[derive(Deserialize, Debug)]
pub struct CastVoteRequest {
    #[serde(rename = "productID", default)]
    pub product_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OptionResult {
    pub id: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ResultsResponse {
    pub options: Vec<OptionResult>,
    pub total: u64,
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ResultsView> for ResultsResponse {
    fn from(view: ResultsView) -> Self {
        match view {
            ResultsView::Table { tally, html } => {
                let options = tally
                    .entries()
                    .map(|(id, count)| OptionResult {
                        id: id.to_string(),
                        count,
                        percentage: tally.percentage(id),
                    })
                    .collect();
                let total = tally.total();

                ResultsResponse {
                    options,
                    total,
                    html,
                    error: None,
                }
            }
            ResultsView::Unavailable { message, html } => ResultsResponse {
                options: Vec::new(),
                total: 0,
                html,
                error: Some(message),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CastVoteResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clicks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsResponse>,
}
