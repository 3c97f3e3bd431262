//! AWS Lambda handler for coverage quotes
//!
//! Accepts the quote form fields as JSON and returns the prediction together with the
//! accident and health growth series for charting.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use onelife::{Applicant, PredictionWithSeries, ScenarioRunner, Sex};

/// Input fields of the quote form
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Monthly income in INR (default: 50,000)
    #[serde(default = "default_income")]
    pub monthly_income: f64,

    /// Projection horizon in years (default: 10)
    #[serde(default = "default_years")]
    pub years: u32,

    #[serde(default = "default_age")]
    pub age: u8,

    #[serde(default = "default_sex")]
    pub sex: Sex,

    #[serde(default = "default_family_members")]
    pub family_members: u8,

    #[serde(default)]
    pub family_details: String,
}

fn default_income() -> f64 { 50_000.0 }
fn default_years() -> u32 { 10 }
fn default_age() -> u8 { 30 }
fn default_sex() -> Sex { Sex::Male }
fn default_family_members() -> u8 { 3 }

impl QuoteRequest {
    fn into_applicant(self) -> Applicant {
        Applicant {
            age: self.age,
            sex: self.sex,
            family_members: self.family_members,
            family_details: self.family_details,
            monthly_income: self.monthly_income,
            years: self.years,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: PredictionWithSeries,
    pub execution_time_us: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

fn error_response(status: u16, message: String) -> Result<Response<Body>, Error> {
    json_response(status, &ErrorBody { error: message })
}

async fn handler(runner: &ScenarioRunner, event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: QuoteRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e)),
    };

    let applicant = request.into_applicant();
    let quote = match runner.quote_with_series(&applicant) {
        Ok(q) => q,
        Err(e) => {
            log::info!("rejected quote request: {}", e);
            return error_response(400, e.to_string());
        }
    };

    let response = QuoteResponse {
        quote,
        execution_time_us: start.elapsed().as_micros() as u64,
    };

    json_response(200, &response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let runner = ScenarioRunner::from_csv().unwrap_or_else(|e| {
        log::warn!("using standard assumptions: {}", e);
        ScenarioRunner::new()
    });
    let runner = &runner;

    run(service_fn(move |event: Request| async move { handler(runner, event).await })).await
}
