// Print the OpenAPI spec for the One Way Electric API as JSON.
// Usage: gen-openapi [out-file]

use server::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let spec = ApiDoc::openapi()
        .to_pretty_json()
        .expect("Failed to serialize OpenAPI spec to JSON");

    match std::env::args().nth(1) {
        Some(path) => std::fs::write(&path, &spec).expect("Failed to write spec file"),
        None => println!("{spec}"),
    }
}
