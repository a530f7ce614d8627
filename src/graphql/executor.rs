use async_graphql::{Request, Response, Variables};

use super::schema::CatalogSchema;
use crate::error::{CatalogError, Result};

/// The documents `bookql demo` runs, in order.
pub const DEMO_DOCUMENTS: [&str; 2] = [
    r#"mutation {
    createBook(title: "Another Go book!") {
        title
    }
}"#,
    r#"{
    book(id: 2) {
        id
        title
    }
}"#,
];

fn parse_variables(variables: Option<&str>) -> Result<Variables> {
    match variables {
        Some(v) => Ok(serde_json::from_str(v)?),
        None => Ok(Variables::default()),
    }
}

/// Run a document and hand back the engine's envelope untouched, errors
/// included.
pub async fn execute(
    schema: &CatalogSchema,
    document: &str,
    variables: Option<&str>,
) -> Result<Response> {
    let vars = parse_variables(variables)?;
    let request = Request::new(document).variables(vars);
    let response = schema.execute(request).await;
    if !response.errors.is_empty() {
        tracing::debug!(errors = response.errors.len(), "GraphQL document returned errors");
    }
    Ok(response)
}

/// Like [`execute`], but any GraphQL error fails the call. Returns `data`.
pub async fn execute_strict(
    schema: &CatalogSchema,
    document: &str,
    variables: Option<&str>,
) -> Result<serde_json::Value> {
    let response = check(execute(schema, document, variables).await?)?;
    Ok(response.data.into_json()?)
}

fn check(response: Response) -> Result<Response> {
    if response.errors.is_empty() {
        Ok(response)
    } else {
        Err(CatalogError::Query(
            response.errors.into_iter().map(|e| e.message).collect(),
        ))
    }
}

/// Execute [`DEMO_DOCUMENTS`] in order, stopping at the first failure.
pub async fn run_demo(schema: &CatalogSchema) -> Result<Vec<Response>> {
    let mut responses = Vec::with_capacity(DEMO_DOCUMENTS.len());
    for document in DEMO_DOCUMENTS {
        let response = check(execute(schema, document, None).await?)?;
        responses.push(response);
    }
    Ok(responses)
}
