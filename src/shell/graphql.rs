use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

use crate::modules::attendance::use_cases::close_day::inbound::graphql::CloseDayMutation;
pub use crate::modules::attendance::use_cases::get_timesheet_range::inbound::graphql::QueryRoot;
use crate::modules::attendance::use_cases::record_punch::inbound::graphql::RecordPunchMutation;
pub use crate::shell::state::AppState;

const ENDPOINT: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct MutationRoot(RecordPunchMutation, CloseDayMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn routes<S>(schema: AppSchema, graphiql: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let endpoint = if graphiql {
        get(graphiql_page).post(graphql)
    } else {
        axum::routing::post(graphql)
    };
    Router::new()
        .route(ENDPOINT, endpoint)
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql_page() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}
