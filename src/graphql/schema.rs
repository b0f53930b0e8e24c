use crate::graphql::loaders::{StudentResultsExistLoader, TeamResultsExistLoader};
use crate::graphql::resolvers::Query;
use crate::storage::RecordStore;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub store: Arc<dyn RecordStore>,
}

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Create a new GraphQL schema backed by the given record store
pub fn create_schema(store: Arc<dyn RecordStore>) -> GraphQLSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(StudentResultsExistLoader::new(store.clone()))
        .data(TeamResultsExistLoader::new(store.clone()))
        .data(GraphQLContext { store })
        .finish()
}
