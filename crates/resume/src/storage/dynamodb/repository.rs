//! DynamoDB repository implementation.
//!
//! Implements `ItemRepository` from `resume_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use resume_core::item::{Item, ItemKey};
use resume_core::storage::{ItemRepository, Result};

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
};
use super::keys;
use crate::config::Config;

/// DynamoDB-based item repository.
///
/// A thin handle to one table: every method issues exactly one request.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    field_index: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            field_index: keys::DEFAULT_FIELD_INDEX.to_string(),
        }
    }

    /// Overrides the name of the `(userId, field)` secondary index.
    pub fn with_field_index(mut self, field_index: impl Into<String>) -> Self {
        self.field_index = field_index.into();
        self
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain; region and endpoint come
    /// from the standard AWS environment variables.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&sdk_config);

        Ok(Self::new(client, &config.table_name).with_field_index(&config.field_index))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the secondary index name.
    pub fn field_index(&self) -> &str {
        &self.field_index
    }

    /// Parses one page of query results.
    ///
    /// Only the first page is returned; results past DynamoDB's page limit
    /// are dropped.
    fn parse_page(
        items: Option<Vec<HashMap<String, AttributeValue>>>,
        last_evaluated_key: Option<&HashMap<String, AttributeValue>>,
    ) -> Result<Vec<Item>> {
        if last_evaluated_key.is_some() {
            tracing::debug!("Query returned a partial page, remaining items are not fetched");
        }
        items
            .unwrap_or_default()
            .iter()
            .map(attributes_to_item)
            .collect()
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn get_item(&self, key: &ItemKey) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(attributes_to_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn query_by_field(&self, user_id: &str, field: &str) -> Result<Vec<Item>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.field_index)
            .key_condition_expression(keys::USER_FIELD_CONDITION)
            .set_expression_attribute_names(Some(keys::field_names()))
            .set_expression_attribute_values(Some(keys::user_field_values(user_id, field)))
            .send()
            .await
            .map_err(map_query_error)?;

        Self::parse_page(result.items, result.last_evaluated_key.as_ref())
    }

    async fn query_by_user(&self, user_id: &str) -> Result<Vec<Item>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression(keys::USER_CONDITION)
            .set_expression_attribute_values(Some(keys::user_values(user_id)))
            .send()
            .await
            .map_err(map_query_error)?;

        Self::parse_page(result.items, result.last_evaluated_key.as_ref())
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .condition_expression(keys::CREATE_CONDITION)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Item", item.key().to_string()))?;

        Ok(())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Item", item.key().to_string()))?;

        Ok(())
    }

    async fn delete_item(&self, key: &ItemKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(key)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
