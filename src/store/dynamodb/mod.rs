//! DynamoDB store backend.
//!
//! Credentials and region come from the ambient AWS configuration
//! (environment variables, shared profile, instance role). Only the endpoint
//! can be overridden, for DynamoDB Local.

mod conversions;
mod error;

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};

use crate::config::Config;
use crate::store::{KeyValueStore, Record, StoreResult, Table};

use conversions::{item_to_record, record_to_item};
use error::map_sdk_error;

const PROVISION_POLL_INTERVAL: Duration = Duration::from_millis(500);
const PROVISION_MAX_POLLS: u32 = 60;

/// DynamoDB-backed store, one SDK client for the process lifetime.
#[derive(Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a client from the ambient AWS configuration.
    ///
    /// When `DYNAMODB_ENDPOINT_URL` is set the client talks to that endpoint
    /// instead of the regional service. When auto-provisioning is enabled the
    /// three site tables are created if they do not exist yet.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);

        match &config.dynamodb_endpoint_url {
            Some(endpoint) => {
                tracing::info!("Connecting to DynamoDB endpoint at: {}", endpoint);
                builder = builder.endpoint_url(endpoint);
            }
            None => tracing::info!("Connecting to regional DynamoDB"),
        }

        let store = Self::new(Client::from_conf(builder.build()));

        if config.dynamodb_auto_provision {
            store.auto_provision().await?;
        }

        Ok(store)
    }

    /// Ensure every site table exists, creating missing ones.
    async fn auto_provision(&self) -> Result<()> {
        tracing::info!("Starting auto-provisioning checks...");

        for table in Table::ALL {
            self.ensure_table_exists(table).await?;
        }

        tracing::info!("Auto-provisioning complete");
        Ok(())
    }

    async fn ensure_table_exists(&self, table: Table) -> Result<()> {
        match self
            .client
            .describe_table()
            .table_name(table.name())
            .send()
            .await
        {
            Ok(_) => {
                tracing::info!("Table already exists: {}", table);
                Ok(())
            }
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception()) =>
            {
                tracing::info!("Table not found, creating: {}", table);
                self.create_table(table).await?;
                self.wait_until_active(table).await?;
                tracing::info!("Table created successfully: {}", table);
                Ok(())
            }
            Err(err) => Err(anyhow::anyhow!(
                "Failed to check table existence for {}: {}",
                table,
                map_sdk_error("DescribeTable", table, err)
            )),
        }
    }

    async fn create_table(&self, table: Table) -> Result<()> {
        let attribute_type = if table.numeric_key() {
            ScalarAttributeType::N
        } else {
            ScalarAttributeType::S
        };

        let attribute = AttributeDefinition::builder()
            .attribute_name(table.key_attribute())
            .attribute_type(attribute_type)
            .build()
            .context("Invalid attribute definition")?;

        let key = KeySchemaElement::builder()
            .attribute_name(table.key_attribute())
            .key_type(KeyType::Hash)
            .build()
            .context("Invalid key schema")?;

        self.client
            .create_table()
            .table_name(table.name())
            .attribute_definitions(attribute)
            .key_schema(key)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|e| map_sdk_error("CreateTable", table, e))
            .with_context(|| format!("Failed to create table {}", table))?;

        Ok(())
    }

    async fn wait_until_active(&self, table: Table) -> Result<()> {
        for _ in 0..PROVISION_MAX_POLLS {
            let output = self
                .client
                .describe_table()
                .table_name(table.name())
                .send()
                .await
                .map_err(|e| map_sdk_error("DescribeTable", table, e))?;

            let status = output.table().and_then(|t| t.table_status());
            if status == Some(&TableStatus::Active) {
                return Ok(());
            }

            tokio::time::sleep(PROVISION_POLL_INTERVAL).await;
        }

        Err(anyhow::anyhow!("Table {} did not become active in time", table))
    }
}

#[async_trait]
impl KeyValueStore for DynamoDbStore {
    async fn scan(&self, table: Table, limit: Option<i32>) -> StoreResult<Vec<Record>> {
        let mut records = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(table.name())
                .set_limit(limit)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| map_sdk_error("Scan", table, e))?;

            for item in output.items() {
                records.push(item_to_record(item)?);
            }

            // A limited scan is a single page; an unbounded one follows the cursor.
            match (limit, output.last_evaluated_key()) {
                (None, Some(key)) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        tracing::debug!("Scanned {} records from {}", records.len(), table);
        Ok(records)
    }

    async fn get_item(&self, table: Table, key: Record) -> StoreResult<Option<Record>> {
        let output = self
            .client
            .get_item()
            .table_name(table.name())
            .set_key(Some(record_to_item(&key)))
            .send()
            .await
            .map_err(|e| map_sdk_error("GetItem", table, e))?;

        output.item().map(item_to_record).transpose()
    }

    async fn put_item(&self, table: Table, item: Record) -> StoreResult<()> {
        self.client
            .put_item()
            .table_name(table.name())
            .set_item(Some(record_to_item(&item)))
            .send()
            .await
            .map_err(|e| map_sdk_error("PutItem", table, e))?;

        tracing::debug!("Put item into {}", table);
        Ok(())
    }
}
