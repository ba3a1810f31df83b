use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;

use super::BackendClient;
use crate::error_convert::BackendScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A read against one table, rendered as REST query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    table: &'static str,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Direction)>,
}

impl Select {
    pub fn from(table: &'static str) -> Self {
        Self {
            table,
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
        }
    }

    /// Column list, including embedded relations such as `*,equipment_types(*)`.
    pub fn columns(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    /// Keep rows where `column` equals `value`.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.columns.clone())];
        pairs.extend(self.filters.iter().cloned());
        if let Some((column, direction)) = &self.order {
            pairs.push(("order".to_string(), format!("{column}.{}", direction.as_str())));
        }
        pairs
    }
}

impl BackendClient {
    /// Run a read as the user behind `access_token`.
    #[tracing::instrument(skip(self, access_token), fields(table = query.table()))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        access_token: &str,
        query: &Select,
    ) -> Result<Vec<T>, AppError> {
        let path = format!("/rest/v1/{}", query.table());
        let builder = self
            .request(Method::GET, &path, Some(access_token))
            .query(&query.query_pairs());
        let response = self.send(builder, BackendScope::Rest).await?;
        Self::decode(response, query.table()).await
    }

    /// Insert one row as the user behind `access_token` and return the stored row.
    #[tracing::instrument(skip(self, access_token, row))]
    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        access_token: &str,
        table: &'static str,
        row: &B,
    ) -> Result<T, AppError> {
        let path = format!("/rest/v1/{table}");
        let builder = self
            .request(Method::POST, &path, Some(access_token))
            .header("Prefer", "return=representation")
            .json(&[row]);
        let response = self.send(builder, BackendScope::Rest).await?;
        let rows: Vec<T> = Self::decode(response, table).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::upstream(format!("insert into {table} returned no rows")))
    }
}
