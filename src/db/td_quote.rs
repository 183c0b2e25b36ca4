use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::td_quote::TdQuoteCreate;
use crate::utils::token::new_id;
use entity::td_quote::{ActiveModel as TdQuoteActive, Column, Entity as TdQuote, Model as TdQuoteModel};
use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Set};

impl DbService {
    pub async fn get_all_td_quotes(&self) -> Result<Vec<TdQuoteModel>, AppError> {
        Ok(TdQuote::find().all(&self.db).await?)
    }

    pub async fn get_td_quote_authors(&self) -> Result<Vec<String>, AppError> {
        Ok(TdQuote::find()
            .select_only()
            .column(Column::By)
            .distinct()
            .order_by_asc(Column::By)
            .into_tuple::<String>()
            .all(&self.db)
            .await?)
    }

    pub async fn insert_td_quotes(&self, rows: Vec<TdQuoteCreate>) -> Result<u64, AppError> {
        if rows.is_empty() {
            return Ok(0);
        }
        let count = rows.len() as u64;
        let models = rows.into_iter().map(|row| TdQuoteActive {
            id: Set(new_id()),
            value: Set(row.value),
            by: Set(row.by),
            date: Set(row.date),
        });
        TdQuote::insert_many(models).exec(&self.db).await?;
        Ok(count)
    }
}
